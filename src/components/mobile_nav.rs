use crate::components::{BrandMark, MenuIcon};
use crate::config::{NavItem, SiteConfig};
use crate::nav::{actionable, DrawerState, Navigate, RouterNavigator};
use crate::Route;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Slide-in navigation drawer shown on narrow screens.
///
/// The drawer owns its open/closed state. The trigger toggles it. The backdrop, the close button
/// and the Escape key close it, and picking any link navigates and then closes it.
#[component]
pub fn MobileNav(items: Vec<NavItem>) -> Element {
    let config = use_context::<SiteConfig>();
    let mut drawer = use_signal(DrawerState::default);
    let router = RouterNavigator::current();
    let active = use_route::<Route>().to_string();

    let select = move |entry: NavItem| {
        let mut router = router;
        select_entry(drawer, &entry, &mut router);
    };

    let home = NavItem {
        title: config.name.clone(),
        href: Some("/".to_string()),
    };

    rsx! {
        button {
            r#type: "button",
            class: "mobile-nav-trigger",
            "aria-expanded": "{drawer().is_open()}",
            onclick: move |_| drawer.write().toggle(),
            MenuIcon {}
            span { class: "sr-only", "Toggle Menu" }
        }
        if drawer().is_open() {
            div {
                class: "drawer",
                onkeydown: move |evt: KeyboardEvent| close_on_escape(drawer, &evt.key()),
                div {
                    class: "drawer-overlay",
                    onclick: move |_| drawer.write().close(),
                }
                aside {
                    class: "drawer-panel",
                    tabindex: "-1",
                    onmounted: move |evt| async move {
                        // Focus the panel so Escape reaches the handler above.
                        let _ = evt.set_focus(true).await;
                    },
                    button {
                        r#type: "button",
                        class: "drawer-close",
                        onclick: move |_| drawer.write().close(),
                        "×"
                        span { class: "sr-only", "Close" }
                    }
                    a {
                        class: "drawer-brand",
                        href: "/",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            select(home.clone());
                        },
                        BrandMark { name: config.name.clone() }
                    }
                    div { class: "drawer-scroll",
                        DrawerLinks {
                            items: items.clone(),
                            active: Some(active.clone()),
                            on_select: move |entry| select(entry),
                        }
                    }
                }
            }
        }
    }
}

/// Navigate to `entry` and store the resulting closed state.
fn select_entry(mut drawer: Signal<DrawerState>, entry: &NavItem, navigator: &mut impl Navigate) {
    let mut state = *drawer.peek();
    state.select(entry, navigator);
    debug!("drawer entry {:?} selected", entry.title);
    drawer.set(state);
}

fn close_on_escape(mut drawer: Signal<DrawerState>, key: &Key) {
    if *key == Key::Escape {
        drawer.write().close();
    }
}

/// Vertical list of the entries that have a destination. The entry matching `active` is
/// highlighted.
#[component]
pub fn DrawerLinks(
    items: Vec<NavItem>,
    active: Option<String>,
    on_select: EventHandler<NavItem>,
) -> Element {
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        nav { class: "drawer-links",
            for (index, (title, href)) in actionable(&items).enumerate() {
                a {
                    key: "{index}",
                    href: "{href}",
                    class: if active.as_deref() == Some(href) { "drawer-link active" } else { "drawer-link" },
                    onclick: {
                        let entry = NavItem {
                            title: title.to_string(),
                            href: Some(href.to_string()),
                        };
                        move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_select.call(entry.clone());
                        }
                    },
                    "{title}"
                }
            }
        }
    }
}
