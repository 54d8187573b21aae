use crate::config::NavItem;
use crate::nav::actionable;
use crate::Route;
use dioxus::prelude::*;

/// Horizontal navigation for wide screens. Shares the link filter with the mobile drawer.
#[component]
pub fn MainNav(items: Vec<NavItem>) -> Element {
    let active = use_route::<Route>().to_string();

    rsx! {
        nav { class: "main-nav",
            for (index, (title, href)) in actionable(&items).enumerate() {
                Link {
                    key: "{index}",
                    to: href.to_string(),
                    class: link_class(&active, href),
                    "{title}"
                }
            }
        }
    }
}

fn link_class(active: &str, href: &str) -> &'static str {
    if active == href {
        "main-nav-link active"
    } else {
        "main-nav-link"
    }
}
