use crate::components::{MainNav, MobileNav, SiteFooter};
use crate::config::SiteConfig;
use crate::Route;
use dioxus::prelude::*;

/// Header, navigation and footer shared by every page. The current route renders in the
/// [`Outlet`].
#[component]
pub fn SiteLayout() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        div { class: "site",
            header { class: "site-header",
                div { class: "container header-inner",
                    MobileNav { items: config.main_nav.clone() }
                    Link { to: Route::Home {}, class: "site-name", "{config.name}" }
                    MainNav { items: config.main_nav.clone() }
                    div { class: "header-actions",
                        a {
                            class: "button button-small",
                            href: "{config.links.qq_group}",
                            target: "_blank",
                            rel: "noreferrer",
                            "QQ群"
                        }
                    }
                }
            }
            main { class: "site-main",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}
