use crate::config::SiteConfig;
use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                p { class: "footer-text",
                    "由\u{a0}"
                    a {
                        href: "{config.links.bilibili}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "footer-link",
                        "shoushou1106"
                    }
                    "\u{a0}用❤制作"
                }
            }
        }
    }
}
