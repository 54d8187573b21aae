use crate::config::SiteConfig;
use crate::Route;
use dioxus::prelude::*;

/// Downloads are handed out through the community chat for now.
#[component]
pub fn Download() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section { class: "container hero",
            h1 { class: "hero-title", "Download" }
            p { class: "hero-text", "Mod 文件目前通过 QQ 群发布，请加群获取最新版本。" }
            div { class: "hero-actions",
                a {
                    class: "button",
                    href: "{config.links.qq_group}",
                    target: "_blank",
                    rel: "noreferrer",
                    "加入QQ群"
                }
                Link { to: Route::Home {}, class: "button button-ghost", "返回首页" }
            }
        }
    }
}
