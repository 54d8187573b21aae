use crate::Route;
use dioxus::prelude::*;

/// The Home page component that will be rendered when the current route is `[Route::Home]`
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "container hero",
            div { class: "hero-heading",
                h1 { class: "hero-title",
                    "花园战争 2 简体中文 Mod"
                    br {}
                    "网页测试中"
                }
            }
            div {
                p { class: "hero-text", "如需下载请看右上角加入QQ群，其他内容仍在测试，别点。" }
            }
            div { class: "hero-actions",
                Link { to: Route::Download {}, class: "button", "Download" }
            }
        }
    }
}
