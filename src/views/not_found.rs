use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "container hero",
            h1 { class: "hero-title", "404" }
            p { class: "hero-text", "页面 /{path} 不存在。" }
            div { class: "hero-actions",
                Link { to: Route::Home {}, class: "button", "返回首页" }
            }
        }
    }
}
