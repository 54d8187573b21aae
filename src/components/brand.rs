use crate::FAVICON;
use dioxus::prelude::*;

/// Site logo followed by the site name.
#[component]
pub fn BrandMark(name: String) -> Element {
    rsx! {
        img {
            class: "logo-mark",
            src: FAVICON,
            alt: "logo",
            width: "24",
            height: "24",
        }
        span { class: "font-bold", "{name}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_logo_and_name() {
        fn app() -> Element {
            rsx! {
                BrandMark { name: "花园战争 2 简体中文 Mod" }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("<img"));
        assert!(html.contains("alt=\"logo\""));
        assert!(html.contains("花园战争 2 简体中文 Mod"));
        assert!(!html.contains("GW2"));
    }
}
