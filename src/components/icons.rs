use dioxus::prelude::*;

/// Three-bar "hamburger" glyph used by the mobile menu trigger.
#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke_width: "1.5",
            for d in ["M3 5H21", "M3 12H21", "M3 19H21"] {
                path {
                    d,
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
            }
        }
    }
}
