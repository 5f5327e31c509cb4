use dioxus::prelude::*;

use crate::core::icons::IconId;

/// Inline stroke SVG for an [`IconId`]; sized and colored by `class`.
#[component]
pub fn NavIcon(id: IconId, #[props(into, default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            "data-icon": id.name(),
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in id.paths() {
                path { d: *d }
            }
        }
    }
}
