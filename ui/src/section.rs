use dioxus::prelude::*;

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

/// A titled page band. `tinted` alternates the background so adjacent
/// sections read as separate bands.
#[component]
pub fn Section(
    title: String,
    icon: Element,
    #[props(default)] tinted: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        section {
            class: if tinted { "section section-tinted" } else { "section" },
            h2 {
                class: "section-title",
                {icon}
                "{title}"
            }
            div { class: "section-cards", {children} }
        }
    }
}
