use content::Profile;
use dioxus::prelude::*;

use crate::{icons, Icon};

const ABOUT_CSS: Asset = asset!("/assets/styling/about.css");

/// "About Me" blurb with the resume download button.
#[component]
pub fn About(profile: Profile) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ABOUT_CSS }

        section {
            id: "about",
            h2 { class: "section-title", "About Me" }
            p { class: "about-blurb", "{profile.about}" }
            a {
                class: "resume-button",
                href: "{profile.resume_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                Icon { width: 20, height: 20, icon: icons::FaDownload }
                span { "Download Resume" }
            }
        }
    }
}
