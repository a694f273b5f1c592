use content::Profile;
use dioxus::prelude::*;

use crate::{icons, Icon};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Full-height banner: name, tagline, and the social link row.
#[component]
pub fn Hero(profile: Profile) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        header {
            id: "hero",
            h1 { class: "hero-name", "{profile.name}" }
            p { class: "hero-tagline", "{profile.tagline}" }
            div {
                class: "hero-social",
                a {
                    href: "{profile.github_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: "GitHub",
                    Icon { width: 32, height: 32, icon: icons::FaGithub }
                }
                a {
                    href: "{profile.linkedin_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: "LinkedIn",
                    Icon { width: 32, height: 32, icon: icons::FaLinkedin }
                }
                a {
                    href: "mailto:{profile.email}",
                    aria_label: "Email",
                    Icon { width: 32, height: 32, icon: icons::FaEnvelope }
                }
            }
        }
    }
}
