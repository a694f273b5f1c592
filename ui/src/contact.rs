use content::Profile;
use dioxus::prelude::*;

use crate::{icons, Icon};

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

/// Footer with the direct mail link.
#[component]
pub fn Contact(profile: Profile) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        footer {
            id: "contact",
            h2 { "Get In Touch" }
            p { "Feel free to reach out for collaborations or just a friendly hello" }
            a {
                class: "contact-email",
                href: "mailto:{profile.email}",
                Icon { width: 20, height: 20, icon: icons::FaEnvelope }
                span { "{profile.email}" }
            }
        }
    }
}
