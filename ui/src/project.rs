use content::ProjectEntry;
use dioxus::prelude::*;

use crate::{icons, DisclosureCard, Icon};

/// Disclosure card for one project: title and duration up front, description
/// bullets and the optional outbound link behind the toggle.
#[component]
pub fn ProjectCard(entry: ProjectEntry) -> Element {
    rsx! {
        DisclosureCard {
            summary: rsx! {
                div {
                    class: "card-summary",
                    h3 { class: "card-title", "{entry.title}" }
                    div { class: "card-meta",
                        Icon { width: 16, height: 16, icon: icons::FaCalendar }
                        span { "{entry.duration}" }
                    }
                }
            },
            ProjectDetails {
                highlights: entry.highlights.clone(),
                link_url: entry.link_url.clone(),
            }
        }
    }
}

/// Description bullets plus the outbound project link.
///
/// The link renders only for a non-empty URL and opens in a new browsing
/// context without exposing the referrer to the destination.
#[component]
pub fn ProjectDetails(highlights: Vec<String>, link_url: Option<String>) -> Element {
    let link = link_url.filter(|url| !url.is_empty());

    rsx! {
        if !highlights.is_empty() {
            ul {
                class: "card-bullets",
                for item in highlights.iter() {
                    li { key: "{item}", "{item}" }
                }
            }
        }

        if let Some(ref url) = link {
            a {
                class: "project-link",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                Icon { width: 20, height: 20, icon: icons::FaGithub }
                span { "View Project" }
                Icon { width: 16, height: 16, icon: icons::FaArrowUpRightFromSquare }
            }
        }
    }
}
