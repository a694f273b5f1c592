use content::ExperienceEntry;
use dioxus::prelude::*;

use crate::{icons, DisclosureCard, Icon};

/// Disclosure card for one position: company, role, location and duration
/// up front, highlight bullets behind the toggle.
#[component]
pub fn ExperienceCard(entry: ExperienceEntry) -> Element {
    rsx! {
        DisclosureCard {
            summary: rsx! {
                div {
                    class: "card-summary",
                    h3 { class: "card-title", "{entry.company}" }
                    p { class: "card-subtitle", "{entry.role}" }
                    div { class: "card-meta",
                        Icon { width: 16, height: 16, icon: icons::FaBuilding }
                        span { "{entry.location}" }
                    }
                    div { class: "card-meta",
                        Icon { width: 16, height: 16, icon: icons::FaCalendar }
                        span { "{entry.duration}" }
                    }
                }
            },
            ExperienceHighlights { highlights: entry.highlights.clone() }
        }
    }
}

/// Highlight bullets in authored order. An empty list renders nothing.
#[component]
pub fn ExperienceHighlights(highlights: Vec<String>) -> Element {
    rsx! {
        if !highlights.is_empty() {
            ul {
                class: "card-bullets",
                for item in highlights.iter() {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_collapsed_card_shows_summary_only() {
        fn app() -> Element {
            let entry = content::experience().remove(0);
            rsx! {
                ExperienceCard { entry }
            }
        }

        let html = render(app);
        assert!(html.contains("MathWorks"));
        assert!(html.contains("Engineer in Engineering Development Group"));
        assert!(html.contains("Hyderabad"));
        assert!(html.contains("July 2023 – June 2024"));
        // Bullets stay hidden until toggled
        assert!(!html.contains("<li>"));
        assert!(!html.contains("RoadRunner"));
    }

    #[test]
    fn test_highlights_render_all_items_in_order() {
        fn app() -> Element {
            rsx! {
                ExperienceHighlights {
                    highlights: vec![
                        "first bullet".to_string(),
                        "second bullet".to_string(),
                        "third bullet".to_string(),
                    ],
                }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("<li>").count(), 3);

        let first = html.find("first bullet").unwrap();
        let second = html.find("second bullet").unwrap();
        let third = html.find("third bullet").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_empty_highlights_render_no_list() {
        fn app() -> Element {
            rsx! {
                ExperienceHighlights { highlights: Vec::<String>::new() }
            }
        }

        let html = render(app);
        assert!(!html.contains("<ul"));
        assert!(!html.contains("<li>"));
    }
}
