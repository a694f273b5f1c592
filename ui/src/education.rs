use content::{EducationDetails, EducationEntry};
use dioxus::prelude::*;

use crate::{icons, DisclosureCard, Icon};

/// Disclosure card for one institution: logo, institution, degree, duration
/// and GPA up front, the per-field-optional detail bundle behind the toggle.
#[component]
pub fn EducationCard(entry: EducationEntry) -> Element {
    rsx! {
        DisclosureCard {
            summary: rsx! {
                div {
                    class: "card-summary education-summary",
                    if let Some(ref logo) = entry.logo_url {
                        img {
                            class: "education-logo",
                            src: "{logo}",
                            alt: "{entry.institution} logo",
                        }
                    }
                    div { class: "education-headline",
                        h3 { class: "card-title", "{entry.institution}" }
                        p { class: "card-subtitle", "{entry.degree}" }
                    }
                    div { class: "education-aside",
                        span { class: "card-duration", "{entry.duration}" }
                        if let Some(ref gpa) = entry.gpa {
                            span { class: "gpa",
                                Icon { width: 16, height: 16, icon: icons::FaAward }
                                "{gpa}"
                            }
                        }
                    }
                }
            },
            EducationDetailsBlock { details: entry.details.clone() }
        }
    }
}

/// The expanded detail bundle. Every field is guarded on its own; an absent
/// field is omitted entirely rather than rendered empty.
#[component]
pub fn EducationDetailsBlock(details: EducationDetails) -> Element {
    rsx! {
        if let Some(ref expected) = details.expected_degree {
            div { class: "detail-group",
                h4 { "Expected Degree" }
                p { "{expected}" }
            }
        }

        if let Some(ref major) = details.major {
            div { class: "detail-group",
                h4 { "Major" }
                p { "{major}" }
            }
        }

        if let Some(ref minor) = details.minor {
            div { class: "detail-group",
                h4 { "Minor" }
                p { "{minor.title}" }
                span { class: "gpa",
                    Icon { width: 16, height: 16, icon: icons::FaAward }
                    "{minor.gpa}"
                }
            }
        }

        if !details.coursework.is_empty() {
            div { class: "detail-group",
                h4 { "Relevant Coursework" }
                ul {
                    class: "coursework",
                    for course in details.coursework.iter() {
                        li { key: "{course}", "{course}" }
                    }
                }
            }
        }
    }
}
