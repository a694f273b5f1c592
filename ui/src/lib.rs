//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

/// Page-wide reset and typography, linked by every launcher.
pub const BASE_CSS: Asset = asset!("/assets/styling/base.css");

mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod section;
pub use section::Section;

mod disclosure;
pub use disclosure::{Disclosure, DisclosureCard};

mod experience;
pub use experience::{ExperienceCard, ExperienceHighlights};

mod education;
pub use education::{EducationCard, EducationDetailsBlock};

mod project;
pub use project::{ProjectCard, ProjectDetails};

mod contact;
pub use contact::Contact;
