//! Embedded portfolio content.
//!
//! Everything the page shows lives here as literal, read-only tables: the
//! owner's profile, work experience, education history, and featured
//! projects. The `ui` crate renders these records and never mutates them.

mod data;
mod models;

pub use data::{education, experience, profile, projects};
pub use models::{
    EducationDetails, EducationEntry, ExperienceEntry, Minor, Profile, ProjectEntry,
};
