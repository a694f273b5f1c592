//! # Display records for the portfolio page
//!
//! Defines the data structures returned by the [`crate`] content tables.
//! These types are `Serialize + Deserialize` so they can cross component
//! boundaries as plain values.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | The site owner: name, tagline, about blurb, and the outbound contact/social URLs rendered in the hero, about, and contact sections. |
//! | [`ExperienceEntry`] | One position on the experience timeline. Carries company, role, location, duration, and the highlight bullets revealed when the card is expanded. |
//! | [`EducationEntry`] | One institution. Carries the summary fields (institution, optional logo, degree, duration, optional GPA) and an [`EducationDetails`] bundle of per-field-optional detail data. |
//! | [`ProjectEntry`] | One featured project: title, duration, highlight bullets, and an optional external repository/notebook link. |
//!
//! Every list field is ordered; rendering preserves the authored order
//! exactly.

use serde::{Deserialize, Serialize};

/// The site owner's identity and outbound links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the hero banner.
    pub name: String,
    /// One-line tagline under the name.
    pub tagline: String,
    /// "About me" paragraph.
    pub about: String,
    /// Code-hosting profile URL.
    pub github_url: String,
    /// Professional-network profile URL.
    pub linkedin_url: String,
    /// Contact address, rendered as a mailto: link.
    pub email: String,
    /// Hosted resume document URL.
    pub resume_url: String,
}

/// One position on the experience timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub location: String,
    /// Free-form date range: "July 2023 – June 2024"
    pub duration: String,
    /// Detail bullets, shown only when the card is expanded.
    pub highlights: Vec<String>,
}

/// One institution on the education timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    /// Institution logo image URL, or None for no logo.
    pub logo_url: Option<String>,
    pub degree: String,
    /// Free-form date range: "2024 - 2026"
    pub duration: String,
    /// Grade-point string such as "4.0/4.0", or None when not listed.
    pub gpa: Option<String>,
    pub details: EducationDetails,
}

/// Detail bundle for an [`EducationEntry`].
///
/// Presence is per-field: each field is guarded independently at render
/// time, never behind a single "has details" flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationDetails {
    pub expected_degree: Option<String>,
    pub major: Option<String>,
    pub minor: Option<Minor>,
    /// Coursework items in display order; empty renders no list.
    pub coursework: Vec<String>,
}

/// A minor subject with its own grade-point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minor {
    pub title: String,
    pub gpa: String,
}

/// One featured project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    /// Free-form date range: "Aug 2024 – Dec 2024"
    pub duration: String,
    /// Description bullets, shown only when the card is expanded.
    pub highlights: Vec<String>,
    /// External repository or notebook URL; None (or empty) renders no link.
    pub link_url: Option<String>,
}
