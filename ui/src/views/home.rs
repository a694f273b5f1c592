use dioxus::prelude::*;

use crate::{
    icons, About, Contact, EducationCard, ExperienceCard, Hero, Icon, ProjectCard, Section,
};

/// The portfolio page.
///
/// Loads each content table once, then renders the fixed section sequence:
/// hero, about, experience, education, projects, contact. Same data in,
/// same structure out.
#[component]
pub fn Home() -> Element {
    let profile = use_hook(content::profile);
    let experience = use_hook(content::experience);
    let education = use_hook(content::education);
    let projects = use_hook(content::projects);

    rsx! {
        Hero { profile: profile.clone() }
        About { profile: profile.clone() }

        Section {
            title: "Experience",
            tinted: true,
            icon: rsx! { Icon { width: 32, height: 32, icon: icons::FaBriefcase } },
            for entry in experience.iter() {
                ExperienceCard { key: "{entry.company}-{entry.duration}", entry: entry.clone() }
            }
        }

        Section {
            title: "Education",
            icon: rsx! { Icon { width: 32, height: 32, icon: icons::FaGraduationCap } },
            for entry in education.iter() {
                EducationCard { key: "{entry.institution}", entry: entry.clone() }
            }
        }

        Section {
            title: "Featured Projects",
            tinted: true,
            icon: rsx! { Icon { width: 32, height: 32, icon: icons::FaCode } },
            for entry in projects.iter() {
                ProjectCard { key: "{entry.title}", entry: entry.clone() }
            }
        }

        Contact { profile }
    }
}
