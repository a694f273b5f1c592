//! The literal content tables.
//!
//! Authored once, never mutated at runtime. Each function returns a fresh
//! copy of its table; callers load it once per page.

use crate::models::{
    EducationDetails, EducationEntry, ExperienceEntry, Minor, Profile, ProjectEntry,
};

/// The site owner.
pub fn profile() -> Profile {
    Profile {
        name: "Balaji Udayagiri".into(),
        tagline: "1st Year Masters Student at PennState".into(),
        about: "I'm a passionate about Computer Science and Mathematics with a keen interest \
                in LLMs, CV and everything happening in the AI world. I love working with \
                modern technologies and am always eager to learn and grow in my field."
            .into(),
        github_url: "https://github.com/Balaji-Udayagiri".into(),
        linkedin_url: "https://www.linkedin.com/in/balaji-udayagiri-51a759191/".into(),
        email: "udayagirigsbalaji@gmail.com".into(),
        resume_url: "https://drive.google.com/file/d/1ITP08Yevw6ipA5HSDjn6M_gHNBJZwQ-Z/view?usp=sharing".into(),
    }
}

/// Work experience, most recent first.
pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            company: "MathWorks".into(),
            role: "Engineer in Engineering Development Group".into(),
            location: "Hyderabad".into(),
            duration: "July 2023 – June 2024".into(),
            highlights: vec![
                "Conducted comprehensive evaluation of Lane Detection Algorithms, assessing \
                 CLR-NET, RVLD, and CLRer-NET models. Identified RVLD as the top-performing \
                 algorithm, achieving superior results in F1-score and mIOU metrics."
                    .into(),
                "Implemented RVLD algorithm in MATLAB, enabling seamless integration with \
                 ScenarioGeneration."
                    .into(),
                "Streamlined the RoadRunner Testing Framework in Windows, thus eliminating \
                 the need for manual testing."
                    .into(),
            ],
        },
        ExperienceEntry {
            company: "Shopagain".into(),
            role: "Machine Learning Intern".into(),
            location: "Remote".into(),
            duration: "January 2023 – February 2023".into(),
            highlights: vec![
                "Developed a machine learning model to predict the purchasing intent of an \
                 anonymous e-commerce browser."
                    .into(),
                "Extracted features from mouse activity and product views, achieving a 68% \
                 positive intent recall and 97% negative intent accuracy using an RF model \
                 across 5 e-commerce websites with turnover ranging from 100K- 1M USD."
                    .into(),
            ],
        },
        ExperienceEntry {
            company: "MathWorks".into(),
            role: "Engineering Development Group Intern".into(),
            location: "Hyderabad".into(),
            duration: "May 2022 – July 2022".into(),
            highlights: vec![
                "Performed an in-depth analysis of lane tracking models JPDA and GNN, tuning \
                 their parameters for optimal performance and comparing the results against \
                 internal datasets."
                    .into(),
                "Investigated lane detection algorithms for the ScenarioBuilder workflow and \
                 identified CLR-NET, which combines high-level semantic features with \
                 low-level refinements for improved lane detection results."
                    .into(),
            ],
        },
    ]
}

/// Education history, most recent first.
pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            institution: "The Pennsylvania State University".into(),
            logo_url: Some(
                "https://upload.wikimedia.org/wikipedia/en/thumb/3/3a/Penn_State_Nittany_Lions_logo.svg/1280px-Penn_State_Nittany_Lions_logo.svg.png"
                    .into(),
            ),
            degree: "M.S. in Computer Science and Engineering".into(),
            duration: "2024 - 2026".into(),
            gpa: Some("4.0/4.0".into()),
            details: EducationDetails {
                expected_degree: Some(
                    "Master of Science in Computer Science and Engineering".into(),
                ),
                major: Some("Computer Science and Engineering".into()),
                minor: None,
                coursework: vec![
                    "CSE597-08 Foundations of Deep Learning".into(),
                    "CSE584 Machine Learning".into(),
                    "CSE597-03 Vision and Language".into(),
                    "CSE586 Computer Vision II".into(),
                    "CSE530 Computer Architecture".into(),
                ],
            },
        },
        EducationEntry {
            institution: "Indian Institute of Technology, Kharagpur".into(),
            logo_url: Some(
                "https://upload.wikimedia.org/wikipedia/en/thumb/1/1c/IIT_Kharagpur_Logo.svg/1200px-IIT_Kharagpur_Logo.svg.png"
                    .into(),
            ),
            degree: "Dual Degree (B.Tech + M.Tech)".into(),
            duration: "2018 - 2023".into(),
            gpa: Some("8.9/10".into()),
            details: EducationDetails {
                expected_degree: None,
                major: Some("Electronics and Electrical Communication Engineering".into()),
                minor: Some(Minor {
                    title: "Computer Science and Engineering".into(),
                    gpa: "8.8/10".into(),
                }),
                coursework: vec![
                    "Digital Signal Processing".into(),
                    "VLSI Design".into(),
                    "Computer Networks".into(),
                    "Data Structures".into(),
                    "Algorithms".into(),
                    "Operating Systems".into(),
                ],
            },
        },
    ]
}

/// Featured projects, in display order.
pub fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            title: "Qiskit Chatbot".into(),
            duration: "2024".into(),
            highlights: vec![
                "Developed a chatbot specialized in Qiskit and quantum computing".into(),
                "Implemented using advanced NLP techniques and the Qiskit framework".into(),
            ],
            link_url: Some("https://github.com/Balaji-Udayagiri/Qiskit-Chatbot/tree/dev".into()),
        },
        ProjectEntry {
            title: "Kharagpur Data Science Hackathon by Axtria".into(),
            duration: "2024".into(),
            highlights: vec![
                "Determined the optimal drug channel promotion for Healthcare Providers \
                 (HCPs), considering specific constraints."
                    .into(),
                "Trained an LSTM model to predict the next week’s Market Rx and the number \
                 of patients for each HCP."
                    .into(),
                "Developed a 5-layer neural network model to predict BrandRx, resulting the \
                 highest solution accuracy of 0.52415."
                    .into(),
                "Stood first among 700+ team in the hackathon.".into(),
            ],
            link_url: Some(
                "https://colab.research.google.com/drive/12fi3vT8hyZAIiwKtlCLwfWb_AfUvmSn5?usp=sharing"
                    .into(),
            ),
        },
        ProjectEntry {
            title: "Classification of Large Language Models (LLMs)".into(),
            duration: "Aug 2024 – Dec 2024".into(),
            highlights: vec![
                "Developed a classifier to identify the LLM responsible for generating text \
                 completions from a set of truncated sentences, focusing on 5 models: GPT-2, \
                 GPT-Neo, Facebook OPT, Gemma2:2B, and Mistral-OpenOrca."
                    .into(),
                "Utilized SBERT embeddings to represent the generated text and trained a \
                 Fully Connected (FC) neural network for classification."
                    .into(),
                "Achieved an accuracy of 70.83% in model classification".into(),
            ],
            link_url: Some("https://github.com/Balaji-Udayagiri/MLMidTerm".into()),
        },
        ProjectEntry {
            title: "Rumour and Stance Classification on PHEME-RNR Dataset".into(),
            duration: "Sep 2021 – Nov 2021".into(),
            highlights: vec![
                "Improved accuracy by 2% using stance classification in Tree LSTM-based \
                 rumor detection from a benchmark."
                    .into(),
                "Preprocessed PHEME dataset for 'Cascade-LSTM: A Tree-Structured Neural \
                 Classifier for Detecting Misinformation Cascades' by matching relevant \
                 features."
                    .into(),
            ],
            link_url: Some(
                "https://colab.research.google.com/drive/1KUYE_CakSY5P6kc0DIDj2iB_gysCCmyr?usp=sharing"
                    .into(),
            ),
        },
        ProjectEntry {
            title: "Combating Online Hostile Posts in Regional Languages".into(),
            duration: "Feb 2021 – Apr 2021".into(),
            highlights: vec![
                "Extracted hostile posts in Hindi from religious organizations on Twitter \
                 using Twitter API v2 and analyzed them."
                    .into(),
                "Built a hostile speech detection model using NLTK and PyTorch, created a \
                 dataset, and introduced a hate score"
                    .into(),
            ],
            link_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_table() {
        let entries = experience();
        assert_eq!(entries.len(), 3);

        // Most recent first
        assert_eq!(entries[0].company, "MathWorks");
        assert_eq!(entries[0].duration, "July 2023 – June 2024");
        assert_eq!(entries[0].highlights.len(), 3);
        assert_eq!(entries[1].company, "Shopagain");
        assert_eq!(entries[1].highlights.len(), 2);
        assert_eq!(entries[2].role, "Engineering Development Group Intern");

        // Bullet order is authored order
        assert!(entries[0].highlights[0].starts_with("Conducted comprehensive evaluation"));
        assert!(entries[0].highlights[2].starts_with("Streamlined the RoadRunner"));
    }

    #[test]
    fn test_penn_state_entry() {
        let entries = education();
        let psu = &entries[0];
        assert_eq!(psu.institution, "The Pennsylvania State University");
        assert_eq!(psu.duration, "2024 - 2026");
        assert_eq!(psu.gpa.as_deref(), Some("4.0/4.0"));
        assert!(psu.logo_url.is_some());

        // Five coursework items in listed order, no minor
        assert_eq!(psu.details.coursework.len(), 5);
        assert_eq!(
            psu.details.coursework[0],
            "CSE597-08 Foundations of Deep Learning"
        );
        assert_eq!(psu.details.coursework[4], "CSE530 Computer Architecture");
        assert!(psu.details.minor.is_none());
        assert!(psu.details.expected_degree.is_some());
    }

    #[test]
    fn test_dual_degree_entry() {
        let entries = education();
        let iit = &entries[1];
        assert_eq!(iit.institution, "Indian Institute of Technology, Kharagpur");

        let minor = iit.details.minor.as_ref().unwrap();
        assert_eq!(minor.title, "Computer Science and Engineering");
        assert_eq!(minor.gpa, "8.8/10");

        assert_eq!(iit.details.coursework.len(), 6);
        assert!(iit.details.expected_degree.is_none());
    }

    #[test]
    fn test_projects_table() {
        let entries = projects();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].title, "Qiskit Chatbot");

        // Every project links out except the last one
        assert!(entries[..4].iter().all(|p| p.link_url.is_some()));
        assert!(entries[4].link_url.is_none());

        assert_eq!(entries[1].highlights.len(), 4);
        assert!(entries[1].highlights[3].starts_with("Stood first"));
    }

    #[test]
    fn test_profile_links() {
        let p = profile();
        assert_eq!(p.name, "Balaji Udayagiri");
        assert!(p.github_url.starts_with("https://github.com/"));
        assert!(p.linkedin_url.starts_with("https://www.linkedin.com/"));
        assert!(p.email.contains('@'));
        assert!(!p.resume_url.is_empty());
    }
}
