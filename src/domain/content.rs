//! Page content. Every string here is opaque to the page mechanism: it is
//! escaped and rendered, never interpreted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    /// Brand mark in the nav bar, rendered with an accent dot.
    pub initials: String,
    pub eyebrow: String,
    pub subtitle: String,
    pub about_heading: String,
    pub about_heading_accent: String,
    pub about_paragraphs: Vec<String>,
    pub projects_title: String,
    pub projects_title_accent: String,
    pub experience_title: String,
    pub experience_title_accent: String,
    pub contact_heading: String,
    pub contact_heading_accent: String,
    pub contact_blurb: String,
    pub location: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "Jordan".to_string(),
            last_name: "Avery".to_string(),
            initials: "JA".to_string(),
            eyebrow: "Software Engineer · ML · Cybersecurity".to_string(),
            subtitle: "Computer Science student building at the intersection of machine \
                       learning, cybersecurity, and software engineering."
                .to_string(),
            about_heading: "Passionate about building technology that".to_string(),
            about_heading_accent: "matters".to_string(),
            about_paragraphs: vec![
                "I'm a Computer Science student whose work spans machine learning, \
                 cybersecurity, and full-stack development, always driven by a desire to \
                 solve complex problems and ship software with real-world impact."
                    .to_string(),
                "From leading a research team to competing in national security events, I \
                 thrive in collaborative environments where innovation meets execution."
                    .to_string(),
            ],
            projects_title: "Selected".to_string(),
            projects_title_accent: "Work".to_string(),
            experience_title: "Leadership &".to_string(),
            experience_title_accent: "Involvement".to_string(),
            contact_heading: "Let's build something".to_string(),
            contact_heading_accent: "together".to_string(),
            contact_blurb: "I'm looking for an entry-level software engineering role. \
                            I'd love to hear about what you're building."
                .to_string(),
            location: "Somewhere, Earth".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub role: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub org: String,
    pub period: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub score: String,
    pub score_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    pub href: String,
}

impl ContactLink {
    /// Web links open in a new tab; mail and telephone links do not.
    pub fn opens_new_tab(&self) -> bool {
        url::Url::parse(&self.href)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub education: Option<Education>,
    pub contact_links: Vec<ContactLink>,
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            stats: vec![
                stat("3.5", "GPA"),
                stat("8+", "Team Led"),
                stat("100+", "Students Impacted"),
            ],
            skills: vec![
                SkillCategory {
                    label: "Languages".to_string(),
                    items: strings(&["Python", "Java", "JavaScript", "HTML/CSS", "SQL"]),
                },
                SkillCategory {
                    label: "Frameworks & Libraries".to_string(),
                    items: strings(&["ReactJS", "PyTorch", "Scikit-learn", "NumPy", "Pandas"]),
                },
                SkillCategory {
                    label: "Tools & Platforms".to_string(),
                    items: strings(&["Git", "Docker", "Linux", "Wireshark", "VS Code"]),
                },
                SkillCategory {
                    label: "Specializations".to_string(),
                    items: strings(&[
                        "Machine Learning",
                        "Artificial Intelligence",
                        "Cybersecurity",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    title: "Anomaly Detection Research".to_string(),
                    role: "Software Dev Team Leader".to_string(),
                    period: "Dec 2024 – May 2025".to_string(),
                    description: "Led an eight-member team through the full SDLC to build \
                                  secure system prototypes with ML-based anomaly detection \
                                  for embedded network systems."
                        .to_string(),
                    tags: strings(&["Leadership", "SDLC", "System Design", "ML"]),
                    highlight: true,
                },
                Project {
                    title: "Encrypted Traffic Classification".to_string(),
                    role: "ML Engineer".to_string(),
                    period: "Oct 2025 – Dec 2025".to_string(),
                    description: "Deep learning models that classify encrypted network \
                                  traffic from flow statistics without decryption."
                        .to_string(),
                    tags: strings(&["PyTorch", "Scikit-learn", "Python", "Deep Learning"]),
                    highlight: false,
                },
                Project {
                    title: "Secret Scanner".to_string(),
                    role: "Creator & Developer".to_string(),
                    period: "Jan 2026 – Present".to_string(),
                    description: "A tool that stops secrets from leaking out of source \
                                  trees, with plugins for popular IDEs."
                        .to_string(),
                    tags: strings(&["Security", "Developer Tools", "Python"]),
                    highlight: false,
                },
                Project {
                    title: "Check-In".to_string(),
                    role: "Full-Stack Developer".to_string(),
                    period: "Jan 2025 – Present".to_string(),
                    description: "Mental health web app focused on early detection of \
                                  warning signs in children and youth."
                        .to_string(),
                    tags: strings(&["React", "ML", "Web App", "Social Impact"]),
                    highlight: true,
                },
            ],
            experiences: vec![
                Experience {
                    title: "ACM Chapter President".to_string(),
                    org: "State University".to_string(),
                    period: "Sep 2025 – Present".to_string(),
                    detail: "Leading technical initiatives and organizing workshops and \
                             hackathons for 100+ students."
                        .to_string(),
                },
                Experience {
                    title: "Cyber Team (Red & Blue)".to_string(),
                    org: "State University".to_string(),
                    period: "Sep 2024 – Present".to_string(),
                    detail: "Competing in CCDC and CTF events; writing tooling for \
                             penetration testing and forensics."
                        .to_string(),
                },
                Experience {
                    title: "ICPC Competitive Programming".to_string(),
                    org: "State University".to_string(),
                    period: "Sep 2024 – Present".to_string(),
                    detail: "Regional contests solving timed algorithmic problems in Java \
                             and Python."
                        .to_string(),
                },
                Experience {
                    title: "IEEE Member".to_string(),
                    org: "State University".to_string(),
                    period: "Oct 2025 – Present".to_string(),
                    detail: "Building and programming drones and robots for a hardware \
                             competition."
                        .to_string(),
                },
            ],
            education: Some(Education {
                school: "State University".to_string(),
                degree: "B.S. Computer Science · Dean's List".to_string(),
                score: "3.5".to_string(),
                score_suffix: " / 4.0 GPA".to_string(),
            }),
            contact_links: vec![
                ContactLink {
                    label: "Email".to_string(),
                    value: "jordan@example.com".to_string(),
                    href: "mailto:jordan@example.com".to_string(),
                },
                ContactLink {
                    label: "Phone".to_string(),
                    value: "(555) 010-0000".to_string(),
                    href: "tel:+15550100000".to_string(),
                },
                ContactLink {
                    label: "LinkedIn".to_string(),
                    value: "LinkedIn →".to_string(),
                    href: "https://www.linkedin.com/in/example/".to_string(),
                },
                ContactLink {
                    label: "GitHub".to_string(),
                    value: "GitHub →".to_string(),
                    href: "https://github.com/example".to_string(),
                },
            ],
        }
    }
}
