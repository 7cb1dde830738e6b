use crate::domain::content::{
    ContactLink, Education, Experience, PortfolioContent, Profile, Project, SkillCategory, Stat,
};
use crate::domain::model::SectionList;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub behavior: BehaviorConfig,
    pub sections: Vec<String>,
    pub profile: Profile,
    pub stats: Option<Vec<Stat>>,
    pub skills: Option<Vec<SkillCategory>>,
    pub projects: Option<Vec<Project>>,
    pub experiences: Option<Vec<Experience>>,
    pub education: Option<Education>,
    pub contact_links: Option<Vec<ContactLink>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: Option<String>,
    pub lang: String,
    /// Footer year; the current year when unset.
    pub copyright_year: Option<i32>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: None,
            lang: "en".to_string(),
            copyright_year: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Fraction of a block that must be visible before it reveals.
    pub reveal_threshold: f64,
    /// Distance from the viewport top at which a section becomes active.
    pub active_offset: f64,
    /// Scroll distance past which the nav bar turns opaque.
    pub nav_scroll_threshold: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.12,
            active_offset: 200.0,
            nav_scroll_threshold: 60.0,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            behavior: BehaviorConfig::default(),
            sections: SectionList::default()
                .iter()
                .map(|s| s.id().to_string())
                .collect(),
            profile: Profile::default(),
            stats: None,
            skills: None,
            projects: None,
            experiences: None,
            education: None,
            contact_links: None,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            SiteError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn section_list(&self) -> Result<SectionList> {
        SectionList::parse(&self.sections)
    }

    /// Content with every table the file left out filled from the default profile.
    pub fn content(&self) -> PortfolioContent {
        let defaults = PortfolioContent::default();
        PortfolioContent {
            profile: self.profile.clone(),
            stats: self.stats.clone().unwrap_or(defaults.stats),
            skills: self.skills.clone().unwrap_or(defaults.skills),
            projects: self.projects.clone().unwrap_or(defaults.projects),
            experiences: self.experiences.clone().unwrap_or(defaults.experiences),
            education: self.education.clone().or(defaults.education),
            contact_links: self.contact_links.clone().unwrap_or(defaults.contact_links),
        }
    }

    pub fn page_title(&self) -> String {
        self.site
            .title
            .clone()
            .unwrap_or_else(|| self.profile.full_name())
    }

    pub fn copyright_year(&self) -> i32 {
        use chrono::Datelike;
        self.site
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range(
            "behavior.reveal_threshold",
            self.behavior.reveal_threshold,
            0.0,
            1.0,
        )?;
        validation::validate_non_negative("behavior.active_offset", self.behavior.active_offset)?;
        validation::validate_non_negative(
            "behavior.nav_scroll_threshold",
            self.behavior.nav_scroll_threshold,
        )?;
        validation::validate_non_empty_string("site.lang", &self.site.lang)?;
        validation::validate_non_empty_string("profile.first_name", &self.profile.first_name)?;
        self.section_list()?;
        Ok(())
    }
}
