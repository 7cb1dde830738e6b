use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A named, addressable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Anchor id of the section in the rendered document.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the section header.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills & Tools",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s.trim())
            .ok_or_else(|| SiteError::UnknownSectionError { id: s.to_string() })
    }
}

/// Ordered, duplicate-free list of sections. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList(Vec<Section>);

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "sections".to_string(),
            });
        }
        crate::utils::validation::validate_unique(sections.iter().map(|s| s.id()))?;
        Ok(Self(sections))
    }

    pub fn parse<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        let sections = ids
            .iter()
            .map(|id| id.as_ref().parse())
            .collect::<Result<Vec<Section>>>()?;
        Self::new(sections)
    }

    /// The sticky default active section.
    pub fn first(&self) -> Section {
        self.0[0]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Section> + '_ {
        self.0.iter().copied()
    }

    /// Sections that get a navigation link (everything but the first).
    pub fn nav_entries(&self) -> impl Iterator<Item = Section> + '_ {
        self.0.iter().copied().skip(1)
    }

    pub fn contains(&self, section: Section) -> bool {
        self.0.contains(&section)
    }

    /// 1-based position among the nav entries, used for the "01", "02"
    /// section numbering. `None` for the first section.
    pub fn ordinal(&self, section: Section) -> Option<usize> {
        self.nav_entries().position(|s| s == section).map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SectionList {
    fn default() -> Self {
        Self(Section::ALL.to_vec())
    }
}

/// Identifier of a reveal block, `"<section>-<n>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(section: Section, index: usize) -> Self {
        Self(format!("{}-{}", section.id(), index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Eyebrow,
    HeroTitle,
    HeroSubtitle,
    CallToAction,
    SectionHeader,
    Heading,
    Body,
    SkillCard,
    ProjectCard,
    ExperienceItem,
    Education,
    ContactLinks,
}

impl BlockKind {
    /// Nominal rendered height in px, used by layout estimation.
    pub fn nominal_height(self) -> f64 {
        match self {
            BlockKind::Eyebrow => 40.0,
            BlockKind::HeroTitle => 200.0,
            BlockKind::HeroSubtitle => 100.0,
            BlockKind::CallToAction => 60.0,
            BlockKind::SectionHeader => 40.0,
            BlockKind::Heading => 120.0,
            BlockKind::Body => 360.0,
            BlockKind::SkillCard => 300.0,
            BlockKind::ProjectCard => 340.0,
            BlockKind::ExperienceItem => 180.0,
            BlockKind::Education => 140.0,
            BlockKind::ContactLinks => 80.0,
        }
    }
}

/// One reveal block as emitted by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub id: BlockId,
    pub section: Section,
    pub kind: BlockKind,
    #[serde(with = "duration_secs")]
    pub delay: Duration,
}

/// All reveal blocks of a page in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageOutline {
    pub blocks: Vec<BlockSpec>,
}

impl PageOutline {
    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &BlockSpec> {
        self.blocks.iter().filter(move |b| b.section == section)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Size of the visible viewport in CSS px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 900.0,
        }
    }
}

/// Output of a render pass, ready to publish.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub html: String,
    pub outline: PageOutline,
    pub active: Section,
    pub revealed: usize,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
