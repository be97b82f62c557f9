use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub school: String,
    /// External profile URL, linked from the hero.
    pub github: String,
    pub slogan: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intro {
    pub pitch: String,
    pub badge: String,
    pub objective: String,
    pub vision: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub about_title: String,
    pub projects_title: String,
    pub skills_title: String,
    pub cta_projects: String,
    pub cta_code: String,
    pub education_title: String,
    pub objective_title: String,
    pub vision_title: String,
    pub brand_suffix: String,
    pub footer_credits: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            about_title: "À Propos".to_string(),
            projects_title: "Réalisations Clés".to_string(),
            skills_title: "Compétences & Vision".to_string(),
            cta_projects: "Voir mes projets".to_string(),
            cta_code: "Voir le code".to_string(),
            education_title: "Formation".to_string(),
            objective_title: "Objectif".to_string(),
            vision_title: "Vision Professionnelle".to_string(),
            brand_suffix: ".Portfolio".to_string(),
            footer_credits: "Généré avec Rust.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub tags: Vec<String>,
    pub context: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub details: Vec<String>,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Technology label shown under the skill name, e.g. "Python, C, Git".
    pub icons: String,
    #[serde(alias = "desc")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<Icon>,
}

/// Glyph names rendered by `core::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ChevronDown,
    Github,
    ExternalLink,
    Code,
    User,
    BookOpen,
    Send,
    Database,
}

/// The four page regions, in vertical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
        }
    }

    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown section '{}'", s))
    }
}

/// Visual properties an entrance animation interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
}

impl MotionState {
    pub const VISIBLE: MotionState = MotionState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn hidden(x: f32, y: f32) -> Self {
        Self { opacity: 0.0, x, y }
    }

    /// Inline CSS for this state, e.g. `opacity:0;transform:translate(0px,20px)`.
    pub fn to_style(&self) -> String {
        if self.x == 0.0 && self.y == 0.0 {
            format!("opacity:{}", self.opacity)
        } else {
            format!(
                "opacity:{};transform:translate({}px,{}px)",
                self.opacity, self.x, self.y
            )
        }
    }
}

/// Vertical extent of one section in page coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionLayout {
    extents: Vec<SectionExtent>,
}

impl SectionLayout {
    /// Extents are kept sorted by `top`.
    pub fn new(mut extents: Vec<SectionExtent>) -> Self {
        extents.sort_by(|a, b| a.top.total_cmp(&b.top));
        Self { extents }
    }

    /// Stacks the sections contiguously from y = 0 in `SectionId::ALL` order.
    /// Missing heights are treated as empty sections.
    pub fn from_heights(heights: &[f64]) -> Self {
        let mut top = 0.0;
        let extents = SectionId::ALL
            .iter()
            .zip(heights.iter().copied().chain(std::iter::repeat(0.0)))
            .map(|(&section, height)| {
                let extent = SectionExtent {
                    section,
                    top,
                    height: height.max(0.0),
                };
                top += extent.height;
                extent
            })
            .collect();
        Self { extents }
    }

    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    pub fn extent(&self, section: SectionId) -> Option<&SectionExtent> {
        self.extents.iter().find(|e| e.section == section)
    }

    pub fn section_at(&self, y: f64) -> Option<SectionId> {
        self.extents
            .iter()
            .find(|e| e.contains(y))
            .map(|e| e.section)
    }

    pub fn total_height(&self) -> f64 {
        self.extents.last().map(|e| e.bottom()).unwrap_or(0.0)
    }
}
