use crate::core::render::PageOptions;
use crate::core::store::{self, ContentStore, DEFAULT_COPYRIGHT_YEAR};
use crate::core::tracker::DEFAULT_TRIGGER_OFFSET;
use crate::core::ConfigProvider;
use crate::domain::model::{Intro, Labels, Profile, ProjectEntry, SectionId, SkillEntry};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_NAV_OFFSET: f64 = 400.0;

/// Site file: build settings plus optional content overrides. Any content
/// table left out falls back to the built-in portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,
    pub profile: Option<Profile>,
    pub intro: Option<Intro>,
    pub labels: Option<Labels>,
    pub projects: Option<Vec<ProjectEntry>>,
    pub skills: Option<Vec<SkillEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Defaults to "<name> | Portfolio".
    pub title: Option<String>,
    pub lang: String,
    pub output_path: String,
    pub page_file: String,
    pub nav_offset: f64,
    pub initial_section: SectionId,
    pub emit_json: bool,
    pub include_script: bool,
    pub stylesheets: Vec<String>,
    pub copyright_year: u16,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: None,
            lang: "fr".to_string(),
            output_path: "./dist".to_string(),
            page_file: "index.html".to_string(),
            nav_offset: DEFAULT_TRIGGER_OFFSET,
            initial_section: SectionId::Home,
            emit_json: false,
            include_script: true,
            stylesheets: Vec::new(),
            copyright_year: DEFAULT_COPYRIGHT_YEAR,
        }
    }
}

impl SiteConfig {
    /// Loads and parses a site file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("site.output_path", &self.site.output_path)?;
        validate_path("site.page_file", &self.site.page_file)?;
        validate_non_empty_string("site.lang", &self.site.lang)?;
        validate_range("site.nav_offset", self.site.nav_offset, 0.0, MAX_NAV_OFFSET)?;
        for href in &self.site.stylesheets {
            validate_non_empty_string("site.stylesheets", href)?;
        }

        // content rules live in the store
        self.content_store().map(|_| ())
    }

    /// Builds the content store, filling gaps from the built-in portfolio.
    pub fn content_store(&self) -> Result<ContentStore> {
        let store = ContentStore::new(
            self.profile.clone().unwrap_or_else(store::builtin_profile),
            self.intro.clone().unwrap_or_else(store::builtin_intro),
            self.labels.clone().unwrap_or_default(),
            self.projects.clone().unwrap_or_else(store::builtin_projects),
            self.skills.clone().unwrap_or_else(store::builtin_skills),
        )?;
        Ok(store.with_copyright_year(self.site.copyright_year))
    }

    pub fn page_options(&self, store: &ContentStore) -> PageOptions {
        PageOptions {
            title: self
                .site
                .title
                .clone()
                .unwrap_or_else(|| format!("{} | Portfolio", store.profile().name)),
            lang: self.site.lang.clone(),
            stylesheets: self.site.stylesheets.clone(),
            nav_offset: self.site.nav_offset,
            include_script: self.site.include_script,
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn output_path(&self) -> &str {
        &self.site.output_path
    }

    fn page_file(&self) -> &str {
        &self.site.page_file
    }

    fn nav_offset(&self) -> f64 {
        self.site.nav_offset
    }

    fn initial_section(&self) -> SectionId {
        self.site.initial_section
    }

    fn emit_json(&self) -> bool {
        self.site.emit_json
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
