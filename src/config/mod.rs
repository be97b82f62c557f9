pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::SectionId;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Render the portfolio into a static single-page site")]
pub struct CliConfig {
    /// Path to a TOML site file (content and settings)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory, overrides site.output_path
    #[arg(long)]
    pub output_path: Option<String>,

    /// Page file name, overrides site.page_file
    #[arg(long)]
    pub page_file: Option<String>,

    /// Fixed nav bar height in pixels, overrides site.nav_offset
    #[arg(long)]
    pub nav_offset: Option<f64>,

    /// Section highlighted in the nav before any scroll
    #[arg(long, value_enum)]
    pub active: Option<SectionId>,

    /// Also write content.json next to the page
    #[arg(long)]
    pub emit_json: bool,

    /// Render and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Applies command-line overrides on top of the site file.
    pub fn apply_overrides(&self, config: &mut toml_config::SiteConfig) {
        if let Some(output_path) = &self.output_path {
            config.site.output_path = output_path.clone();
        }
        if let Some(page_file) = &self.page_file {
            config.site.page_file = page_file.clone();
        }
        if let Some(nav_offset) = self.nav_offset {
            config.site.nav_offset = nav_offset;
        }
        if let Some(active) = self.active {
            config.site.initial_section = active;
        }
        if self.emit_json {
            config.site.emit_json = true;
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::config::toml_config::SiteConfig;

    #[test]
    fn test_overrides_win_over_site_file() {
        let cli = CliConfig::parse_from([
            "portfolio-site",
            "--output-path",
            "./public",
            "--nav-offset",
            "64",
            "--active",
            "projects",
            "--emit-json",
        ]);
        let mut config = SiteConfig::from_toml_str("[site]\noutput_path = \"./dist\"\n").unwrap();
        cli.apply_overrides(&mut config);

        assert_eq!(config.site.output_path, "./public");
        assert_eq!(config.site.nav_offset, 64.0);
        assert_eq!(config.site.initial_section, SectionId::Projects);
        assert!(config.site.emit_json);
        assert_eq!(config.site.page_file, "index.html");
    }

    #[test]
    fn test_nan_nav_offset_override_fails_validation() {
        use crate::utils::validation::Validate;

        let cli = CliConfig::parse_from(["portfolio-site", "--nav-offset", "NaN"]);
        let mut config = SiteConfig::default();
        cli.apply_overrides(&mut config);

        assert!(config.site.nav_offset.is_nan());
        assert!(config.validate().is_err());
    }
}
