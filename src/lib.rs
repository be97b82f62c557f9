pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::SiteConfig};

pub use app::pipelines::static_site::StaticSitePipeline;
pub use self::core::{
    render::{PageOptions, SectionRenderer},
    site::SiteEngine,
    store::ContentStore,
    tracker::ActiveSectionTracker,
    view::PortfolioView,
};
pub use domain::model::{SectionId, SectionLayout};
pub use utils::error::{Result, SiteError};
