pub mod animate;
pub mod html;
pub mod icons;
pub mod render;
pub mod scroll;
pub mod site;
pub mod store;
pub mod tracker;
pub mod view;

pub use crate::domain::model::{SectionId, SectionLayout};
pub use crate::domain::ports::{Animator, ConfigProvider, ScrollTracker, SiteFile, SitePipeline, Storage};
pub use crate::utils::error::Result;
