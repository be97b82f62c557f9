use crate::domain::model::{MotionState, SectionId};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn page_file(&self) -> &str;
    fn nav_offset(&self) -> f64;
    fn initial_section(&self) -> SectionId;
    fn emit_json(&self) -> bool;
}

/// The stages of one site build.
#[async_trait]
pub trait SitePipeline: Send + Sync {
    type Content: Send + Sync;

    async fn load(&self) -> Result<Self::Content>;
    async fn render(&self, content: &Self::Content) -> Result<Vec<SiteFile>>;
    async fn publish(&self, files: Vec<SiteFile>) -> Result<String>;
}

/// One output file, path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    pub path: String,
    pub contents: String,
}

/// Source of active-section changes driven by scroll position.
pub trait ScrollTracker {
    fn on_active_section_change(&mut self, callback: Box<dyn FnMut(SectionId)>);
}

/// Plays an entrance animation for an element at most once.
pub trait Animator {
    /// Returns `true` when the animation was started by this call.
    fn reveal_once(
        &mut self,
        element: &str,
        from: MotionState,
        to: MotionState,
    ) -> bool;
}
