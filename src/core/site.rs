use crate::core::SitePipeline;
use crate::utils::error::Result;

pub struct SiteEngine<P: SitePipeline> {
    pipeline: P,
}

impl<P: SitePipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build...");

        let content = self.pipeline.load().await?;
        tracing::debug!("Content loaded");

        let files = self.pipeline.render(&content).await?;
        let bytes: usize = files.iter().map(|f| f.contents.len()).sum();
        tracing::info!("Rendered {} file(s), {} bytes", files.len(), bytes);

        let page_path = self.pipeline.publish(files).await?;
        tracing::info!("Page written to: {}", page_path);

        Ok(page_path)
    }
}
