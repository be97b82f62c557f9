use crate::core::render::PageOptions;
use crate::core::store::ContentStore;
use crate::core::view::PortfolioView;
use crate::core::{ConfigProvider, SiteFile, SitePipeline, Storage};
use crate::utils::error::Result;
use std::path::Path;
use std::sync::Arc;

pub const CONTENT_JSON_FILE: &str = "content.json";

/// Renders the portfolio into a single page (plus an optional JSON export)
/// and writes it through `Storage`.
pub struct StaticSitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    store: Arc<ContentStore>,
    options: PageOptions,
}

impl<S: Storage, C: ConfigProvider> StaticSitePipeline<S, C> {
    pub fn new(storage: S, config: C, store: Arc<ContentStore>) -> Self {
        Self::with_page_options(storage, config, store, PageOptions::default())
    }

    pub fn with_page_options(
        storage: S,
        config: C,
        store: Arc<ContentStore>,
        mut options: PageOptions,
    ) -> Self {
        options.nav_offset = config.nav_offset();
        Self {
            storage,
            config,
            store,
            options,
        }
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> SitePipeline for StaticSitePipeline<S, C> {
    type Content = Arc<ContentStore>;

    async fn load(&self) -> Result<Self::Content> {
        tracing::debug!(
            projects = self.store.projects().len(),
            skills = self.store.skills().len(),
            "Using content store"
        );
        Ok(Arc::clone(&self.store))
    }

    async fn render(&self, content: &Self::Content) -> Result<Vec<SiteFile>> {
        let view = PortfolioView::with_active(content, &self.options, self.config.initial_section());
        let mut files = vec![SiteFile {
            path: self.config.page_file().to_string(),
            contents: view.render(),
        }];

        if self.config.emit_json() {
            files.push(SiteFile {
                path: CONTENT_JSON_FILE.to_string(),
                contents: content.to_json()?,
            });
        }

        Ok(files)
    }

    async fn publish(&self, files: Vec<SiteFile>) -> Result<String> {
        for file in &files {
            tracing::debug!("Writing {} ({} bytes)", file.path, file.contents.len());
            self.storage
                .write_file(&file.path, file.contents.as_bytes())
                .await?;
        }

        let page = Path::new(self.config.output_path()).join(self.config.page_file());
        Ok(page.to_string_lossy().to_string())
    }
}
