use crate::core::render::{PageOptions, SectionRenderer};
use crate::core::store::ContentStore;
use crate::domain::model::SectionId;

/// Top-level view. Owns the active section for its lifetime; the only way to
/// change it is [`PortfolioView::set_active_section`].
#[derive(Debug, Clone)]
pub struct PortfolioView<'a> {
    renderer: SectionRenderer<'a>,
    active: SectionId,
}

impl<'a> PortfolioView<'a> {
    pub fn new(store: &'a ContentStore, options: &'a PageOptions) -> Self {
        Self::with_active(store, options, SectionId::Home)
    }

    pub fn with_active(store: &'a ContentStore, options: &'a PageOptions, active: SectionId) -> Self {
        Self {
            renderer: SectionRenderer::new(store, options),
            active,
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.active
    }

    /// Returns `true` if the value changed and the nav needs a redraw.
    pub fn set_active_section(&mut self, section: SectionId) -> bool {
        if self.active == section {
            return false;
        }
        self.active = section;
        true
    }

    pub fn render(&self) -> String {
        self.renderer.render_page(self.active)
    }

    pub fn render_nav(&self) -> String {
        self.renderer.render_nav(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_reports_changes() {
        let store = ContentStore::builtin();
        let options = PageOptions::default();
        let mut view = PortfolioView::new(&store, &options);
        assert_eq!(view.active_section(), SectionId::Home);
        assert!(!view.set_active_section(SectionId::Home));
        assert!(view.set_active_section(SectionId::Skills));
        assert_eq!(view.active_section(), SectionId::Skills);
    }

    #[test]
    fn test_render_follows_active_section() {
        let store = ContentStore::builtin();
        let options = PageOptions::default();
        let mut view = PortfolioView::new(&store, &options);
        let before = view.render_nav();
        view.set_active_section(SectionId::About);
        let after = view.render_nav();
        assert_ne!(before, after);
        assert!(after.contains(r#"data-nav="about" data-scroll-to="about" class="cursor-pointer hover:text-blue-600 capitalize text-blue-600""#));
    }
}
