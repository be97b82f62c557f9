use crate::domain::model::{SectionId, SectionLayout};
use crate::domain::ports::ScrollTracker;

/// Height of the fixed navigation bar, in pixels.
pub const DEFAULT_TRIGGER_OFFSET: f64 = 80.0;

/// Keeps the active section in sync with the viewport scroll offset.
///
/// The trigger point sits `trigger_offset` pixels below the top of the
/// viewport. Whenever it falls inside a section's extent that section becomes
/// active. Outside every extent (a gap, above the first section or past the
/// last one) the last-known section is kept.
pub struct ActiveSectionTracker {
    layout: SectionLayout,
    trigger_offset: f64,
    active: SectionId,
    listeners: Vec<Box<dyn FnMut(SectionId)>>,
}

impl ActiveSectionTracker {
    pub fn new(layout: SectionLayout, trigger_offset: f64) -> Self {
        Self {
            layout,
            trigger_offset,
            active: SectionId::Home,
            listeners: Vec::new(),
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn trigger_offset(&self) -> f64 {
        self.trigger_offset
    }

    pub fn trigger_point(&self, scroll_offset: f64) -> f64 {
        scroll_offset + self.trigger_offset
    }

    /// Handles one scroll event. Returns the new section on a transition.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> Option<SectionId> {
        let y = self.trigger_point(scroll_offset);
        let section = self.layout.section_at(y)?;
        if section == self.active {
            return None;
        }

        tracing::debug!(from = %self.active, to = %section, scroll_offset, "active section changed");
        self.active = section;
        for listener in self.listeners.iter_mut() {
            listener(section);
        }
        Some(section)
    }
}

impl ScrollTracker for ActiveSectionTracker {
    fn on_active_section_change(&mut self, callback: Box<dyn FnMut(SectionId)>) {
        self.listeners.push(callback);
    }
}

impl std::fmt::Debug for ActiveSectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveSectionTracker")
            .field("layout", &self.layout)
            .field("trigger_offset", &self.trigger_offset)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
