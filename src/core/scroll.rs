use crate::core::animate::Reveal;
use crate::core::tracker::ActiveSectionTracker;
use crate::core::view::PortfolioView;
use crate::domain::model::{SectionId, SectionLayout};
use crate::domain::ports::Animator;

/// Smooth scroll to anchors, aligning the section top just below the nav bar.
#[derive(Debug, Clone)]
pub struct SmoothScroller {
    layout: SectionLayout,
    nav_offset: f64,
}

impl SmoothScroller {
    pub fn new(layout: SectionLayout, nav_offset: f64) -> Self {
        Self { layout, nav_offset }
    }

    /// Scroll offset that puts `section` right under the nav bar.
    pub fn target_offset(&self, section: SectionId) -> Option<f64> {
        self.layout
            .extent(section)
            .map(|extent| (extent.top - self.nav_offset).max(0.0))
    }

    /// Samples an ease-in-out glide from `from` to `to`; the last sample is
    /// always `to`.
    pub fn glide(from: f64, to: f64, steps: usize) -> Vec<f64> {
        let steps = steps.max(1);
        (1..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let eased = if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                };
                from + (to - from) * eased
            })
            .collect()
    }
}

/// Couples the tracker, the view and an animator the way the page script
/// does in the browser.
#[derive(Debug)]
pub struct ScrollSpy {
    tracker: ActiveSectionTracker,
    scroller: SmoothScroller,
    viewport_height: f64,
    offset: f64,
}

impl ScrollSpy {
    pub fn new(layout: SectionLayout, nav_offset: f64, viewport_height: f64) -> Self {
        Self {
            tracker: ActiveSectionTracker::new(layout.clone(), nav_offset),
            scroller: SmoothScroller::new(layout, nav_offset),
            viewport_height,
            offset: 0.0,
        }
    }

    pub fn tracker(&self) -> &ActiveSectionTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ActiveSectionTracker {
        &mut self.tracker
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Sections whose extent intersects the viewport at `offset`.
    pub fn visible_sections(&self, offset: f64) -> Vec<SectionId> {
        let bottom = offset + self.viewport_height;
        self.tracker
            .layout()
            .extents()
            .iter()
            .filter(|e| e.height > 0.0 && e.top < bottom && e.bottom() > offset)
            .map(|e| e.section)
            .collect()
    }

    /// One scroll event. Returns the new active section on a transition.
    pub fn scroll(
        &mut self,
        offset: f64,
        view: &mut PortfolioView<'_>,
        animator: &mut dyn Animator,
    ) -> Option<SectionId> {
        self.offset = offset.max(0.0);
        for section in self.visible_sections(self.offset) {
            animator.reveal_once(section.anchor(), Reveal::HEADING.from, Reveal::HEADING.to);
        }

        let changed = self.tracker.on_scroll(self.offset)?;
        view.set_active_section(changed);
        Some(changed)
    }

    /// Glides to `section` in `steps` scroll events and returns the
    /// transitions seen on the way, with the offset each happened at.
    pub fn scroll_to(
        &mut self,
        section: SectionId,
        steps: usize,
        view: &mut PortfolioView<'_>,
        animator: &mut dyn Animator,
    ) -> Vec<(f64, SectionId)> {
        let Some(target) = self.scroller.target_offset(section) else {
            return Vec::new();
        };
        SmoothScroller::glide(self.offset, target, steps)
            .into_iter()
            .filter_map(|offset| {
                self.scroll(offset, view, animator)
                    .map(|section| (offset, section))
            })
            .collect()
    }
}
