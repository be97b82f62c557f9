use portfolio_site::core::tracker::DEFAULT_TRIGGER_OFFSET;
use portfolio_site::{ActiveSectionTracker, SectionId, SectionLayout};
use proptest::prelude::*;

fn heights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(200.0f64..2000.0, 4)
}

proptest! {
    #[test]
    fn trigger_inside_section_selects_it(
        heights in heights(),
        section_index in 0usize..4,
        fraction in 0.01f64..0.99,
        trigger in 0.0f64..150.0,
    ) {
        let layout = SectionLayout::from_heights(&heights);
        let extent = layout.extents()[section_index];
        let y = extent.top + extent.height * fraction;
        prop_assume!(extent.contains(y));

        let mut tracker = ActiveSectionTracker::new(layout, trigger);
        tracker.on_scroll(y - trigger);
        prop_assert_eq!(tracker.active(), extent.section);
    }

    #[test]
    fn continuous_scroll_visits_sections_in_order(
        heights in heights(),
        step in 1.0f64..150.0,
    ) {
        let layout = SectionLayout::from_heights(&heights);
        let end = layout.total_height();
        let mut tracker = ActiveSectionTracker::new(layout, DEFAULT_TRIGGER_OFFSET);

        let mut seen = vec![tracker.active()];
        let mut offset = 0.0;
        while offset < end {
            offset += step;
            if let Some(section) = tracker.on_scroll(offset) {
                seen.push(section);
            }
        }
        prop_assert_eq!(seen, SectionId::ALL.to_vec());

        let mut back = vec![tracker.active()];
        while offset > 0.0 {
            offset = (offset - step).max(0.0);
            if let Some(section) = tracker.on_scroll(offset) {
                back.push(section);
            }
        }
        let mut reversed = SectionId::ALL.to_vec();
        reversed.reverse();
        prop_assert_eq!(back, reversed);
    }

    #[test]
    fn zero_offset_is_home(heights in heights(), trigger in 0.0f64..150.0) {
        let mut tracker = ActiveSectionTracker::new(SectionLayout::from_heights(&heights), trigger);
        prop_assert_eq!(tracker.active(), SectionId::Home);
        prop_assert_eq!(tracker.on_scroll(0.0), None);
        prop_assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn leaving_the_page_keeps_last_section(heights in heights(), overshoot in 1.0f64..5000.0) {
        let layout = SectionLayout::from_heights(&heights);
        let end = layout.total_height();
        let mut tracker = ActiveSectionTracker::new(layout, DEFAULT_TRIGGER_OFFSET);

        tracker.on_scroll(end - DEFAULT_TRIGGER_OFFSET - 1.0);
        prop_assert_eq!(tracker.active(), SectionId::Skills);
        prop_assert_eq!(tracker.on_scroll(end + overshoot), None);
        prop_assert_eq!(tracker.active(), SectionId::Skills);
    }
}
