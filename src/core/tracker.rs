use crate::domain::model::{Section, SectionList};
use crate::domain::ports::SectionGeometry;

/// Picks the last section (in declaration order) whose top edge is at or
/// above `offset` px from the viewport top. Sections without an anchor are
/// skipped. `None` when no section qualifies.
pub fn select_active<G: SectionGeometry + ?Sized>(
    sections: &SectionList,
    geometry: &G,
    offset: f64,
) -> Option<Section> {
    sections
        .iter()
        .rev()
        .find(|section| matches!(geometry.section_top(*section), Some(top) if top <= offset))
}

/// Session-wide "current section" for nav highlighting.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    sections: SectionList,
    offset: f64,
    active: Section,
}

impl ActiveSectionTracker {
    pub fn new(sections: SectionList, offset: f64) -> Self {
        let active = sections.first();
        Self {
            sections,
            offset,
            active,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    /// Recomputes the active section. Keeps the previous value when nothing
    /// matches. Returns the new section when it changed.
    pub fn on_scroll<G: SectionGeometry + ?Sized>(&mut self, geometry: &G) -> Option<Section> {
        let selected = select_active(&self.sections, geometry, self.offset)?;
        if selected == self.active {
            return None;
        }
        tracing::debug!("active section {} -> {}", self.active, selected);
        self.active = selected;
        Some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    /// Sections at fixed document offsets, viewed at `scroll_y`.
    struct Fixed {
        tops: HashMap<Section, f64>,
        scroll_y: f64,
    }

    impl Fixed {
        fn new(tops: &[(Section, f64)], scroll_y: f64) -> Self {
            Self {
                tops: tops.iter().copied().collect(),
                scroll_y,
            }
        }
    }

    impl SectionGeometry for Fixed {
        fn section_top(&self, section: Section) -> Option<f64> {
            self.tops.get(&section).map(|top| top - self.scroll_y)
        }
    }

    fn three() -> SectionList {
        SectionList::parse(&["home", "about", "skills"]).unwrap()
    }

    const LAYOUT: [(Section, f64); 3] = [
        (Section::Home, 0.0),
        (Section::About, 850.0),
        (Section::Skills, 1700.0),
    ];

    #[test]
    fn test_scrolled_past_about() {
        let mut tracker = ActiveSectionTracker::new(three(), 200.0);
        assert_eq!(tracker.on_scroll(&Fixed::new(&LAYOUT, 900.0)), Some(Section::About));
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_top_of_page_is_home() {
        let mut tracker = ActiveSectionTracker::new(three(), 200.0);
        assert_eq!(tracker.on_scroll(&Fixed::new(&LAYOUT, 0.0)), None);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mut tracker = ActiveSectionTracker::new(three(), 200.0);
        tracker.on_scroll(&Fixed::new(&LAYOUT, 650.0));
        assert_eq!(tracker.active(), Section::About);
        tracker.on_scroll(&Fixed::new(&LAYOUT, 649.0));
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut tracker = ActiveSectionTracker::new(three(), 200.0);
        tracker.on_scroll(&Fixed::new(&LAYOUT, 900.0));

        // Every section is below the offset line.
        let shifted = [
            (Section::Home, 500.0),
            (Section::About, 1350.0),
            (Section::Skills, 2200.0),
        ];
        assert_eq!(tracker.on_scroll(&Fixed::new(&shifted, 0.0)), None);
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let mut tracker = ActiveSectionTracker::new(three(), 200.0);
        let without_skills = [(Section::Home, 0.0), (Section::About, 850.0)];
        tracker.on_scroll(&Fixed::new(&without_skills, 5000.0));
        assert_eq!(tracker.active(), Section::About);
    }

    proptest! {
        #[test]
        fn prop_no_hysteresis(mut positions in proptest::collection::vec(0.0f64..3000.0, 1..40)) {
            positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let mut descending = positions.clone();
            descending.reverse();

            let mut tracker = ActiveSectionTracker::new(three(), 200.0);
            for y in positions.iter().chain(descending.iter()) {
                tracker.on_scroll(&Fixed::new(&LAYOUT, *y));
                // Home's top is <= 200 for every y >= 0, so there is always a match.
                let fresh = select_active(&three(), &Fixed::new(&LAYOUT, *y), 200.0);
                prop_assert_eq!(Some(tracker.active()), fresh);
            }
        }
    }
}
