//! One-shot reveal of content blocks.
//!
//! A block starts hidden. The first intersection entry that reports at least
//! `threshold` of the block inside the viewport makes it visible and ends its
//! observation. Nothing makes a visible block hidden again.

use crate::core::lifecycle::Observation;
use crate::core::style::{self, StyleDescriptor};
use crate::domain::model::{BlockId, BlockSpec};
use crate::domain::ports::{IntersectionEntry, IntersectionObserver};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Monotonic hidden → visible flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlag {
    visible: bool,
}

impl RevealFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Returns `true` only on the transition to visible.
    pub fn apply(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.visible || !is_intersecting || !(ratio >= threshold) {
            return false;
        }
        self.visible = true;
        true
    }
}

pub struct Reveal<P: IntersectionObserver> {
    spec: BlockSpec,
    threshold: f64,
    flag: RevealFlag,
    observation: Option<Observation<P>>,
}

impl<P: IntersectionObserver> Reveal<P> {
    /// Starts observing the block. When the platform cannot observe, the
    /// block stays hidden for its whole life.
    pub fn mount(spec: BlockSpec, threshold: f64, platform: &Rc<RefCell<P>>) -> Self {
        let observation = match Observation::start(platform, &spec.id, threshold) {
            Ok(observation) => Some(observation),
            Err(e) => {
                tracing::warn!("block {} will stay hidden: {}", spec.id, e);
                None
            }
        };

        Self {
            spec,
            threshold,
            flag: RevealFlag::new(),
            observation,
        }
    }

    /// Feeds one entry; returns `true` if the block became visible.
    pub fn on_intersection(&mut self, entry: &IntersectionEntry) -> bool {
        if entry.target != self.spec.id || self.observation.is_none() {
            return false;
        }

        if self
            .flag
            .apply(entry.is_intersecting, entry.ratio, self.threshold)
        {
            // Dropping the guard disconnects the observer.
            self.observation = None;
            tracing::debug!(
                "revealed {} at ratio {:.2} (delay {:?})",
                self.spec.id,
                entry.ratio,
                self.spec.delay
            );
            return true;
        }
        false
    }

    pub fn id(&self) -> &BlockId {
        &self.spec.id
    }

    pub fn spec(&self) -> &BlockSpec {
        &self.spec
    }

    pub fn delay(&self) -> Duration {
        self.spec.delay
    }

    pub fn is_visible(&self) -> bool {
        self.flag.is_visible()
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    pub fn style(&self) -> StyleDescriptor {
        style::reveal_style(self.is_visible(), self.spec.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BlockKind, Section};
    use crate::domain::ports::{ObservationId, ObserveError};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct CountingObserver {
        next: u64,
        active: HashSet<u64>,
        unsupported: bool,
    }

    impl IntersectionObserver for CountingObserver {
        fn observe(&mut self, _target: &BlockId, _threshold: f64) -> Result<ObservationId, ObserveError> {
            if self.unsupported {
                return Err(ObserveError::Unsupported);
            }
            self.next += 1;
            self.active.insert(self.next);
            Ok(ObservationId(self.next))
        }

        fn unobserve(&mut self, id: ObservationId) {
            self.active.remove(&id.0);
        }
    }

    fn spec() -> BlockSpec {
        BlockSpec {
            id: BlockId::new(Section::About, 0),
            section: Section::About,
            kind: BlockKind::SectionHeader,
            delay: Duration::from_millis(100),
        }
    }

    fn entry(ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            target: BlockId::new(Section::About, 0),
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn test_starts_hidden_and_reveals_once() {
        let platform = Rc::new(RefCell::new(CountingObserver::default()));
        let mut reveal = Reveal::mount(spec(), 0.12, &platform);

        assert!(!reveal.is_visible());
        assert!(reveal.is_observing());
        assert_eq!(platform.borrow().active.len(), 1);

        assert!(!reveal.on_intersection(&entry(0.05)));
        assert!(!reveal.is_visible());

        assert!(reveal.on_intersection(&entry(0.12)));
        assert!(reveal.is_visible());
        assert!(!reveal.is_observing());
        assert!(platform.borrow().active.is_empty());

        assert!(!reveal.on_intersection(&entry(0.0)));
        assert!(!reveal.on_intersection(&entry(1.0)));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_ignores_entries_for_other_blocks() {
        let platform = Rc::new(RefCell::new(CountingObserver::default()));
        let mut reveal = Reveal::mount(spec(), 0.12, &platform);
        let other = IntersectionEntry {
            target: BlockId::new(Section::Skills, 0),
            ratio: 1.0,
            is_intersecting: true,
        };
        assert!(!reveal.on_intersection(&other));
        assert!(!reveal.is_visible());
    }

    #[test]
    fn test_unsupported_platform_stays_hidden() {
        let platform = Rc::new(RefCell::new(CountingObserver {
            unsupported: true,
            ..Default::default()
        }));
        let mut reveal = Reveal::mount(spec(), 0.12, &platform);
        assert!(!reveal.is_observing());
        assert!(!reveal.on_intersection(&entry(1.0)));
        assert!(!reveal.is_visible());
    }

    #[test]
    fn test_drop_releases_observation() {
        let platform = Rc::new(RefCell::new(CountingObserver::default()));
        let reveal = Reveal::mount(spec(), 0.12, &platform);
        assert_eq!(platform.borrow().active.len(), 1);
        drop(reveal);
        assert!(platform.borrow().active.is_empty());
    }

    #[test]
    fn test_style_follows_flag() {
        let platform = Rc::new(RefCell::new(CountingObserver::default()));
        let mut reveal = Reveal::mount(spec(), 0.12, &platform);
        assert_eq!(reveal.style().get("opacity"), Some("0"));
        reveal.on_intersection(&entry(0.5));
        assert_eq!(reveal.style().get("opacity"), Some("1"));
    }

    proptest! {
        #[test]
        fn prop_flag_never_reverts(ratios in proptest::collection::vec(0.0f64..=1.0, 1..50)) {
            let mut flag = RevealFlag::new();
            for ratio in ratios {
                let was_visible = flag.is_visible();
                let flipped = flag.apply(ratio > 0.0, ratio, 0.12);
                if was_visible {
                    prop_assert!(flag.is_visible());
                    prop_assert!(!flipped);
                }
            }
        }

        #[test]
        fn prop_visible_iff_threshold_met(ratios in proptest::collection::vec(0.0f64..=1.0, 1..50)) {
            let mut flag = RevealFlag::new();
            let mut transitions = 0;
            for ratio in &ratios {
                if flag.apply(*ratio > 0.0, *ratio, 0.3) {
                    transitions += 1;
                }
            }
            let expected = ratios.iter().any(|r| *r > 0.0 && *r >= 0.3);
            prop_assert_eq!(flag.is_visible(), expected);
            prop_assert!(transitions <= 1);
        }
    }
}
