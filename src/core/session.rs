//! The root view of the page.
//!
//! A session owns every piece of interactive state and is the only writer of
//! each: reveal flags (intersection events), the active section and nav
//! appearance (scroll events), the menu (toggle/navigate), card hover and
//! pointer position (pointer events). Mounting registers one scroll listener
//! and one observation per block; unmounting releases all of them.

use crate::config::toml_config::BehaviorConfig;
use crate::core::hover::{CardHover, PointerTracker};
use crate::core::lifecycle::ScrollListener;
use crate::core::nav::{MenuState, NavAppearance, NavBar, NavOutcome};
use crate::core::reveal::Reveal;
use crate::core::tracker::ActiveSectionTracker;
use crate::domain::model::{BlockId, PageOutline, Section, SectionList, ViewportSize};
use crate::domain::ports::{IntersectionEntry, Platform, PlatformEvent};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Everything the renderer needs to draw the page at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub active: Section,
    pub appearance: NavAppearance,
    pub menu: MenuState,
    pub revealed: BTreeSet<BlockId>,
    pub hovered_card: Option<usize>,
    pub pointer: Option<(f64, f64)>,
    pub viewport: ViewportSize,
}

impl PageSnapshot {
    /// State of a freshly mounted page: nothing revealed, first section active.
    pub fn initial(sections: &SectionList, viewport: ViewportSize) -> Self {
        Self {
            active: sections.first(),
            appearance: NavAppearance::Transparent,
            menu: MenuState::Closed,
            revealed: BTreeSet::new(),
            hovered_card: None,
            pointer: None,
            viewport,
        }
    }

    pub fn is_revealed(&self, block: &BlockId) -> bool {
        self.revealed.contains(block)
    }
}

/// What one [`PageSession::pump`] call processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpSummary {
    pub scroll_events: usize,
    pub intersection_events: usize,
    pub revealed: usize,
}

pub struct PageSession<P: Platform> {
    platform: Rc<RefCell<P>>,
    tracker: ActiveSectionTracker,
    nav: NavBar,
    reveals: Vec<Reveal<P>>,
    by_block: HashMap<BlockId, usize>,
    hover: CardHover,
    pointer: PointerTracker,
    viewport: ViewportSize,
    _scroll_listener: ScrollListener<P>,
}

impl<P: Platform> PageSession<P> {
    pub fn mount(
        platform: &Rc<RefCell<P>>,
        sections: SectionList,
        behavior: &BehaviorConfig,
        outline: &PageOutline,
        viewport: ViewportSize,
    ) -> Self {
        let scroll_listener = ScrollListener::register(platform);

        let reveals: Vec<Reveal<P>> = outline
            .blocks
            .iter()
            .map(|spec| Reveal::mount(spec.clone(), behavior.reveal_threshold, platform))
            .collect();
        let by_block = reveals
            .iter()
            .enumerate()
            .map(|(i, reveal)| (reveal.id().clone(), i))
            .collect();

        tracing::debug!(
            "mounted page session: {} sections, {} reveal blocks",
            sections.len(),
            reveals.len()
        );

        Self {
            platform: Rc::clone(platform),
            tracker: ActiveSectionTracker::new(sections, behavior.active_offset),
            nav: NavBar::new(behavior.nav_scroll_threshold),
            reveals,
            by_block,
            hover: CardHover::default(),
            pointer: PointerTracker::default(),
            viewport,
            _scroll_listener: scroll_listener,
        }
    }

    /// Handles every pending platform event in dispatch order.
    pub fn pump(&mut self) -> PumpSummary {
        let events = self.platform.borrow_mut().drain_events();
        let mut summary = PumpSummary::default();

        for event in events {
            match event {
                PlatformEvent::Scroll => {
                    summary.scroll_events += 1;
                    self.on_scroll();
                }
                PlatformEvent::Intersection(entry) => {
                    summary.intersection_events += 1;
                    if self.on_intersection(&entry) {
                        summary.revealed += 1;
                    }
                }
            }
        }

        summary
    }

    fn on_scroll(&mut self) {
        let scroll_y = {
            let platform = self.platform.borrow();
            self.tracker.on_scroll(&*platform);
            platform.scroll_y()
        };
        if let Some(appearance) = self.nav.on_scroll(scroll_y) {
            tracing::debug!("nav appearance -> {:?} at scroll {}", appearance, scroll_y);
        }
    }

    fn on_intersection(&mut self, entry: &IntersectionEntry) -> bool {
        match self.by_block.get(&entry.target) {
            Some(&i) => self.reveals[i].on_intersection(entry),
            None => {
                tracing::trace!("intersection for unknown block {}", entry.target);
                false
            }
        }
    }

    /// Nav link, brand mark and hero buttons all go through here.
    pub fn navigate(&mut self, target: Section) -> NavOutcome {
        let mut platform = self.platform.borrow_mut();
        self.nav.select(target, &mut *platform)
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.nav.toggle_menu()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.moved(x, y);
    }

    pub fn card_enter(&mut self, card: usize) {
        self.hover.enter(card);
    }

    pub fn card_leave(&mut self, card: usize) {
        self.hover.leave(card);
    }

    pub fn active(&self) -> Section {
        self.tracker.active()
    }

    pub fn appearance(&self) -> NavAppearance {
        self.nav.appearance()
    }

    pub fn menu(&self) -> MenuState {
        self.nav.menu()
    }

    pub fn sections(&self) -> &SectionList {
        self.tracker.sections()
    }

    pub fn is_revealed(&self, block: &BlockId) -> bool {
        self.by_block
            .get(block)
            .map(|&i| self.reveals[i].is_visible())
            .unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.reveals.iter().filter(|r| r.is_visible()).count()
    }

    pub fn observing_count(&self) -> usize {
        self.reveals.iter().filter(|r| r.is_observing()).count()
    }

    pub fn block_count(&self) -> usize {
        self.reveals.len()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            active: self.tracker.active(),
            appearance: self.nav.appearance(),
            menu: self.nav.menu(),
            revealed: self
                .reveals
                .iter()
                .filter(|r| r.is_visible())
                .map(|r| r.id().clone())
                .collect(),
            hovered_card: self.hover.hovered(),
            pointer: self.pointer.position(),
            viewport: self.viewport,
        }
    }

    /// Tears the page down, releasing the scroll listener and every
    /// outstanding observation.
    pub fn unmount(self) {
        tracing::debug!(
            "unmounting page session ({} of {} blocks revealed)",
            self.revealed_count(),
            self.reveals.len()
        );
    }
}
