//! A viewport without a browser.
//!
//! `HeadlessViewport` implements every platform port against a static page
//! layout. Scrolling moves the viewport over the layout and queues the same
//! events a browser would dispatch: one scroll event when a listener is
//! registered, then an intersection entry for every observed block whose
//! threshold status changed.

use crate::domain::model::{BlockId, PageOutline, Section, SectionList, ViewportSize};
use crate::domain::ports::{
    EventQueue, IntersectionEntry, IntersectionObserver, ListenerId, ObservationId, ObserveError,
    PlatformEvent, ScrollBehavior, ScrollHost, ScrollSource, SectionGeometry,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// Vertical extent in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub viewport: ViewportSize,
    pub section_padding: f64,
    pub block_gap: f64,
    pub footer_height: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            viewport: ViewportSize::default(),
            section_padding: 120.0,
            block_gap: 24.0,
            footer_height: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageLayout {
    sections: Vec<(Section, Rect)>,
    blocks: HashMap<BlockId, Rect>,
    document_height: f64,
}

impl PageLayout {
    /// Sections at explicit document offsets; each one extends to the next.
    pub fn from_sections(tops: &[(Section, f64)], document_height: f64) -> Self {
        let sections = tops
            .iter()
            .enumerate()
            .map(|(i, (section, top))| {
                let bottom = tops.get(i + 1).map_or(document_height, |(_, next)| *next);
                (
                    *section,
                    Rect {
                        top: *top,
                        height: (bottom - top).max(0.0),
                    },
                )
            })
            .collect();

        Self {
            sections,
            blocks: HashMap::new(),
            document_height,
        }
    }

    pub fn with_block(mut self, id: BlockId, top: f64, height: f64) -> Self {
        self.blocks.insert(id, Rect { top, height });
        self
    }

    /// Stacks each section's blocks at their nominal heights. The first
    /// section is at least one viewport tall with its blocks centred, as the
    /// hero is.
    pub fn estimate(outline: &PageOutline, sections: &SectionList, metrics: &LayoutMetrics) -> Self {
        let mut layout = Self::default();
        let mut cursor = 0.0;

        for (i, section) in sections.iter().enumerate() {
            let blocks: Vec<_> = outline.in_section(section).collect();
            let content_height: f64 = blocks.iter().map(|b| b.kind.nominal_height()).sum::<f64>()
                + metrics.block_gap * blocks.len().saturating_sub(1) as f64;

            let (height, mut block_top) = if i == 0 {
                let height = metrics.viewport.height.max(content_height);
                (height, cursor + (height - content_height) / 2.0)
            } else {
                (
                    content_height + 2.0 * metrics.section_padding,
                    cursor + metrics.section_padding,
                )
            };

            for block in blocks {
                let block_height = block.kind.nominal_height();
                layout.blocks.insert(
                    block.id.clone(),
                    Rect {
                        top: block_top,
                        height: block_height,
                    },
                );
                block_top += block_height + metrics.block_gap;
            }

            layout.sections.push((
                section,
                Rect {
                    top: cursor,
                    height,
                },
            ));
            cursor += height;
        }

        layout.document_height = cursor + metrics.footer_height;
        layout
    }

    pub fn section_rect(&self, section: Section) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, rect)| *rect)
    }

    pub fn block_rect(&self, block: &BlockId) -> Option<Rect> {
        self.blocks.get(block).copied()
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }
}

#[derive(Debug, Clone)]
struct Watch {
    target: BlockId,
    threshold: f64,
    met: Option<bool>,
}

pub struct HeadlessViewport {
    layout: PageLayout,
    viewport: ViewportSize,
    scroll_y: f64,
    intersection_supported: bool,
    next_id: u64,
    watches: BTreeMap<u64, Watch>,
    listeners: BTreeSet<u64>,
    queue: VecDeque<PlatformEvent>,
    scroll_requests: Vec<(Section, ScrollBehavior)>,
}

impl HeadlessViewport {
    pub fn new(layout: PageLayout, viewport: ViewportSize) -> Self {
        Self {
            layout,
            viewport,
            scroll_y: 0.0,
            intersection_supported: true,
            next_id: 0,
            watches: BTreeMap::new(),
            listeners: BTreeSet::new(),
            queue: VecDeque::new(),
            scroll_requests: Vec::new(),
        }
    }

    /// A host with no intersection observation; every `observe` fails.
    pub fn without_intersection_observer(mut self) -> Self {
        self.intersection_supported = false;
        self
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn max_scroll(&self) -> f64 {
        (self.layout.document_height() - self.viewport.height).max(0.0)
    }

    /// Moves the viewport, clamped to the document, and queues the
    /// resulting events. Does nothing when the position does not change.
    pub fn scroll_to(&mut self, y: f64) {
        let y = if y.is_finite() { y.clamp(0.0, self.max_scroll()) } else { 0.0 };
        if y == self.scroll_y {
            return;
        }
        self.scroll_y = y;

        if !self.listeners.is_empty() {
            self.queue.push_back(PlatformEvent::Scroll);
        }
        self.update_intersections();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn active_observations(&self) -> usize {
        self.watches.len()
    }

    pub fn scroll_requests(&self) -> &[(Section, ScrollBehavior)] {
        &self.scroll_requests
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Fraction of the block inside the viewport.
    pub fn visible_ratio(&self, block: &BlockId) -> Option<f64> {
        let rect = self.layout.block_rect(block)?;
        let view_top = self.scroll_y;
        let view_bottom = self.scroll_y + self.viewport.height;

        if rect.height <= 0.0 {
            let inside = rect.top >= view_top && rect.top <= view_bottom;
            return Some(if inside { 1.0 } else { 0.0 });
        }

        let overlap = (rect.bottom().min(view_bottom) - rect.top.max(view_top)).max(0.0);
        Some((overlap / rect.height).clamp(0.0, 1.0))
    }

    fn entry_for(&self, watch: &Watch) -> (IntersectionEntry, bool) {
        let ratio = self.visible_ratio(&watch.target).unwrap_or(0.0);
        let is_intersecting = ratio > 0.0;
        let meets = is_intersecting && ratio >= watch.threshold;
        (
            IntersectionEntry {
                target: watch.target.clone(),
                ratio,
                is_intersecting,
            },
            meets,
        )
    }

    fn update_intersections(&mut self) {
        let changed: Vec<(u64, IntersectionEntry, bool)> = self
            .watches
            .iter()
            .filter_map(|(id, watch)| {
                let (entry, meets) = self.entry_for(watch);
                (watch.met != Some(meets)).then_some((*id, entry, meets))
            })
            .collect();

        for (id, entry, meets) in changed {
            if let Some(watch) = self.watches.get_mut(&id) {
                watch.met = Some(meets);
            }
            self.queue.push_back(PlatformEvent::Intersection(entry));
        }
    }
}

impl IntersectionObserver for HeadlessViewport {
    fn observe(&mut self, target: &BlockId, threshold: f64) -> Result<ObservationId, ObserveError> {
        if !self.intersection_supported {
            return Err(ObserveError::Unsupported);
        }
        if self.layout.block_rect(target).is_none() {
            return Err(ObserveError::UnknownTarget(target.clone()));
        }

        self.next_id += 1;
        let id = self.next_id;
        let mut watch = Watch {
            target: target.clone(),
            threshold,
            met: None,
        };

        // Observing delivers the current state right away.
        let (entry, meets) = self.entry_for(&watch);
        watch.met = Some(meets);
        self.queue.push_back(PlatformEvent::Intersection(entry));
        self.watches.insert(id, watch);

        Ok(ObservationId(id))
    }

    fn unobserve(&mut self, id: ObservationId) {
        self.watches.remove(&id.0);
    }
}

impl ScrollSource for HeadlessViewport {
    fn add_scroll_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        self.listeners.insert(self.next_id);
        ListenerId(self.next_id)
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id.0);
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

impl SectionGeometry for HeadlessViewport {
    fn section_top(&self, section: Section) -> Option<f64> {
        self.layout
            .section_rect(section)
            .map(|rect| rect.top - self.scroll_y)
    }
}

impl ScrollHost for HeadlessViewport {
    fn scroll_into_view(&mut self, section: Section, behavior: ScrollBehavior) -> bool {
        let Some(rect) = self.layout.section_rect(section) else {
            return false;
        };
        self.scroll_requests.push((section, behavior));
        self.scroll_to(rect.top);
        true
    }
}

impl EventQueue for HeadlessViewport {
    fn drain_events(&mut self) -> Vec<PlatformEvent> {
        self.queue.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BlockKind, BlockSpec};
    use std::time::Duration;

    fn small_layout() -> PageLayout {
        PageLayout::from_sections(
            &[
                (Section::Home, 0.0),
                (Section::About, 850.0),
                (Section::Skills, 1700.0),
            ],
            2600.0,
        )
        .with_block(BlockId::new(Section::About, 0), 1000.0, 200.0)
    }

    fn viewport() -> ViewportSize {
        ViewportSize {
            width: 1280.0,
            height: 800.0,
        }
    }

    #[test]
    fn test_from_sections_heights() {
        let layout = small_layout();
        assert_eq!(
            layout.section_rect(Section::About),
            Some(Rect {
                top: 850.0,
                height: 850.0
            })
        );
        assert_eq!(layout.section_rect(Section::Skills).unwrap().height, 900.0);
        assert_eq!(layout.section_rect(Section::Contact), None);
    }

    #[test]
    fn test_visible_ratio_tracks_scroll() {
        let mut vp = HeadlessViewport::new(small_layout(), viewport());
        let block = BlockId::new(Section::About, 0);
        assert_eq!(vp.visible_ratio(&block), Some(0.0));

        vp.scroll_to(300.0);
        assert_eq!(vp.visible_ratio(&block), Some(0.5));

        vp.scroll_to(1000.0);
        assert_eq!(vp.visible_ratio(&block), Some(1.0));
    }

    #[test]
    fn test_scroll_is_clamped_and_only_queued_with_listener() {
        let mut vp = HeadlessViewport::new(small_layout(), viewport());
        vp.scroll_to(10_000.0);
        assert_eq!(vp.scroll_y(), 1800.0);
        assert_eq!(vp.pending_events(), 0);

        let listener = vp.add_scroll_listener();
        vp.scroll_to(-5.0);
        assert_eq!(vp.scroll_y(), 0.0);
        assert_eq!(vp.drain_events(), vec![PlatformEvent::Scroll]);

        vp.scroll_to(0.0);
        assert!(vp.drain_events().is_empty());

        vp.remove_scroll_listener(listener);
        assert_eq!(vp.listener_count(), 0);
    }

    #[test]
    fn test_observe_reports_initial_and_changed_state() {
        let mut vp = HeadlessViewport::new(small_layout(), viewport());
        let block = BlockId::new(Section::About, 0);
        let id = vp.observe(&block, 0.12).unwrap();

        let initial = vp.drain_events();
        assert_eq!(initial.len(), 1);
        assert!(matches!(&initial[0], PlatformEvent::Intersection(e) if !e.is_intersecting));

        // 10px of 200px visible: intersecting but under threshold.
        vp.scroll_to(210.0);
        assert!(vp.drain_events().is_empty());

        vp.scroll_to(300.0);
        let events = vp.drain_events();
        assert!(matches!(&events[..], [PlatformEvent::Intersection(e)] if e.ratio == 0.5));

        vp.unobserve(id);
        assert_eq!(vp.active_observations(), 0);
        vp.scroll_to(0.0);
        assert!(vp.drain_events().is_empty());
    }

    #[test]
    fn test_observe_failures() {
        let mut vp = HeadlessViewport::new(small_layout(), viewport());
        assert_eq!(
            vp.observe(&BlockId::new(Section::Contact, 0), 0.1),
            Err(ObserveError::UnknownTarget(BlockId::new(Section::Contact, 0)))
        );

        let mut vp = HeadlessViewport::new(small_layout(), viewport()).without_intersection_observer();
        assert_eq!(
            vp.observe(&BlockId::new(Section::About, 0), 0.1),
            Err(ObserveError::Unsupported)
        );
    }

    #[test]
    fn test_scroll_into_view() {
        let mut vp = HeadlessViewport::new(small_layout(), viewport());
        assert!(vp.scroll_into_view(Section::About, ScrollBehavior::Smooth));
        assert_eq!(vp.scroll_y(), 850.0);
        assert_eq!(vp.section_top(Section::About), Some(0.0));
        assert!(!vp.scroll_into_view(Section::Contact, ScrollBehavior::Smooth));
        assert_eq!(vp.scroll_requests(), &[(Section::About, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn test_estimate_stacks_sections() {
        let spec = |section, index, kind| BlockSpec {
            id: BlockId::new(section, index),
            section,
            kind,
            delay: Duration::ZERO,
        };
        let outline = PageOutline {
            blocks: vec![
                spec(Section::Home, 0, BlockKind::Eyebrow),
                spec(Section::About, 0, BlockKind::SectionHeader),
                spec(Section::About, 1, BlockKind::Heading),
            ],
        };
        let sections = SectionList::parse(&["home", "about"]).unwrap();
        let layout = PageLayout::estimate(&outline, &sections, &LayoutMetrics::default());

        let home = layout.section_rect(Section::Home).unwrap();
        assert_eq!(home, Rect { top: 0.0, height: 900.0 });
        assert_eq!(layout.block_rect(&BlockId::new(Section::Home, 0)).unwrap().top, 430.0);

        let about = layout.section_rect(Section::About).unwrap();
        // 40 + 24 + 120 content, 120 padding on both sides.
        assert_eq!(about, Rect { top: 900.0, height: 424.0 });
        assert_eq!(layout.block_rect(&BlockId::new(Section::About, 1)).unwrap().top, 1084.0);
        assert_eq!(layout.document_height(), 1424.0);
    }
}
