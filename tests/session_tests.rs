use portfolio_site::adapters::{HeadlessViewport, PageLayout};
use portfolio_site::config::toml_config::BehaviorConfig;
use portfolio_site::core::nav::{MenuState, NavAppearance};
use portfolio_site::domain::model::{
    BlockId, BlockKind, BlockSpec, PageOutline, Section, SectionList, ViewportSize,
};
use portfolio_site::domain::ports::ScrollBehavior;
use portfolio_site::PageSession;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn sections() -> SectionList {
    SectionList::new(vec![Section::Home, Section::About, Section::Skills]).unwrap()
}

fn viewport() -> ViewportSize {
    ViewportSize {
        width: 1280.0,
        height: 900.0,
    }
}

fn block(section: Section, index: usize) -> BlockSpec {
    BlockSpec {
        id: BlockId::new(section, index),
        section,
        kind: BlockKind::Body,
        delay: Duration::from_millis(100 * index as u64),
    }
}

fn outline() -> PageOutline {
    PageOutline {
        blocks: vec![
            block(Section::Home, 0),
            block(Section::About, 0),
            block(Section::Skills, 0),
        ],
    }
}

/// Home, about and skills at 0, 850 and 1700, one 100px block in each.
fn layout_at(home_top: f64) -> PageLayout {
    PageLayout::from_sections(
        &[
            (Section::Home, home_top),
            (Section::About, 850.0),
            (Section::Skills, 1700.0),
        ],
        3000.0,
    )
    .with_block(BlockId::new(Section::Home, 0), 300.0, 100.0)
    .with_block(BlockId::new(Section::About, 0), 1000.0, 100.0)
    .with_block(BlockId::new(Section::Skills, 0), 2000.0, 100.0)
}

fn mount(platform: &Rc<RefCell<HeadlessViewport>>) -> PageSession<HeadlessViewport> {
    let mut session = PageSession::mount(
        platform,
        sections(),
        &BehaviorConfig::default(),
        &outline(),
        viewport(),
    );
    session.pump();
    session
}

fn headless() -> Rc<RefCell<HeadlessViewport>> {
    Rc::new(RefCell::new(HeadlessViewport::new(layout_at(0.0), viewport())))
}

fn scroll(platform: &Rc<RefCell<HeadlessViewport>>, session: &mut PageSession<HeadlessViewport>, y: f64) {
    platform.borrow_mut().scroll_to(y);
    session.pump();
}

#[test]
fn test_scroll_to_900_activates_about() {
    let platform = headless();
    let mut session = mount(&platform);
    assert_eq!(session.active(), Section::Home);

    scroll(&platform, &mut session, 900.0);
    assert_eq!(session.active(), Section::About);

    scroll(&platform, &mut session, 0.0);
    assert_eq!(session.active(), Section::Home);
}

#[test]
fn test_blocks_reveal_once_in_view_and_stay_revealed() {
    let platform = headless();
    let mut session = mount(&platform);

    assert!(session.is_revealed(&BlockId::new(Section::Home, 0)));
    assert!(!session.is_revealed(&BlockId::new(Section::About, 0)));
    assert_eq!(session.observing_count(), 2);

    scroll(&platform, &mut session, 900.0);
    assert!(session.is_revealed(&BlockId::new(Section::About, 0)));
    assert!(!session.is_revealed(&BlockId::new(Section::Skills, 0)));

    scroll(&platform, &mut session, 0.0);
    assert!(session.is_revealed(&BlockId::new(Section::About, 0)));
    assert_eq!(session.revealed_count(), 2);
    assert_eq!(session.observing_count(), 1);
    assert_eq!(platform.borrow().active_observations(), 1);
}

#[test]
fn test_nav_turns_opaque_exactly_once_past_60px() {
    let platform = headless();
    let mut session = mount(&platform);

    let mut flips = 0;
    let mut previous = session.appearance();
    for y in (0..=80).step_by(10) {
        scroll(&platform, &mut session, y as f64);
        if session.appearance() != previous {
            flips += 1;
            previous = session.appearance();
            assert_eq!(y, 70);
        }
        if y == 60 {
            assert_eq!(session.appearance(), NavAppearance::Transparent);
        }
    }

    assert_eq!(flips, 1);
    assert_eq!(session.appearance(), NavAppearance::Opaque);
}

#[test]
fn test_menu_link_closes_menu_and_scrolls_smoothly() {
    let platform = headless();
    let mut session = mount(&platform);

    assert_eq!(session.toggle_menu(), MenuState::Open);
    let outcome = session.navigate(Section::About);
    session.pump();

    assert!(outcome.menu_closed);
    assert!(outcome.scrolled);
    assert_eq!(session.menu(), MenuState::Closed);
    assert_eq!(
        platform.borrow().scroll_requests(),
        &[(Section::About, ScrollBehavior::Smooth)]
    );
    assert_eq!(session.active(), Section::About);
}

#[test]
fn test_navigate_to_missing_anchor_is_a_no_op() {
    let platform = headless();
    let mut session = mount(&platform);

    let outcome = session.navigate(Section::Contact);
    session.pump();

    assert!(!outcome.scrolled);
    assert!(platform.borrow().scroll_requests().is_empty());
    assert_eq!(session.active(), Section::Home);
}

#[test]
fn test_no_matching_section_keeps_previous_active() {
    let platform = Rc::new(RefCell::new(HeadlessViewport::new(layout_at(300.0), viewport())));
    let mut session = mount(&platform);

    scroll(&platform, &mut session, 10.0);
    assert_eq!(session.active(), Section::Home);

    scroll(&platform, &mut session, 900.0);
    assert_eq!(session.active(), Section::About);

    // Every section is now below the activation line.
    scroll(&platform, &mut session, 0.0);
    assert_eq!(session.active(), Section::About);
}

#[test]
fn test_unmount_releases_listener_and_observations() {
    let platform = headless();
    let session = mount(&platform);
    assert_eq!(platform.borrow().listener_count(), 1);
    assert_eq!(platform.borrow().active_observations(), 2);

    session.unmount();

    assert_eq!(platform.borrow().listener_count(), 0);
    assert_eq!(platform.borrow().active_observations(), 0);
    assert_eq!(Rc::strong_count(&platform), 1);
}

#[test]
fn test_without_intersection_observer_blocks_stay_hidden() {
    let platform = Rc::new(RefCell::new(
        HeadlessViewport::new(layout_at(0.0), viewport()).without_intersection_observer(),
    ));
    let mut session = mount(&platform);

    for y in [0.0, 900.0, 2100.0] {
        scroll(&platform, &mut session, y);
    }

    assert_eq!(session.revealed_count(), 0);
    assert_eq!(session.observing_count(), 0);
    assert_eq!(session.active(), Section::Skills);
    assert!(session.snapshot().revealed.is_empty());
}

#[test]
fn test_hover_and_pointer_show_up_in_snapshot() {
    let platform = headless();
    let mut session = mount(&platform);

    session.card_enter(2);
    session.card_leave(1);
    session.pointer_move(640.0, 450.0);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.hovered_card, Some(2));
    assert_eq!(snapshot.pointer, Some((640.0, 450.0)));

    session.card_leave(2);
    assert_eq!(session.snapshot().hovered_card, None);
}
