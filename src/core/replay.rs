//! Drives a page session on a headless viewport from a list of user steps.

use crate::adapters::headless::{HeadlessViewport, LayoutMetrics, PageLayout};
use crate::config::toml_config::BehaviorConfig;
use crate::core::nav::{MenuState, NavAppearance};
use crate::core::session::{PageSession, PageSnapshot, PumpSummary};
use crate::domain::model::{PageOutline, Section, SectionList, ViewportSize};
use crate::domain::ports::ScrollSource;
use crate::utils::error::{Result, SiteError};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// One simulated user action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimStep {
    Scroll(f64),
    Toggle,
    Click(Section),
    Hover(usize),
    Leave(usize),
    Pointer(f64, f64),
}

impl fmt::Display for SimStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimStep::Scroll(y) => write!(f, "scroll:{}", y),
            SimStep::Toggle => f.write_str("toggle"),
            SimStep::Click(section) => write!(f, "click:{}", section),
            SimStep::Hover(card) => write!(f, "hover:{}", card),
            SimStep::Leave(card) => write!(f, "leave:{}", card),
            SimStep::Pointer(x, y) => write!(f, "pointer:{},{}", x, y),
        }
    }
}

fn invalid(step: &str, reason: impl Into<String>) -> SiteError {
    SiteError::InvalidStepError {
        step: step.to_string(),
        reason: reason.into(),
    }
}

fn parse_coordinate(step: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid(step, format!("'{}' is not a number", value.trim())))?;
    if !parsed.is_finite() {
        return Err(invalid(step, "coordinates must be finite"));
    }
    Ok(parsed)
}

fn parse_card(step: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(step, format!("'{}' is not a card index", value.trim())))
}

impl FromStr for SimStep {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let step = s.trim();
        let (verb, arg) = match step.split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg)),
            None => (step, None),
        };

        match (verb, arg) {
            ("toggle", None) => Ok(SimStep::Toggle),
            ("scroll", Some(y)) => Ok(SimStep::Scroll(parse_coordinate(step, y)?)),
            ("click", Some(id)) => id
                .parse()
                .map(SimStep::Click)
                .map_err(|_| invalid(step, format!("unknown section '{}'", id.trim()))),
            ("hover", Some(card)) => Ok(SimStep::Hover(parse_card(step, card)?)),
            ("leave", Some(card)) => Ok(SimStep::Leave(parse_card(step, card)?)),
            ("pointer", Some(xy)) => {
                let (x, y) = xy
                    .split_once(',')
                    .ok_or_else(|| invalid(step, "expected pointer:<x>,<y>"))?;
                Ok(SimStep::Pointer(
                    parse_coordinate(step, x)?,
                    parse_coordinate(step, y)?,
                ))
            }
            ("toggle", Some(_)) => Err(invalid(step, "toggle takes no argument")),
            (_, None) if !verb.is_empty() && verb != "toggle" => {
                Err(invalid(step, format!("'{}' needs an argument", verb)))
            }
            _ => Err(invalid(step, format!("unknown step '{}'", verb))),
        }
    }
}

/// Parses a comma-separated step list. `pointer:<x>,<y>` keeps its own
/// comma.
pub fn parse_steps(input: &str) -> Result<Vec<SimStep>> {
    let mut tokens = input.split(',').map(str::trim).filter(|t| !t.is_empty());
    let mut steps = Vec::new();

    while let Some(token) = tokens.next() {
        if token.starts_with("pointer:") {
            let y = tokens
                .next()
                .ok_or_else(|| invalid(token, "expected pointer:<x>,<y>"))?;
            steps.push(format!("{},{}", token, y).parse()?);
        } else {
            steps.push(token.parse()?);
        }
    }

    Ok(steps)
}

/// Observable page state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub step: String,
    pub scroll_y: f64,
    pub active: Section,
    pub appearance: NavAppearance,
    pub menu: MenuState,
    pub revealed: usize,
    pub newly_revealed: usize,
    pub hovered_card: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrolled_to: Option<Section>,
}

pub struct ScrollReplay {
    viewport: Rc<RefCell<HeadlessViewport>>,
    session: PageSession<HeadlessViewport>,
}

impl ScrollReplay {
    /// Lays the outline out on a headless viewport and mounts a session on
    /// it. Events from the initial observations are already handled.
    pub fn mount(
        sections: SectionList,
        behavior: &BehaviorConfig,
        outline: &PageOutline,
        viewport: ViewportSize,
    ) -> Self {
        let metrics = LayoutMetrics {
            viewport,
            ..LayoutMetrics::default()
        };
        let layout = PageLayout::estimate(outline, &sections, &metrics);
        tracing::debug!(
            "estimated layout: document height {}px for {} blocks",
            layout.document_height(),
            outline.len()
        );

        let platform = Rc::new(RefCell::new(HeadlessViewport::new(layout, viewport)));
        Self::with_platform(platform, sections, behavior, outline, viewport)
    }

    pub fn with_platform(
        platform: Rc<RefCell<HeadlessViewport>>,
        sections: SectionList,
        behavior: &BehaviorConfig,
        outline: &PageOutline,
        viewport: ViewportSize,
    ) -> Self {
        let mut session = PageSession::mount(&platform, sections, behavior, outline, viewport);
        session.pump();
        Self {
            viewport: platform,
            session,
        }
    }

    pub fn session(&self) -> &PageSession<HeadlessViewport> {
        &self.session
    }

    pub fn platform(&self) -> &Rc<RefCell<HeadlessViewport>> {
        &self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.borrow().scroll_y()
    }

    fn scroll_and_pump(&mut self, y: f64) -> PumpSummary {
        self.viewport.borrow_mut().scroll_to(y);
        self.session.pump()
    }

    pub fn apply(&mut self, step: SimStep) -> FrameReport {
        let before = self.session.revealed_count();
        let mut scrolled_to = None;

        match step {
            SimStep::Scroll(y) => {
                self.scroll_and_pump(y);
            }
            SimStep::Toggle => {
                self.session.toggle_menu();
            }
            SimStep::Click(section) => {
                let outcome = self.session.navigate(section);
                if outcome.scrolled {
                    scrolled_to = Some(section);
                }
                self.session.pump();
            }
            SimStep::Hover(card) => self.session.card_enter(card),
            SimStep::Leave(card) => self.session.card_leave(card),
            SimStep::Pointer(x, y) => self.session.pointer_move(x, y),
        }

        let revealed = self.session.revealed_count();
        FrameReport {
            step: step.to_string(),
            scroll_y: self.scroll_y(),
            active: self.session.active(),
            appearance: self.session.appearance(),
            menu: self.session.menu(),
            revealed,
            newly_revealed: revealed.saturating_sub(before),
            hovered_card: self.session.snapshot().hovered_card,
            scrolled_to,
        }
    }

    pub fn run(&mut self, steps: &[SimStep]) -> Vec<FrameReport> {
        steps.iter().map(|step| self.apply(*step)).collect()
    }

    /// Scrolls to the bottom in half-viewport steps, then settles at
    /// `scroll_y`. Every block the reader would have passed ends up
    /// revealed, as after a real visit.
    pub fn prime(&mut self, scroll_y: f64) -> usize {
        let (max_scroll, step) = {
            let viewport = self.viewport.borrow();
            (viewport.max_scroll(), (viewport.viewport().height / 2.0).max(1.0))
        };

        let mut y = self.scroll_y();
        while y < max_scroll {
            y = (y + step).min(max_scroll);
            self.scroll_and_pump(y);
        }
        self.scroll_and_pump(scroll_y);

        let revealed = self.session.revealed_count();
        tracing::debug!(
            "primed session: {} of {} blocks revealed, settled at {}px",
            revealed,
            self.session.block_count(),
            self.scroll_y()
        );
        revealed
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.session.snapshot()
    }

    /// Unmounts the session and returns its final snapshot.
    pub fn finish(self) -> PageSnapshot {
        let snapshot = self.session.snapshot();
        self.session.unmount();
        snapshot
    }
}
