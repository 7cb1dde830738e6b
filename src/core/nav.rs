use crate::domain::model::Section;
use crate::domain::ports::{ScrollBehavior, ScrollHost};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAppearance {
    /// At the top of the page: no background.
    Transparent,
    /// Scrolled: blurred opaque background.
    Opaque,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Result of selecting a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    pub target: Section,
    pub menu_closed: bool,
    pub scrolled: bool,
}

#[derive(Debug, Clone)]
pub struct NavBar {
    scroll_threshold: f64,
    appearance: NavAppearance,
    menu: MenuState,
}

impl NavBar {
    pub fn new(scroll_threshold: f64) -> Self {
        Self {
            scroll_threshold,
            appearance: NavAppearance::Transparent,
            menu: MenuState::Closed,
        }
    }

    pub fn appearance(&self) -> NavAppearance {
        self.appearance
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Re-evaluates the appearance for the current scroll offset. Returns the
    /// new appearance when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<NavAppearance> {
        let next = if scroll_y > self.scroll_threshold {
            NavAppearance::Opaque
        } else {
            NavAppearance::Transparent
        };
        if next == self.appearance {
            return None;
        }
        self.appearance = next;
        Some(next)
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.menu
    }

    /// Closes the menu and smooth-scrolls to `target`. A missing anchor
    /// leaves the scroll position alone.
    pub fn select<H: ScrollHost + ?Sized>(&mut self, target: Section, host: &mut H) -> NavOutcome {
        let menu_closed = self.menu.is_open();
        self.menu = MenuState::Closed;

        let scrolled = host.scroll_into_view(target, ScrollBehavior::Smooth);
        if !scrolled {
            tracing::debug!("no anchor for section {}, ignoring navigation", target);
        }

        NavOutcome {
            target,
            menu_closed,
            scrolled,
        }
    }
}
