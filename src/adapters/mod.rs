// Adapters layer: concrete implementations of the domain ports.

pub mod headless;

pub use headless::{HeadlessViewport, LayoutMetrics, PageLayout, Rect};
