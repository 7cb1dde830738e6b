use crate::config::toml_config::SiteConfig;
use crate::domain::model::{BlockId, RenderedSite, Section, ViewportSize};
use crate::utils::error::Result;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// One visibility report for an observed block.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: BlockId,
    /// Fraction of the block inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    Scroll,
    Intersection(IntersectionEntry),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserveError {
    #[error("viewport intersection observation is not available")]
    Unsupported,

    #[error("no element for block {0}")]
    UnknownTarget(BlockId),
}

/// Visibility detection: `observe` starts a stream of [`IntersectionEntry`]
/// events for the target, `unobserve` cancels it.
pub trait IntersectionObserver {
    fn observe(
        &mut self,
        target: &BlockId,
        threshold: f64,
    ) -> std::result::Result<ObservationId, ObserveError>;
    fn unobserve(&mut self, id: ObservationId);
}

pub trait ScrollSource {
    fn add_scroll_listener(&mut self) -> ListenerId;
    fn remove_scroll_listener(&mut self, id: ListenerId);
    fn scroll_y(&self) -> f64;
}

pub trait SectionGeometry {
    /// Top edge of the section's anchor relative to the viewport top.
    fn section_top(&self, section: Section) -> Option<f64>;
}

pub trait ScrollHost {
    /// Returns `false` when the anchor does not exist.
    fn scroll_into_view(&mut self, section: Section, behavior: ScrollBehavior) -> bool;
}

pub trait EventQueue {
    /// Pending events in dispatch order.
    fn drain_events(&mut self) -> Vec<PlatformEvent>;
}

/// Everything the page needs from its host environment.
pub trait Platform:
    IntersectionObserver + ScrollSource + SectionGeometry + ScrollHost + EventQueue
{
}

impl<T> Platform for T where
    T: IntersectionObserver + ScrollSource + SectionGeometry + ScrollHost + EventQueue
{
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn content_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn snapshot_scroll(&self) -> f64;
    fn viewport(&self) -> ViewportSize;
    fn emit_outline(&self) -> bool;
}

#[async_trait]
pub trait SitePipeline: Send + Sync {
    async fn load_content(&self) -> Result<SiteConfig>;
    async fn render(&self, config: SiteConfig) -> Result<RenderedSite>;
    async fn publish(&self, site: RenderedSite) -> Result<String>;
}
