pub mod hover;
pub mod lifecycle;
pub mod nav;
pub mod pipeline;
pub mod render;
pub mod replay;
pub mod reveal;
pub mod session;
pub mod site;
pub mod style;
pub mod tracker;

pub use crate::domain::ports::{ConfigProvider, Platform, SitePipeline, Storage};
pub use crate::utils::error::Result;
pub use pipeline::{render_snapshot, StaticSitePipeline};
pub use render::{PageMeta, PageRenderer};
pub use replay::{parse_steps, FrameReport, ScrollReplay, SimStep};
pub use session::{PageSession, PageSnapshot};
pub use site::SiteEngine;
