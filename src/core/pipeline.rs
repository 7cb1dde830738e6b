use crate::config::toml_config::SiteConfig;
use crate::core::render::{PageMeta, PageRenderer};
use crate::core::replay::ScrollReplay;
use crate::domain::model::{RenderedSite, ViewportSize};
use crate::domain::ports::{ConfigProvider, SitePipeline, Storage};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;

impl From<&SiteConfig> for PageMeta {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.page_title(),
            lang: config.site.lang.clone(),
            copyright_year: config.copyright_year(),
        }
    }
}

/// Renders the page as it looks after a visitor has scrolled through it and
/// come to rest at `scroll_y`.
pub fn render_snapshot(config: &SiteConfig, viewport: ViewportSize, scroll_y: f64) -> Result<RenderedSite> {
    let sections = config.section_list()?;
    let content = config.content();
    let renderer = PageRenderer::new(&content, &sections, PageMeta::from(config));

    let outline = renderer.outline();
    tracing::debug!("page outline has {} reveal blocks", outline.len());

    let mut replay = ScrollReplay::mount(sections.clone(), &config.behavior, &outline, viewport);
    replay.prime(scroll_y);
    let snapshot = replay.finish();

    let page = renderer.render(&snapshot);
    if page.outline != outline {
        return Err(SiteError::RenderError {
            message: "outline changed between layout and render passes".to_string(),
        });
    }

    Ok(RenderedSite {
        html: page.html,
        outline: page.outline,
        active: snapshot.active,
        revealed: snapshot.revealed.len(),
    })
}

pub struct StaticSitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> StaticSitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> SitePipeline for StaticSitePipeline<S, C> {
    async fn load_content(&self) -> Result<SiteConfig> {
        let config = match self.config.content_path() {
            Some(path) => {
                tracing::info!("📄 Loading site content from {}", path);
                let text = tokio::fs::read_to_string(path).await?;
                SiteConfig::from_toml_str(&text)?
            }
            None => {
                tracing::info!("📄 No content file given, using the built-in profile");
                SiteConfig::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    async fn render(&self, config: SiteConfig) -> Result<RenderedSite> {
        let viewport = self.config.viewport();
        let scroll_y = self.config.snapshot_scroll();
        tracing::info!(
            "🔧 Rendering snapshot at {}px in a {}x{} viewport",
            scroll_y,
            viewport.width,
            viewport.height
        );

        let site = render_snapshot(&config, viewport, scroll_y)?;
        tracing::info!(
            "✅ Rendered {} bytes, {} of {} blocks revealed, active section '{}'",
            site.html.len(),
            site.revealed,
            site.outline.len(),
            site.active
        );
        Ok(site)
    }

    async fn publish(&self, site: RenderedSite) -> Result<String> {
        let output_path = format!("{}/index.html", self.config.output_path());

        self.storage
            .write_file("index.html", site.html.as_bytes())
            .await?;

        if self.config.emit_outline() {
            let outline = serde_json::to_string_pretty(&site.outline)?;
            self.storage
                .write_file("outline.json", outline.as_bytes())
                .await?;
            tracing::debug!("outline.json written next to index.html");
        }

        tracing::info!("📦 Site saved: {}", output_path);
        Ok(output_path)
    }
}
