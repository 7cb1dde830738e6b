use crate::domain::ports::SitePipeline;
use crate::utils::error::Result;

pub struct SiteEngine<P: SitePipeline> {
    pipeline: P,
}

impl<P: SitePipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build...");

        tracing::info!("Loading content...");
        let config = self.pipeline.load_content().await?;
        tracing::info!("Loaded {} sections", config.sections.len());

        tracing::info!("Rendering page...");
        let site = self.pipeline.render(config).await?;
        tracing::info!("Rendered {} reveal blocks", site.outline.len());

        tracing::info!("Publishing...");
        let output_path = self.pipeline.publish(site).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::SiteConfig;
    use crate::domain::model::{PageOutline, RenderedSite, Section};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPipeline {
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait::async_trait]
    impl SitePipeline for RecordingPipeline {
        async fn load_content(&self) -> Result<SiteConfig> {
            self.calls.lock().unwrap().push("load");
            Ok(SiteConfig::default())
        }

        async fn render(&self, _config: SiteConfig) -> Result<RenderedSite> {
            self.calls.lock().unwrap().push("render");
            Ok(RenderedSite {
                html: String::new(),
                outline: PageOutline::default(),
                active: Section::Home,
                revealed: 0,
            })
        }

        async fn publish(&self, _site: RenderedSite) -> Result<String> {
            self.calls.lock().unwrap().push("publish");
            Ok("dist/index.html".to_string())
        }
    }

    #[tokio::test]
    async fn test_engine_runs_steps_in_order() {
        let engine = SiteEngine::new(RecordingPipeline::default());
        let path = engine.run().await.unwrap();

        assert_eq!(path, "dist/index.html");
        assert_eq!(
            *engine.pipeline.calls.lock().unwrap(),
            vec!["load", "render", "publish"]
        );
    }
}
