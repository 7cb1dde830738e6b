pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::ViewportSize;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Parser, ValueEnum};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
    pub enum LogFormat {
        #[default]
        Human,
        Json,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "portfolio-site")]
    #[command(about = "Render the portfolio page to a static HTML file")]
    pub struct CliConfig {
        /// TOML file with site content; the built-in profile is used when omitted
        #[arg(long)]
        pub content: Option<String>,

        #[arg(long, default_value = "./dist")]
        pub output_path: String,

        /// Scroll position the exported snapshot is taken at
        #[arg(long, default_value = "0")]
        pub scroll_y: f64,

        #[arg(long, default_value = "900")]
        pub viewport_height: f64,

        #[arg(long, default_value = "1280")]
        pub viewport_width: f64,

        /// Also write outline.json describing every reveal block
        #[arg(long)]
        pub emit_outline: bool,

        #[arg(long, value_enum, default_value_t = LogFormat::Human)]
        pub log_format: LogFormat,

        #[arg(long, short, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn content_path(&self) -> Option<&str> {
            self.content.as_deref()
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn snapshot_scroll(&self) -> f64 {
            self.scroll_y
        }

        fn viewport(&self) -> ViewportSize {
            ViewportSize {
                width: self.viewport_width,
                height: self.viewport_height,
            }
        }

        fn emit_outline(&self) -> bool {
            self.emit_outline
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_path("output_path", &self.output_path)?;
            if let Some(content) = &self.content {
                validation::validate_path("content", content)?;
            }
            validation::validate_non_negative("scroll_y", self.scroll_y)?;
            validation::validate_range("viewport_height", self.viewport_height, 1.0, 100_000.0)?;
            validation::validate_range("viewport_width", self.viewport_width, 1.0, 100_000.0)?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults_parse_and_validate() {
            let config = CliConfig::parse_from(["portfolio-site"]);
            assert_eq!(config.output_path, "./dist");
            assert_eq!(config.viewport().height, 900.0);
            assert_eq!(config.log_format, LogFormat::Human);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_rejects_zero_viewport() {
            let config = CliConfig::parse_from(["portfolio-site", "--viewport-height", "0"]);
            assert!(config.validate().is_err());
        }
    }
}
