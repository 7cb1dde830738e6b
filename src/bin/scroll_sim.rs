use anyhow::Context;
use clap::Parser;
use portfolio_site::core::render::{PageMeta, PageRenderer};
use portfolio_site::core::replay::{parse_steps, ScrollReplay};
use portfolio_site::domain::model::ViewportSize;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::SiteConfig;

#[derive(Parser)]
#[command(name = "scroll-sim")]
#[command(about = "Replay scroll, click and hover steps against the page and print each frame")]
struct Args {
    /// TOML file with site content; the built-in profile is used when omitted
    #[arg(long)]
    content: Option<String>,

    /// Comma-separated steps, e.g. "scroll:900,toggle,click:about,pointer:10,20"
    #[arg(long, default_value = "")]
    steps: String,

    #[arg(long, default_value = "900")]
    viewport_height: f64,

    #[arg(long, default_value = "1280")]
    viewport_width: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match &args.content {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("failed to load content file '{}'", path))?,
        None => SiteConfig::default(),
    };
    config.validate().context("invalid site configuration")?;

    let steps = parse_steps(&args.steps)?;
    let viewport = ViewportSize {
        width: args.viewport_width,
        height: args.viewport_height,
    };

    let sections = config.section_list()?;
    let content = config.content();
    let outline = PageRenderer::new(&content, &sections, PageMeta::from(&config)).outline();

    tracing::info!("🚀 Replaying {} steps over {} reveal blocks", steps.len(), outline.len());
    let mut replay = ScrollReplay::mount(sections, &config.behavior, &outline, viewport);

    for step in steps {
        let frame = replay.apply(step);
        println!("{}", serde_json::to_string(&frame)?);
    }

    let snapshot = replay.finish();
    tracing::info!(
        "✅ Finished on '{}' with {} of {} blocks revealed",
        snapshot.active,
        snapshot.revealed.len(),
        outline.len()
    );

    Ok(())
}
