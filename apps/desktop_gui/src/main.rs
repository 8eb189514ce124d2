mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use page_core::PageSettings;
use shared::content::PortfolioContent;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::runtime::BackendRuntime;
use crate::ui::{PortfolioApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Single-page portfolio in a desktop window")]
struct Args {
    /// Settings file (TOML). Defaults to the per-user config location.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Page content file (.toml or .json); overrides `content_path` in settings.
    #[arg(long)]
    content: Option<PathBuf>,
    /// Tracing filter, e.g. `info` or `page_core=debug`. Falls back to RUST_LOG.
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_startup(args: &Args) -> anyhow::Result<StartupConfig> {
    let settings = PageSettings::load(args.config.as_deref()).context("failed to load settings")?;
    let section_margin = settings
        .validate()
        .context("settings failed validation")?;

    let content = match args.content.as_ref().or(settings.content_path.as_ref()) {
        Some(path) => PortfolioContent::load(path)
            .with_context(|| format!("failed to load page content from '{}'", path.display()))?,
        None => PortfolioContent::default(),
    };

    Ok(StartupConfig {
        settings,
        section_margin,
        content,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let startup = load_startup(&args)?;
    let backend = BackendRuntime::start()?;
    let title = format!("{} | Portfolio", startup.content.owner_name);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(&cc.egui_ctx, startup, backend)))),
    )
    .map_err(|err| anyhow::anyhow!("portfolio window failed: {err}"))
}
