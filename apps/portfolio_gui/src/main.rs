use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use backend_bridge::{commands::BackendCommand, runtime::BackendRuntime};
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use portfolio_core::{Portfolio, PortfolioSettings, ViewportBroadcaster};
use tracing_subscriber::EnvFilter;
use ui::PortfolioApp;

const SNAPSHOT_POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Parser, Debug)]
#[command(about = "Developer portfolio page backed by a GitHub profile")]
struct Args {
    /// TOML settings file; `portfolio.toml` in the working directory is used when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// GitHub account whose profile and repositories are shown.
    #[arg(long)]
    account: Option<String>,
    /// Print the rendered page as JSON once the fetch settles, without opening a window.
    #[arg(long)]
    snapshot: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = config::load_settings(&config::CliOverrides {
        config: args.config,
        account: args.account,
    })?;
    tracing::info!(account = %settings.account, api_base = %settings.api_base, "settings loaded");

    let backend = BackendRuntime::build()?;
    if args.snapshot {
        run_snapshot(settings, &backend)
    } else {
        run_window(settings, &backend)
    }
}

fn run_snapshot(settings: PortfolioSettings, backend: &BackendRuntime) -> anyhow::Result<()> {
    // Profile and repositories are read one after the other.
    let deadline = settings
        .fetch_timeout
        .checked_mul(2)
        .and_then(|wait| wait.checked_add(Duration::from_secs(1)))
        .and_then(|wait| Instant::now().checked_add(wait));
    let viewport = ViewportBroadcaster::new();
    let mut portfolio = Portfolio::mount_github(settings, &viewport, backend.handle())
        .context("failed to start GitHub client")?;

    while portfolio.is_fetch_in_flight() && deadline.map_or(true, |at| Instant::now() < at) {
        thread::sleep(SNAPSHOT_POLL_INTERVAL);
    }
    portfolio.sync();

    let page = serde_json::to_string_pretty(&portfolio.render())
        .context("failed to serialize rendered page")?;
    println!("{page}");
    Ok(())
}

fn run_window(settings: PortfolioSettings, backend: &BackendRuntime) -> anyhow::Result<()> {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend.launch(cmd_rx, ui_tx, &settings.user_agent, settings.fetch_timeout)?;

    let app = PortfolioApp::new(settings, backend.handle(), cmd_tx, ui_rx)
        .context("failed to start GitHub client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio")
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native("Portfolio", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow!("window event loop failed: {err}"))
}
