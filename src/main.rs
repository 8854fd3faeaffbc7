//! LvProfile - Load-Velocity-Power Profile Generator
//!
//! Main entry point for the application.

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Starting LvProfile v{}", env!("CARGO_PKG_VERSION"));

    let config = lvprofile::storage::config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {}", e);
        Default::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("Velocity-Load and Power Profile Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "LvProfile",
        options,
        Box::new(|cc| Ok(Box::new(app::ProfileApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("UI terminated with an error: {e}"))
}
