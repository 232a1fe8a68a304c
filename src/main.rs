//! TrainLog - training session dashboard
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
        .init();

    tracing::info!("Starting TrainLog v{}", env!("CARGO_PKG_VERSION"));

    let config = trainlog::config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration, using defaults: {}", e);
        trainlog::config::AppConfig::default()
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("TrainLog"),
        ..Default::default()
    };

    eframe::run_native(
        "TrainLog",
        options,
        Box::new(move |cc| Ok(Box::new(app::TrainLogApp::new(cc, config, handle)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    drop(runtime);
    Ok(())
}
