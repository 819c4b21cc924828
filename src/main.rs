mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use app::RustyShelfApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("rusty_shelf=info"))
        .init();

    let config = DashboardConfig::from_env();

    // The dashboard cannot serve anything without its dataset.
    let dataset = data::loader::load_source(&config.source)
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .with_context(|| format!("loading books from {}", config.source))?;

    let state = AppState::new(Arc::new(dataset), config.initial_tab.as_str());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Shelf – Book Data Visualization",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyShelfApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}
