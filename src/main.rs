use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use launch_dash::app::LaunchDashApp;
use launch_dash::config::Config;
use launch_dash::data::loader::load_file;
use launch_dash::state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    // Without data there is nothing to serve: a load failure ends the process.
    let dataset = load_file(&config.data)
        .with_context(|| format!("loading launch data from {}", config.data.display()))?;
    let state = AppState::new(
        Arc::new(dataset),
        config.data.clone(),
        config.slider_step,
        &config.site,
    )
    .context("initial site selection")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI terminated: {e}"))
}
