mod analysis;
mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Result;
use app::SalaryDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // Load failures are fatal.
    let table = data::loader::load_salaries().inspect_err(|e| {
        log::error!("Failed to load salary data: {e:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let state = AppState::new(table, config);

    eframe::run_native(
        "Data Salary Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SalaryDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
