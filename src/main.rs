mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::SalaryLensApp;
use config::DashboardConfig;
use data::source::DataSource;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The one blocking fetch of the session. Failing here is fatal.
    let mut source = DataSource::remote(config.data_url.as_str());
    let dataset = source
        .get_or_load()
        .with_context(|| format!("loading salary dataset from {}", config.data_url))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Lens – Salary Intelligence Dashboard",
        options,
        Box::new(move |cc| {
            // Image loaders fetch and decode the sidebar icon.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(SalaryLensApp::new(config, source, dataset)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
