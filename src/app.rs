use std::sync::Arc;

use eframe::egui::{self, RichText, Ui};

use crate::color::NEON_GREEN;
use crate::config::DashboardConfig;
use crate::data::model::SalaryDataset;
use crate::data::source::DataSource;
use crate::state::{AppState, Tab};
use crate::ui::{charts, kpi, panels, table, theme};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryLensApp {
    pub state: AppState,
}

impl SalaryLensApp {
    pub fn new(config: DashboardConfig, source: DataSource, dataset: Arc<SalaryDataset>) -> Self {
        Self {
            state: AppState::new(config, source, dataset),
        }
    }
}

impl eframe::App for SalaryLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs and tabs ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &mut self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &mut AppState) {
    theme::heading(ui, "Salary Intelligence Dashboard");
    ui.label("Pay across data roles, with a focus on global trends.");
    ui.add_space(8.0);

    kpi::kpi_row(ui, &state.summary.kpis);
    ui.add_space(12.0);

    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            let selected = state.active_tab == tab;
            let mut text = RichText::new(tab.title()).size(15.0);
            if selected {
                text = text.strong().color(NEON_GREEN);
            }
            if ui.selectable_label(selected, text).clicked() {
                state.active_tab = tab;
            }
        }
    });
    ui.separator();

    match state.active_tab {
        Tab::Overview => scrolling(ui, |ui| {
            charts::overview_tab(ui, &state.summary, state.config.top_roles)
        }),
        Tab::Distribution => scrolling(ui, |ui| charts::distribution_tab(ui, &state.summary)),
        Tab::Geography => scrolling(ui, |ui| {
            charts::geography_tab(ui, &state.summary, &state.config.geo_role)
        }),
        Tab::RawData => {
            theme::chart_title(ui, "Data exploration");
            let order =
                table::display_order(&state.dataset, &state.visible_indices, state.table_sort);
            if let Some(sort) = table::raw_table(ui, &state.dataset, &order, state.table_sort) {
                state.table_sort = Some(sort);
            }
        }
    }
}

fn scrolling(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, add_contents);
}
