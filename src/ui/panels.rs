use std::collections::BTreeSet;
use std::fmt::Display;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::NEON_CYAN;
use crate::data::filter::FilterSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Icon (centered) ----
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(state.config.sidebar_icon_url.as_str())
                .max_width(80.0)
                .max_height(80.0),
        );
        ui.label(RichText::new("Filters").heading().strong().color(NEON_CYAN));
    });
    ui.separator();

    let mut changed = false;
    let options = &state.options;
    let selection = &mut state.selection;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            changed |= multiselect(ui, "Years", &options.years, &mut selection.years);
            changed |= multiselect(
                ui,
                "Experience level",
                &options.experience,
                &mut selection.experience,
            );
            changed |= multiselect(
                ui,
                "Contract type",
                &options.contracts,
                &mut selection.contracts,
            );
            changed |= multiselect(ui, "Company size", &options.sizes, &mut selection.sizes);

            ui.add_space(6.0);
            let status = if selection.is_full(options) {
                RichText::new("Showing all records").color(Color32::LIGHT_GRAY)
            } else {
                RichText::new("Filters active").color(NEON_CYAN)
            };
            ui.label(status);
            if ui.button("Reset filters").clicked() {
                *selection = FilterSelection::all(options);
                changed = true;
            }

            ui.separator();
            ui.label(
                RichText::new("Market trends and pay for data roles, in USD.")
                    .italics()
                    .color(Color32::LIGHT_GRAY),
            );
        });

    // Recompute the view only when a checkbox actually moved.
    if changed {
        state.refilter();
    }
}

/// Collapsible multi-select: one checkbox per value plus All / None.
/// Returns whether the selection changed.
fn multiselect<T>(
    ui: &mut Ui,
    title: &str,
    all_values: &BTreeSet<T>,
    selected: &mut BTreeSet<T>,
) -> bool
where
    T: Ord + Clone + Display,
{
    let mut changed = false;
    let header_text = format!("{title}  ({}/{})", selected.len(), all_values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    *selected = all_values.clone();
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                    changed = true;
                }
            });

            for val in all_values {
                let mut checked = selected.contains(val);
                let label = if val.to_string().is_empty() {
                    "(blank)".to_string()
                } else {
                    val.to_string()
                };
                if ui.checkbox(&mut checked, label).changed() {
                    if checked {
                        selected.insert(val.clone());
                    } else {
                        selected.remove(val);
                    }
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });
        ui.menu_button("Data", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        ui.separator();
        ui.label(RichText::new(state.source.origin().to_string()).weak());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary survey")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_local(path);
    }
}
