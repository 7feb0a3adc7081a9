use eframe::egui::{self, Color32, RichText, Stroke, Ui};

use crate::color::{APP_BACKGROUND, CARD_BACKGROUND, NEON_CYAN, NEON_GREEN};

// ---------------------------------------------------------------------------
// Dark neon look
// ---------------------------------------------------------------------------

/// Install the dashboard visuals on the egui context.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = APP_BACKGROUND;
    visuals.window_fill = APP_BACKGROUND;
    visuals.extreme_bg_color = Color32::from_rgb(0x14, 0x18, 0x20);
    visuals.faint_bg_color = Color32::from_rgb(0x16, 0x1B, 0x22);
    visuals.hyperlink_color = NEON_CYAN;
    visuals.selection.bg_fill = Color32::from_rgb(0x0B, 0x5E, 0x4A);
    visuals.selection.stroke = Stroke::new(1.0, NEON_GREEN);
    visuals.widgets.noninteractive.bg_stroke =
        Stroke::new(1.0, Color32::from_rgb(0x0F, 0x3A, 0x3A));
    ctx.set_visuals(visuals);
}

/// Cyan page / section heading.
pub fn heading(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).heading().strong().color(NEON_CYAN));
}

/// Smaller cyan title used above each chart.
pub fn chart_title(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(16.0).strong().color(NEON_CYAN));
}

/// Frame used for KPI cards and chart panels.
pub fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::group(ui.style())
        .fill(CARD_BACKGROUND)
        .stroke(Stroke::new(1.0, NEON_GREEN.gamma_multiply(0.6)))
}

/// Informational text shown in place of a chart that has nothing to draw.
pub fn placeholder(ui: &mut Ui, text: &str) {
    egui::Frame::group(ui.style())
        .stroke(Stroke::new(1.0, NEON_CYAN.gamma_multiply(0.4)))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("ℹ {text}")).color(NEON_CYAN));
        });
}
