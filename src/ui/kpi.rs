use eframe::egui::{RichText, Ui};

use crate::color::{NEON_CYAN, NEON_GREEN};
use crate::data::summary::Kpis;
use crate::ui::theme;

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// Four metric cards in a row.
pub fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    let cards = [
        ("Average salary", format_usd(kpis.mean_salary)),
        ("Top salary", format_usd(kpis.max_salary)),
        ("Records", format_count(kpis.record_count)),
        ("Dominant role", kpis.dominant_role.clone()),
    ];
    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (ui, (label, value)) in cols.iter_mut().zip(cards.iter()) {
            metric_card(ui, label, value);
        }
    });
}

fn metric_card(ui: &mut Ui, label: &str, value: &str) {
    theme::card_frame(ui).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(label).size(15.0).color(NEON_CYAN));
        ui.label(RichText::new(value).size(26.0).strong().color(NEON_GREEN));
    });
}

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// `$75,000` – rounded to whole dollars with thousands separators.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// `1,234`
pub fn format_count(value: usize) -> String {
    group_thousands(value as u64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_is_rounded_and_grouped() {
        assert_eq!(format_usd(75_000.0), "$75,000");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(1_234_567.49), "$1,234,567");
        assert_eq!(format_usd(-1500.0), "-$1,500");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(133_349), "133,349");
    }
}
