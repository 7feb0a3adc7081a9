use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, vec2};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Plot, Points};

use crate::color::{self, ColorScale, NEON_CYAN, NEON_GREEN};
use crate::data::charts::{BoxSummary, CategoryShare, CountrySalary, GeoView, Histogram, RoleSalary};
use crate::data::summary::DashboardSummary;
use crate::ui::kpi::{format_count, format_usd};
use crate::ui::theme;

pub const NO_RECORDS: &str = "No records match the current filters.";

const CHART_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// Top roles and remote-work split, side by side.
pub fn overview_tab(ui: &mut Ui, summary: &DashboardSummary, top_roles: usize) {
    ui.columns(2, |cols: &mut [Ui]| {
        top_roles_chart(&mut cols[0], &summary.top_roles, top_roles);
        remote_donut(&mut cols[1], &summary.remote_shares);
    });
}

/// Salary histogram and per-seniority box plot, side by side.
pub fn distribution_tab(ui: &mut Ui, summary: &DashboardSummary) {
    ui.columns(2, |cols: &mut [Ui]| {
        salary_histogram(&mut cols[0], summary.histogram.as_ref());
        experience_box_plot(&mut cols[1], &summary.salary_boxes);
    });
}

/// Country heat grid for the configured role.
pub fn geography_tab(ui: &mut Ui, summary: &DashboardSummary, role: &str) {
    if summary.is_empty() {
        theme::placeholder(ui, NO_RECORDS);
        return;
    }
    match &summary.geo {
        GeoView::NoMatchingRows => theme::placeholder(
            ui,
            &format!("Filter by the '{role}' role to see the geographic analysis."),
        ),
        GeoView::Countries(countries) => country_heat_grid(ui, countries, role),
    }
}

// ---------------------------------------------------------------------------
// 1. Top roles – horizontal bars
// ---------------------------------------------------------------------------

fn top_roles_chart(ui: &mut Ui, roles: &[RoleSalary], limit: usize) {
    theme::chart_title(ui, &top_roles_title(limit));
    if roles.is_empty() {
        theme::placeholder(ui, NO_RECORDS);
        return;
    }

    let bars: Vec<Bar> = roles
        .iter()
        .enumerate()
        .map(|(i, r)| Bar::new(i as f64, r.mean_usd).name(&r.role).width(0.7))
        .collect();
    let labels: Vec<String> = roles.iter().map(|r| r.role.clone()).collect();

    static_plot("top_roles")
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_usd(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .color(NEON_GREEN)
                    .name("Mean salary"),
            );
        });
}

// ---------------------------------------------------------------------------
// 2. Remote / hybrid / on-site – donut
// ---------------------------------------------------------------------------

fn remote_donut(ui: &mut Ui, shares: &[CategoryShare]) {
    theme::chart_title(ui, "Remote / hybrid / on-site");
    if shares.is_empty() {
        theme::placeholder(ui, NO_RECORDS);
        return;
    }

    let colors = color::slice_colors(shares.len());
    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), CHART_HEIGHT - 40.0), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let outer = 0.45 * rect.width().min(rect.height());
    let inner = 0.6 * outer;
    let polar = |radius: f32, angle: f32| center + radius * vec2(angle.cos(), angle.sin());

    // Clockwise from twelve o'clock.
    let mut start = -FRAC_PI_2;
    for (share, &fill) in shares.iter().zip(colors.iter()) {
        let sweep = share.fraction as f32 * TAU;
        let steps = ((sweep / TAU) * 128.0).ceil().max(1.0) as usize;
        for s in 0..steps {
            let a0 = start + sweep * s as f32 / steps as f32;
            let a1 = start + sweep * (s + 1) as f32 / steps as f32;
            let quad: Vec<Pos2> = vec![
                polar(outer, a0),
                polar(outer, a1),
                polar(inner, a1),
                polar(inner, a0),
            ];
            painter.add(Shape::convex_polygon(quad, fill, Stroke::NONE));
        }

        if share.fraction >= 0.03 {
            let mid = start + sweep / 2.0;
            painter.text(
                polar((outer + inner) / 2.0, mid),
                Align2::CENTER_CENTER,
                format!("{}\n{:.1}%", share.label, share.fraction * 100.0),
                FontId::proportional(12.0),
                color::text_color_on(fill),
            );
        }
        start += sweep;
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (share, &fill) in shares.iter().zip(colors.iter()) {
            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, fill);
            ui.label(format!("{} ({})", share.label, format_count(share.count)));
            ui.add_space(8.0);
        }
    });
}

// ---------------------------------------------------------------------------
// 3. Salary histogram
// ---------------------------------------------------------------------------

fn salary_histogram(ui: &mut Ui, histogram: Option<&Histogram>) {
    theme::chart_title(ui, "Salary distribution");
    let Some(hist) = histogram else {
        theme::placeholder(ui, NO_RECORDS);
        return;
    };

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let (lo, hi) = hist.bin_edges(i);
            Bar::new(hist.bin_center(i), count as f64)
                .width(hist.bin_width)
                .name(format!("{} – {}", format_usd(lo), format_usd(hi)))
        })
        .collect();

    static_plot("salary_histogram")
        .x_axis_label("Salary (USD)")
        .y_axis_label("Records")
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_usd(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(NEON_CYAN)
                    .name(format!("Records ({})", format_count(hist.total()))),
            );
        });
}

// ---------------------------------------------------------------------------
// 4. Salary by experience level – box plot
// ---------------------------------------------------------------------------

fn experience_box_plot(ui: &mut Ui, boxes: &[BoxSummary]) {
    theme::chart_title(ui, "Salary spread by experience level");
    if boxes.is_empty() {
        theme::placeholder(ui, NO_RECORDS);
        return;
    }

    let elems: Vec<BoxElem> = boxes
        .iter()
        .enumerate()
        .map(|(i, b)| {
            BoxElem::new(
                i as f64,
                BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
            )
            .name(format!("{} ({} records)", b.category, b.count))
            .box_width(0.5)
            .whisker_width(0.3)
            .fill(NEON_GREEN.gamma_multiply(0.25))
            .stroke(Stroke::new(1.5, NEON_GREEN))
        })
        .collect();
    let outliers: Vec<[f64; 2]> = boxes
        .iter()
        .enumerate()
        .flat_map(|(i, b)| b.outliers.iter().map(move |&v| [i as f64, v]))
        .collect();
    let labels: Vec<String> = boxes.iter().map(|b| b.category.clone()).collect();

    static_plot("salary_by_experience")
        .legend(Legend::default())
        .y_axis_label("Salary (USD)")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_usd(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(elems).name("Salary"));
            if !outliers.is_empty() {
                plot_ui.points(
                    Points::new(outliers)
                        .radius(2.5)
                        .color(NEON_GREEN)
                        .name("Outliers"),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// 5. Geographic heat grid
// ---------------------------------------------------------------------------

fn country_heat_grid(ui: &mut Ui, countries: &[CountrySalary], role: &str) {
    theme::chart_title(ui, &format!("Heat map: mean {role} salary by country"));

    let scale = ColorScale::salary_heat();
    let lo = countries.iter().map(|c| c.mean_usd).fold(f64::INFINITY, f64::min);
    let hi = countries.iter().map(|c| c.mean_usd).fold(f64::NEG_INFINITY, f64::max);

    gradient_legend(ui, &scale, lo, hi);
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for country in countries {
                    country_tile(ui, country, scale.for_value(country.mean_usd, lo, hi));
                }
            });
        });
}

fn country_tile(ui: &mut Ui, country: &CountrySalary, fill: Color32) {
    let (rect, response) = ui.allocate_exact_size(vec2(118.0, 56.0), Sense::hover());
    let text = color::text_color_on(fill);
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, fill);
    painter.text(
        rect.center_top() + vec2(0.0, 17.0),
        Align2::CENTER_CENTER,
        &country.code,
        FontId::proportional(16.0),
        text,
    );
    painter.text(
        rect.center_bottom() - vec2(0.0, 15.0),
        Align2::CENTER_CENTER,
        format_usd(country.mean_usd),
        FontId::proportional(13.0),
        text,
    );
    response.on_hover_text(format!(
        "{}: mean {} over {} records",
        country.code,
        format_usd(country.mean_usd),
        format_count(country.count)
    ));
}

fn gradient_legend(ui: &mut Ui, scale: &ColorScale, lo: f64, hi: f64) {
    const STEPS: usize = 64;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format_usd(lo));
        let (rect, _) = ui.allocate_exact_size(vec2(260.0, 14.0), Sense::hover());
        let step = rect.width() / STEPS as f32;
        for i in 0..STEPS {
            let x0 = rect.left() + i as f32 * step;
            let slice = egui::Rect::from_min_max(
                egui::pos2(x0, rect.top()),
                egui::pos2(x0 + step + 0.5, rect.bottom()),
            );
            ui.painter()
                .rect_filled(slice, 0.0, scale.at(i as f32 / (STEPS - 1) as f32));
        }
        ui.label(format_usd(hi));
    });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A fixed-height plot that does not capture page scrolling.
fn static_plot(id: &str) -> Plot<'static> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
}

fn top_roles_title(limit: usize) -> String {
    format!("Top {limit} roles (mean USD)")
}

/// Axis label for a categorical axis: the category at an integral tick,
/// nothing in between.
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integral_ticks() {
        let labels = vec!["junior".to_string(), "senior".to_string()];
        assert_eq!(category_label(&labels, 0.0), "junior");
        assert_eq!(category_label(&labels, 1.0), "senior");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn top_roles_title_uses_the_configured_limit() {
        let limit = crate::config::DashboardConfig::default().top_roles;
        assert_eq!(top_roles_title(limit), "Top 10 roles (mean USD)");
        assert_eq!(top_roles_title(3), "Top 3 roles (mean USD)");
    }
}
