use std::collections::HashMap;

use super::charts::{self, BoxSummary, CategoryShare, GeoView, Histogram, RoleSalary};
use super::filter::FilteredView;
use crate::config::DashboardConfig;

/// Shown as the dominant role of an empty view.
pub const NO_ROLE: &str = "N/A";

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

/// The four headline numbers. All zero / [`NO_ROLE`] for an empty view.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub mean_salary: f64,
    pub max_salary: f64,
    pub record_count: usize,
    pub dominant_role: String,
}

impl Kpis {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        if view.is_empty() {
            return Kpis {
                mean_salary: 0.0,
                max_salary: 0.0,
                record_count: 0,
                dominant_role: NO_ROLE.to_string(),
            };
        }

        let record_count = view.len();
        let mean_salary = view.salaries().sum::<f64>() / record_count as f64;
        let max_salary = view.salaries().fold(f64::NEG_INFINITY, f64::max);

        Kpis {
            mean_salary,
            max_salary,
            record_count,
            dominant_role: dominant_role(view).unwrap_or(NO_ROLE).to_string(),
        }
    }
}

/// Most frequent role title; on a tie the role seen first in the view wins.
fn dominant_role<'a>(view: &FilteredView<'a>) -> Option<&'a str> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut slot: HashMap<&'a str, usize> = HashMap::new();
    for rec in view.records() {
        let role = rec.role_title.as_str();
        match slot.get(role) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slot.insert(role, counts.len());
                counts.push((role, 1));
            }
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (role, n) in counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((role, n));
        }
    }
    best.map(|(role, _)| role)
}

// ---------------------------------------------------------------------------
// Everything a render pass needs
// ---------------------------------------------------------------------------

/// KPIs and chart data for one filtered view, recomputed on every
/// selection change and read by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub kpis: Kpis,
    pub top_roles: Vec<RoleSalary>,
    pub remote_shares: Vec<CategoryShare>,
    pub histogram: Option<Histogram>,
    pub salary_boxes: Vec<BoxSummary>,
    pub geo: GeoView,
}

impl DashboardSummary {
    pub fn compute(view: &FilteredView<'_>, config: &DashboardConfig) -> Self {
        DashboardSummary {
            kpis: Kpis::compute(view),
            top_roles: charts::top_roles_by_mean(view, config.top_roles),
            remote_shares: charts::remote_shares(view),
            histogram: charts::salary_histogram(view, config.histogram_bins),
            salary_boxes: charts::salary_by_experience(view),
            geo: charts::country_means(view, &config.geo_role),
        }
    }

    /// Whether the view behind this summary had no records.
    pub fn is_empty(&self) -> bool {
        self.kpis.record_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterOptions, FilterSelection, apply_filters};
    use crate::data::fixtures::{record, sample_dataset, with_location};
    use crate::data::model::SalaryDataset;

    fn two_record_dataset() -> SalaryDataset {
        SalaryDataset::from_records(vec![
            with_location(record(2023, "Senior", "Data Scientist", 100_000.0), "remoto", "BRA"),
            with_location(record(2023, "Junior", "Data Analyst", 50_000.0), "remoto", "USA"),
        ])
    }

    #[test]
    fn kpis_over_default_selection() {
        let ds = two_record_dataset();
        let selection = FilterSelection::all(&FilterOptions::from_dataset(&ds));
        let kpis = Kpis::compute(&apply_filters(&ds, &selection));
        assert_eq!(
            kpis,
            Kpis {
                mean_salary: 75_000.0,
                max_salary: 100_000.0,
                record_count: 2,
                dominant_role: "Data Scientist".to_string(),
            }
        );
    }

    #[test]
    fn kpis_of_empty_view_are_zeroed() {
        let ds = two_record_dataset();
        let mut selection = FilterSelection::all(&FilterOptions::from_dataset(&ds));
        selection.years.clear();
        let kpis = Kpis::compute(&apply_filters(&ds, &selection));
        assert_eq!(kpis.mean_salary, 0.0);
        assert_eq!(kpis.max_salary, 0.0);
        assert_eq!(kpis.record_count, 0);
        assert_eq!(kpis.dominant_role, NO_ROLE);
    }

    #[test]
    fn dominant_role_prefers_the_most_frequent() {
        let ds = SalaryDataset::from_records(vec![
            record(2023, "senior", "ML Engineer", 1.0),
            record(2023, "senior", "Data Analyst", 1.0),
            record(2023, "senior", "Data Analyst", 1.0),
        ]);
        let selection = FilterSelection::all(&FilterOptions::from_dataset(&ds));
        let kpis = Kpis::compute(&apply_filters(&ds, &selection));
        assert_eq!(kpis.dominant_role, "Data Analyst");
    }

    #[test]
    fn dominant_role_tie_goes_to_first_seen() {
        let ds = SalaryDataset::from_records(vec![
            record(2023, "senior", "Zeta", 1.0),
            record(2023, "senior", "Alpha", 1.0),
            record(2023, "senior", "Alpha", 1.0),
            record(2023, "senior", "Zeta", 1.0),
        ]);
        let selection = FilterSelection::all(&FilterOptions::from_dataset(&ds));
        let kpis = Kpis::compute(&apply_filters(&ds, &selection));
        assert_eq!(kpis.dominant_role, "Zeta");
    }

    #[test]
    fn summary_bundles_every_chart() {
        let ds = sample_dataset();
        let selection = FilterSelection::all(&FilterOptions::from_dataset(&ds));
        let view = apply_filters(&ds, &selection);
        let summary = DashboardSummary::compute(&view, &DashboardConfig::default());
        assert!(!summary.is_empty());
        assert_eq!(summary.kpis.record_count, 10);
        assert_eq!(summary.kpis.max_salary, 250_000.0);
        assert_eq!(summary.kpis.dominant_role, "Data Analyst");
        assert_eq!(summary.top_roles.len(), 5);
        assert_eq!(summary.histogram.as_ref().map(|h| h.counts.len()), Some(40));
        assert_eq!(summary.salary_boxes.len(), 4);
        assert!(matches!(summary.geo, GeoView::Countries(_)));
    }

    #[test]
    fn summary_of_empty_view_degrades_gracefully() {
        let ds = sample_dataset();
        let view = apply_filters(&ds, &FilterSelection::default());
        let summary = DashboardSummary::compute(&view, &DashboardConfig::default());
        assert!(summary.is_empty());
        assert!(summary.top_roles.is_empty());
        assert!(summary.remote_shares.is_empty());
        assert!(summary.histogram.is_none());
        assert!(summary.salary_boxes.is_empty());
        assert_eq!(summary.geo, GeoView::NoMatchingRows);
    }
}
