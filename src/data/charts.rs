//! Declarative chart data. Every builder is a pure function of a
//! [`FilteredView`]; the `ui::charts` module only draws what these return.

use std::collections::BTreeMap;

use super::filter::FilteredView;

// ---------------------------------------------------------------------------
// Top roles by mean salary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RoleSalary {
    pub role: String,
    pub mean_usd: f64,
}

/// The `limit` best-paid roles, in ascending display order (best last).
///
/// Ranking is by mean salary descending with ties broken by role name; the
/// truncated ranking is then reversed for a bottom-up horizontal bar chart.
pub fn top_roles_by_mean(view: &FilteredView<'_>, limit: usize) -> Vec<RoleSalary> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in view.records() {
        let entry = groups.entry(rec.role_title.as_str()).or_default();
        entry.0 += rec.salary_usd;
        entry.1 += 1;
    }

    let mut ranking: Vec<RoleSalary> = groups
        .into_iter()
        .map(|(role, (sum, n))| RoleSalary {
            role: role.to_string(),
            mean_usd: sum / n as f64,
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.mean_usd
            .total_cmp(&a.mean_usd)
            .then_with(|| a.role.cmp(&b.role))
    });
    ranking.truncate(limit);
    ranking.reverse();
    ranking
}

// ---------------------------------------------------------------------------
// Remote / hybrid / on-site shares
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    /// `count` over the view size, in `[0, 1]`.
    pub fraction: f64,
}

/// Record count per remote-work category, most common first.
pub fn remote_shares(view: &FilteredView<'_>) -> Vec<CategoryShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in view.records() {
        *counts.entry(rec.remote_type.as_str()).or_default() += 1;
    }

    let total = view.len() as f64;
    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(label, count)| CategoryShare {
            label: label.to_string(),
            count,
            fraction: count as f64 / total,
        })
        .collect();
    // BTreeMap order already breaks ties by label; the sort is stable.
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

// ---------------------------------------------------------------------------
// Salary histogram
// ---------------------------------------------------------------------------

/// Equal-width bins starting at `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Lower and upper edge of bin `i`.
    pub fn bin_edges(&self, i: usize) -> (f64, f64) {
        let lo = self.min + i as f64 * self.bin_width;
        (lo, lo + self.bin_width)
    }

    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// `bins` equal-width bins over the observed salary range. `None` for an
/// empty view or zero bins.
///
/// The maximum lands in the last bin. When every salary is identical the
/// bins are one dollar wide and everything falls into the first.
pub fn salary_histogram(view: &FilteredView<'_>, bins: usize) -> Option<Histogram> {
    if view.is_empty() || bins == 0 {
        return None;
    }
    let (min, max) = view
        .salaries()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    let bin_width = if max > min {
        (max - min) / bins as f64
    } else {
        1.0
    };

    let mut counts = vec![0usize; bins];
    for v in view.salaries() {
        let idx = ((v - min) / bin_width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Some(Histogram {
        min,
        max,
        bin_width,
        counts,
    })
}

// ---------------------------------------------------------------------------
// Salary spread per experience level (box plot)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub category: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Tukey summary of `values`. `None` when there are no values.
    pub fn from_values(category: impl Into<String>, mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let q1 = quantile(&values, 0.25);
        let median = quantile(&values, 0.5);
        let q3 = quantile(&values, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside = || values.iter().copied().filter(|v| (low_fence..=high_fence).contains(v));
        let lower_whisker = inside().fold(f64::INFINITY, f64::min);
        let upper_whisker = inside().fold(f64::NEG_INFINITY, f64::max);
        let outliers = values
            .iter()
            .copied()
            .filter(|v| !(low_fence..=high_fence).contains(v))
            .collect();

        Some(BoxSummary {
            category: category.into(),
            count: values.len(),
            min: values[0],
            q1,
            median,
            q3,
            max: values[values.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// One box per experience level, levels in lexical order.
pub fn salary_by_experience(view: &FilteredView<'_>) -> Vec<BoxSummary> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for rec in view.records() {
        groups
            .entry(rec.experience_level.as_str())
            .or_default()
            .push(rec.salary_usd);
    }
    groups
        .into_iter()
        .filter_map(|(level, values)| BoxSummary::from_values(level, values))
        .collect()
}

// ---------------------------------------------------------------------------
// Geographic aggregation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CountrySalary {
    /// ISO 3166-1 alpha-3 code.
    pub code: String,
    pub mean_usd: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeoView {
    /// The role sub-filter left nothing to aggregate.
    NoMatchingRows,
    /// Mean salary per country, highest first.
    Countries(Vec<CountrySalary>),
}

/// Mean salary per residence country over the records holding `role`.
pub fn country_means(view: &FilteredView<'_>, role: &str) -> GeoView {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in view.records().filter(|r| r.role_title == role) {
        let entry = groups
            .entry(rec.residence_country_code.as_str())
            .or_default();
        entry.0 += rec.salary_usd;
        entry.1 += 1;
    }
    if groups.is_empty() {
        return GeoView::NoMatchingRows;
    }

    let mut countries: Vec<CountrySalary> = groups
        .into_iter()
        .map(|(code, (sum, count))| CountrySalary {
            code: code.to_string(),
            mean_usd: sum / count as f64,
            count,
        })
        .collect();
    countries.sort_by(|a, b| b.mean_usd.total_cmp(&a.mean_usd));
    GeoView::Countries(countries)
}
