/// Data layer: loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   remote CSV / local .csv
///        │
///        ▼
///   ┌────────────┐
///   │  source     │  memoized loader → Arc<SalaryDataset>
///   │  + loader   │  fetch / read, validate header, parse rows
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │  filter     │  FilterOptions, FilterSelection → FilteredView
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │  summary    │  KPIs + chart data (charts) → DashboardSummary
///   └────────────┘
/// ```

pub mod charts;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod source;
pub mod summary;

#[cfg(test)]
pub mod fixtures;
