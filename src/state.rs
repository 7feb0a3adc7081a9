use std::path::PathBuf;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::filter::{FilterOptions, FilterSelection, apply_filters};
use crate::data::model::SalaryDataset;
use crate::data::source::DataSource;
use crate::data::summary::DashboardSummary;
use crate::ui::table::TableSort;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Distribution,
    Geography,
    RawData,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Distribution, Tab::Geography, Tab::RawData];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "📊 Overview",
            Tab::Distribution => "📈 Distribution & Seniority",
            Tab::Geography => "🌍 Geography",
            Tab::RawData => "📄 Raw data",
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Memoized loader the current dataset came from.
    pub source: DataSource,

    /// Dataset on screen; shared with the loader cache.
    pub dataset: Arc<SalaryDataset>,

    /// Distinct values offered by the filters.
    pub options: FilterOptions,

    /// Current filter selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// KPIs and chart data for `visible_indices` (cached).
    pub summary: DashboardSummary,

    pub active_tab: Tab,

    /// Raw grid ordering, if the user clicked a header.
    pub table_sort: Option<TableSort>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state around an already loaded dataset with every filter
    /// value selected.
    pub fn new(config: DashboardConfig, source: DataSource, dataset: Arc<SalaryDataset>) -> Self {
        let options = FilterOptions::from_dataset(&dataset);
        let selection = FilterSelection::all(&options);
        let view = apply_filters(&dataset, &selection);
        let summary = DashboardSummary::compute(&view, &config);
        let visible_indices = view.into_indices();

        Self {
            config,
            source,
            dataset,
            options,
            selection,
            visible_indices,
            summary,
            active_tab: Tab::default(),
            table_sort: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and reset the filters to their defaults.
    pub fn set_dataset(&mut self, dataset: Arc<SalaryDataset>) {
        if dataset.is_empty() {
            log::warn!("{} has no salary records", self.source.origin());
        }
        self.options = FilterOptions::from_dataset(&dataset);
        self.selection = FilterSelection::all(&self.options);
        self.dataset = dataset;
        self.table_sort = None;
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and the summary after a filter change.
    pub fn refilter(&mut self) {
        let view = apply_filters(&self.dataset, &self.selection);
        self.summary = DashboardSummary::compute(&view, &self.config);
        self.visible_indices = view.into_indices();
        log::debug!(
            "Filters matched {} of {} records",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    /// Drop the cached dataset and fetch it again. On failure the previous
    /// dataset stays on screen.
    pub fn reload(&mut self) {
        log::info!(
            "Reloading {} (cached: {})",
            self.source.origin(),
            self.source.is_cached()
        );
        self.source.invalidate();
        match self.source.get_or_load() {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to reload {}: {e}", self.source.origin());
                self.status_message = Some(format!("Reload failed: {e}"));
            }
        }
    }

    /// Switch to a local CSV file. On failure the current source is kept.
    pub fn open_local(&mut self, path: PathBuf) {
        let mut source = DataSource::local(path);
        match source.get_or_load() {
            Ok(dataset) => {
                self.source = source;
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::warn!("Failed to open {}: {e}", source.origin());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::fixtures::sample_dataset;

    fn state() -> AppState {
        AppState::new(
            DashboardConfig::default(),
            DataSource::remote("http://127.0.0.1:9/unused.csv"),
            Arc::new(sample_dataset()),
        )
    }

    #[test]
    fn starts_with_everything_visible() {
        let state = state();
        assert!(state.selection.is_full(&state.options));
        assert_eq!(state.visible_indices.len(), state.dataset.len());
        assert_eq!(state.summary.kpis.record_count, 10);
        assert_eq!(state.active_tab, Tab::Overview);
    }

    #[test]
    fn refilter_updates_indices_and_summary() {
        let mut state = state();
        state.selection.years = [2022].into();
        state.refilter();
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.kpis.record_count, 2);
        assert_eq!(state.summary.kpis.max_salary, 120_000.0);

        state.selection.years.clear();
        state.refilter();
        assert!(state.visible_indices.is_empty());
        assert!(state.summary.is_empty());
        assert_eq!(state.summary.kpis.dominant_role, "N/A");
    }

    #[test]
    fn open_local_replaces_dataset_and_resets_filters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd").unwrap();
        writeln!(file, "2025,senior,integral,media,Data Scientist,remoto,CAN,150000").unwrap();

        let mut state = state();
        state.selection.years.clear();
        state.refilter();

        state.open_local(file.path().to_path_buf());
        assert!(state.status_message.is_none());
        assert_eq!(state.dataset.len(), 1);
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.options.years, std::collections::BTreeSet::from([2025]));
    }

    #[test]
    fn failed_open_keeps_the_current_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state();
        state.open_local(dir.path().join("missing.csv"));
        assert!(state.status_message.is_some());
        assert_eq!(state.dataset.len(), 10);
    }

    #[test]
    fn failed_reload_keeps_the_dataset_and_reports() {
        let mut state = state();
        state.reload();
        let status = state.status_message.as_deref().unwrap_or_default();
        assert!(status.starts_with("Reload failed"), "{status}");
        assert_eq!(state.dataset.len(), 10);
        assert_eq!(state.visible_indices.len(), 10);
        assert!(!state.source.is_cached());
    }

    #[test]
    fn reload_refetches_and_resets_filters() {
        let header = "ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salaries.csv");
        let first_row = "2023,senior,integral,media,Data Scientist,remoto,USA,100000";
        std::fs::write(&path, format!("{header}\n{first_row}\n")).unwrap();

        let mut source = DataSource::local(&path);
        let dataset = source.get_or_load().unwrap();
        let mut state = AppState::new(DashboardConfig::default(), source, dataset);
        state.selection.years.clear();
        state.refilter();
        state.status_message = Some("stale".to_string());

        std::fs::write(
            &path,
            format!(
                "{header}\n{first_row}\n\
                 2024,junior,pj,pequena,Data Analyst,hibrido,BRA,20000\n"
            ),
        )
        .unwrap();
        state.reload();

        assert!(state.status_message.is_none());
        assert_eq!(state.dataset.len(), 2);
        assert!(state.selection.is_full(&state.options));
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.kpis.record_count, 2);
    }
}
