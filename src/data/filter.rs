use std::collections::BTreeSet;

use super::model::{SalaryDataset, SalaryRecord};

// ---------------------------------------------------------------------------
// Filter registry: distinct values offered by each multi-select
// ---------------------------------------------------------------------------

/// Sorted distinct values of the four filterable columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub years: BTreeSet<i32>,
    pub experience: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &SalaryDataset) -> Self {
        let mut options = FilterOptions::default();
        for rec in dataset.records() {
            options.years.insert(rec.year);
            options.experience.insert(rec.experience_level.clone());
            options.contracts.insert(rec.contract_type.clone());
            options.sizes.insert(rec.company_size.clone());
        }
        options
    }
}

// ---------------------------------------------------------------------------
// Filter selection: which values are currently ticked
// ---------------------------------------------------------------------------

/// Selected values per column. An empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub experience: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

impl FilterSelection {
    /// Everything selected – the initial state of every session.
    pub fn all(options: &FilterOptions) -> Self {
        FilterSelection {
            years: options.years.clone(),
            experience: options.experience.clone(),
            contracts: options.contracts.clone(),
            sizes: options.sizes.clone(),
        }
    }

    /// Whether every offered value is selected in all four columns.
    pub fn is_full(&self, options: &FilterOptions) -> bool {
        options.years.is_subset(&self.years)
            && options.experience.is_subset(&self.experience)
            && options.contracts.is_subset(&self.contracts)
            && options.sizes.is_subset(&self.sizes)
    }

    pub fn matches(&self, rec: &SalaryRecord) -> bool {
        self.years.contains(&rec.year)
            && self.experience.contains(&rec.experience_level)
            && self.contracts.contains(&rec.contract_type)
            && self.sizes.contains(&rec.company_size)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The records of a dataset that pass a [`FilterSelection`], in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a SalaryDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a SalaryRecord> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn salaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.records().map(|r| r.salary_usd)
    }
}

/// Keep the records whose year, experience level, contract type and company
/// size are all selected. A single empty selection set empties the view.
pub fn apply_filters<'a>(
    dataset: &'a SalaryDataset,
    selection: &FilterSelection,
) -> FilteredView<'a> {
    let indices = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect();
    FilteredView { dataset, indices }
}
