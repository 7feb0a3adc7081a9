use std::cmp::Ordering;

use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::NEON_GREEN;
use crate::data::model::{SalaryDataset, SalaryRecord};
use crate::ui::charts::NO_RECORDS;
use crate::ui::kpi::{format_count, format_usd};
use crate::ui::theme;

// ---------------------------------------------------------------------------
// Columns and sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Year,
    Experience,
    Contract,
    CompanySize,
    Role,
    Remote,
    Country,
    SalaryUsd,
}

impl TableColumn {
    pub const ALL: [TableColumn; 8] = [
        TableColumn::Year,
        TableColumn::Experience,
        TableColumn::Contract,
        TableColumn::CompanySize,
        TableColumn::Role,
        TableColumn::Remote,
        TableColumn::Country,
        TableColumn::SalaryUsd,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TableColumn::Year => "Year",
            TableColumn::Experience => "Experience",
            TableColumn::Contract => "Contract",
            TableColumn::CompanySize => "Company size",
            TableColumn::Role => "Role",
            TableColumn::Remote => "Remote",
            TableColumn::Country => "Country",
            TableColumn::SalaryUsd => "Salary (USD)",
        }
    }

    fn cell(self, rec: &SalaryRecord) -> String {
        match self {
            TableColumn::Year => rec.year.to_string(),
            TableColumn::Experience => rec.experience_level.clone(),
            TableColumn::Contract => rec.contract_type.clone(),
            TableColumn::CompanySize => rec.company_size.clone(),
            TableColumn::Role => rec.role_title.clone(),
            TableColumn::Remote => rec.remote_type.clone(),
            TableColumn::Country => rec.residence_country_code.clone(),
            TableColumn::SalaryUsd => format_usd(rec.salary_usd),
        }
    }

    fn compare(self, a: &SalaryRecord, b: &SalaryRecord) -> Ordering {
        match self {
            TableColumn::Year => a.year.cmp(&b.year),
            TableColumn::Experience => a.experience_level.cmp(&b.experience_level),
            TableColumn::Contract => a.contract_type.cmp(&b.contract_type),
            TableColumn::CompanySize => a.company_size.cmp(&b.company_size),
            TableColumn::Role => a.role_title.cmp(&b.role_title),
            TableColumn::Remote => a.remote_type.cmp(&b.remote_type),
            TableColumn::Country => a.residence_country_code.cmp(&b.residence_country_code),
            TableColumn::SalaryUsd => a.salary_usd.total_cmp(&b.salary_usd),
        }
    }
}

/// Display order of the raw grid. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub column: TableColumn,
    pub ascending: bool,
}

impl TableSort {
    /// Sort by `column`, or flip the direction when it is already the key.
    pub fn toggle(current: Option<TableSort>, column: TableColumn) -> TableSort {
        match current {
            Some(sort) if sort.column == column => TableSort {
                column,
                ascending: !sort.ascending,
            },
            _ => TableSort {
                column,
                ascending: true,
            },
        }
    }
}

/// Row indices in display order. The sort is stable, so equal keys keep
/// dataset order.
pub fn display_order(
    dataset: &SalaryDataset,
    indices: &[usize],
    sort: Option<TableSort>,
) -> Vec<usize> {
    let mut order = indices.to_vec();
    if let Some(sort) = sort {
        let records = dataset.records();
        order.sort_by(|&a, &b| {
            let ord = sort.column.compare(&records[a], &records[b]);
            if sort.ascending { ord } else { ord.reverse() }
        });
    }
    order
}

// ---------------------------------------------------------------------------
// Raw data grid
// ---------------------------------------------------------------------------

/// Render every filtered record. Returns the new sort when a header was clicked.
pub fn raw_table(
    ui: &mut Ui,
    dataset: &SalaryDataset,
    order: &[usize],
    sort: Option<TableSort>,
) -> Option<TableSort> {
    if order.is_empty() {
        theme::placeholder(ui, NO_RECORDS);
        return None;
    }

    ui.label(format!("{} rows", format_count(order.len())));
    ui.add_space(4.0);

    let records = dataset.records();
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(70.0), TableColumn::ALL.len() - 1)
        .column(Column::remainder().at_least(90.0))
        .min_scrolled_height(0.0)
        .header(22.0, |mut header| {
            for column in TableColumn::ALL {
                header.col(|ui| {
                    let arrow = match sort {
                        Some(s) if s.column == column && s.ascending => " ⬆",
                        Some(s) if s.column == column => " ⬇",
                        _ => "",
                    };
                    let title = RichText::new(format!("{}{arrow}", column.title()))
                        .strong()
                        .color(NEON_GREEN);
                    if ui.button(title).clicked() {
                        clicked = Some(column);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, order.len(), |mut row| {
                let rec = &records[order[row.index()]];
                for column in TableColumn::ALL {
                    row.col(|ui| {
                        ui.label(column.cell(rec));
                    });
                }
            });
        });

    clicked.map(|column| TableSort::toggle(sort, column))
}
