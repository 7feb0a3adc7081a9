//! Hand-built records shared by the data-layer tests.

use super::model::{SalaryDataset, SalaryRecord};

pub fn record(year: i32, experience: &str, role: &str, usd: f64) -> SalaryRecord {
    SalaryRecord {
        year,
        experience_level: experience.to_string(),
        contract_type: "integral".to_string(),
        company_size: "media".to_string(),
        role_title: role.to_string(),
        remote_type: "remoto".to_string(),
        residence_country_code: "USA".to_string(),
        salary_usd: usd,
    }
}

pub fn with_location(mut rec: SalaryRecord, remote: &str, country: &str) -> SalaryRecord {
    rec.remote_type = remote.to_string();
    rec.residence_country_code = country.to_string();
    rec
}

pub fn with_company(mut rec: SalaryRecord, contract: &str, size: &str) -> SalaryRecord {
    rec.contract_type = contract.to_string();
    rec.company_size = size.to_string();
    rec
}

/// Ten records spread over three years, four seniorities, three company sizes.
pub fn sample_dataset() -> SalaryDataset {
    SalaryDataset::from_records(vec![
        with_location(record(2022, "junior", "Data Analyst", 40_000.0), "presencial", "BRA"),
        with_location(record(2022, "senior", "Data Scientist", 120_000.0), "remoto", "USA"),
        with_company(record(2023, "pleno", "Data Engineer", 90_000.0), "pj", "grande"),
        with_location(record(2023, "senior", "Data Scientist", 140_000.0), "hibrido", "GBR"),
        with_company(record(2023, "junior", "Data Analyst", 45_000.0), "integral", "pequena"),
        record(2024, "executivo", "Head of Data", 250_000.0),
        with_location(record(2024, "pleno", "Data Scientist", 80_000.0), "remoto", "BRA"),
        with_company(record(2024, "senior", "ML Engineer", 160_000.0), "pj", "media"),
        with_location(record(2024, "pleno", "Data Analyst", 60_000.0), "hibrido", "DEU"),
        with_company(record(2023, "senior", "Data Engineer", 130_000.0), "integral", "grande"),
    ])
}
