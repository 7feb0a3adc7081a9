use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Source schema
// ---------------------------------------------------------------------------

/// Columns the source CSV must provide. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "ano",
    "senioridade",
    "contrato",
    "tamanho_empresa",
    "cargo",
    "remoto",
    "residencia_iso3",
    "usd",
];

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the survey
// ---------------------------------------------------------------------------

/// A single survey answer. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "ano", deserialize_with = "integral_year")]
    pub year: i32,
    #[serde(rename = "senioridade")]
    pub experience_level: String,
    #[serde(rename = "contrato")]
    pub contract_type: String,
    #[serde(rename = "tamanho_empresa")]
    pub company_size: String,
    #[serde(rename = "cargo")]
    pub role_title: String,
    #[serde(rename = "remoto")]
    pub remote_type: String,
    #[serde(rename = "residencia_iso3")]
    pub residence_country_code: String,
    #[serde(rename = "usd")]
    pub salary_usd: f64,
}

/// Years are sometimes exported as floats (`2023.0`); accept any integral value.
fn integral_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.fract() != 0.0 || raw < i32::MIN as f64 || raw > i32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "'{raw}' is not a valid year"
        )));
    }
    Ok(raw as i32)
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All records in source order. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryDataset {
    records: Vec<SalaryRecord>,
}

impl SalaryDataset {
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        SalaryDataset { records }
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
