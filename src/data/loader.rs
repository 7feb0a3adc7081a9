use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::LoadError;
use super::model::{REQUIRED_COLUMNS, SalaryDataset, SalaryRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Download the survey CSV from `url` and parse it.
///
/// Any non-2xx status is treated as a failed fetch.
pub fn fetch_url(url: &str) -> Result<SalaryDataset, LoadError> {
    log::info!("Fetching salary dataset from {url}");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    parse_csv(response)
}

/// Load a survey CSV from the local filesystem.
pub fn load_file(path: &Path) -> Result<SalaryDataset, LoadError> {
    log::info!("Reading salary dataset from {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one survey answer per row.
///
/// The header is checked before any row is read so every missing column is
/// reported at once. Columns outside [`REQUIRED_COLUMNS`] are ignored.
pub fn parse_csv<R: Read>(reader: R) -> Result<SalaryDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let records = reader
        .deserialize::<SalaryRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Parsed {} salary records", records.len());
    Ok(SalaryDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
ano,senioridade,contrato,cargo,salario,moeda,usd,residencia,remoto,empresa,tamanho_empresa,residencia_iso3
2023,senior,integral,Data Scientist,100000,USD,100000,US,remoto,US,media,USA
2024.0,junior,integral,Data Analyst,40000,EUR,43000,DE,presencial,DE,grande,DEU
";

    #[test]
    fn parses_required_columns_and_ignores_extras() {
        let ds = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.records()[0];
        assert_eq!(first.year, 2023);
        assert_eq!(first.experience_level, "senior");
        assert_eq!(first.contract_type, "integral");
        assert_eq!(first.company_size, "media");
        assert_eq!(first.role_title, "Data Scientist");
        assert_eq!(first.remote_type, "remoto");
        assert_eq!(first.residence_country_code, "USA");
        assert_eq!(first.salary_usd, 100000.0);

        assert_eq!(ds.records()[1].year, 2024);
    }

    #[test]
    fn reports_every_missing_column() {
        let csv = "ano,senioridade,contrato,cargo,usd\n2023,senior,integral,DS,1\n";
        match parse_csv(csv.as_bytes()) {
            Err(LoadError::MissingColumns(cols)) => {
                assert_eq!(cols, vec!["tamanho_empresa", "remoto", "residencia_iso3"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_salary() {
        let csv = "ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd\n\
                   2023,senior,integral,media,DS,remoto,USA,lots\n";
        assert!(matches!(parse_csv(csv.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn rejects_fractional_year() {
        let csv = "ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd\n\
                   2023.5,senior,integral,media,DS,remoto,USA,1\n";
        assert!(matches!(parse_csv(csv.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let csv = "ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd\n";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(load_file(&path), Err(LoadError::Io { .. })));
    }
}
