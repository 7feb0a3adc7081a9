use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::LoadError;
use super::loader;
use super::model::SalaryDataset;

// ---------------------------------------------------------------------------
// Where the dataset comes from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    Remote(String),
    LocalFile(PathBuf),
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOrigin::Remote(url) => write!(f, "{url}"),
            SourceOrigin::LocalFile(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Memoized loader
// ---------------------------------------------------------------------------

/// Loads the dataset at most once and hands out shared handles to it.
///
/// Lifecycle: populated by the first [`DataSource::get_or_load`] (at startup),
/// read-only afterwards, emptied only by [`DataSource::invalidate`].
#[derive(Debug)]
pub struct DataSource {
    origin: SourceOrigin,
    cached: Option<Arc<SalaryDataset>>,
}

impl DataSource {
    pub fn new(origin: SourceOrigin) -> Self {
        Self {
            origin,
            cached: None,
        }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self::new(SourceOrigin::Remote(url.into()))
    }

    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceOrigin::LocalFile(path.into()))
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Return the cached dataset, fetching and parsing it on first use.
    pub fn get_or_load(&mut self) -> Result<Arc<SalaryDataset>, LoadError> {
        if let Some(ds) = &self.cached {
            return Ok(Arc::clone(ds));
        }

        let dataset = match &self.origin {
            SourceOrigin::Remote(url) => loader::fetch_url(url)?,
            SourceOrigin::LocalFile(path) => loader::load_file(path)?,
        };
        log::info!("Loaded {} salary records from {}", dataset.len(), self.origin);

        let dataset = Arc::new(dataset);
        self.cached = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the cached dataset so the next access reloads it.
    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            log::debug!("Dropped cached dataset for {}", self.origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CSV: &str = "ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd\n\
                       2023,senior,integral,media,Data Scientist,remoto,USA,100000\n";

    fn write_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("salaries.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_once_and_reuses_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, CSV);
        let mut source = DataSource::local(&path);
        assert!(!source.is_cached());

        let first = source.get_or_load().unwrap();
        assert!(source.is_cached());

        // The file is gone but the cache still answers.
        std::fs::remove_file(&path).unwrap();
        let second = source.get_or_load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, CSV);
        let mut source = DataSource::local(&path);
        let first = source.get_or_load().unwrap();
        assert_eq!(first.len(), 1);

        let two_rows = format!("{CSV}2024,junior,integral,pequena,Data Analyst,hibrido,BRA,20000\n");
        write_csv(&dir, &two_rows);
        source.invalidate();
        assert!(!source.is_cached());

        let second = source.get_or_load().unwrap();
        assert_eq!(second.len(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_leaves_cache_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = DataSource::local(dir.path().join("missing.csv"));
        assert!(source.get_or_load().is_err());
        assert!(!source.is_cached());
    }

    #[test]
    fn origin_display() {
        let source = DataSource::remote("https://example.com/data.csv");
        assert_eq!(source.origin().to_string(), "https://example.com/data.csv");
    }
}
