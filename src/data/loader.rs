use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use once_cell::sync::{Lazy, OnceCell};
use thiserror::Error;

use super::model::{SalaryRecord, SalaryTable, REQUIRED_COLUMNS};
use crate::config::DATA_URL;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP {status} while fetching {url}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    /// `line` is the 1-based line in the file, header included.
    #[error("CSV line {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Source of the raw CSV text.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain blocking HTTP GET.
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::info!("Downloading salary data from {url}");

        let response =
            reqwest::blocking::get(url).with_context(|| format!("requesting {url}"))?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                url: url.to_string(),
                status,
            }
            .into());
        }
        response.text().context("reading response body")
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the survey CSV.
///
/// The eight [`REQUIRED_COLUMNS`] are deserialized into typed fields; any
/// other column is kept verbatim in [`SalaryRecord::extra`]. The table keeps
/// the file's column order.
pub fn parse_csv<R: Read>(input: R) -> Result<SalaryTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required).into());
        }
    }

    let extra_indices: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !REQUIRED_COLUMNS.contains(h))
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        // Data rows start on line 2.
        let line = row_no + 2;
        let row = result.with_context(|| format!("CSV line {line}"))?;

        let mut record: SalaryRecord = row
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::InvalidRow { line, source })?;
        record.extra = extra_indices
            .iter()
            .map(|&i| row.get(i).unwrap_or("").to_string())
            .collect();

        records.push(record);
    }

    let columns = headers.iter().map(str::to_string).collect();
    Ok(SalaryTable::with_headers(records, columns))
}

// ---------------------------------------------------------------------------
// Load-once cache
// ---------------------------------------------------------------------------

/// Fetches and parses the dataset on first use, then serves the cached table.
/// A failed load leaves the cache empty.
pub struct DataLoader<F> {
    url: String,
    fetcher: F,
    cache: OnceCell<Arc<SalaryTable>>,
}

impl<F: Fetch> DataLoader<F> {
    pub fn new(url: impl Into<String>, fetcher: F) -> Self {
        Self {
            url: url.into(),
            fetcher,
            cache: OnceCell::new(),
        }
    }

    pub fn load(&self) -> Result<Arc<SalaryTable>> {
        self.cache
            .get_or_try_init(|| {
                let body = self.fetcher.fetch(&self.url)?;
                let table = parse_csv(body.as_bytes())
                    .with_context(|| format!("parsing {}", self.url))?;
                log::info!(
                    "Loaded {} salary records (extra columns: {:?})",
                    table.len(),
                    table.extra_columns
                );
                if table.is_empty() {
                    log::warn!("Salary dataset at {} has no rows", self.url);
                }
                Ok(Arc::new(table))
            })
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }
}

static SALARY_LOADER: Lazy<DataLoader<HttpFetcher>> =
    Lazy::new(|| DataLoader::new(DATA_URL, HttpFetcher));

/// Process-wide salary table. Only the first successful call touches the
/// network.
pub fn load_salaries() -> Result<Arc<SalaryTable>> {
    if SALARY_LOADER.is_loaded() {
        log::debug!("Serving cached salary table");
    }
    SALARY_LOADER.load()
}
