//! Worksheet sources for the response and survey data.
//!
//! A source delivers every row of a named worksheet as [`RawRow`]s, in sheet
//! order, with the header row providing column names. Two sources exist:
//!
//! - **Sheets**: a published spreadsheet CSV endpoint fetched over HTTP
//! - **File**: a local CSV export of the same worksheet
//!
//! Fetch failures are reported as [`SourceError`] and are never retried here;
//! the next render (timer tick or manual refresh) starts over.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use srrview::api::{Source, WorksheetSource};
//! use srrview::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let source = Source::from_config(&config)?;
//! let rows = source.fetch_rows("Response and Survey Form").await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::Config;
use crate::libs::record::RawRow;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

pub mod file;
pub mod sheets;

pub use file::{CsvFile, FileConfig};
pub use sheets::{Sheets, SheetsConfig};

/// Failure to obtain worksheet rows.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: reqwest::StatusCode },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed worksheet data: {0}")]
    Csv(#[from] csv::Error),
    #[error("no data source configured, run `srrview init`")]
    NotConfigured,
}

/// Anything that can produce the rows of a named worksheet.
#[allow(async_fn_in_trait)]
pub trait WorksheetSource {
    /// Fetches all rows of `worksheet` in sheet order.
    async fn fetch_rows(&self, worksheet: &str) -> Result<Vec<RawRow>, SourceError>;
}

/// Source selected from configuration.
#[derive(Debug)]
pub enum Source {
    Sheets(Sheets),
    File(CsvFile),
}

impl Source {
    /// Builds the configured source. A local file takes precedence over the
    /// HTTP endpoint when both are set.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        if let Some(file) = &config.file {
            return Ok(Source::File(CsvFile::new(file)));
        }
        match &config.sheets {
            Some(sheets) => Ok(Source::Sheets(Sheets::new(sheets))),
            None => Err(SourceError::NotConfigured),
        }
    }
}

impl WorksheetSource for Source {
    async fn fetch_rows(&self, worksheet: &str) -> Result<Vec<RawRow>, SourceError> {
        match self {
            Source::Sheets(sheets) => sheets.fetch_rows(worksheet).await,
            Source::File(file) => file.fetch_rows(worksheet).await,
        }
    }
}

/// Reads CSV with a header row into raw rows.
///
/// Header names are kept verbatim; short rows leave their missing columns out
/// of the row map.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "parsed worksheet csv");
    Ok(rows)
}
