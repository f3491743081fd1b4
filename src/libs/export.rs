//! Writes dashboard tables to files for analysis outside the terminal.
//!
//! Every [`Table`] can be exported as-is: the header row is the table's
//! display column names and each cell is the text shown on screen.
//!
//! ## Formats
//!
//! - **CSV**: UTF-8, header row first
//! - **JSON**: array of objects keyed by column name
//! - **Excel**: single worksheet, bold header row, auto-fitted columns
//!
//! ## Usage
//!
//! ```rust,no_run
//! use srrview::libs::export::{ExportFormat, Exporter};
//! use srrview::libs::table::Table;
//!
//! let mut table = Table::new("Interaction Count", "interaction_count", &["Service", "Interactions"]);
//! table.push_row(vec!["Payroll".to_string(), "3".to_string()]);
//!
//! let path = Exporter::new(ExportFormat::Csv, None).export(&table)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::table::Table;
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Excel limits worksheet names to 31 characters.
const SHEET_NAME_LIMIT: usize = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_dir: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing into `output_dir`, or the working
    /// directory when none is given.
    pub fn new(format: ExportFormat, output_dir: Option<PathBuf>) -> Self {
        Self {
            format,
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Path the table would be written to.
    pub fn path_for(&self, table: &Table) -> PathBuf {
        self.output_dir.join(format!("{}.{}", table.file_name, self.format.extension()))
    }

    /// Writes `<file_name>.<ext>` and returns its path.
    pub fn export(&self, table: &Table) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(table);

        match self.format {
            ExportFormat::Csv => File::create(&path)?.write_all(&to_csv_bytes(table)?)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&to_json(table))?;
                File::create(&path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_excel(table, &path)?,
        }

        tracing::debug!(table = %table.file_name, rows = table.len(), path = %path.display(), "exported table");
        Ok(path)
    }

    /// Exports each table to its own file.
    pub fn export_all(&self, tables: &[Table]) -> Result<Vec<PathBuf>> {
        tables.iter().map(|table| self.export(table)).collect()
    }

    fn export_excel(&self, table: &Table, path: &PathBuf) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let sheet_name: String = table.file_name.chars().take(SHEET_NAME_LIMIT).collect();
        worksheet.set_name(sheet_name)?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string(i as u32 + 1, col as u16, cell)?;
            }
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}

/// CSV encoding of a table, header row first.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    Ok(wtr.into_inner().map_err(|e| e.into_error())?)
}

/// JSON rows of a table, one object per row keyed by header.
pub fn to_json(table: &Table) -> Value {
    Value::Array(
        table
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = table
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(header, cell)| (header.clone(), Value::String(cell.clone())))
                    .collect();
                Value::Object(object)
            })
            .collect(),
    )
}
