//! Data profile of the cleaned record set: shape, first and last rows,
//! per-column type and completeness, and summary statistics of the numeric
//! columns.

use crate::libs::aggregate::mean;
use crate::libs::dashboard::data_table;
use crate::libs::metrics::format_score;
use crate::libs::record::{Field, ResponseRecord};
use crate::libs::table::Table;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnType,
    pub non_null: usize,
    pub nulls: usize,
    pub unique: usize,
    /// Non-null values that repeat an earlier value.
    pub duplicates: usize,
}

/// Value type of a cleaned column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Duration,
    DateTime,
    Integer,
    Float,
}

impl ColumnType {
    pub fn of(field: Field) -> Self {
        match field {
            Field::TimeToOnIt | Field::TimeToAttended => ColumnType::Duration,
            Field::DateCreated => ColumnType::DateTime,
            Field::HourCreated => ColumnType::Integer,
            Field::Survey => ColumnType::Float,
            _ => ColumnType::Text,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Duration => "duration",
            ColumnType::DateTime => "datetime",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
        }
    }
}

/// Rows shown in the head and tail previews.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub name: String,
    pub count: usize,
    /// NaN when `count` is zero, as are `min` and `max`.
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub rows: usize,
    pub columns: usize,
    pub column_profiles: Vec<ColumnProfile>,
    pub numeric: Vec<NumericSummary>,
    /// First [`PREVIEW_ROWS`] records, with data-table columns.
    pub head: Table,
    /// Last [`PREVIEW_ROWS`] records, in sheet order.
    pub tail: Table,
}

pub fn profile(records: &[ResponseRecord]) -> Profile {
    let column_profiles: Vec<ColumnProfile> = Field::ALL.iter().map(|field| column_profile(records, *field)).collect();

    let numeric = vec![
        numeric_summary(
            "TimeTo: On It (seconds)",
            records.iter().filter_map(|record| record.on_it_seconds_checked()).map(|seconds| seconds as f64),
        ),
        numeric_summary(
            "TimeTo: Attended (seconds)",
            records.iter().filter_map(|record| record.attended_seconds_checked()).map(|seconds| seconds as f64),
        ),
        numeric_summary(
            "TimeTo: On It (minutes)",
            records.iter().filter_map(|record| record.on_it_seconds_checked()).map(|seconds| seconds as f64 / 60.0),
        ),
        numeric_summary(
            "TimeTo: Attended (minutes)",
            records.iter().filter_map(|record| record.attended_seconds_checked()).map(|seconds| seconds as f64 / 60.0),
        ),
        numeric_summary("Survey", records.iter().filter_map(|record| record.survey_score)),
    ];

    let tail_start = records.len().saturating_sub(PREVIEW_ROWS);
    Profile {
        rows: records.len(),
        columns: column_profiles.len(),
        column_profiles,
        numeric,
        head: preview("First Rows", "profile_head", &records[..records.len().min(PREVIEW_ROWS)]),
        tail: preview("Last Rows", "profile_tail", &records[tail_start..]),
    }
}

fn preview(title: &str, file_name: &str, records: &[ResponseRecord]) -> Table {
    let data = data_table(records);
    Table {
        title: title.to_string(),
        file_name: file_name.to_string(),
        ..data
    }
}

fn column_profile(records: &[ResponseRecord], field: Field) -> ColumnProfile {
    let values: Vec<String> = records.iter().filter_map(|record| record.text(field)).collect();
    let unique = values.iter().collect::<HashSet<_>>().len();

    ColumnProfile {
        name: field.display_name().to_string(),
        kind: ColumnType::of(field),
        non_null: values.len(),
        nulls: records.len() - values.len(),
        unique,
        duplicates: values.len() - unique,
    }
}

fn numeric_summary<I: Iterator<Item = f64>>(name: &str, values: I) -> NumericSummary {
    let values: Vec<f64> = values.collect();
    let (min, max) = if values.is_empty() {
        (f64::NAN, f64::NAN)
    } else {
        (
            values.iter().copied().fold(f64::INFINITY, f64::min),
            values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    };

    NumericSummary {
        name: name.to_string(),
        count: values.len(),
        mean: mean(values),
        min,
        max,
    }
}

impl Profile {
    pub fn shape_table(&self) -> Table {
        let mut table = Table::new("Shape", "profile_shape", &["Rows", "Columns"]);
        table.push_row(vec![self.rows.to_string(), self.columns.to_string()]);
        table
    }

    pub fn columns_table(&self) -> Table {
        let mut table = Table::new(
            "Columns",
            "profile_columns",
            &["Column", "Type", "Non-Null", "Nulls", "Unique", "Duplicates"],
        );
        for column in &self.column_profiles {
            table.push_row(vec![
                column.name.clone(),
                column.kind.name().to_string(),
                column.non_null.to_string(),
                column.nulls.to_string(),
                column.unique.to_string(),
                column.duplicates.to_string(),
            ]);
        }
        table
    }

    pub fn numeric_table(&self) -> Table {
        let mut table = Table::new("Summary Statistics", "profile_numeric", &["Column", "Count", "Mean", "Min", "Max"]);
        for summary in &self.numeric {
            table.push_row(vec![
                summary.name.clone(),
                summary.count.to_string(),
                format_score(summary.mean),
                format_score(summary.min),
                format_score(summary.max),
            ]);
        }
        table
    }

    pub fn tables(&self) -> Vec<Table> {
        vec![
            self.shape_table(),
            self.head.clone(),
            self.tail.clone(),
            self.columns_table(),
            self.numeric_table(),
        ]
    }
}
