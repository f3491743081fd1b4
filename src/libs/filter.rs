//! Equality filters over the cleaned record set.
//!
//! A filter is a list of [`Predicate`]s combined with AND. A predicate whose
//! value is the [`ALL`] sentinel places no restriction and is dropped before
//! any comparison, so `[(Service, "A"), (Month, "All")]` behaves exactly like
//! `[(Service, "A")]`.
//!
//! Filtering never touches the input slice: the result is a new collection.

use crate::libs::record::ResponseRecord;
use clap::ValueEnum;
use std::collections::HashSet;
use thiserror::Error;

/// Sentinel selection meaning "no restriction".
pub const ALL: &str = "All";

/// Record fields that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FilterField {
    Service,
    Month,
    WorkingHours,
    Status,
}

impl FilterField {
    /// Column name shown to the user.
    pub fn name(&self) -> &'static str {
        match self {
            FilterField::Service => "Service",
            FilterField::Month => "Month",
            FilterField::WorkingHours => "Working Hours?",
            FilterField::Status => "Status",
        }
    }

    /// Looks a field up by its CLI name (`working-hours`) or its column name
    /// (`Working Hours?`), ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        FilterField::from_str(name, true)
            .ok()
            .or_else(|| FilterField::value_variants().iter().copied().find(|field| field.name().eq_ignore_ascii_case(name)))
    }

    fn value_of(&self, record: &ResponseRecord) -> Option<String> {
        match self {
            FilterField::Service => Some(record.service.clone()),
            FilterField::Month => record.month.clone(),
            FilterField::WorkingHours => record.working_hours.clone(),
            FilterField::Status => Some(record.status.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    All,
    Exact(String),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Exact(value.to_string())
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("expected field=value, got '{0}'")]
    MissingSeparator(String),
    #[error("unknown filter field '{0}'")]
    UnknownField(String),
}

/// Single equality test on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: FilterField,
    pub value: FilterValue,
}

impl Predicate {
    pub fn new(field: FilterField, value: &str) -> Self {
        Self {
            field,
            value: FilterValue::from(value),
        }
    }

    /// Parses a `field=value` pair as given to `--filter`. The value is kept
    /// verbatim apart from surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, FilterParseError> {
        let (field, value) = text
            .split_once('=')
            .ok_or_else(|| FilterParseError::MissingSeparator(text.to_string()))?;
        let field = FilterField::parse(field).ok_or_else(|| FilterParseError::UnknownField(field.trim().to_string()))?;
        Ok(Predicate::new(field, value.trim()))
    }

    pub fn is_unrestricted(&self) -> bool {
        self.value == FilterValue::All
    }

    pub fn matches(&self, record: &ResponseRecord) -> bool {
        match &self.value {
            FilterValue::All => true,
            FilterValue::Exact(expected) => self.field.value_of(record).as_deref() == Some(expected.as_str()),
        }
    }
}

/// Returns the records matching every predicate, in their original order.
pub fn apply_filters(records: &[ResponseRecord], predicates: &[Predicate]) -> Vec<ResponseRecord> {
    let active: Vec<&Predicate> = predicates.iter().filter(|predicate| !predicate.is_unrestricted()).collect();

    let filtered: Vec<ResponseRecord> = records
        .iter()
        .filter(|record| active.iter().all(|predicate| predicate.matches(record)))
        .cloned()
        .collect();

    tracing::debug!(predicates = active.len(), before = records.len(), after = filtered.len(), "applied filters");
    filtered
}

/// Selectable values for `field`: the sentinel first, then each distinct
/// value in order of first appearance.
pub fn options(records: &[ResponseRecord], field: FilterField) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = vec![ALL.to_string()];

    for value in records.iter().filter_map(|record| field.value_of(record)) {
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }
    values
}
