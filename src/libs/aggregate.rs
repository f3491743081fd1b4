//! Grouping and aggregation of response records.
//!
//! Every view on the dashboard reduces the filtered records with one of four
//! operations:
//!
//! - [`group_count`]: records per key
//! - [`group_mean`]: mean of a numeric value per key
//! - [`cross_tab`]: counts over two keys as a dense matrix
//! - [`ranked_summary`]: per-key response-time ranking (the SME summary)
//!
//! Keys are any `Ord` value extracted by a closure. Groups come back in key
//! order, and a `None` or empty key is a group of its own.
//!
//! ## Missing Durations
//!
//! Duration cells that are blank or malformed parse to zero seconds. Whether
//! that zero counts toward an average is decided by [`MeanPolicy`]:
//!
//! - `ZeroFill` counts it, which pulls averages toward zero when data is bad
//! - `ExcludeMissing` leaves the row out of the denominator
//!
//! A group with no contributing values has a NaN mean, which the metric
//! formatter shows as "no data".

use crate::libs::record::ResponseRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// How missing or malformed durations enter a mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MeanPolicy {
    /// Missing durations count as zero seconds.
    #[default]
    ZeroFill,
    /// Missing durations are left out of the mean.
    ExcludeMissing,
}

impl fmt::Display for MeanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MeanPolicy::ZeroFill => write!(f, "zero-fill"),
            MeanPolicy::ExcludeMissing => write!(f, "exclude-missing"),
        }
    }
}

impl MeanPolicy {
    /// `TimeTo: On It` seconds as seen by this policy.
    pub fn on_it(&self, record: &ResponseRecord) -> Option<f64> {
        match self {
            MeanPolicy::ZeroFill => Some(record.on_it_seconds() as f64),
            MeanPolicy::ExcludeMissing => record.on_it_seconds_checked().map(|seconds| seconds as f64),
        }
    }

    /// `TimeTo: Attended` seconds as seen by this policy.
    pub fn attended(&self, record: &ResponseRecord) -> Option<f64> {
        match self {
            MeanPolicy::ZeroFill => Some(record.attended_seconds() as f64),
            MeanPolicy::ExcludeMissing => record.attended_seconds_checked().map(|seconds| seconds as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount<K> {
    pub key: K,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean<K> {
    pub key: K,
    /// Number of values that contributed to the mean.
    pub samples: usize,
    /// NaN when `samples` is zero.
    pub mean: f64,
}

/// Counts over two keys, including zero cells for unobserved combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTab<R, C> {
    pub rows: Vec<R>,
    pub columns: Vec<C>,
    /// `counts[row][column]`, aligned with `rows` and `columns`.
    pub counts: Vec<Vec<usize>>,
}

impl<R: Ord, C: Ord> CrossTab<R, C> {
    pub fn get(&self, row: &R, column: &C) -> usize {
        match (self.rows.binary_search(row), self.columns.binary_search(column)) {
            (Ok(r), Ok(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn row_totals(&self) -> Vec<usize> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn column_totals(&self) -> Vec<usize> {
        (0..self.columns.len())
            .map(|c| self.counts.iter().map(|row| row[c]).sum())
            .collect()
    }
}

/// One line of the ranked summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow<K> {
    pub key: K,
    pub avg_on_it: f64,
    pub avg_attended: f64,
    /// `avg_on_it + avg_attended`, the primary ranking score.
    pub total_avg: f64,
    pub interactions: usize,
    /// NaN when nobody in the group answered the survey.
    pub avg_survey: f64,
}

/// Arithmetic mean, NaN for an empty input.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.into_iter().fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Counts records per key.
pub fn group_count<K, F>(records: &[ResponseRecord], key_fn: F) -> Vec<GroupCount<K>>
where
    K: Ord,
    F: Fn(&ResponseRecord) -> K,
{
    let mut groups: BTreeMap<K, usize> = BTreeMap::new();
    for record in records {
        *groups.entry(key_fn(record)).or_insert(0) += 1;
    }

    groups.into_iter().map(|(key, count)| GroupCount { key, count }).collect()
}

/// Means `value_fn` per key. `None` values are left out of their group's
/// denominator; the group itself still appears.
pub fn group_mean<K, F, V>(records: &[ResponseRecord], key_fn: F, value_fn: V) -> Vec<GroupMean<K>>
where
    K: Ord,
    F: Fn(&ResponseRecord) -> K,
    V: Fn(&ResponseRecord) -> Option<f64>,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in records {
        let values = groups.entry(key_fn(record)).or_default();
        if let Some(value) = value_fn(record) {
            values.push(value);
        }
    }

    groups
        .into_iter()
        .map(|(key, values)| GroupMean {
            key,
            samples: values.len(),
            mean: mean(values),
        })
        .collect()
}

/// Counts records over two keys.
///
/// Rows and columns are the observed keys in ascending order; every
/// combination is present in the matrix, with `0` where nothing was observed.
pub fn cross_tab<R, C, FR, FC>(records: &[ResponseRecord], row_fn: FR, col_fn: FC) -> CrossTab<R, C>
where
    R: Ord + Clone,
    C: Ord + Clone,
    FR: Fn(&ResponseRecord) -> R,
    FC: Fn(&ResponseRecord) -> C,
{
    let mut rows = BTreeSet::new();
    let mut columns = BTreeSet::new();
    let mut cells: BTreeMap<(R, C), usize> = BTreeMap::new();

    for record in records {
        let row = row_fn(record);
        let column = col_fn(record);
        rows.insert(row.clone());
        columns.insert(column.clone());
        *cells.entry((row, column)).or_insert(0) += 1;
    }

    let rows: Vec<R> = rows.into_iter().collect();
    let columns: Vec<C> = columns.into_iter().collect();
    let counts = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| cells.get(&(row.clone(), column.clone())).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    CrossTab { rows, columns, counts }
}

/// Ranks groups by response time.
///
/// Per group: mean on-it and attended seconds (per `policy`), their sum,
/// record count and mean survey score. Sorted by the sum ascending, then
/// interactions descending, then survey descending, then key ascending.
/// NaN values sort after every number.
pub fn ranked_summary<K, F>(records: &[ResponseRecord], key_fn: F, policy: MeanPolicy) -> Vec<RankedRow<K>>
where
    K: Ord,
    F: Fn(&ResponseRecord) -> K,
{
    let mut groups: BTreeMap<K, Vec<&ResponseRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(key_fn(record)).or_default().push(record);
    }

    let mut ranked: Vec<RankedRow<K>> = groups
        .into_iter()
        .map(|(key, members)| {
            let avg_on_it = mean(members.iter().filter_map(|record| policy.on_it(record)));
            let avg_attended = mean(members.iter().filter_map(|record| policy.attended(record)));
            RankedRow {
                key,
                avg_on_it,
                avg_attended,
                total_avg: avg_on_it + avg_attended,
                interactions: members.len(),
                avg_survey: mean(members.iter().filter_map(|record| record.survey_score)),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        cmp_nan_last(a.total_avg, b.total_avg)
            .then_with(|| b.interactions.cmp(&a.interactions))
            .then_with(|| cmp_nan_last_desc(a.avg_survey, b.avg_survey))
            .then_with(|| a.key.cmp(&b.key))
    });
    ranked
}

/// Orders means from highest to lowest, NaN last, ties by key.
pub fn sort_by_mean_desc<K: Ord>(rows: &mut [GroupMean<K>]) {
    rows.sort_by(|a, b| cmp_nan_last_desc(a.mean, b.mean).then_with(|| a.key.cmp(&b.key)));
}

/// Orders counts from lowest to highest, keeping key order among equals.
pub fn sort_by_count_asc<K>(rows: &mut [GroupCount<K>]) {
    rows.sort_by_key(|row| row.count);
}

/// Orders counts from highest to lowest, keeping key order among equals.
pub fn sort_by_count_desc<K>(rows: &mut [GroupCount<K>]) {
    rows.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Calendar position (1-12) of an English month name or abbreviation.
pub fn month_order(name: &str) -> Option<u32> {
    name.trim().parse::<chrono::Month>().ok().map(|month| month.number_from_month())
}

/// Sorts rows by calendar month; unknown names go last, alphabetically.
pub fn sort_by_month<T, F>(rows: &mut [T], month_fn: F)
where
    F: Fn(&T) -> Option<&str>,
{
    rows.sort_by(|a, b| {
        let (ma, mb) = (month_fn(a), month_fn(b));
        let (oa, ob) = (ma.and_then(month_order), mb.and_then(month_order));
        match (oa, ob) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => ma.cmp(&mb),
        }
    });
}

fn cmp_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn cmp_nan_last_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
