//! Metric cards and display formatting of aggregated values.
//!
//! Converts the numbers produced by [`crate::libs::aggregate`] into the
//! strings shown on screen and written to exports. An undefined mean (NaN,
//! from a group with no values) is shown as [`NO_DATA`] rather than as a
//! zero duration, so "nothing recorded" and "answered instantly" stay
//! distinguishable.

use crate::libs::aggregate::{mean, MeanPolicy};
use crate::libs::duration::{format_minutes, format_seconds};
use crate::libs::record::ResponseRecord;
use serde::Serialize;

/// Shown in place of an undefined mean.
pub const NO_DATA: &str = "n/a";

/// Labelled value for the summary row at the top of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

impl MetricCard {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// `HH:MM:SS` for a mean number of seconds, [`NO_DATA`] for NaN.
pub fn format_mean_seconds(seconds: f64) -> String {
    if seconds.is_nan() {
        NO_DATA.to_string()
    } else {
        format_seconds(seconds)
    }
}

/// `HH:MM:00` for a mean number of minutes, [`NO_DATA`] for NaN.
pub fn format_mean_minutes(minutes: f64) -> String {
    if minutes.is_nan() {
        NO_DATA.to_string()
    } else {
        format_minutes(minutes)
    }
}

/// Two-decimal score or count average, [`NO_DATA`] for NaN.
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        NO_DATA.to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Headline numbers for the filtered records.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub interactions: usize,
    pub survey_avg: f64,
    pub answered_surveys: usize,
    pub avg_on_it_secs: f64,
    pub avg_attended_secs: f64,
}

pub fn overview(records: &[ResponseRecord], policy: MeanPolicy) -> Overview {
    let surveys: Vec<f64> = records.iter().filter_map(|record| record.survey_score).collect();

    Overview {
        interactions: records.len(),
        answered_surveys: surveys.len(),
        survey_avg: mean(surveys),
        avg_on_it_secs: mean(records.iter().filter_map(|record| policy.on_it(record))),
        avg_attended_secs: mean(records.iter().filter_map(|record| policy.attended(record))),
    }
}

impl Overview {
    pub fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard::new("Interactions", self.interactions.to_string()),
            MetricCard::new("Survey Avg.", format_score(self.survey_avg)),
            MetricCard::new("Answered Surveys", self.answered_surveys.to_string()),
            MetricCard::new("Overall Avg. TimeTo: On It", format_mean_seconds(self.avg_on_it_secs)),
            MetricCard::new("Overall Avg. TimeTo: Attended", format_mean_seconds(self.avg_attended_secs)),
        ]
    }
}
