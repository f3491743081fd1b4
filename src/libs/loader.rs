//! Loading and cleaning of response records.
//!
//! Turns raw worksheet rows into the canonical, immutable record set that
//! every view is computed from. The steps run in a fixed order:
//!
//! 1. Parse `Date Created`; an unparseable date becomes `None`, the row stays
//! 2. Map columns to fields through [`FIELD_MAP`](crate::libs::record::FIELD_MAP),
//!    which folds legacy names (`In process (On It SME)`) into canonical ones
//! 3. Keep only off-hours rows (`Working Hours? == "No"`) when the loader was
//!    created for the off-hours page
//! 4. Snapshot the raw duration text into the `(Raw)` fields
//! 5. Drop rows without a service
//!
//! Calendar facets (`Hour_Created`, `Month`, `Day`, `Weekend?`) are read from
//! their columns and derived from `Date Created` when a column is missing.
//!
//! The cleaned set is cached per worksheet and options for the configured
//! TTL. A failed fetch propagates to the caller and leaves the cache as it was.

use crate::api::{SourceError, WorksheetSource};
use crate::libs::cache::TtlCache;
use crate::libs::record::{lookup, Field, RawRow, RecordStatus, ResponseRecord};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use std::sync::Arc;
use std::time::Duration;

/// Shared, read-only record set handed out by the loader.
pub type Records = Arc<Vec<ResponseRecord>>;

const DATE_TIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Fixed, page-level load variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadOptions {
    /// Keep only rows recorded outside working hours.
    pub off_hours_only: bool,
}

impl LoadOptions {
    pub fn off_hours() -> Self {
        Self { off_hours_only: true }
    }
}

/// Cache key: one entry per worksheet and load variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadKey {
    pub worksheet: String,
    pub options: LoadOptions,
}

/// Fetches, cleans and caches the record set.
pub struct RecordLoader {
    cache: TtlCache<LoadKey, Records>,
    ttl: Duration,
    options: LoadOptions,
}

impl RecordLoader {
    pub fn new(ttl: Duration, options: LoadOptions) -> Self {
        Self::with_cache(TtlCache::new(), ttl, options)
    }

    pub fn with_cache(cache: TtlCache<LoadKey, Records>, ttl: Duration, options: LoadOptions) -> Self {
        Self { cache, ttl, options }
    }

    pub fn options(&self) -> LoadOptions {
        self.options
    }

    /// Returns the cleaned records for `worksheet`, fetching them from
    /// `source` when the cache has no live entry.
    ///
    /// The boolean is `true` when the source was queried on this call.
    pub async fn load<S: WorksheetSource>(&mut self, source: &S, worksheet: &str) -> Result<(Records, bool), SourceError> {
        let key = LoadKey {
            worksheet: worksheet.to_string(),
            options: self.options,
        };
        let options = self.options;

        let (records, fetched) = self
            .cache
            .get_or_fetch(key, self.ttl, || async move {
                let rows = source.fetch_rows(worksheet).await?;
                let records = clean_rows(&rows, options);
                tracing::info!(rows = rows.len(), kept = records.len(), "loaded worksheet");
                Ok::<_, SourceError>(Arc::new(records))
            })
            .await?;

        if !fetched {
            tracing::debug!(worksheet, "served records from cache");
        }
        Ok((records, fetched))
    }

    /// Forgets every cached record set; the next load fetches again.
    pub fn refresh(&mut self) {
        self.cache.clear();
        tracing::info!("record cache cleared");
    }
}

/// Cleans raw rows into records, preserving sheet order.
pub fn clean_rows(rows: &[RawRow], options: LoadOptions) -> Vec<ResponseRecord> {
    rows.iter().filter_map(|row| to_record(row, options)).collect()
}

fn to_record(row: &RawRow, options: LoadOptions) -> Option<ResponseRecord> {
    let date_created = lookup(row, Field::DateCreated).and_then(parse_date_created);
    let text = |field: Field| lookup(row, field).map(str::to_string);

    let working_hours = text(Field::WorkingHours);
    if options.off_hours_only && working_hours.as_deref() != Some("No") {
        return None;
    }

    let time_to_on_it = text(Field::TimeToOnIt);
    let time_to_attended = text(Field::TimeToAttended);

    let service = text(Field::Service)?;

    Some(ResponseRecord {
        case_id: text(Field::CaseId).unwrap_or_default(),
        service,
        status: RecordStatus::from(lookup(row, Field::Status).unwrap_or_default()),
        creation_timestamp: text(Field::CreationTimestamp),
        attended_timestamp: text(Field::AttendedTimestamp),
        date_created,
        time_to_on_it_raw: time_to_on_it.clone(),
        time_to_attended_raw: time_to_attended.clone(),
        time_to_on_it,
        time_to_attended,
        working_hours,
        survey_score: lookup(row, Field::Survey)
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|score| score.is_finite()),
        hour_created: lookup(row, Field::HourCreated)
            .and_then(parse_hour)
            .or_else(|| date_created.map(|date| date.hour())),
        month: text(Field::Month).or_else(|| date_created.map(|date| date.format("%B").to_string())),
        day: text(Field::Day).or_else(|| date_created.map(|date| date.format("%A").to_string())),
        is_weekend: text(Field::Weekend).or_else(|| date_created.map(|date| weekend_flag(date.weekday()).to_string())),
        sme_on_it: text(Field::SmeOnIt),
        requestor: text(Field::Requestor),
        case_reason: text(Field::CaseReason),
        inquiry: text(Field::Inquiry),
        attendee: text(Field::Attendee),
        on_it_time: text(Field::OnItTime),
        message_link: text(Field::MessageLink),
        afi: text(Field::Afi),
        afi_comment: text(Field::AfiComment),
        article: text(Field::Article),
    })
}

/// Parses a `Date Created` cell in any of the layouts the sheet has used.
pub fn parse_date_created(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

// Sheet exports write integer columns as "14" or "14.0".
fn parse_hour(text: &str) -> Option<u32> {
    text.parse::<f64>()
        .ok()
        .filter(|hour| hour.fract() == 0.0 && (0.0..24.0).contains(hour))
        .map(|hour| hour as u32)
}

fn weekend_flag(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat | Weekday::Sun => "Yes",
        _ => "No",
    }
}
