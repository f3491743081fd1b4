//! Typed response records and the sheet column mapping.
//!
//! The response worksheet is loosely typed: every cell arrives as text and some
//! columns have been renamed over time. Rows are converted once, at load time,
//! into [`ResponseRecord`] through the static [`FIELD_MAP`] table. Everything
//! downstream works with named, typed fields instead of column strings.

use crate::libs::duration::{parse_duration, try_parse_duration};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;

/// One worksheet row as delivered by a source: column name to cell text.
pub type RawRow = HashMap<String, String>;

/// Canonical record fields that can be read from the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    CaseId,
    Service,
    Inquiry,
    Requestor,
    CreationTimestamp,
    SmeOnIt,
    OnItTime,
    Attendee,
    AttendedTimestamp,
    MessageLink,
    Status,
    CaseReason,
    Afi,
    AfiComment,
    Article,
    TimeToOnIt,
    TimeToAttended,
    Month,
    Day,
    Weekend,
    DateCreated,
    WorkingHours,
    Survey,
    HourCreated,
}

/// Maps exact sheet column names to canonical fields.
///
/// Matching is case- and spacing-sensitive. Several names may map to the same
/// field; the first one present in a row wins.
pub const FIELD_MAP: &[(&str, Field)] = &[
    ("Case #", Field::CaseId),
    ("Case_number", Field::CaseId),
    ("Service", Field::Service),
    ("Inquiry", Field::Inquiry),
    ("Requestor", Field::Requestor),
    ("Creation Timestamp", Field::CreationTimestamp),
    ("In process (On It SME)", Field::SmeOnIt),
    ("SME (On It)", Field::SmeOnIt),
    ("On It Time", Field::OnItTime),
    ("Attendee", Field::Attendee),
    ("Attended Timestamp", Field::AttendedTimestamp),
    ("Message Link", Field::MessageLink),
    ("Status", Field::Status),
    ("Case Reason", Field::CaseReason),
    ("AFI", Field::Afi),
    ("AFI Comment", Field::AfiComment),
    ("Article#", Field::Article),
    ("TimeTo: On It", Field::TimeToOnIt),
    ("TimeTo: Attended", Field::TimeToAttended),
    ("Month", Field::Month),
    ("Day", Field::Day),
    ("Weekend?", Field::Weekend),
    ("Date Created", Field::DateCreated),
    ("Working Hours?", Field::WorkingHours),
    ("Survey", Field::Survey),
    ("Hour_Created", Field::HourCreated),
];

impl Field {
    /// Every field, in sheet column order.
    pub const ALL: [Field; 24] = [
        Field::CaseId,
        Field::Service,
        Field::Inquiry,
        Field::Requestor,
        Field::CreationTimestamp,
        Field::SmeOnIt,
        Field::OnItTime,
        Field::Attendee,
        Field::AttendedTimestamp,
        Field::MessageLink,
        Field::Status,
        Field::CaseReason,
        Field::Afi,
        Field::AfiComment,
        Field::Article,
        Field::TimeToOnIt,
        Field::TimeToAttended,
        Field::Month,
        Field::Day,
        Field::Weekend,
        Field::DateCreated,
        Field::WorkingHours,
        Field::Survey,
        Field::HourCreated,
    ];

    /// Column header used when the field is shown in a table or export.
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::CaseId => "Case #",
            Field::Service => "Service",
            Field::Inquiry => "Inquiry",
            Field::Requestor => "Requestor",
            Field::CreationTimestamp => "Creation Timestamp",
            Field::SmeOnIt => "SME (On It)",
            Field::OnItTime => "On It Time",
            Field::Attendee => "Attendee",
            Field::AttendedTimestamp => "Attended Timestamp",
            Field::MessageLink => "Message Link",
            Field::Status => "Status",
            Field::CaseReason => "Case Reason",
            Field::Afi => "AFI",
            Field::AfiComment => "AFI Comment",
            Field::Article => "Article#",
            Field::TimeToOnIt => "TimeTo: On It",
            Field::TimeToAttended => "TimeTo: Attended",
            Field::Month => "Month",
            Field::Day => "Day",
            Field::Weekend => "Weekend?",
            Field::DateCreated => "Date Created",
            Field::WorkingHours => "Working Hours?",
            Field::Survey => "Survey",
            Field::HourCreated => "Hour_Created",
        }
    }
}

/// Looks up a field in a raw row through the mapping table.
///
/// Empty and whitespace-only cells are treated as absent, so a blank column
/// falls through to the next name mapped to the same field.
pub fn lookup<'a>(row: &'a RawRow, field: Field) -> Option<&'a str> {
    FIELD_MAP
        .iter()
        .filter(|(_, mapped)| *mapped == field)
        .find_map(|(column, _)| row.get(*column).map(|value| value.trim()).filter(|value| !value.is_empty()))
}

/// Case status as recorded in the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordStatus {
    InQueue,
    InProgress,
    /// Terminal or unrecognised statuses, kept verbatim.
    Other(String),
}

impl From<&str> for RecordStatus {
    fn from(value: &str) -> Self {
        match value.trim() {
            "In Queue" => RecordStatus::InQueue,
            "In Progress" => RecordStatus::InProgress,
            other => RecordStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordStatus::InQueue => write!(f, "In Queue"),
            RecordStatus::InProgress => write!(f, "In Progress"),
            RecordStatus::Other(status) => write!(f, "{}", status),
        }
    }
}

/// One customer interaction from the response worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    pub case_id: String,
    pub service: String,
    pub status: RecordStatus,
    pub creation_timestamp: Option<String>,
    pub attended_timestamp: Option<String>,
    /// Parsed `Date Created`; `None` when the cell is missing or unparseable.
    pub date_created: Option<NaiveDateTime>,
    pub time_to_on_it: Option<String>,
    pub time_to_attended: Option<String>,
    /// Original duration text, preserved for the data table and exports.
    pub time_to_on_it_raw: Option<String>,
    pub time_to_attended_raw: Option<String>,
    pub working_hours: Option<String>,
    pub survey_score: Option<f64>,
    pub hour_created: Option<u32>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub is_weekend: Option<String>,
    pub sme_on_it: Option<String>,
    pub requestor: Option<String>,
    pub case_reason: Option<String>,
    pub inquiry: Option<String>,
    pub attendee: Option<String>,
    pub on_it_time: Option<String>,
    pub message_link: Option<String>,
    pub afi: Option<String>,
    pub afi_comment: Option<String>,
    pub article: Option<String>,
}

impl ResponseRecord {
    /// Creates a record with only the identifying fields set.
    pub fn new(case_id: &str, service: &str) -> Self {
        Self {
            case_id: case_id.to_string(),
            service: service.to_string(),
            status: RecordStatus::Other(String::new()),
            creation_timestamp: None,
            attended_timestamp: None,
            date_created: None,
            time_to_on_it: None,
            time_to_attended: None,
            time_to_on_it_raw: None,
            time_to_attended_raw: None,
            working_hours: None,
            survey_score: None,
            hour_created: None,
            month: None,
            day: None,
            is_weekend: None,
            sme_on_it: None,
            requestor: None,
            case_reason: None,
            inquiry: None,
            attendee: None,
            on_it_time: None,
            message_link: None,
            afi: None,
            afi_comment: None,
            article: None,
        }
    }

    /// `TimeTo: On It` in seconds, zero when missing or malformed.
    pub fn on_it_seconds(&self) -> i64 {
        parse_duration(self.time_to_on_it.as_deref())
    }

    /// `TimeTo: Attended` in seconds, zero when missing or malformed.
    pub fn attended_seconds(&self) -> i64 {
        parse_duration(self.time_to_attended.as_deref())
    }

    /// `TimeTo: On It` in seconds, `None` when missing or malformed.
    pub fn on_it_seconds_checked(&self) -> Option<i64> {
        try_parse_duration(self.time_to_on_it.as_deref())
    }

    /// `TimeTo: Attended` in seconds, `None` when missing or malformed.
    pub fn attended_seconds_checked(&self) -> Option<i64> {
        try_parse_duration(self.time_to_attended.as_deref())
    }

    /// Text value of a field as it would appear in the data table.
    pub fn text(&self, field: Field) -> Option<String> {
        match field {
            Field::CaseId => Some(self.case_id.clone()),
            Field::Service => Some(self.service.clone()),
            Field::Inquiry => self.inquiry.clone(),
            Field::Requestor => self.requestor.clone(),
            Field::CreationTimestamp => self.creation_timestamp.clone(),
            Field::SmeOnIt => self.sme_on_it.clone(),
            Field::OnItTime => self.on_it_time.clone(),
            Field::Attendee => self.attendee.clone(),
            Field::AttendedTimestamp => self.attended_timestamp.clone(),
            Field::MessageLink => self.message_link.clone(),
            Field::Status => Some(self.status.to_string()).filter(|status| !status.is_empty()),
            Field::CaseReason => self.case_reason.clone(),
            Field::Afi => self.afi.clone(),
            Field::AfiComment => self.afi_comment.clone(),
            Field::Article => self.article.clone(),
            Field::TimeToOnIt => self.time_to_on_it_raw.clone(),
            Field::TimeToAttended => self.time_to_attended_raw.clone(),
            Field::Month => self.month.clone(),
            Field::Day => self.day.clone(),
            Field::Weekend => self.is_weekend.clone(),
            Field::DateCreated => self.date_created.map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string()),
            Field::WorkingHours => self.working_hours.clone(),
            Field::Survey => self.survey_score.map(|score| score.to_string()),
            Field::HourCreated => self.hour_created.map(|hour| hour.to_string()),
        }
    }
}
