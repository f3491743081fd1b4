//! One render pass of the off-hours management view.
//!
//! [`Dashboard::render`] filters the loaded records and computes every view
//! from the filtered set: the metric cards, the queue listings, the data
//! table and the aggregate tables. Nothing is kept between passes.
//!
//! ## Views
//!
//! | View | Operation |
//! |---|---|
//! | Hourly Interactions by Service | cross-tab hour × service, with totals |
//! | Average TimeTo: On It by Hour | mean per hour |
//! | Case Reason Distribution by Hour | cross-tab hour × case reason |
//! | Distribution of Case Reasons | count per reason, ascending |
//! | Average TimeTo: Attended / On It by Case Reason | mean per reason, descending |
//! | Monthly Response Times | means per month, calendar order |
//! | Group Response Times | means per service |
//! | Interaction Count | count per service |
//! | Interactions Handled | count per SME, descending |
//! | Interaction Count by Requestor | cross-tab requestor × service |
//! | SME Summary Table | ranked summary per SME |

use crate::libs::aggregate::{
    cross_tab, group_count, group_mean, ranked_summary, sort_by_count_asc, sort_by_count_desc, sort_by_mean_desc, sort_by_month,
    CrossTab, MeanPolicy,
};
use crate::libs::filter::{apply_filters, Predicate};
use crate::libs::metrics::{format_mean_minutes, format_mean_seconds, format_score, overview, MetricCard};
use crate::libs::record::{RecordStatus, ResponseRecord};
use crate::libs::table::Table;

/// Label for records whose grouping key is missing.
pub const BLANK: &str = "(blank)";

/// Average on-it time, in minutes, above which an SME is flagged.
pub const SLOW_ON_IT_MINUTES: f64 = 5.0;

const DATA_COLUMNS: &[&str] = &[
    "Case #",
    "Service",
    "Inquiry",
    "Requestor",
    "Creation Timestamp",
    "SME (On It)",
    "On It Time",
    "Attendee",
    "Attended Timestamp",
    "Message Link",
    "Status",
    "Case Reason",
    "AFI",
    "AFI Comment",
    "Article#",
    "TimeTo: On It (Raw)",
    "TimeTo: Attended (Raw)",
    "Month",
    "Day",
    "Weekend?",
    "Date Created",
    "Working Hours?",
    "Survey",
    "Hour_Created",
];

/// Every table the dashboard can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ViewKind {
    InQueue,
    InProgress,
    Data,
    HourlyByService,
    AvgOnItByHour,
    CaseReasonByHour,
    CaseReasonDistribution,
    AvgAttendedByCaseReason,
    AvgOnItByCaseReason,
    MonthlyResponseTimes,
    GroupResponseTimes,
    InteractionCount,
    InteractionsHandled,
    RequestorByService,
    SmeSummary,
}

impl ViewKind {
    pub const ALL: [ViewKind; 15] = [
        ViewKind::InQueue,
        ViewKind::InProgress,
        ViewKind::Data,
        ViewKind::HourlyByService,
        ViewKind::AvgOnItByHour,
        ViewKind::CaseReasonByHour,
        ViewKind::CaseReasonDistribution,
        ViewKind::AvgAttendedByCaseReason,
        ViewKind::AvgOnItByCaseReason,
        ViewKind::MonthlyResponseTimes,
        ViewKind::GroupResponseTimes,
        ViewKind::InteractionCount,
        ViewKind::InteractionsHandled,
        ViewKind::RequestorByService,
        ViewKind::SmeSummary,
    ];
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct Report {
    pub cards: Vec<MetricCard>,
    pub tables: Vec<Table>,
}

impl Report {
    pub fn table(&self, file_name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.file_name == file_name)
    }
}

pub struct Dashboard {
    policy: MeanPolicy,
}

impl Dashboard {
    pub fn new(policy: MeanPolicy) -> Self {
        Self { policy }
    }

    /// Filters `records` and computes the requested views.
    pub fn render(&self, records: &[ResponseRecord], predicates: &[Predicate], views: &[ViewKind]) -> Report {
        let filtered = apply_filters(records, predicates);

        Report {
            cards: overview(&filtered, self.policy).cards(),
            tables: views.iter().map(|kind| self.view(*kind, &filtered)).collect(),
        }
    }

    /// Computes a single view from already filtered records.
    pub fn view(&self, kind: ViewKind, records: &[ResponseRecord]) -> Table {
        match kind {
            ViewKind::InQueue => in_queue(records),
            ViewKind::InProgress => in_progress(records),
            ViewKind::Data => data_table(records),
            ViewKind::HourlyByService => hourly_by_service(records),
            ViewKind::AvgOnItByHour => avg_on_it_by_hour(records, self.policy),
            ViewKind::CaseReasonByHour => case_reason_by_hour(records),
            ViewKind::CaseReasonDistribution => case_reason_distribution(records),
            ViewKind::AvgAttendedByCaseReason => avg_attended_by_case_reason(records, self.policy),
            ViewKind::AvgOnItByCaseReason => avg_on_it_by_case_reason(records, self.policy),
            ViewKind::MonthlyResponseTimes => monthly_response_times(records, self.policy),
            ViewKind::GroupResponseTimes => group_response_times(records, self.policy),
            ViewKind::InteractionCount => interaction_count(records),
            ViewKind::InteractionsHandled => interactions_handled(records),
            ViewKind::RequestorByService => requestor_by_service(records),
            ViewKind::SmeSummary => sme_summary(records, self.policy),
        }
    }
}

fn label(key: &Option<String>) -> String {
    key.clone().unwrap_or_else(|| BLANK.to_string())
}

fn hour_label(key: &Option<u32>) -> String {
    key.map(|hour| hour.to_string()).unwrap_or_else(|| BLANK.to_string())
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn in_queue(records: &[ResponseRecord]) -> Table {
    let mut table = Table::new(
        "In Queue",
        "in_queue",
        &["Case #", "Requestor", "Service", "Creation Timestamp", "Message Link"],
    );
    for record in records.iter().filter(|record| record.status == RecordStatus::InQueue) {
        table.push_row(vec![
            record.case_id.clone(),
            opt(&record.requestor),
            record.service.clone(),
            opt(&record.creation_timestamp),
            opt(&record.message_link),
        ]);
    }
    table
}

pub fn in_progress(records: &[ResponseRecord]) -> Table {
    let mut table = Table::new(
        "In Progress",
        "in_progress",
        &[
            "Case #",
            "Requestor",
            "Service",
            "Creation Timestamp",
            "SME (On It)",
            "TimeTo: On It",
            "Message Link",
        ],
    );
    for record in records.iter().filter(|record| record.status == RecordStatus::InProgress) {
        table.push_row(vec![
            record.case_id.clone(),
            opt(&record.requestor),
            record.service.clone(),
            opt(&record.creation_timestamp),
            opt(&record.sme_on_it),
            opt(&record.time_to_on_it),
            opt(&record.message_link),
        ]);
    }
    table
}

pub fn data_table(records: &[ResponseRecord]) -> Table {
    let mut table = Table::new("Data", "data", DATA_COLUMNS);
    for record in records {
        table.push_row(vec![
            record.case_id.clone(),
            record.service.clone(),
            opt(&record.inquiry),
            opt(&record.requestor),
            opt(&record.creation_timestamp),
            opt(&record.sme_on_it),
            opt(&record.on_it_time),
            opt(&record.attendee),
            opt(&record.attended_timestamp),
            opt(&record.message_link),
            record.status.to_string(),
            opt(&record.case_reason),
            opt(&record.afi),
            opt(&record.afi_comment),
            opt(&record.article),
            opt(&record.time_to_on_it_raw),
            opt(&record.time_to_attended_raw),
            opt(&record.month),
            opt(&record.day),
            opt(&record.is_weekend),
            record
                .date_created
                .map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            opt(&record.working_hours),
            record.survey_score.map(|score| score.to_string()).unwrap_or_default(),
            record.hour_created.map(|hour| hour.to_string()).unwrap_or_default(),
        ]);
    }
    table
}

fn cross_tab_table<R, C>(title: &str, file_name: &str, corner: &str, tab: &CrossTab<R, C>, row_label: impl Fn(&R) -> String, col_label: impl Fn(&C) -> String, with_total: bool) -> Table
where
    R: Ord,
    C: Ord,
{
    let mut headers = vec![corner.to_string()];
    headers.extend(tab.columns.iter().map(&col_label));
    if with_total {
        headers.push("Total".to_string());
    }

    let mut table = Table::new(title, file_name, &headers[..]);
    let totals = tab.row_totals();
    for (index, row) in tab.rows.iter().enumerate() {
        let mut cells = vec![row_label(row)];
        cells.extend(tab.counts[index].iter().map(|count| count.to_string()));
        if with_total {
            cells.push(totals[index].to_string());
        }
        table.push_row(cells);
    }
    table
}

pub fn hourly_by_service(records: &[ResponseRecord]) -> Table {
    let tab = cross_tab(records, |record| record.hour_created, |record| record.service.clone());
    cross_tab_table(
        "Hourly Interactions by Service",
        "hourly_interactions_by_service",
        "Hour_Created",
        &tab,
        hour_label,
        |service| service.clone(),
        true,
    )
}

pub fn avg_on_it_by_hour(records: &[ResponseRecord], policy: MeanPolicy) -> Table {
    let mut table = Table::new(
        "Average TimeTo: On It by Hour",
        "average_time_to_on_it",
        &["Hour_Created", "TimeTo: On It Minutes", "TimeTo: On It HH:MM:SS"],
    );
    for group in group_mean(records, |record| record.hour_created, |record| policy.on_it(record)) {
        let minutes = group.mean / 60.0;
        table.push_row(vec![hour_label(&group.key), format_score(minutes), format_mean_minutes(minutes)]);
    }
    table
}

pub fn case_reason_by_hour(records: &[ResponseRecord]) -> Table {
    let tab = cross_tab(records, |record| record.hour_created, |record| record.case_reason.clone());
    cross_tab_table(
        "Case Reason Distribution by Hour",
        "case_reason_by_hour",
        "Hour_Created",
        &tab,
        hour_label,
        label,
        false,
    )
}

pub fn case_reason_distribution(records: &[ResponseRecord]) -> Table {
    let mut counts = group_count(records, |record| record.case_reason.clone());
    sort_by_count_asc(&mut counts);

    let mut table = Table::new("Distribution of Case Reasons", "case_reason_distribution", &["Case Reason", "Count"]);
    for group in counts {
        table.push_row(vec![label(&group.key), group.count.to_string()]);
    }
    table
}

fn mean_by_case_reason(records: &[ResponseRecord], title: &str, file_name: &str, header: &str, value_fn: impl Fn(&ResponseRecord) -> Option<f64>) -> Table {
    let mut means = group_mean(records, |record| record.case_reason.clone(), value_fn);
    sort_by_mean_desc(&mut means);

    let mut table = Table::new(title, file_name, &["Case Reason", header]);
    for group in means {
        table.push_row(vec![label(&group.key), format_mean_seconds(group.mean)]);
    }
    table
}

pub fn avg_attended_by_case_reason(records: &[ResponseRecord], policy: MeanPolicy) -> Table {
    mean_by_case_reason(
        records,
        "Average TimeTo: Attended by Case Reason",
        "avg_attended_by_case_reason",
        "Avg TimeTo: Attended",
        |record| policy.attended(record),
    )
}

pub fn avg_on_it_by_case_reason(records: &[ResponseRecord], policy: MeanPolicy) -> Table {
    mean_by_case_reason(
        records,
        "Average TimeTo: On It by Case Reason",
        "avg_on_it_by_case_reason",
        "Avg TimeTo: On It",
        |record| policy.on_it(record),
    )
}

/// One row per key with both response-time means, seconds and minutes.
struct ResponseTimes {
    key: Option<String>,
    on_it: f64,
    attended: f64,
}

fn response_times<F>(records: &[ResponseRecord], key_fn: F, policy: MeanPolicy) -> Vec<ResponseTimes>
where
    F: Fn(&ResponseRecord) -> Option<String>,
{
    let on_it = group_mean(records, &key_fn, |record| policy.on_it(record));
    let attended = group_mean(records, &key_fn, |record| policy.attended(record));

    // Both groupings run over the same records and keys, so they line up.
    on_it
        .into_iter()
        .zip(attended)
        .map(|(on_it, attended)| ResponseTimes {
            key: on_it.key,
            on_it: on_it.mean,
            attended: attended.mean,
        })
        .collect()
}

fn response_times_table(title: &str, file_name: &str, key_header: &str, rows: &[ResponseTimes]) -> Table {
    let mut table = Table::new(
        title,
        file_name,
        &[
            key_header,
            "TimeTo: On It",
            "TimeTo: Attended",
            "TimeTo_On_It_Minutes",
            "TimeTo_Attended_Minutes",
        ],
    );
    for row in rows {
        table.push_row(vec![
            label(&row.key),
            format_mean_seconds(row.on_it),
            format_mean_seconds(row.attended),
            format_score(row.on_it / 60.0),
            format_score(row.attended / 60.0),
        ]);
    }
    table
}

pub fn monthly_response_times(records: &[ResponseRecord], policy: MeanPolicy) -> Table {
    let mut rows = response_times(records, |record| record.month.clone(), policy);
    sort_by_month(&mut rows, |row| row.key.as_deref());
    response_times_table("Monthly Response Times", "monthly_response_times", "Month", &rows)
}

pub fn group_response_times(records: &[ResponseRecord], policy: MeanPolicy) -> Table {
    let rows = response_times(records, |record| Some(record.service.clone()), policy);
    response_times_table("Group Response Times", "group_response_times", "Service", &rows)
}

pub fn interaction_count(records: &[ResponseRecord]) -> Table {
    let mut table = Table::new("Interaction Count", "interaction_count", &["Service", "Interactions"]);
    for group in group_count(records, |record| record.service.clone()) {
        table.push_row(vec![group.key, group.count.to_string()]);
    }
    table
}

pub fn interactions_handled(records: &[ResponseRecord]) -> Table {
    let mut counts = group_count(records, |record| record.sme_on_it.clone());
    sort_by_count_desc(&mut counts);

    let mut table = Table::new("Interactions Handled", "interactions_handled", &["SME (On It)", "Unique Case Count"]);
    for group in counts {
        table.push_row(vec![label(&group.key), group.count.to_string()]);
    }
    table
}

pub fn requestor_by_service(records: &[ResponseRecord]) -> Table {
    let tab = cross_tab(records, |record| record.requestor.clone(), |record| record.service.clone());
    cross_tab_table(
        "Interaction Count by Requestor",
        "interaction_count_by_requestor",
        "Requestor",
        &tab,
        label,
        |service| service.clone(),
        false,
    )
}

pub fn sme_summary(records: &[ResponseRecord], policy: MeanPolicy) -> Table {
    let mut table = Table::new(
        "SME Summary Table",
        "sme_summary",
        &[
            "SME",
            "Avg_On_It",
            "Avg_Attended",
            "Number_of_Interactions",
            "Avg_Survey",
            "Slow_On_It",
        ],
    );
    for row in ranked_summary(records, |record| record.sme_on_it.clone(), policy) {
        let slow = !row.avg_on_it.is_nan() && row.avg_on_it / 60.0 > SLOW_ON_IT_MINUTES;
        table.push_row(vec![
            label(&row.key),
            format_mean_seconds(row.avg_on_it),
            format_mean_seconds(row.avg_attended),
            row.interactions.to_string(),
            format_score(row.avg_survey),
            if slow { "Yes".to_string() } else { "No".to_string() },
        ]);
    }
    table
}
