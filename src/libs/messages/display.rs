//! Display implementation for srrview messages.
//!
//! All user-facing text lives here, so commands and library code refer to a
//! [`Message`] variant instead of formatting strings inline.
//!
//! ```rust
//! use srrview::libs::messages::Message;
//!
//! assert_eq!(Message::RecordsLoaded(3).to_string(), "Loaded 3 records");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigModuleSheets => "Published spreadsheet settings".to_string(),
            Message::ConfigModuleFile => "Local CSV file settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file to delete".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptSheetsUrl => "Enter the published CSV URL".to_string(),
            Message::PromptCsvPath => "Enter the path to the CSV export".to_string(),
            Message::PromptWorksheet => "Enter the worksheet name".to_string(),
            Message::PromptCacheTtl => "Cache lifetime in seconds".to_string(),
            Message::PromptRefreshInterval => "Refresh interval in seconds".to_string(),
            Message::PromptMeanPolicy => "How should missing durations count toward averages?".to_string(),

            // === DATA SOURCE MESSAGES ===
            Message::LoadingWorksheet(name) => format!("Loading worksheet '{}'", name),
            Message::RecordsLoaded(count) => format!("Loaded {} records", count),
            Message::RecordsFromCache(count) => format!("Using {} cached records", count),
            Message::FetchFailed(e) => format!("Failed to fetch records: {}", e),
            Message::NoRecords => "No records match the current selection".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(worksheet) => format!("Off-hours report: {}", worksheet),
            Message::ActiveFilters(filters) => format!("Filters: {}", filters),
            Message::MeanPolicyInUse(policy) => format!("Missing durations: {}", policy),
            Message::FilterOptionsHeader(field) => format!("Available values for {}:", field),
            Message::ViewEmpty(title) => format!("{}: no rows", title),
            Message::ProfileHeader(rows, columns) => format!("Dataset shape: {} rows x {} columns", rows, columns),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportFailed(e) => format!("Export failed: {}", e),

            // === WATCH MESSAGES ===
            Message::WatchStarted(secs) => format!("Watching for changes, refreshing every {} seconds", secs),
            Message::WatchManualHint => "Press r and Enter to refresh now, Ctrl+C to quit".to_string(),
            Message::WatchRefreshTimer => "Scheduled refresh".to_string(),
            Message::WatchRefreshManual => "Manual refresh".to_string(),
            Message::WatchRenderFailed(e) => format!("Refresh failed: {}", e),
            Message::WatchStopping => "Stopping watch".to_string(),
            Message::WatchCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatchStdinClosed => "Input closed, manual refresh disabled".to_string(),
            Message::SchedulerStopped => "Refresh scheduler stopped".to_string(),
        };
        write!(f, "{}", s)
    }
}
