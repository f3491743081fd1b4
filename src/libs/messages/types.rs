#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigModuleSheets,
    ConfigModuleFile,
    ConfigModuleReport,
    ConfigSaved,
    ConfigSaveError,
    ConfigDeleted,
    ConfigNotFound,
    PromptSelectModules,
    PromptSheetsUrl,
    PromptCsvPath,
    PromptWorksheet,
    PromptCacheTtl,
    PromptRefreshInterval,
    PromptMeanPolicy,

    // === DATA SOURCE MESSAGES ===
    LoadingWorksheet(String),
    RecordsLoaded(usize),
    RecordsFromCache(usize),
    FetchFailed(String),
    NoRecords,

    // === REPORT MESSAGES ===
    ReportHeader(String), // worksheet
    ActiveFilters(String),
    MeanPolicyInUse(String),
    FilterOptionsHeader(String), // field
    ViewEmpty(String),           // view title
    ProfileHeader(usize, usize), // rows, columns

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportFailed(String),

    // === WATCH MESSAGES ===
    WatchStarted(u64), // refresh interval, seconds
    WatchManualHint,
    WatchRefreshTimer,
    WatchRefreshManual,
    WatchRenderFailed(String),
    WatchStopping,
    WatchCtrlCListenFailed(String),
    WatchStdinClosed,
    SchedulerStopped,
}
