use crate::{
    api::Source,
    libs::{
        aggregate::MeanPolicy,
        config::{Config, ReportConfig},
        dashboard::{Dashboard, Report, ViewKind},
        filter::{self, FilterField, FilterValue, Predicate, ALL},
        loader::{LoadOptions, RecordLoader, Records},
        messages::Message,
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

/// Record selection shared by every reporting command.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    #[arg(long, default_value = ALL, help = "Only this service")]
    pub service: String,
    #[arg(long, default_value = ALL, help = "Only this month, e.g. March")]
    pub month: String,
    #[arg(long, default_value = ALL, help = "Only this status, e.g. \"In Queue\"")]
    pub status: String,
    #[arg(long, default_value = ALL, help = "Only this Working Hours? value")]
    pub working_hours: String,
    #[arg(long = "filter", value_parser = Predicate::parse, help = "Extra field=value filter, repeatable")]
    pub extra: Vec<Predicate>,
    #[arg(long, help = "Include records created during working hours")]
    pub all_hours: bool,
    #[arg(long, value_enum, help = "How missing durations count toward averages")]
    pub policy: Option<MeanPolicy>,
    #[arg(long, help = "Worksheet to load instead of the configured one")]
    pub worksheet: Option<String>,
}

impl FilterArgs {
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = vec![
            Predicate::new(FilterField::Service, &self.service),
            Predicate::new(FilterField::Month, &self.month),
            Predicate::new(FilterField::WorkingHours, &self.working_hours),
            Predicate::new(FilterField::Status, &self.status),
        ];
        predicates.extend(self.extra.iter().cloned());
        predicates
    }

    pub fn load_options(&self) -> LoadOptions {
        if self.all_hours {
            LoadOptions::default()
        } else {
            LoadOptions::off_hours()
        }
    }

    /// `Field=value` pairs of the restricting filters, or `All`.
    pub fn describe(&self) -> String {
        let active: Vec<String> = self
            .predicates()
            .iter()
            .filter_map(|predicate| match &predicate.value {
                FilterValue::All => None,
                FilterValue::Exact(value) => Some(format!("{}={}", predicate.field.name(), value)),
            })
            .collect();

        if active.is_empty() {
            ALL.to_string()
        } else {
            active.join(", ")
        }
    }
}

/// Configured source, loader and settings for one command run.
pub struct Session {
    source: Source,
    loader: RecordLoader,
    worksheet: String,
    policy: MeanPolicy,
    settings: ReportConfig,
}

impl Session {
    pub fn open(args: &FilterArgs) -> Result<Self> {
        let config = Config::read()?;
        let settings = config.report_settings();
        let source = Source::from_config(&config)?;

        Ok(Self {
            source,
            loader: RecordLoader::new(settings.cache_ttl(), args.load_options()),
            worksheet: args.worksheet.clone().unwrap_or_else(|| settings.worksheet.clone()),
            policy: args.policy.unwrap_or(settings.mean_policy),
            settings,
        })
    }

    pub fn worksheet(&self) -> &str {
        &self.worksheet
    }

    pub fn policy(&self) -> MeanPolicy {
        self.policy
    }

    pub fn settings(&self) -> &ReportConfig {
        &self.settings
    }

    pub async fn records(&mut self) -> Result<Records> {
        msg_debug!(Message::LoadingWorksheet(self.worksheet.clone()));

        let (records, fetched) = self
            .loader
            .load(&self.source, &self.worksheet)
            .await
            .map_err(|e| msg_error_anyhow!(Message::FetchFailed(e.to_string())))?;

        if fetched {
            msg_debug!(Message::RecordsLoaded(records.len()));
        } else {
            msg_debug!(Message::RecordsFromCache(records.len()));
        }
        Ok(records)
    }

    /// Drops cached records so the next load goes to the source.
    pub fn refresh(&mut self) {
        self.loader.refresh();
    }

    /// Loads (or reuses) the records and renders the requested views.
    pub async fn report(&mut self, predicates: &[Predicate], views: &[ViewKind]) -> Result<Report> {
        let records = self.records().await?;
        Ok(Dashboard::new(self.policy).render(&records, predicates, views))
    }
}

/// The requested views, or every view when none was named.
pub fn selected_views(views: &[ViewKind]) -> Vec<ViewKind> {
    if views.is_empty() {
        ViewKind::ALL.to_vec()
    } else {
        views.to_vec()
    }
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    filters: FilterArgs,
    #[arg(long, value_enum, help = "Views to show, all when omitted")]
    view: Vec<ViewKind>,
    #[arg(long, value_enum, help = "List the selectable values of a filter field")]
    options: Option<FilterField>,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let mut session = Session::open(&report_args.filters)?;

    if let Some(field) = report_args.options {
        let records = session.records().await?;
        View::options(field.name(), &filter::options(&records, field));
        return Ok(());
    }

    let report = session
        .report(&report_args.filters.predicates(), &selected_views(&report_args.view))
        .await?;

    msg_print!(Message::ReportHeader(session.worksheet().to_string()), true);
    msg_info!(Message::ActiveFilters(report_args.filters.describe()));
    msg_info!(Message::MeanPolicyInUse(session.policy().to_string()));
    View::report(&report);

    Ok(())
}
