use super::report::{FilterArgs, Session};
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        filter::apply_filters,
        messages::Message,
        profile::profile,
        view::View,
    },
    msg_error_anyhow, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(flatten)]
    filters: FilterArgs,
    #[arg(long, value_enum, help = "Also export the profile tables")]
    export: Option<ExportFormat>,
}

pub async fn cmd(profile_args: ProfileArgs) -> Result<()> {
    let mut session = Session::open(&profile_args.filters)?;
    let records = session.records().await?;
    let records = apply_filters(&records, &profile_args.filters.predicates());

    if records.is_empty() {
        msg_warning!(Message::NoRecords);
    }

    let profile = profile(&records);
    msg_print!(Message::ProfileHeader(profile.rows, profile.columns), true);
    let tables = profile.tables();
    for table in &tables {
        View::table(table);
    }

    if let Some(format) = profile_args.export {
        let exporter = Exporter::new(format, session.settings().export_dir.clone());
        let paths = exporter
            .export_all(&tables)
            .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;
        for path in paths {
            msg_success!(Message::ExportCompleted(path.display().to_string()));
        }
    }

    Ok(())
}
