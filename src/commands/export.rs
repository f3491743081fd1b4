use super::report::{selected_views, FilterArgs, Session};
use crate::{
    libs::{
        dashboard::ViewKind,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filters: FilterArgs,
    #[arg(long, value_enum, help = "Views to export, all when omitted")]
    view: Vec<ViewKind>,
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    #[arg(short, long, help = "Output directory, defaults to the configured export directory")]
    output: Option<PathBuf>,
}

pub async fn cmd(export_args: ExportArgs) -> Result<()> {
    let mut session = Session::open(&export_args.filters)?;
    let report = session
        .report(&export_args.filters.predicates(), &selected_views(&export_args.view))
        .await?;

    let output = export_args.output.or_else(|| session.settings().export_dir.clone());
    let exporter = Exporter::new(export_args.format, output);

    for table in &report.tables {
        let path = exporter
            .export(table)
            .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;
        msg_success!(Message::ExportCompleted(path.display().to_string()));
    }

    Ok(())
}
