use super::report::{selected_views, FilterArgs, Session};
use crate::{
    libs::{
        dashboard::ViewKind,
        filter::Predicate,
        messages::Message,
        scheduler::{RefreshRequest, RefreshScheduler},
        view::View,
    },
    msg_error, msg_info, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::io::BufRead;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Args)]
pub struct WatchArgs {
    #[command(flatten)]
    filters: FilterArgs,
    #[arg(long, value_enum, help = "Views to show, all when omitted")]
    view: Vec<ViewKind>,
    #[arg(long, help = "Refresh interval in seconds, overrides the configuration")]
    interval: Option<u64>,
}

/// Whether a line typed during `watch` asks for a refresh.
pub fn is_refresh_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("r")
}

pub async fn cmd(watch_args: WatchArgs) -> Result<()> {
    let mut session = Session::open(&watch_args.filters)?;
    let period = watch_args
        .interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| session.settings().refresh_interval());
    let predicates = watch_args.filters.predicates();
    let views = selected_views(&watch_args.view);

    render(&mut session, &predicates, &views).await;

    let (requests_tx, mut requests_rx) = mpsc::channel(8);
    let scheduler = RefreshScheduler::spawn(period, requests_tx.clone());
    spawn_manual_trigger(requests_tx);

    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            msg_error!(Message::WatchCtrlCListenFailed(e.to_string()));
        }
        let _ = shutdown_tx.send(());
    });

    msg_info!(Message::WatchStarted(period.as_secs()));
    msg_info!(Message::WatchManualHint);

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => break,
            request = requests_rx.recv() => {
                let Some(request) = request else { break };
                match request {
                    RefreshRequest::Timer => msg_info!(Message::WatchRefreshTimer),
                    RefreshRequest::Manual => msg_info!(Message::WatchRefreshManual),
                }
                session.refresh();
                render(&mut session, &predicates, &views).await;
            }
        }
    }

    msg_info!(Message::WatchStopping);
    scheduler.stop().await
}

/// One render pass; a failure is reported and the loop keeps running.
async fn render(session: &mut Session, predicates: &[Predicate], views: &[ViewKind]) {
    match session.report(predicates, views).await {
        Ok(report) => View::report(&report),
        Err(e) => msg_warning!(Message::WatchRenderFailed(e.to_string())),
    }
}

/// Reads stdin on a dedicated thread and turns `r` lines into manual refresh
/// requests. The thread ends with stdin or when the receiver is gone.
fn spawn_manual_trigger(requests: mpsc::Sender<RefreshRequest>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if is_refresh_command(&line) && requests.blocking_send(RefreshRequest::Manual).is_err() {
                return;
            }
        }
        msg_info!(Message::WatchStdinClosed);
    });
}
