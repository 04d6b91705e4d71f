use std::future::pending;

use tokio::time::{MissedTickBehavior, interval};

use linkscope_core::{DashboardState, refresh};

use crate::cli::{AppContext, OutputFormat, WatchArgs};
use crate::client::CliResult;
use crate::output::render_result_view;

/// Poll the list on the configured interval and re-render after each fetch.
///
/// Fetch failures keep the previous rows and print the banner to stderr; the
/// loop ends on Ctrl-C or after `--count` refreshes.
pub(crate) async fn handle_watch(
    ctx: &AppContext,
    args: &WatchArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "cannot listen for Ctrl-C");
            pending::<()>().await;
        }
    };
    watch_until(ctx, args, format, interrupt).await
}

/// `shutdown` is raced against both the wait and the fetch itself.
async fn watch_until<F>(
    ctx: &AppContext,
    args: &WatchArgs,
    format: OutputFormat,
    shutdown: F,
) -> CliResult<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut dashboard = DashboardState::default();
    dashboard.view = args.view.view_state();
    let period = ctx.service.config().poll_interval;
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tracing::info!(interval_secs = period.as_secs(), "watching results");

    let mut refreshes: u64 = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            () = &mut shutdown => {
                tracing::info!("interrupted");
                break;
            }
        }

        let applied = tokio::select! {
            applied = refresh(&mut dashboard, &ctx.service) => applied,
            () = &mut shutdown => {
                tracing::info!("interrupted during fetch");
                break;
            }
        };
        if applied {
            if let Some(banner) = &dashboard.error {
                eprintln!("{banner}");
            }
            if dashboard.loaded {
                print!("{}", render_result_view(&dashboard.result_view(), format)?);
            }
        }

        refreshes = refreshes.saturating_add(1);
        if args.count.is_some_and(|count| refreshes >= count) {
            break;
        }
    }
    Ok(())
}
