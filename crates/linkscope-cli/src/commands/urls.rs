use anyhow::anyhow;
use linkscope_core::{
    DashboardState, FETCH_FAILED_BANNER, SubmitForm, UrlAction, UrlService, act_on_selection,
    refresh,
};

use crate::cli::{AppContext, OutputFormat, ViewArgs};
use crate::client::{CliError, CliResult, classify_problem};
use crate::output::{render_bulk_outcome, render_detail, render_result_view};

pub(crate) async fn handle_list(
    ctx: &AppContext,
    args: &ViewArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let mut dashboard = DashboardState::default();
    dashboard.view = args.view_state();
    refresh(&mut dashboard, &ctx.service).await;
    if dashboard.error.is_some() {
        return Err(CliError::failure(anyhow!(FETCH_FAILED_BANNER)));
    }
    print!("{}", render_result_view(&dashboard.result_view(), format)?);
    Ok(())
}

pub(crate) async fn handle_show(ctx: &AppContext, id: u64, format: OutputFormat) -> CliResult<()> {
    let detail = ctx.service.get(id).await.map_err(classify_problem)?;
    print!("{}", render_detail(&detail, format)?);
    Ok(())
}

pub(crate) async fn handle_add(ctx: &AppContext, url: &str, format: OutputFormat) -> CliResult<()> {
    let mut form = SubmitForm::default();
    form.set_input(url);
    let created = form.submit(&ctx.service).await?;
    match (format, created) {
        (OutputFormat::Json, Some(created)) => {
            let text = serde_json::to_string_pretty(&created)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            println!("{text}");
        }
        (OutputFormat::Table, Some(created)) => {
            println!("Submitted {} (id: {}, status: {})", created.link, created.id, created.status);
        }
        (_, None) => println!("Submitted {url}"),
    }
    Ok(())
}

/// Apply `action` to every id, then refresh the list once.
///
/// A failed refresh is reported as a failure even when every action succeeded.
pub(crate) async fn handle_action(
    ctx: &AppContext,
    action: UrlAction,
    ids: &[u64],
    format: OutputFormat,
) -> CliResult<()> {
    let mut dashboard = DashboardState::default();
    dashboard.view.selected = ids.iter().copied().collect();

    let outcome = act_on_selection(&mut dashboard, &ctx.service, action).await;
    let remaining = dashboard.error.is_none().then_some(dashboard.rows.len());
    print!("{}", render_bulk_outcome(action, &outcome, remaining, format)?);

    if !outcome.is_success() {
        return Err(CliError::failure(anyhow!(
            "{} ({})",
            action.failure_notice(),
            outcome.summary()
        )));
    }
    if dashboard.error.is_some() {
        return Err(CliError::failure(anyhow!(FETCH_FAILED_BANNER)));
    }
    Ok(())
}
