//! Output renderers and formatting helpers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use linkscope_api_models::UrlDetail;
use linkscope_core::detail::{is_empty_distribution, link_distribution, or_dash, yes_no};
use linkscope_core::{BulkOutcome, NO_BROKEN_LINKS, ResultView, UrlAction};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

/// Text shown for a page with no rows.
pub(crate) const NO_RESULTS: &str = "No results found.";

pub(crate) fn render_result_view(view: &ResultView, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "page": view.page,
            "total_pages": view.total_pages,
            "filtered_count": view.filtered_count,
            "rows": view.rows,
        })),
        OutputFormat::Table => {
            let mut out = String::new();
            if view.rows.is_empty() {
                out.push_str(NO_RESULTS);
                out.push('\n');
            } else {
                let _ = writeln!(
                    out,
                    "{:>6} {:<8} {:<8} {:>8} {:>8} {:>6}  {:<24} URL",
                    "ID", "STATUS", "HTML", "INTERNAL", "EXTERNAL", "BROKEN", "TITLE"
                );
                for row in &view.rows {
                    let _ = writeln!(
                        out,
                        "{:>6} {:<8} {:<8} {:>8} {:>8} {:>6}  {:<24} {}",
                        row.id,
                        row.status.as_str(),
                        truncate(or_dash(&row.html_version), 8),
                        row.internal_links,
                        row.external_links,
                        row.broken_links,
                        truncate(or_dash(&row.title), 24),
                        row.link
                    );
                }
            }
            let _ = writeln!(
                out,
                "page {} / {} ({} results)",
                view.page, view.total_pages, view.filtered_count
            );
            Ok(out)
        }
    }
}

pub(crate) fn render_detail(detail: &UrlDetail, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(detail),
        OutputFormat::Table => {
            let result = &detail.result;
            let mut out = String::new();
            let _ = writeln!(out, "id: {}", result.id);
            let _ = writeln!(out, "title: {}", or_dash(&result.title));
            let _ = writeln!(out, "url: {}", result.link);
            let _ = writeln!(out, "status: {}", result.status);
            let _ = writeln!(out, "html version: {}", or_dash(&result.html_version));
            let _ = writeln!(out, "login form: {}", yes_no(result.has_login_form));
            let _ = writeln!(out, "internal links: {}", result.internal_links);
            let _ = writeln!(out, "external links: {}", result.external_links);
            let _ = writeln!(out, "broken links: {}", result.broken_links);
            if !result.created_at.is_empty() {
                let _ = writeln!(out, "created: {}", result.created_at);
            }

            out.push_str("link distribution:\n");
            let slices = link_distribution(result);
            if is_empty_distribution(&slices) {
                out.push_str("  (no links)\n");
            } else {
                for slice in slices {
                    let _ = writeln!(
                        out,
                        "  {:<9} {:>6} {:>4}%",
                        slice.label,
                        slice.value,
                        slice.percent()
                    );
                }
            }

            out.push_str("broken link details:\n");
            if detail.broken_link_items.is_empty() {
                let _ = writeln!(out, "  {NO_BROKEN_LINKS}");
            } else {
                for item in &detail.broken_link_items {
                    let _ = writeln!(out, "  {}  {}", or_dash(&item.status), item.link);
                }
            }
            Ok(out)
        }
    }
}

pub(crate) fn render_bulk_outcome(
    action: UrlAction,
    outcome: &BulkOutcome,
    remaining: Option<usize>,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "action": action.as_str(),
            "succeeded": outcome.succeeded,
            "failed": outcome.failed,
            "remaining": remaining,
        })),
        OutputFormat::Table => {
            let mut out = format!("{action}: {}\n", outcome.summary());
            if !outcome.failed.is_empty() {
                let failed: Vec<String> = outcome.failed.iter().map(u64::to_string).collect();
                let _ = writeln!(out, "failed ids: {}", failed.join(", "));
            }
            if let Some(remaining) = remaining {
                let _ = writeln!(out, "{remaining} results remaining");
            }
            Ok(out)
        }
    }
}

fn to_json(value: &impl serde::Serialize) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map(|text| format!("{text}\n"))
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

/// Shorten `value` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub(crate) fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}
