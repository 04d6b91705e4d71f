//! Pure UI helpers extracted from components for non-wasm testing.

use std::f64::consts::{FRAC_PI_2, TAU};

use linkscope_api_models::UrlStatus;
use linkscope_config::defaults::{KEY_API_TOKEN, KEY_API_URL, KEY_POLL_INTERVAL_SECS};
use linkscope_core::ChartSlice;

/// Local-storage keys that override connection settings, by configuration key.
pub const STORAGE_KEYS: [(&str, &str); 3] = [
    (KEY_API_URL, "linkscope.api_url"),
    (KEY_API_TOKEN, "linkscope.api_token"),
    (KEY_POLL_INTERVAL_SECS, "linkscope.poll_interval_secs"),
];

/// Storage key backing `config_key`; the request timeout has none in the browser.
#[must_use]
pub fn storage_key(config_key: &str) -> Option<&'static str> {
    STORAGE_KEYS
        .iter()
        .find(|(key, _)| *key == config_key)
        .map(|(_, storage)| *storage)
}

/// Fill colours for the chart slices, by slice index.
pub const SLICE_COLORS: [&str; 2] = ["#58a8ea", "#2545e7"];

/// Side length of the square chart viewport.
pub const CHART_SIZE: f64 = 200.0;
/// Radius of the chart circle.
pub const CHART_RADIUS: f64 = 80.0;

const CENTER: f64 = CHART_SIZE / 2.0;

/// One pie wedge as an SVG path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wedge {
    /// Legend label of the slice.
    pub label: &'static str,
    /// Fill colour.
    pub color: &'static str,
    /// SVG path data.
    pub path: String,
}

/// What the chart should draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PieShape {
    /// Every slice is zero: an outlined ring with no fill.
    Ring,
    /// A single slice holds the whole total and is drawn as a filled circle.
    Full {
        /// Legend label of the slice.
        label: &'static str,
        /// Fill colour.
        color: &'static str,
    },
    /// Two or more non-empty slices.
    Wedges(Vec<Wedge>),
}

/// Colour for the slice at `index`, cycling through [`SLICE_COLORS`].
#[must_use]
pub const fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Lay out `slices` clockwise starting at twelve o'clock.
#[must_use]
pub fn pie_shape(slices: &[ChartSlice]) -> PieShape {
    let filled: Vec<(usize, &ChartSlice)> = slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.value > 0)
        .collect();

    match filled.as_slice() {
        [] => PieShape::Ring,
        [(index, slice)] => PieShape::Full {
            label: slice.label,
            color: slice_color(*index),
        },
        _ => {
            let mut start = 0.0;
            let wedges = filled
                .iter()
                .map(|(index, slice)| {
                    let end = start + slice.fraction;
                    let wedge = Wedge {
                        label: slice.label,
                        color: slice_color(*index),
                        path: wedge_path(start, end),
                    };
                    start = end;
                    wedge
                })
                .collect();
            PieShape::Wedges(wedges)
        }
    }
}

/// SVG path for the wedge spanning `start..end`, both as fractions of a turn.
#[must_use]
pub fn wedge_path(start: f64, end: f64) -> String {
    let (x0, y0) = point_at(start);
    let (x1, y1) = point_at(end);
    let large_arc = u8::from(end - start > 0.5);
    format!(
        "M {CENTER:.2} {CENTER:.2} L {x0:.2} {y0:.2} A {CHART_RADIUS:.2} {CHART_RADIUS:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

fn point_at(fraction: f64) -> (f64, f64) {
    let angle = fraction.mul_add(TAU, -FRAC_PI_2);
    (
        CHART_RADIUS.mul_add(angle.cos(), CENTER),
        CHART_RADIUS.mul_add(angle.sin(), CENTER),
    )
}

/// Badge classes for a status cell.
#[must_use]
pub const fn status_badge_class(status: UrlStatus) -> &'static str {
    match status {
        UrlStatus::Queued => "badge badge-ghost",
        UrlStatus::Running => "badge badge-info",
        UrlStatus::Done => "badge badge-success",
        UrlStatus::Error => "badge badge-error",
    }
}

/// Page numbers offered by the pagination bar.
#[must_use]
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages.max(1)).collect()
}

/// Target of the "Prev" button, if enabled.
#[must_use]
pub const fn prev_page(page: usize) -> Option<usize> {
    if page > 1 { Some(page - 1) } else { None }
}

/// Target of the "Next" button, if enabled.
#[must_use]
pub const fn next_page(page: usize, total_pages: usize) -> Option<usize> {
    if page < total_pages {
        Some(page + 1)
    } else {
        None
    }
}

/// Legend entry: `Internal: 3 (75%)`.
#[must_use]
pub fn legend_label(slice: &ChartSlice) -> String {
    format!("{}: {} ({}%)", slice.label, slice.value, slice.percent())
}
