//! Detail page: field grid, link-distribution chart and broken links.

use crate::app::{ApiCtx, Route};
use crate::core::logic::{
    CHART_RADIUS, CHART_SIZE, PieShape, legend_label, pie_shape, slice_color,
    status_badge_class,
};
use linkscope_api_models::{BrokenLinkItem, UrlDetail, UrlResult};
use linkscope_core::{DetailState, NO_BROKEN_LINKS, link_distribution, or_dash, yes_no};
use std::cell::Cell;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[derive(Properties, PartialEq)]
pub(crate) struct DetailsPageProps {
    pub id: u64,
}

#[function_component(DetailsPage)]
pub(crate) fn details_page(props: &DetailsPageProps) -> Html {
    let api = use_context::<ApiCtx>();
    let state = use_state(DetailState::default);
    let navigator = use_navigator();
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(id, api): &(u64, Option<ApiCtx>)| {
                let id = *id;
                let superseded = Rc::new(Cell::new(false));
                state.set(DetailState::Loading);
                match api.clone() {
                    Some(api) => {
                        let superseded = superseded.clone();
                        spawn_local(async move {
                            let next = DetailState::load(api.client.as_ref(), id).await;
                            if !superseded.get() {
                                state.set(next);
                            }
                        });
                    }
                    None => state.set(DetailState::Failed("API client unavailable".into())),
                }
                move || superseded.set(true)
            },
            (props.id, api),
        );
    }
    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Dashboard);
        }
    });

    let body = match &*state {
        DetailState::Loading => html! { <p class="loading-text">{"Loading..."}</p> },
        DetailState::Failed(message) => html! {
            <div class="alert alert-error" role="alert">{message.clone()}</div>
        },
        DetailState::Loaded(detail) => render_detail(detail),
    };

    html! {
        <section class="details">
            <button class="btn" onclick={on_back}>{"Back"}</button>
            {body}
        </section>
    }
}

fn render_detail(detail: &UrlDetail) -> Html {
    let result = &detail.result;
    html! {
        <>
            <h1>{or_dash(&result.title).to_string()}</h1>
            <dl class="field-grid">
                <dt>{"URL"}</dt>
                <dd><a href={result.link.clone()} target="_blank" rel="noopener noreferrer">{result.link.clone()}</a></dd>
                <dt>{"Status"}</dt>
                <dd><span class={status_badge_class(result.status)}>{result.status.as_str()}</span></dd>
                <dt>{"HTML Version"}</dt>
                <dd>{or_dash(&result.html_version).to_string()}</dd>
                <dt>{"Login Form"}</dt>
                <dd>{yes_no(result.has_login_form)}</dd>
                <dt>{"Internal Links"}</dt>
                <dd>{result.internal_links}</dd>
                <dt>{"External Links"}</dt>
                <dd>{result.external_links}</dd>
                <dt>{"Broken Links"}</dt>
                <dd>{result.broken_links}</dd>
            </dl>
            <LinkChart result={result.clone()} />
            {render_broken_links(&detail.broken_link_items)}
        </>
    }
}

fn render_broken_links(items: &[BrokenLinkItem]) -> Html {
    html! {
        <section class="broken-links">
            <h2>{"Broken Links"}</h2>
            if items.is_empty() {
                <p>{NO_BROKEN_LINKS}</p>
            } else {
                <ul>
                    {for items.iter().map(|item| html! {
                        <li>
                            <span class="truncate">{item.link.clone()}</span>
                            <span class="badge badge-error">{item.status.clone()}</span>
                        </li>
                    })}
                </ul>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LinkChartProps {
    result: UrlResult,
}

#[function_component(LinkChart)]
fn link_chart(props: &LinkChartProps) -> Html {
    let slices = link_distribution(&props.result);
    let center = (CHART_SIZE / 2.0).to_string();
    let radius = CHART_RADIUS.to_string();

    let shape = match pie_shape(&slices) {
        PieShape::Ring => html! {
            <circle cx={center.clone()} cy={center.clone()} r={radius.clone()} class="chart-ring" fill="none" stroke="#d1d5db" stroke-width="2" />
        },
        PieShape::Full { label, color } => html! {
            <circle cx={center.clone()} cy={center.clone()} r={radius.clone()} fill={color}>
                <title>{label}</title>
            </circle>
        },
        PieShape::Wedges(wedges) => html! {
            {for wedges.into_iter().map(|wedge| html! {
                <path d={wedge.path} fill={wedge.color}>
                    <title>{wedge.label}</title>
                </path>
            })}
        },
    };
    let view_box = format!("0 0 {CHART_SIZE} {CHART_SIZE}");

    html! {
        <figure class="link-chart">
            <svg viewBox={view_box} width="200" height="200" role="img" aria-label="Internal versus external links">
                {shape}
            </svg>
            <figcaption>
                <ul class="legend">
                    {for slices.iter().enumerate().map(|(index, slice)| html! {
                        <li>
                            <span class="swatch" style={format!("background-color: {}", slice_color(index))}></span>
                            {legend_label(slice)}
                        </li>
                    })}
                </ul>
            </figcaption>
        </figure>
    }
}
