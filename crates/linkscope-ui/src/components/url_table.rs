//! Search box, bulk bar, sortable result table and pagination.

use crate::app::tasks::{spawn_action, spawn_bulk};
use crate::app::{ApiCtx, Route};
use crate::components::pagination::Pagination;
use crate::core::logic::status_badge_class;
use crate::core::store::AppStore;
use linkscope_api_models::{UrlResult, UrlStatus};
use linkscope_core::{SortKey, UrlAction, ViewState, or_dash, retry_allowed};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{Dispatch, use_selector};

const COLUMNS: [SortKey; 7] = [
    SortKey::Title,
    SortKey::Link,
    SortKey::Status,
    SortKey::HtmlVersion,
    SortKey::InternalLinks,
    SortKey::ExternalLinks,
    SortKey::BrokenLinks,
];

#[derive(Properties, PartialEq)]
pub(crate) struct UrlTableProps {
    pub api: ApiCtx,
}

#[function_component(UrlTable)]
pub(crate) fn url_table(props: &UrlTableProps) -> Html {
    let view = use_selector(|store: &AppStore| store.dashboard.result_view());
    let state = use_selector(|store: &AppStore| store.dashboard.view.clone());
    let dispatch = Dispatch::<AppStore>::new();

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                dispatch.reduce_mut(|store| store.dashboard.view.set_search(value));
            }
        })
    };
    let on_toggle_all = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let checked = input.checked();
                dispatch.reduce_mut(|store| {
                    let dashboard = &mut store.dashboard;
                    dashboard.view.toggle_all(&dashboard.rows, checked);
                });
            }
        })
    };
    let on_page = {
        let dispatch = dispatch.clone();
        Callback::from(move |page: usize| {
            dispatch.reduce_mut(|store| store.dashboard.view.set_page(page));
        })
    };
    let bulk = |action: UrlAction| {
        let api = props.api.clone();
        Callback::from(move |_: MouseEvent| spawn_bulk(api.clone(), action))
    };

    html! {
        <div class="url-table">
            <div class="toolbar">
                <input
                    type="search"
                    class="input"
                    placeholder="Search by URL"
                    value={state.search.clone()}
                    oninput={on_search}
                />
                if view.bulk_enabled {
                    <div class="bulk-actions">
                        <span>{format!("{} selected", view.selected_count)}</span>
                        <button class="btn" onclick={bulk(UrlAction::Retry)}>
                            {UrlAction::Retry.bulk_label()}
                        </button>
                        <button class="btn btn-error" onclick={bulk(UrlAction::Delete)}>
                            {UrlAction::Delete.bulk_label()}
                        </button>
                    </div>
                }
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                aria-label="Select all"
                                checked={view.all_selected}
                                onchange={on_toggle_all}
                            />
                        </th>
                        {for COLUMNS.iter().map(|key| render_header(*key, &state, &dispatch))}
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if view.rows.is_empty() {
                        <tr>
                            <td colspan={(COLUMNS.len() + 2).to_string()} class="empty">
                                {"No results found."}
                            </td>
                        </tr>
                    } else {
                        {for view.rows.iter().map(|row| render_row(row, &state, &props.api, &dispatch))}
                    }
                </tbody>
            </table>
            <Pagination page={view.page} total_pages={view.total_pages} {on_page} />
        </div>
    }
}

fn render_header(key: SortKey, state: &ViewState, dispatch: &Dispatch<AppStore>) -> Html {
    let onclick = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| store.dashboard.view.toggle_sort(key));
        })
    };
    let arrow = (state.sort == Some(key)).then(|| state.direction.arrow());

    html! {
        <th class="sortable" {onclick}>
            {key.label()}
            if let Some(arrow) = arrow {
                <span class="sort-arrow">{arrow}</span>
            }
        </th>
    }
}

fn render_row(
    row: &UrlResult,
    state: &ViewState,
    api: &ApiCtx,
    dispatch: &Dispatch<AppStore>,
) -> Html {
    let id = row.id;
    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: Event| {
            dispatch.reduce_mut(|store| store.dashboard.view.toggle(id));
        })
    };
    let action = |action: UrlAction| {
        let api = api.clone();
        Callback::from(move |_: MouseEvent| spawn_action(api.clone(), action, id))
    };

    html! {
        <tr key={id}>
            <td>
                <input
                    type="checkbox"
                    aria-label="Select row"
                    checked={state.selected.contains(&id)}
                    onchange={on_select}
                />
            </td>
            <td>
                <Link<Route> to={Route::Details { id }} classes={classes!("link")}>
                    {or_dash(&row.title).to_string()}
                </Link<Route>>
            </td>
            <td class="truncate">{row.link.clone()}</td>
            <td>{render_status(row.status)}</td>
            <td>{or_dash(&row.html_version).to_string()}</td>
            <td>{row.internal_links}</td>
            <td>{row.external_links}</td>
            <td>{row.broken_links}</td>
            <td class="row-actions">
                <button
                    class="btn btn-sm"
                    disabled={!retry_allowed(row)}
                    onclick={action(UrlAction::Retry)}
                >
                    {"Retry"}
                </button>
                <button class="btn btn-sm btn-error" onclick={action(UrlAction::Delete)}>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

fn render_status(status: UrlStatus) -> Html {
    html! {
        <span class={status_badge_class(status)}>
            if status == UrlStatus::Running {
                <span class="loading loading-spinner loading-xs" aria-hidden="true"></span>
            }
            {status.as_str()}
        </span>
    }
}
