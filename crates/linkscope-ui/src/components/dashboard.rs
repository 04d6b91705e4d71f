//! Dashboard page: owns the polling timer for the result list.

use crate::app::ApiCtx;
use crate::app::tasks::spawn_refresh;
use crate::components::url_form::UrlForm;
use crate::components::url_table::UrlTable;
use crate::core::store::AppStore;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    use_context::<ApiCtx>().map_or_else(
        || html! { <div class="alert alert-error">{"API client unavailable"}</div> },
        |api| html! { <Dashboard {api} /> },
    )
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    api: ApiCtx,
}

#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let error = use_selector(|store: &AppStore| store.dashboard.error.clone());
    let poller = use_mut_ref(|| None as Option<Interval>);
    {
        let poller = poller.clone();
        use_effect_with_deps(
            move |api: &ApiCtx| {
                Dispatch::<AppStore>::new().reduce_mut(AppStore::reset_view);
                spawn_refresh(api.clone());
                let tick = api.clone();
                *poller.borrow_mut() = Some(Interval::new(api.poll_interval_ms(), move || {
                    spawn_refresh(tick.clone());
                }));
                move || drop(poller.borrow_mut().take())
            },
            props.api.clone(),
        );
    }

    html! {
        <section class="dashboard">
            <h1>{"Website Analyzer"}</h1>
            if let Some(message) = (*error).clone() {
                <div class="alert alert-error" role="alert">{message}</div>
            }
            <UrlForm api={props.api.clone()} />
            <UrlTable api={props.api.clone()} />
        </section>
    }
}
