use crate::components::dashboard::DashboardPage;
use crate::components::details::DetailsPage;
use crate::components::not_found::NotFound;
use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;
mod routes;
pub(crate) mod tasks;

#[function_component(LinkscopeApp)]
pub(crate) fn linkscope_app() -> Html {
    let api_ctx = use_memo(|_| preferences::load_config().map(ApiCtx::new), ());
    let toasts = use_selector(|store: &AppStore| store.toasts.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let on_dismiss = Callback::from(move |id: u64| dispatch.reduce_mut(|store| store.dismiss_toast(id)));

    let api = match &*api_ctx {
        Ok(api) => api.clone(),
        Err(err) => {
            return html! {
                <main class="app">
                    <div class="alert alert-error" role="alert">
                        {format!("Invalid connection settings: {err}")}
                    </div>
                </main>
            };
        }
    };

    html! {
        <ContextProvider<ApiCtx> context={api}>
            <BrowserRouter>
                <main class="app">
                    <Switch<Route> render={switch} />
                </main>
                <ToastHost toasts={(*toasts).clone()} {on_dismiss} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Details { id } => html! { <DetailsPage {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Mount the dashboard on `#root`, or on `<body>` when no root element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LinkscopeApp>::with_root(root).render();
    } else {
        yew::Renderer::<LinkscopeApp>::new().render();
    }
}
