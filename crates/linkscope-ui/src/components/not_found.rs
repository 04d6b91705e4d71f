use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFound)]
pub(crate) fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Dashboard} classes={classes!("btn")}>{"Back to dashboard"}</Link<Route>>
        </section>
    }
}
