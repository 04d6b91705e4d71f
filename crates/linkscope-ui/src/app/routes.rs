//! Routing definitions for the dashboard.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/details/:id")]
    Details { id: u64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}
