use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Navigation shell: mounts the router and hands every path to the
/// role-gated switch.
///
/// There is no session bootstrap; the store starts empty on every page load
/// and only a fresh login fills it.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
