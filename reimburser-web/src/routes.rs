use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::models::UserRole;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The application routes, one per view.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Login,
    #[at("/register")]
    Register,
    #[at("/submit")]
    Submit,
    #[at("/collection")]
    Collection,
    #[at("/manager-portal")]
    ManagerPortal,
    #[at("/employees")]
    Employees,
    #[at("/update-manager")]
    UpdateManager,
    #[at("/update-employee")]
    UpdateEmployee,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where a freshly authenticated session lands.
///
/// Shared by the post-login navigation and the collection view's BACK button
/// so the two decision points cannot drift apart. `None` means "no
/// navigation": anonymous and unrecognized roles stay where they are.
pub fn landing_route(role: Option<UserRole>) -> Option<MainRoute> {
    match role? {
        UserRole::Manager => Some(MainRoute::ManagerPortal),
        UserRole::Employee => Some(MainRoute::Submit),
    }
}

/// Where the collection view's UPDATE button leads.
pub fn update_route(role: Option<UserRole>) -> Option<MainRoute> {
    match role? {
        UserRole::Manager => Some(MainRoute::UpdateManager),
        UserRole::Employee => Some(MainRoute::UpdateEmployee),
    }
}

/// Whether a role may reach a route at all.
///
/// Anonymous sessions see only the login/register surface; the collection is
/// shared; everything else splits by role.
pub fn route_allowed(route: &MainRoute, role: Option<UserRole>) -> bool {
    match route {
        MainRoute::Login | MainRoute::Register | MainRoute::NotFound => true,
        MainRoute::Collection => role.is_some(),
        MainRoute::Submit | MainRoute::UpdateEmployee => role == Some(UserRole::Employee),
        MainRoute::ManagerPortal | MainRoute::Employees | MainRoute::UpdateManager => {
            role == Some(UserRole::Manager)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: MainRoute,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let role = state.role();
    let navigator = use_navigator();

    // Logout clears the session store before navigating; the cookie is the
    // backend's concern.
    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            dispatch.set(AppState::default());
            if let Some(nav) = navigator.clone() {
                nav.push(&MainRoute::Login);
            }
        })
    };

    let guarded = |route: &MainRoute, page: Html| -> Html {
        if route_allowed(route, role) {
            let logout_cb = on_logout.clone();
            html! { <Layout on_logout={Some(logout_cb)}>{ page }</Layout> }
        } else if let Some(target) = landing_route(role) {
            // Wrong role for this view: back to its own landing.
            html! { <Redirect<MainRoute> to={target} /> }
        } else {
            html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
        }
    };

    match props.route.clone() {
        MainRoute::Login => {
            if let Some(target) = landing_route(role) {
                html! { <Redirect<MainRoute> to={target} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Register => html! { <RegisterPage /> },
        route @ MainRoute::Submit => guarded(&route, html! { <SubmitPage /> }),
        route @ MainRoute::Collection => guarded(&route, html! { <CollectionPage /> }),
        route @ MainRoute::ManagerPortal => guarded(&route, html! { <ManagerPortalPage /> }),
        route @ MainRoute::Employees => guarded(&route, html! { <EmployeesPage /> }),
        route @ MainRoute::UpdateManager => guarded(&route, html! { <UpdateManagerPage /> }),
        route @ MainRoute::UpdateEmployee => guarded(&route, html! { <UpdateEmployeePage /> }),
        MainRoute::NotFound => {
            if let Some(target) = landing_route(role) {
                html! { <Redirect<MainRoute> to={target} /> }
            } else {
                html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
            }
        }
    }
}

/// Switch function for the application routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <RouteView {route} /> }
}
