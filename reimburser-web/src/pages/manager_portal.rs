use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

/// Manager landing view: navigation into the review and employee surfaces.
#[function_component(ManagerPortalPage)]
pub fn manager_portal_page() -> Html {
    let navigator = use_navigator();

    let goto = |target: MainRoute| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(nav) = navigator.clone() {
                nav.push(&target);
            }
        })
    };

    html! {
        <div class="flex flex-col items-center gap-4">
            <h1 class="text-2xl font-semibold">{"Welcome to the Reimbursement Management Portal!"}</h1>
            <div class="flex gap-2">
                <button class="btn btn-primary" onclick={goto(MainRoute::Collection)}>
                    {"See All Reimbursements"}
                </button>
                <button class="btn btn-primary" onclick={goto(MainRoute::Employees)}>
                    {"See All Employees"}
                </button>
            </div>
        </div>
    }
}
