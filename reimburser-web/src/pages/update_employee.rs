use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

/// Placeholder employee update view; no data operations yet.
#[function_component(UpdateEmployeePage)]
pub fn update_employee_page() -> Html {
    let navigator = use_navigator();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = navigator.clone() {
            nav.push(&MainRoute::Collection);
        }
    });

    html! {
        <div class="flex flex-col items-center gap-4">
            <h2 class="text-xl font-semibold">{"IN PROCESS.."}</h2>
            <button class="btn" onclick={on_back}>{"Back to Reimbursements"}</button>
        </div>
    }
}
