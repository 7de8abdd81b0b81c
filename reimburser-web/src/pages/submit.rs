use crate::{
    api::ReimbClient,
    components::{Alert, AlertTone},
    models::app_state::AppState,
    routes::MainRoute,
};
use shared::models::CreateReimbursementRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Employee submission view: description + amount in, PENDING record out.
///
/// The created record is kept in the session store as the last submission.
#[function_component(SubmitPage)]
pub fn submit_page() -> Html {
    let description = use_state(String::new);
    let amount = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let description = description.clone();
        let amount = amount.clone();
        let error_handle = error.clone();
        let notice_handle = notice.clone();
        let loading_handle = loading.clone();
        let user_id = state.user.as_ref().and_then(|user| user.user_id);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error_handle.set(None);
            notice_handle.set(None);

            let Ok(amount_value) = (*amount).trim().parse::<f64>() else {
                error_handle.set(Some("Enter a numeric amount".to_string()));
                return;
            };
            let request = CreateReimbursementRequest {
                description: (*description).clone(),
                amount: amount_value,
                user_id,
            };
            loading_handle.set(true);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let notice_ref = notice_handle.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = ReimbClient::shared();
                match client.create_reimbursement(&request).await {
                    Ok(created) => {
                        notice_ref.set(Some(format!("Your reimbursement is {}", created.status)));
                        dispatch.reduce_mut(|store| store.last_submitted = Some(created));
                    }
                    Err(err) => error_ref.set(Some(err.message().to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                description.set(input.value());
            }
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                amount.set(input.value());
            }
        })
    };

    let on_collection = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = navigator.clone() {
            nav.push(&MainRoute::Collection);
        }
    });

    let is_busy = *loading;
    let disable_submit = (*description).is_empty() || (*amount).is_empty() || is_busy;

    html! {
        <div class="flex flex-col items-center gap-4">
            <h3 class="text-xl font-semibold">{"Submit a Reimbursement!"}</h3>
            <Alert message={(*error).clone()} />
            <Alert message={(*notice).clone()} tone={AlertTone::Success} />
            <form class="flex gap-2 items-end" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">{"Description"}</span>
                    </label>
                    <input
                        id="description"
                        class="input input-bordered"
                        type="text"
                        placeholder="Enter description"
                        value={(*description).clone()}
                        oninput={on_description_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="amount">
                        <span class="label-text">{"Amount"}</span>
                    </label>
                    <input
                        id="amount"
                        class="input input-bordered"
                        type="text"
                        placeholder="Enter amount"
                        value={(*amount).clone()}
                        oninput={on_amount_change}
                    />
                </div>
                <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                    {if is_busy { "Submitting..." } else { "Submit" }}
                </button>
            </form>
            <div class="mt-4">
                <button class="btn" onclick={on_collection}>{"See All Reimbursements"}</button>
            </div>
        </div>
    }
}
