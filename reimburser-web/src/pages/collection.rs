use crate::{
    api::ReimbClient,
    components::{Alert, AlertTone, Loading},
    models::app_state::AppState,
    routes::{landing_route, update_route},
};
use shared::models::{Reimbursement, ReimbursementStatus, StatusFilter};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

/// Replace the list with a fresh unfiltered fetch.
///
/// Shared by the mount effect, the post-delete refresh, and the self-heal
/// path after a failed filtered fetch.
fn fetch_all(
    list: UseStateHandle<Vec<Reimbursement>>,
    error: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    spawn_local(async move {
        match ReimbClient::shared().list_reimbursements().await {
            Ok(items) => list.set(items),
            Err(err) => error.set(Some(err.message().to_string())),
        }
        loading.set(false);
    });
}

/// The reimbursement collection: filterable list with per-row delete.
#[function_component(CollectionPage)]
pub fn collection_page() -> Html {
    let reimbursements = use_state(Vec::<Reimbursement>::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let navigator = use_navigator();
    let role = *use_selector(|state: &AppState| state.role());

    {
        let reimbursements = reimbursements.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            fetch_all(reimbursements, error, loading);
            || ()
        });
    }

    let on_filter_change = {
        let reimbursements = reimbursements.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let Ok(filter) = select.value().parse::<StatusFilter>() else {
                return;
            };
            let reimbursements = reimbursements.clone();
            let error = error.clone();
            let loading = loading.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match ReimbClient::shared()
                    .list_reimbursements_by_status(filter)
                    .await
                {
                    Ok(items) => {
                        reimbursements.set(items);
                        loading.set(false);
                    }
                    Err(err) => {
                        // Surface the failure, then fall back to the
                        // unfiltered list so the view is not left stale.
                        error.set(Some(err.message().to_string()));
                        fetch_all(reimbursements, error, loading);
                    }
                }
            });
        })
    };

    let on_delete = {
        let reimbursements = reimbursements.clone();
        let error = error.clone();
        let notice = notice.clone();
        let loading = loading.clone();
        Callback::from(move |reimb_id: Option<i32>| {
            let reimbursements = reimbursements.clone();
            let error = error.clone();
            let notice = notice.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match ReimbClient::shared().delete_reimbursement(reimb_id).await {
                    Ok(confirmation) => {
                        notice.set(Some(confirmation));
                        fetch_all(reimbursements, error, loading);
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
            });
        })
    };

    let on_update = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(nav), Some(target)) = (navigator.clone(), update_route(role)) {
                nav.push(&target);
            }
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        if let (Some(nav), Some(target)) = (navigator.clone(), landing_route(role)) {
            nav.push(&target);
        }
    });

    let rows = reimbursements
        .iter()
        .map(|reim| {
            let reimb_id = reim.reimb_id;
            let on_delete = on_delete.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(reimb_id));
            html! {
                <tr>
                    <td>{reimb_id.map_or_else(String::new, |id| id.to_string())}</td>
                    <td>{reim.description.clone()}</td>
                    <td>{reim.amount}</td>
                    <td>{reim.status.to_string()}</td>
                    <td>{reim.user_id.map_or_else(String::new, |id| id.to_string())}</td>
                    <td>
                        <button class="btn btn-sm btn-error" {onclick}>{"DELETE"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex flex-col gap-4">
            <Alert message={(*error).clone()} />
            <Alert message={(*notice).clone()} tone={AlertTone::Success} />
            <select id="status" name="status" class="select select-bordered w-40" onchange={on_filter_change}>
                <option value={StatusFilter::All.to_string()}>{StatusFilter::All.to_string()}</option>
                {
                    for ReimbursementStatus::iter().map(|status| html! {
                        <option value={status.to_string()}>{status.to_string()}</option>
                    })
                }
            </select>
            if *loading {
                <Loading />
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"DESCRIPTION"}</th>
                            <th>{"AMOUNT"}</th>
                            <th>{"STATUS"}</th>
                            <th>{"USER-ID"}</th>
                            <th>{"ACTION"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { rows }
                    </tbody>
                </table>
            }
            <div class="flex gap-2">
                <button class="btn" onclick={on_update}>{"UPDATE"}</button>
                <button class="btn" onclick={on_back}>{"BACK"}</button>
            </div>
        </div>
    }
}
