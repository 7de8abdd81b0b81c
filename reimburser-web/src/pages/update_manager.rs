use crate::{
    api::ReimbClient,
    components::{Alert, AlertTone, Loading},
    routes::MainRoute,
};
use shared::models::{Reimbursement, ReimbursementStatus, ReviewDecision, StatusFilter};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

fn fetch_pending(
    list: UseStateHandle<Vec<Reimbursement>>,
    error: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    spawn_local(async move {
        match ReimbClient::shared()
            .list_reimbursements_by_status(StatusFilter::Only(ReimbursementStatus::Pending))
            .await
        {
            Ok(items) => list.set(items),
            Err(err) => error.set(Some(err.message().to_string())),
        }
        loading.set(false);
    });
}

/// Manager review view: the PENDING queue with per-row approve/deny.
///
/// Every ruling re-fetches the PENDING list, so a decided row drops out of
/// the queue immediately.
#[function_component(UpdateManagerPage)]
pub fn update_manager_page() -> Html {
    let reimbursements = use_state(Vec::<Reimbursement>::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let navigator = use_navigator();

    {
        let reimbursements = reimbursements.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            fetch_pending(reimbursements, error, loading);
            || ()
        });
    }

    let on_review = {
        let reimbursements = reimbursements.clone();
        let error = error.clone();
        let notice = notice.clone();
        let loading = loading.clone();
        Callback::from(move |(reimb_id, decision): (Option<i32>, ReviewDecision)| {
            let Some(id) = reimb_id else {
                error.set(Some(
                    "Missing reimbursement id; nothing was sent to the server".to_string(),
                ));
                return;
            };
            let reimbursements = reimbursements.clone();
            let error = error.clone();
            let notice = notice.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match ReimbClient::shared()
                    .update_reimbursement_status(id, decision)
                    .await
                {
                    Ok(()) => {
                        notice.set(Some(format!("Reimbursement {}!", decision.status())));
                        fetch_pending(reimbursements, error, loading);
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
            });
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = navigator.clone() {
            nav.push(&MainRoute::Collection);
        }
    });

    let rows = reimbursements
        .iter()
        .map(|reim| {
            let reimb_id = reim.reimb_id;
            let deny = {
                let on_review = on_review.clone();
                Callback::from(move |_: MouseEvent| on_review.emit((reimb_id, ReviewDecision::Denied)))
            };
            let approve = {
                let on_review = on_review.clone();
                Callback::from(move |_: MouseEvent| {
                    on_review.emit((reimb_id, ReviewDecision::Approved));
                })
            };
            html! {
                <tr>
                    <td>{reimb_id.map_or_else(String::new, |id| id.to_string())}</td>
                    <td>{reim.description.clone()}</td>
                    <td>{reim.amount}</td>
                    <td>{reim.status.to_string()}</td>
                    <td class="flex gap-1">
                        <button class="btn btn-sm btn-error" onclick={deny}>{"DENY"}</button>
                        <button class="btn btn-sm btn-success" onclick={approve}>{"APPROVE"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex flex-col gap-4">
            <Alert message={(*error).clone()} />
            <Alert message={(*notice).clone()} tone={AlertTone::Success} />
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
                            <th>{"ACTION"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { rows }
                    </tbody>
                </table>
            }
            <div>
                <button class="btn" onclick={on_back}>{"BACK"}</button>
            </div>
        </div>
    }
}
