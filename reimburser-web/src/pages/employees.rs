use crate::{
    api::ReimbClient,
    components::{Alert, AlertTone, Loading},
    routes::MainRoute,
};
use shared::models::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

fn fetch_users(
    users: UseStateHandle<Vec<User>>,
    error: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    spawn_local(async move {
        match ReimbClient::shared().list_users().await {
            Ok(items) => users.set(items),
            Err(err) => error.set(Some(err.message().to_string())),
        }
        loading.set(false);
    });
}

/// Manager view over all user accounts, with per-row delete.
#[function_component(EmployeesPage)]
pub fn employees_page() -> Html {
    let users = use_state(Vec::<User>::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let navigator = use_navigator();

    {
        let users = users.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            fetch_users(users, error, loading);
            || ()
        });
    }

    let on_delete = {
        let users = users.clone();
        let error = error.clone();
        let notice = notice.clone();
        let loading = loading.clone();
        Callback::from(move |user_id: Option<i32>| {
            let users = users.clone();
            let error = error.clone();
            let notice = notice.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match ReimbClient::shared().delete_user(user_id).await {
                    Ok(confirmation) => {
                        notice.set(Some(confirmation));
                        fetch_users(users, error, loading);
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
            });
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = navigator.clone() {
            nav.push(&MainRoute::ManagerPortal);
        }
    });

    let rows = users
        .iter()
        .map(|user| {
            let user_id = user.user_id;
            let on_delete = on_delete.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(user_id));
            html! {
                <tr>
                    <td>{user_id.map_or_else(String::new, |id| id.to_string())}</td>
                    <td>{user.username.clone()}</td>
                    <td>
                        <button class="btn btn-sm btn-error" {onclick}>{"DELETE"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">{"Employees"}</h1>
            <Alert message={(*error).clone()} />
            <Alert message={(*notice).clone()} tone={AlertTone::Success} />
            if *loading {
                <Loading />
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"USERNAME"}</th>
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
