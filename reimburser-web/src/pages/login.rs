use crate::{api::ReimbClient, models::app_state::AppState, routes::landing_route};
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::components::Alert;

/// Login view: the anonymous entry point.
///
/// A successful login writes the session wholesale and routes by role; a
/// login response whose role the client does not recognize is rejected here
/// rather than stored.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                username: (*username_handle).clone(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = ReimbClient::shared();
                match client.login(&request).await {
                    Ok(user) => match landing_route(user.role()) {
                        Some(target) => {
                            dispatch.set(AppState::signed_in(user));
                            if let Some(nav) = navigator_handle {
                                nav.push(&target);
                            }
                        }
                        None => {
                            error_ref.set(Some(
                                "Your account has no recognized role; contact an administrator"
                                    .to_string(),
                            ));
                        }
                    },
                    Err(err) => error_ref.set(Some(err.message().to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_register = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = navigator.clone() {
            nav.push(&crate::routes::MainRoute::Register);
        }
    });

    let is_busy = *loading;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h1 class="card-title text-2xl">{"Welcome to the Reimbursement System"}</h1>
                    <h2 class="text-sm opacity-70">{"Log in or register to submit and view reimbursements"}</h2>
                    <Alert message={(*error).clone()} />
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6 gap-2">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Logging in..." } else { "Login" }}
                        </button>
                        <button class="btn" type="button" onclick={on_register}>
                            {"Register"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
