use crate::{api::ReimbClient, components::Alert, routes::MainRoute};
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

fn input_callback(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

/// Registration view. On success the server's confirmation is traced and the
/// user is returned to the login view.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let username = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let username = username.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let password = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = RegisterRequest {
                username: (*username).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                password: (*password).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = ReimbClient::shared();
                match client.register(&request).await {
                    Ok(confirmation) => {
                        web_sys::console::log_1(&confirmation.into());
                        if let Some(nav) = navigator_handle {
                            nav.push(&MainRoute::Login);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.message().to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = navigator.clone() {
            nav.push(&MainRoute::Login);
        }
    });

    let is_busy = *loading;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h1 class="card-title text-2xl">{"Create an account for free!"}</h1>
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
                            oninput={input_callback(username.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="firstName">
                            <span class="label-text">{"First name"}</span>
                        </label>
                        <input
                            id="firstName"
                            class="input input-bordered"
                            type="text"
                            value={(*first_name).clone()}
                            oninput={input_callback(first_name.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="lastName">
                            <span class="label-text">{"Last name"}</span>
                        </label>
                        <input
                            id="lastName"
                            class="input input-bordered"
                            type="text"
                            value={(*last_name).clone()}
                            oninput={input_callback(last_name.clone())}
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
                            oninput={input_callback(password.clone())}
                        />
                    </div>
                    <div class="form-control mt-6 gap-2">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Submitting..." } else { "Submit" }}
                        </button>
                        <button class="btn" type="button" onclick={on_back}>
                            {"Back"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
