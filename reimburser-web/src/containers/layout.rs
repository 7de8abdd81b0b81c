use crate::models::app_state::AppState;
use yew::{Callback, Children, Html, MouseEvent, Properties, function_component, html};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Shared page chrome: title bar with the signed-in user and the logout
/// action, content area, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let username = use_selector(|state: &AppState| {
        state.user.as_ref().map(|user| user.username.clone())
    });

    let logout_button = props.on_logout.clone().map(|on_logout| {
        let onclick = Callback::from(move |_: MouseEvent| on_logout.emit(()));
        html! {
            <button class="btn btn-ghost btn-sm" {onclick}>{"Log out"}</button>
        }
    });

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <header class="navbar bg-base-200 border-b border-base-300">
                <div class="flex-1">
                    <span class="text-lg font-semibold px-2">{"Reimbursement System"}</span>
                </div>
                <div class="flex-none gap-2">
                    if let Some(name) = (*username).clone() {
                        <span class="text-sm opacity-70">{name}</span>
                    }
                    { logout_button }
                </div>
            </header>
            <main class="flex-grow p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"Reimburser · Powered by Rust and Yew"}</p>
                </div>
            </footer>
        </div>
    }
}
