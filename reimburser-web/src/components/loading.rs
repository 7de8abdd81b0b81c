use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center p-8">
            <span class="loading loading-spinner"></span>
            <span class="ml-2">{"Loading"}</span>
        </div>
    }
}
