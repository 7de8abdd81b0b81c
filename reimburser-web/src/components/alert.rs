use yew::{Html, Properties, function_component, html};

/// How an alert message is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTone {
    Error,
    Success,
}

impl AlertTone {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert-error",
            Self::Success => "alert alert-success",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    /// Nothing is rendered while the message is `None`.
    pub message: Option<String>,
    #[prop_or(AlertTone::Error)]
    pub tone: AlertTone,
}

/// Inline banner for surfacing API outcomes inside a view.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    html! {
        <div class={props.tone.class()}>
            <span>{message}</span>
        </div>
    }
}
