use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

/// Error del último fetch; el polling sigue y la lista previa se mantiene
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="error-banner" role="alert">
                <span class="error-icon">{"⚠️"}</span>
                <span>{message.clone()}</span>
            </div>
        },
        None => html! {},
    }
}
