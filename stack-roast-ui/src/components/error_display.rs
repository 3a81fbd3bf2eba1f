use leptos::prelude::*;
use server_fn::ServerFnError;
use stack_roast_errors::AppError;
use std::str::FromStr;

/// Turns a server function failure back into a message fit for visitors.
pub fn server_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => match AppError::from_str(msg) {
            Ok(app_error) => app_error.user_message().to_string(),
            Err(never) => match never {},
        },
        _ => "Could not reach the server. Try again.".to_string(),
    }
}

#[component]
pub fn ErrorDisplay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error">
            <p class="error__title">"Well, that went up in flames."</p>
            <p class="error__message">{message}</p>
            <a href="/" class="error__retry">"Back to all stacks"</a>
        </div>
    }
}
