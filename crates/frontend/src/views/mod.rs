//! Routed views

mod account;
mod budget;
mod dashboard;
mod not_found;
mod profile;

pub use account::{CreateAccount, ForgotPassword, Login, ResetPassword};
pub use budget::{EditBudget, Setup};
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use profile::Profile;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Callback writing an input's value into a state handle
pub(crate) fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Parse a money input; `NaN` and infinities are refused along with non-numbers
pub(crate) fn parse_money(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|amount| amount.is_finite())
}

#[derive(Properties, PartialEq)]
pub struct ErrorTextProps {
    pub message: Option<String>,
}

#[function_component(ErrorText)]
pub fn error_text(props: &ErrorTextProps) -> Html {
    match &props.message {
        Some(message) => html! { <p class="error" role="alert">{message.clone()}</p> },
        None => html! {},
    }
}
