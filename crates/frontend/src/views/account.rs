//! Login, account creation and password recovery

use super::{ErrorText, bind};
use crate::routes::Route;
use budget_frontend_common::ServiceError;
use budget_frontend_common::services::AuthService;
use budget_http::types::RegisterRequest;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn auth_service() -> Result<AuthService, ServiceError> {
    Ok(AuthService::from_session()?)
}

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let onsubmit = {
        let (username, password, error, busy) =
            (username.clone(), password.clone(), error.clone(), busy.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (username, password, error, busy) =
                ((*username).clone(), (*password).clone(), error.clone(), busy.clone());
            let navigator = navigator.clone();
            busy.set(true);
            spawn_local(async move {
                let result = match auth_service() {
                    Ok(service) => service.login(&username, &password).await,
                    Err(e) => Err(e),
                };
                busy.set(false);
                match result {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <section class="card">
            <h1>{"Budget Buddy"}</h1>
            <form {onsubmit}>
                <input placeholder="Username or email" value={(*username).clone()} oninput={bind(&username)} />
                <input type="password" placeholder="Password" value={(*password).clone()} oninput={bind(&password)} />
                <button type="submit" disabled={*busy}>{"Log in"}</button>
            </form>
            <ErrorText message={(*error).clone()} />
            <nav>
                <Link<Route> to={Route::CreateAccount}>{"Create account"}</Link<Route>>
                <Link<Route> to={Route::ForgotPassword}>{"Forgot password?"}</Link<Route>>
            </nav>
        </section>
    }
}

#[function_component(CreateAccount)]
pub fn create_account() -> Html {
    let navigator = use_navigator();
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let fields = (
            first_name.clone(),
            last_name.clone(),
            username.clone(),
            email.clone(),
            password.clone(),
        );
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RegisterRequest {
                first_name: (*fields.0).clone(),
                last_name: (*fields.1).clone(),
                username: (*fields.2).clone(),
                email: (*fields.3).clone(),
                password: (*fields.4).clone(),
            };
            let (error, navigator) = (error.clone(), navigator.clone());
            spawn_local(async move {
                let result = match auth_service() {
                    Ok(service) => service.register(&request).await.map(|_| ()),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Setup);
                        }
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <section class="card">
            <h1>{"Create account"}</h1>
            <form {onsubmit}>
                <input placeholder="First name" value={(*first_name).clone()} oninput={bind(&first_name)} />
                <input placeholder="Last name" value={(*last_name).clone()} oninput={bind(&last_name)} />
                <input placeholder="Username" value={(*username).clone()} oninput={bind(&username)} />
                <input type="email" placeholder="Email" value={(*email).clone()} oninput={bind(&email)} />
                <input type="password" placeholder="Password" value={(*password).clone()} oninput={bind(&password)} />
                <button type="submit">{"Create account"}</button>
            </form>
            <ErrorText message={(*error).clone()} />
            <Link<Route> to={Route::Login}>{"Already have an account?"}</Link<Route>>
        </section>
    }
}

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let email = use_state(String::new);
    let notice = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let (email, notice, error) = (email.clone(), notice.clone(), error.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (email, notice, error) = ((*email).clone(), notice.clone(), error.clone());
            spawn_local(async move {
                let result = match auth_service() {
                    Ok(service) => service.forgot_password(&email).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(response) => {
                        error.set(None);
                        notice.set(Some(response.message));
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <section class="card">
            <h1>{"Reset your password"}</h1>
            <form {onsubmit}>
                <input type="email" placeholder="Email" value={(*email).clone()} oninput={bind(&email)} />
                <button type="submit">{"Send reset link"}</button>
            </form>
            if let Some(notice) = &*notice {
                <p class="notice">{notice.clone()}</p>
            }
            <ErrorText message={(*error).clone()} />
            <Link<Route> to={Route::Login}>{"Back to login"}</Link<Route>>
        </section>
    }
}

#[derive(Debug, Default, Deserialize)]
struct ResetQuery {
    #[serde(default)]
    token: String,
}

#[function_component(ResetPassword)]
pub fn reset_password() -> Html {
    let navigator = use_navigator();
    let token = use_location()
        .and_then(|location| location.query::<ResetQuery>().ok())
        .unwrap_or_default()
        .token;
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let (password, confirm, error) = (password.clone(), confirm.clone(), error.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *password != *confirm {
                error.set(Some("Passwords do not match".into()));
                return;
            }
            let (token, password) = (token.clone(), (*password).clone());
            let (error, navigator) = (error.clone(), navigator.clone());
            spawn_local(async move {
                let result = match auth_service() {
                    Ok(service) => service.reset_password(&token, &password).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <section class="card">
            <h1>{"Choose a new password"}</h1>
            <form {onsubmit}>
                <input type="password" placeholder="New password" value={(*password).clone()} oninput={bind(&password)} />
                <input type="password" placeholder="Confirm password" value={(*confirm).clone()} oninput={bind(&confirm)} />
                <button type="submit">{"Reset password"}</button>
            </form>
            <ErrorText message={(*error).clone()} />
        </section>
    }
}
