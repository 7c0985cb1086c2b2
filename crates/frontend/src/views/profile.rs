//! Profile, password change and account deletion

use super::{ErrorText, bind};
use crate::routes::Route;
use budget_frontend_common::ServiceError;
use budget_frontend_common::components::Spinner;
use budget_frontend_common::services::ProfileService;
use budget_http::types::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn profile_service() -> Result<ProfileService, ServiceError> {
    Ok(ProfileService::from_session()?)
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let user = use_state(|| None::<UserProfile>);
    let error = use_state(|| None::<String>);

    {
        let (user, error) = (user.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                let result = match profile_service() {
                    Ok(service) => service.info().await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(profile) => user.set(Some(profile)),
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        });
    }

    html! {
        <section class="card">
            <h1>{"Profile"}</h1>
            if let Some(user) = &*user {
                <dl>
                    <dt>{"Name"}</dt><dd>{format!("{} {}", user.first_name, user.last_name)}</dd>
                    <dt>{"Username"}</dt><dd>{user.username.clone()}</dd>
                    <dt>{"Email"}</dt><dd>{user.email.clone()}</dd>
                </dl>
                <ChangePassword />
                <DeleteAccount username={user.username.clone()} />
            } else if error.is_none() {
                <Spinner text="Loading profile..." />
            }
            <ErrorText message={(*error).clone()} />
            <Link<Route> to={Route::Dashboard}>{"Back to dashboard"}</Link<Route>>
        </section>
    }
}

#[function_component(ChangePassword)]
fn change_password() -> Html {
    let current = use_state(String::new);
    let new_password = use_state(String::new);
    let notice = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let (current, new_password) = (current.clone(), new_password.clone());
        let (notice, error) = (notice.clone(), error.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (current, new_password) = (current.clone(), new_password.clone());
            let (notice, error) = (notice.clone(), error.clone());
            spawn_local(async move {
                let result = match profile_service() {
                    Ok(service) => service.change_password(&current, &new_password).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(response) => {
                        current.set(String::new());
                        new_password.set(String::new());
                        error.set(None);
                        notice.set(Some(response.message));
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <form class="change-password" {onsubmit}>
            <h2>{"Change password"}</h2>
            <input type="password" placeholder="Current password" value={(*current).clone()} oninput={bind(&current)} />
            <input type="password" placeholder="New password" value={(*new_password).clone()} oninput={bind(&new_password)} />
            <button type="submit">{"Change password"}</button>
            if let Some(notice) = &*notice {
                <p class="notice">{notice.clone()}</p>
            }
            <ErrorText message={(*error).clone()} />
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct DeleteAccountProps {
    username: String,
}

#[function_component(DeleteAccount)]
fn delete_account(props: &DeleteAccountProps) -> Html {
    let navigator = use_navigator();
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let (password, error) = (password.clone(), error.clone());
        let username = props.username.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (username, password) = (username.clone(), (*password).clone());
            let (error, navigator) = (error.clone(), navigator.clone());
            spawn_local(async move {
                let result = match profile_service() {
                    Ok(service) => service.delete_account(&username, &password).await,
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
        <form class="danger-zone" {onsubmit}>
            <h2>{"Delete account"}</h2>
            <p>{"This removes your budget and every expense. It cannot be undone."}</p>
            <input type="password" placeholder="Confirm password" value={(*password).clone()} oninput={bind(&password)} />
            <button type="submit" class="danger">{"Delete my account"}</button>
            <ErrorText message={(*error).clone()} />
        </form>
    }
}
