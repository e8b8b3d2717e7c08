//! Login Page
//!
//! Trades email and password for an access token via `POST /authenticate`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{ApiClient, ApiError};
use crate::context::use_auth;
use crate::models::Credentials;

pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Application { message } if !message.is_empty() => message.clone(),
        ApiError::Unauthorized => "invalid credentials".to_string(),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginPage(api: ApiClient) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.authenticate(&credentials).await {
                Ok(pair) => {
                    log::info!("logged in as {}", credentials.email);
                    set_error.set(None);
                    auth.set_token(pair.access_token);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error.set(Some(login_error_message(&e)));
                }
            }
        });
    };

    view! {
        <div class="col-md-6 offset-md-3">
            <h2>"Login"</h2>
            <hr />
            {move || error.get().map(|message| view! {
                <div class="alert alert-danger">{message}</div>
            })}
            <form on:submit=submit>
                <div class="mb-3">
                    <label for="email" class="form-label">"Email Address"</label>
                    <input
                        id="email"
                        type="email"
                        class="form-control"
                        autocomplete="email-new"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label for="password" class="form-label">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class="form-control"
                        autocomplete="password-new"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <input type="submit" class="btn btn-primary" value="Login" />
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_token_pair;

    #[test]
    fn test_backend_message_shown() {
        let err = decode_token_pair(r#"{"error":true,"message":"invalid credentials"}"#).unwrap_err();
        assert_eq!(login_error_message(&err), "invalid credentials");
    }

    #[test]
    fn test_bare_rejection_message() {
        assert_eq!(login_error_message(&ApiError::Unauthorized), "invalid credentials");
        let err = ApiError::Application { message: String::new() };
        assert_eq!(login_error_message(&err), "backend error: ");
    }
}
