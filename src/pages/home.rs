//! Landing page: one form switching between customer signup, customer login,
//! and admin access.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the entry page every failed guard redirects to. Each mode ends by
//! storing the issued token and steering to the next onboarding step:
//! signup -> `/kyc`, login -> `/dashboard`, admin -> `/admin`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, TokenResponse};
use crate::state::session::Session;
use crate::util::access::{ADMIN_PATH, DASHBOARD_PATH, KYC_PATH};
use crate::util::validation::{AuthMode, HomeSubmission, validate_home};

/// Run the backend calls for a validated landing-page submission and return
/// the issued token together with where to go next.
async fn submit(client: &ApiClient, submission: HomeSubmission) -> Result<(TokenResponse, &'static str), ApiError> {
    match submission {
        HomeSubmission::Signup(request) => {
            client.signup(&request).await?;
            let credentials = Credentials { email: request.email, password: request.password };
            Ok((client.login(&credentials).await?, KYC_PATH))
        }
        HomeSubmission::Login(credentials) => Ok((client.login(&credentials).await?, DASHBOARD_PATH)),
        HomeSubmission::AdminSignup(request) => Ok((client.admin_signup(&request).await?, ADMIN_PATH)),
        HomeSubmission::AdminLogin(credentials) => Ok((client.admin_login(&credentials).await?, ADMIN_PATH)),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let bank_secret = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let submission = match validate_home(
            mode.get(),
            &name.get(),
            &email.get(),
            &password.get(),
            &bank_secret.get(),
        ) {
            Ok(s) => s,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::new(&config, &session.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit(&client, submission).await {
                Ok((token, next)) => {
                    session.update(|s| s.login(token.access_token));
                    navigate(next, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(e.user_message("Authentication failed"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"SmartBank"</h1>
                <div class="mode-tabs">
                    {AuthMode::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <button
                                    type="button"
                                    class="mode-tabs__tab"
                                    class:mode-tabs__tab--active=move || mode.get() == m
                                    on:click=move |_| {
                                        mode.set(m);
                                        error.set(String::new());
                                    }
                                >
                                    {m.tab_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="notice notice--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get().requires_name()>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == AuthMode::Admin>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Bank Secret (Admin only for signup)"
                            prop:value=move || bank_secret.get()
                            on:input=move |ev| bank_secret.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>
                <p class="auth-card__footer">"Secure • Trusted • Smart Banking"</p>
            </div>
        </div>
    }
}
