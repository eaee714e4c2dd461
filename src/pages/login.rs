//! Customer login page (email + password).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::access::{DASHBOARD_PATH, SIGNUP_PATH};
use crate::util::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_dashboard = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let credentials = match validate_login(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::new(&config, &session.get_untracked());
        let navigate = navigate_dashboard.clone();
        leptos::task::spawn_local(async move {
            match client.login(&credentials).await {
                Ok(token) => {
                    session.update(|s| s.login(token.access_token));
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(e.user_message("Login failed"));
                    busy.set(false);
                }
            }
        });
    };

    let go_signup = move |_| navigate(SIGNUP_PATH, NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"SmartBank Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="notice notice--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
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
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <button class="auth-link" on:click=go_signup>"Sign up"</button>
                </p>
            </div>
        </div>
    }
}
