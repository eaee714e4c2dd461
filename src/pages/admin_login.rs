//! Dedicated admin login, with an opt-in signup path gated by the bank secret.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{AdminSignupRequest, Credentials};
use crate::state::session::Session;
use crate::util::access::ADMIN_PATH;
use crate::util::auth::replace_options;

const DEFAULT_ADMIN_NAME: &str = "Admin";

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let bank_secret = RwSignal::new(String::new());
    let is_new_admin = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let credentials = Credentials { email: email.get().trim().to_owned(), password: password.get() };
        let signup = is_new_admin.get().then(|| AdminSignupRequest {
            name: DEFAULT_ADMIN_NAME.to_owned(),
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            bank_secret: bank_secret.get(),
        });
        busy.set(true);
        let client = ApiClient::new(&config, &session.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match signup {
                Some(request) => client.admin_signup(&request).await,
                None => client.admin_login(&credentials).await,
            };
            match result {
                Ok(token) => {
                    session.update(|s| s.login(token.access_token));
                    navigate(ADMIN_PATH, replace_options());
                }
                Err(e) => {
                    error.set(e.user_message("Admin authentication failed"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Admin Access"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="notice notice--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
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
                    <Show when=move || is_new_admin.get()>
                        <input
                            class="auth-input"
                            placeholder="Bank Secret Password"
                            prop:value=move || bank_secret.get()
                            on:input=move |ev| bank_secret.set(event_target_value(&ev))
                        />
                    </Show>
                    <label class="auth-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || is_new_admin.get()
                            on:change=move |_| is_new_admin.update(|v| *v = !*v)
                        />
                        " I am a new admin"
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if is_new_admin.get() { "Create Admin" } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
