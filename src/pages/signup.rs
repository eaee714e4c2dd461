//! Customer signup page. A successful signup continues to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::access::LOGIN_PATH;
use crate::util::validation::validate_signup;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_login = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let request = match validate_signup(&name.get(), &email.get(), &password.get()) {
            Ok(r) => r,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::new(&config, &session.get_untracked());
        let navigate = navigate_login.clone();
        leptos::task::spawn_local(async move {
            match client.signup(&request).await {
                Ok(_) => navigate(LOGIN_PATH, NavigateOptions::default()),
                Err(e) => {
                    error.set(e.user_message("Signup failed"));
                    busy.set(false);
                }
            }
        });
    };

    let go_login = move |_| navigate(LOGIN_PATH, NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create SmartBank Account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="notice notice--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <button class="auth-link" on:click=go_login>"Login"</button>
                </p>
            </div>
        </div>
    }
}
