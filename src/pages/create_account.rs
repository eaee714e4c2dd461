//! Account creation page, reached once KYC is complete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_card::AccountCard;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{Account, AccountType};
use crate::state::session::Session;
use crate::util::access::DASHBOARD_PATH;
use crate::util::auth::replace_options;
use crate::util::browser::sleep_ms;

const DASHBOARD_REDIRECT_DELAY_MS: u64 = 1500;

#[component]
pub fn CreateAccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let account_type = RwSignal::new(AccountType::default());
    let created = RwSignal::new(None::<Account>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_create = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        created.set(None);
        busy.set(true);
        let client = ApiClient::new(&config, &session.get_untracked());
        let chosen = account_type.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.create_account(chosen).await {
                Ok(account) => {
                    created.set(Some(account));
                    busy.set(false);
                    sleep_ms(DASHBOARD_REDIRECT_DELAY_MS).await;
                    navigate(DASHBOARD_PATH, replace_options());
                }
                Err(e) => {
                    error.set(e.user_message("Account creation failed"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Your Bank Account"</h1>
                <p class="auth-card__subtitle">"Choose the type of account you want to open"</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="notice notice--error">{move || error.get()}</p>
                </Show>
                <select
                    class="auth-input"
                    prop:value=move || account_type.get().as_str()
                    on:change=move |ev| {
                        if let Some(t) = AccountType::parse(&event_target_value(&ev)) {
                            account_type.set(t);
                        }
                    }
                >
                    {AccountType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
                <button class="auth-button" on:click=on_create disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                </button>
                {move || {
                    created
                        .get()
                        .map(|account| {
                            view! { <AccountCard account=account title="Account Created Successfully"/> }
                        })
                }}
                <p class="auth-card__footer">"You will be redirected to your dashboard shortly"</p>
            </div>
        </div>
    }
}
