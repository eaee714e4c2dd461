//! Customer dashboard: account summary, transfer form, and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `ProtectedRoute`, so the customer is known to be fully
//! onboarded. Dashboard data and history are fetched on mount and refreshed
//! after every successful transfer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_card::AccountCard;
use crate::components::history_list::HistoryList;
use crate::components::notice::Notice;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{DashboardData, HistoryEntry};
use crate::state::session::Session;
use crate::util::access::ENTRY_PATH;
use crate::util::auth::replace_options;
use crate::util::validation::validate_transfer;

/// Fetch dashboard data and history, reporting failures through `error`.
pub(crate) async fn refresh(
    client: ApiClient,
    data: RwSignal<Option<DashboardData>>,
    history: RwSignal<Vec<HistoryEntry>>,
    error: RwSignal<String>,
) {
    match client.dashboard().await {
        Ok(d) => {
            let _ = data.try_set(Some(d));
        }
        Err(e) => {
            log::warn!("dashboard load failed: {e}");
            let _ = error.try_set("Failed to load dashboard".to_owned());
        }
    }
    load_history(client, history, error).await;
}

pub(crate) async fn load_history(client: ApiClient, history: RwSignal<Vec<HistoryEntry>>, error: RwSignal<String>) {
    match client.history().await {
        Ok(entries) => {
            let _ = history.try_set(entries);
        }
        Err(e) => {
            log::warn!("history load failed: {e}");
            let _ = error.try_set("Failed to load transaction history".to_owned());
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let data = RwSignal::new(None::<DashboardData>);
    let history = RwSignal::new(Vec::<HistoryEntry>::new());
    let to_account = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let client = ApiClient::new(&config, &session.get_untracked());
        leptos::task::spawn_local(refresh(client, data, history, error));
    }

    let transfer_config = config.clone();
    let on_transfer = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        message.set(String::new());
        let request = match validate_transfer(&to_account.get(), &amount.get()) {
            Ok(r) => r,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::new(&transfer_config, &session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.transfer(&request).await;
            match result {
                Ok(_) => {
                    message.set("Transfer successful".to_owned());
                    to_account.set(String::new());
                    amount.set(String::new());
                    refresh(client, data, history, error).await;
                }
                Err(e) => error.set(e.user_message("Transfer failed")),
            }
            let _ = busy.try_set(false);
        });
    };

    let on_logout = move |_| {
        session.update(Session::logout);
        navigate(ENTRY_PATH, replace_options());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"SmartBank Dashboard"</h1>
                <span class="dashboard-page__user">
                    {move || data.get().and_then(|d| d.name).unwrap_or_default()}
                </span>
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <Notice error=error message=message/>
            <Show
                when=move || data.get().is_some()
                fallback=|| view! { <p class="dashboard-page__loading">"Loading dashboard..."</p> }
            >
                {move || {
                    data.get()
                        .and_then(|d| d.account)
                        .map(|account| view! { <AccountCard account=account/> })
                }}
                <div class="dashboard-page__columns">
                    <form class="transfer-form" on:submit=on_transfer.clone()>
                        <h3>"Transfer Money"</h3>
                        <input
                            class="auth-input"
                            placeholder="Receiver Account Number"
                            prop:value=move || to_account.get()
                            on:input=move |ev| to_account.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="number"
                            placeholder="Amount"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Processing..." } else { "Send Money" }}
                        </button>
                    </form>
                    <HistoryList entries=history/>
                </div>
            </Show>
        </div>
    }
}
