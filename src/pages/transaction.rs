//! Standalone transfer page with the customer's history.

use leptos::prelude::*;

use crate::components::history_list::HistoryList;
use crate::components::notice::Notice;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::HistoryEntry;
use crate::pages::dashboard::load_history;
use crate::state::session::Session;
use crate::util::validation::validate_transfer;

#[component]
pub fn TransactionPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();

    let history = RwSignal::new(Vec::<HistoryEntry>::new());
    let to_account = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let client = ApiClient::new(&config, &session.get_untracked());
        leptos::task::spawn_local(load_history(client, history, error));
    }

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
        let client = ApiClient::new(&config, &session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.transfer(&request).await;
            match result {
                Ok(_) => {
                    message.set("Transfer successful".to_owned());
                    to_account.set(String::new());
                    amount.set(String::new());
                    load_history(client, history, error).await;
                }
                Err(e) => error.set(e.user_message("Transfer failed")),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="transaction-page">
            <h1>"Money Transfer"</h1>
            <Notice error=error message=message/>
            <form class="transfer-form" on:submit=on_transfer>
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
    }
}
