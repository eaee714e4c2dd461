//! Admin console: customer search, account controls, and ledger analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `AdminRoute`, so the session carries an admin token. The
//! page keeps three independent pieces of state: search results, the selected
//! customer's detail, and the ledger filter inputs. The filtered ledger and
//! its summary are derived from the latter two and never stored.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure lands in the shared notice with a fixed fallback
//! message; the backend's `detail` text wins when present.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_card::AccountCard;
use crate::components::notice::Notice;
use crate::components::summary_card::{SummaryCard, Tone};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{AccountSummary, AdminUserDetail, LedgerEntry, TransactionKind};
use crate::state::session::Session;
use crate::util::access::ADMIN_LOGIN_PATH;
use crate::util::auth::replace_options;
use crate::util::browser::confirm;
use crate::util::format::{format_amount, format_time};
use crate::util::tx_filter::{self, KindFilter, LedgerFilter, LedgerSummary};
use crate::util::validation::{validate_limit, validate_search_query};

const DEACTIVATE_PROMPT: &str = "Are you sure you want to deactivate this account?";

async fn load_user(
    client: ApiClient,
    account_number: String,
    detail: RwSignal<Option<AdminUserDetail>>,
    new_limit: RwSignal<String>,
    error: RwSignal<String>,
) {
    match client.admin_user(&account_number).await {
        Ok(user) => {
            let _ = new_limit.try_set(user.account.daily_limit.to_string());
            let _ = detail.try_set(Some(user));
        }
        Err(e) => {
            log::warn!("admin user load failed for {account_number}: {e}");
            let _ = error.try_set(e.user_message("Failed to load user details"));
        }
    }
}

fn ledger_row(account: &str, entry: LedgerEntry) -> impl IntoView + use<> {
    let kind = tx_filter::direction(account, &entry);
    let counterparty = match kind {
        Some(TransactionKind::Credit) => entry.from_account.clone(),
        _ => entry.to_account.clone(),
    };
    let (class, label) = match kind {
        Some(TransactionKind::Credit) => ("ledger-row ledger-row--credit", TransactionKind::Credit.label()),
        Some(TransactionKind::Debit) => ("ledger-row ledger-row--debit", TransactionKind::Debit.label()),
        None => ("ledger-row", "-"),
    };
    view! {
        <tr class=class>
            <td>{format_time(&entry.time)}</td>
            <td>{label}</td>
            <td>{counterparty}</td>
            <td class="ledger-row__amount">{format_amount(entry.amount)}</td>
        </tr>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<AccountSummary>::new());
    let detail = RwSignal::new(None::<AdminUserDetail>);
    let new_limit = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let kind_input = RwSignal::new(KindFilter::default().as_str().to_owned());
    let from_input = RwSignal::new(String::new());
    let to_input = RwSignal::new(String::new());
    let min_input = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| {
        let filter = LedgerFilter::from_inputs(&kind_input.get(), &from_input.get(), &to_input.get(), &min_input.get());
        detail.with(|d| match d {
            Some(user) => tx_filter::apply(&filter, &user.account.account_number, &user.transactions),
            None => (Vec::new(), LedgerSummary::default()),
        })
    });
    let summary = move || filtered.with(|(_, s)| *s);

    let search_config = config.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        message.set(String::new());
        let q = match validate_search_query(&query.get()) {
            Ok(q) => q,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        results.set(Vec::new());
        detail.set(None);
        let client = ApiClient::new(&search_config, &session.get_untracked());
        leptos::task::spawn_local(async move {
            let found = client.admin_search(&q).await;
            match found {
                Ok(hits) if hits.is_empty() => error.set("No records found".to_owned()),
                Ok(hits) => {
                    let single = (hits.len() == 1).then(|| hits[0].account_number.clone());
                    results.set(hits);
                    if let Some(account_number) = single {
                        load_user(client, account_number, detail, new_limit, error).await;
                    }
                }
                Err(e) => error.set(e.user_message("No records found")),
            }
            let _ = busy.try_set(false);
        });
    };

    let select_config = config.clone();
    let select_user = move |account_number: String| {
        error.set(String::new());
        message.set(String::new());
        let client = ApiClient::new(&select_config, &session.get_untracked());
        leptos::task::spawn_local(load_user(client, account_number, detail, new_limit, error));
    };

    let limit_config = config.clone();
    let on_update_limit = move |_| {
        let Some(account_number) = detail.with(|d| d.as_ref().map(|u| u.account.account_number.clone())) else {
            return;
        };
        error.set(String::new());
        message.set(String::new());
        let limit = match validate_limit(&new_limit.get()) {
            Ok(v) => v,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        let client = ApiClient::new(&limit_config, &session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.update_daily_limit(&account_number, limit).await;
            match result {
                Ok(_) => {
                    message.set("Daily transaction limit updated".to_owned());
                    load_user(client, account_number, detail, new_limit, error).await;
                }
                Err(e) => error.set(e.user_message("Failed to update daily limit")),
            }
        });
    };

    let deactivate_config = config.clone();
    let on_deactivate = move |_| {
        let Some(account_number) = detail.with(|d| d.as_ref().map(|u| u.account.account_number.clone())) else {
            return;
        };
        if !confirm(DEACTIVATE_PROMPT) {
            return;
        }
        error.set(String::new());
        message.set(String::new());
        let client = ApiClient::new(&deactivate_config, &session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.deactivate_account(&account_number).await;
            match result {
                Ok(_) => {
                    message.set("Account deactivated successfully".to_owned());
                    load_user(client, account_number, detail, new_limit, error).await;
                }
                Err(e) => error.set(e.user_message("Failed to deactivate account")),
            }
        });
    };

    let on_logout = move |_| {
        session.update(Session::logout);
        navigate(ADMIN_LOGIN_PATH, replace_options());
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"SmartBank Admin"</h1>
                <button class="btn admin-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <Notice error=error message=message/>

            <form class="admin-search" on:submit=on_search>
                <input
                    class="auth-input"
                    placeholder="Account number or user name"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Searching..." } else { "Search" }}
                </button>
            </form>

            <Show when=move || { results.with(|r| r.len() > 1) }>
                <ul class="admin-results">
                    <For
                        each=move || results.get()
                        key=|hit| hit.account_number.clone()
                        children={
                            let select_user = select_user.clone();
                            move |hit| {
                                let select_user = select_user.clone();
                                let account_number = hit.account_number.clone();
                                view! {
                                    <li
                                        class="admin-results__item"
                                        on:click=move |_| select_user(account_number.clone())
                                    >
                                        <span class="admin-results__name">{hit.name}</span>
                                        <span class="admin-results__account">{hit.account_number}</span>
                                        <span class="admin-results__status">
                                            {if hit.is_active { "Active" } else { "Inactive" }}
                                        </span>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>

            <Show when=move || detail.with(Option::is_some)>
                <section class="admin-detail">
                    {move || {
                        detail
                            .get()
                            .map(|user| {
                                view! {
                                    <div class="admin-detail__profile">
                                        <h2>{user.name}</h2>
                                        <p>{user.email}</p>
                                        <p>"Phone: " {user.phone.unwrap_or_else(|| "-".to_owned())}</p>
                                        <p>"Address: " {user.address.unwrap_or_else(|| "-".to_owned())}</p>
                                        <p>"PAN: " {user.pan_number.unwrap_or_else(|| "-".to_owned())}</p>
                                    </div>
                                    <AccountCard account=user.account/>
                                }
                            })
                    }}
                    <div class="admin-detail__controls">
                        <input
                            class="auth-input"
                            type="number"
                            placeholder="New daily limit"
                            prop:value=move || new_limit.get()
                            on:input=move |ev| new_limit.set(event_target_value(&ev))
                        />
                        <button class="auth-button" on:click=on_update_limit.clone()>
                            "Update Limit"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=on_deactivate.clone()
                            disabled=move || detail.with(|d| d.as_ref().is_some_and(|u| !u.account.is_active))
                        >
                            "Deactivate Account"
                        </button>
                    </div>

                    <div class="admin-filters">
                        <select
                            class="auth-input"
                            prop:value=move || kind_input.get()
                            on:change=move |ev| kind_input.set(event_target_value(&ev))
                        >
                            {KindFilter::ALL
                                .into_iter()
                                .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                                .collect_view()}
                        </select>
                        <input
                            class="auth-input"
                            type="date"
                            prop:value=move || from_input.get()
                            on:input=move |ev| from_input.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="date"
                            prop:value=move || to_input.get()
                            on:input=move |ev| to_input.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="number"
                            placeholder="Min amount"
                            prop:value=move || min_input.get()
                            on:input=move |ev| min_input.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="admin-summary">
                        <SummaryCard
                            title="Total Credit"
                            value=Signal::derive(move || summary().total_credit)
                            tone=Signal::derive(|| Tone::Positive)
                        />
                        <SummaryCard
                            title="Total Debit"
                            value=Signal::derive(move || summary().total_debit)
                            tone=Signal::derive(|| Tone::Negative)
                        />
                        <SummaryCard
                            title="Net Flow"
                            value=Signal::derive(move || summary().net_flow())
                            tone=Signal::derive(move || Tone::for_flow(summary().net_flow()))
                        />
                        <SummaryCard
                            title="Transactions"
                            value=Signal::derive(move || summary().count as f64)
                            tone=Signal::derive(|| Tone::Neutral)
                            count=true
                        />
                    </div>

                    <table class="ledger">
                        <thead>
                            <tr>
                                <th>"Time"</th>
                                <th>"Type"</th>
                                <th>"Counterparty"</th>
                                <th>"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let account = detail
                                    .with(|d| d.as_ref().map(|u| u.account.account_number.clone()))
                                    .unwrap_or_default();
                                let rows = filtered.with(|(rows, _)| rows.clone());
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="ledger__empty">"No transactions found"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|entry| ledger_row(&account, entry))
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}
