//! Account summary card shared by the dashboard and account creation.

use leptos::prelude::*;

use crate::net::types::Account;
use crate::util::format::format_amount;

#[component]
pub fn AccountCard(account: Account, #[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let status = if account.is_active { "Active" } else { "Inactive" };
    view! {
        <div class="account-card">
            {title.map(|t| view! { <h3 class="account-card__title">{t}</h3> })}
            <dl class="account-card__fields">
                <dt>"Account Number"</dt>
                <dd>{account.account_number}</dd>
                <dt>"Account Type"</dt>
                <dd>{account.account_type}</dd>
                <dt>"Balance"</dt>
                <dd>{format_amount(account.balance)}</dd>
                <dt>"Daily Limit"</dt>
                <dd>{format_amount(account.daily_limit)}</dd>
                <dt>"Status"</dt>
                <dd>{status}</dd>
            </dl>
        </div>
    }
}
