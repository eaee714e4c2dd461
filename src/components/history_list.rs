//! Customer transaction history list.

use leptos::prelude::*;

use crate::net::types::{HistoryEntry, TransactionKind};
use crate::util::format::{format_amount, format_time};

#[component]
pub fn HistoryList(entries: RwSignal<Vec<HistoryEntry>>) -> impl IntoView {
    view! {
        <div class="history">
            <h3 class="history__title">"Transaction History"</h3>
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <p class="history__empty">"No transactions yet"</p> }
            >
                <ul class="history__list">
                    {move || entries.get().into_iter().map(history_row).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

fn history_row(entry: HistoryEntry) -> impl IntoView {
    let modifier = match entry.kind {
        TransactionKind::Credit => "history__row history__row--credit",
        TransactionKind::Debit => "history__row history__row--debit",
    };
    let counterparty = match entry.name {
        Some(name) => format!("{name} ({})", entry.account_number),
        None => entry.account_number,
    };
    view! {
        <li class=modifier>
            <span class="history__kind">{entry.kind.label()}</span>
            <span class="history__amount">{format_amount(entry.amount)}</span>
            <span class="history__account">"Account: " {counterparty}</span>
            <span class="history__time">{format_time(&entry.time)}</span>
        </li>
    }
}
