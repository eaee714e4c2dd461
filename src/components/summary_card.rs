//! Figure tile for the admin ledger summary.

use leptos::prelude::*;

use crate::util::format::format_amount;

/// Colour accent of a summary tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Positive => "summary-card summary-card--positive",
            Self::Negative => "summary-card summary-card--negative",
            Self::Neutral => "summary-card summary-card--neutral",
        }
    }

    /// Green for zero or more, red below zero.
    pub fn for_flow(value: f64) -> Self {
        if value >= 0.0 { Self::Positive } else { Self::Negative }
    }
}

#[component]
pub fn SummaryCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] tone: Signal<Tone>,
    #[prop(optional)] count: bool,
) -> impl IntoView {
    let text = move || {
        let v = value.get();
        if count { format!("{v:.0}") } else { format_amount(v) }
    };
    view! {
        <div class=move || tone.get().class()>
            <p class="summary-card__title">{title}</p>
            <p class="summary-card__value">{text}</p>
        </div>
    }
}
