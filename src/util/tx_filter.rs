//! Ledger filtering and summary figures for the admin console.
//!
//! Timestamps are compared as ISO-8601 strings, which order correctly as long
//! as the backend emits one consistent (naive, UTC) format. Date bounds are
//! `YYYY-MM-DD` values from `<input type="date">`; the upper bound is
//! inclusive through `23:59:59`.

#[cfg(test)]
#[path = "tx_filter_test.rs"]
mod tx_filter_test;

use crate::net::types::{LedgerEntry, TransactionKind};

/// Direction filter selected in the admin console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Credit,
    Debit,
}

impl KindFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Credit, Self::Debit];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }

    /// Parse a `<select>` value; unknown values mean "all".
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.as_str() == raw).unwrap_or_default()
    }
}

/// Filter criteria; empty inputs disable the corresponding criterion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LedgerFilter {
    pub kind: KindFilter,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub min_amount: Option<f64>,
}

impl LedgerFilter {
    /// Build from raw form values. An unparsable minimum amount is ignored.
    pub fn from_inputs(kind: &str, from_date: &str, to_date: &str, min_amount: &str) -> Self {
        let non_empty = |s: &str| Some(s.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            kind: KindFilter::parse(kind),
            from_date: non_empty(from_date),
            to_date: non_empty(to_date),
            min_amount: min_amount.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Whether `entry` passes every criterion, seen from `account`.
    pub fn matches(&self, account: &str, entry: &LedgerEntry) -> bool {
        let is_debit = entry.from_account == account;
        let is_credit = entry.to_account == account;
        match self.kind {
            KindFilter::Debit if !is_debit => return false,
            KindFilter::Credit if !is_credit => return false,
            _ => {}
        }
        if let Some(from) = &self.from_date {
            if entry.time.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.to_date {
            if entry.time > format!("{to}T23:59:59") {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if entry.amount < min {
                return false;
            }
        }
        true
    }
}

/// Totals over the filtered ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LedgerSummary {
    pub total_credit: f64,
    pub total_debit: f64,
    pub count: usize,
}

impl LedgerSummary {
    pub fn net_flow(&self) -> f64 {
        self.total_credit - self.total_debit
    }
}

/// How `entry` affects `account`. A self-transfer counts as a debit.
pub fn direction(account: &str, entry: &LedgerEntry) -> Option<TransactionKind> {
    if entry.from_account == account {
        Some(TransactionKind::Debit)
    } else if entry.to_account == account {
        Some(TransactionKind::Credit)
    } else {
        None
    }
}

/// Apply `filter` and total the surviving entries for `account`.
///
/// A self-transfer contributes to both totals, leaving net flow unchanged.
pub fn apply(filter: &LedgerFilter, account: &str, entries: &[LedgerEntry]) -> (Vec<LedgerEntry>, LedgerSummary) {
    let mut summary = LedgerSummary::default();
    let kept = entries
        .iter()
        .filter(|entry| filter.matches(account, entry))
        .inspect(|entry| {
            if entry.from_account == account {
                summary.total_debit += entry.amount;
            }
            if entry.to_account == account {
                summary.total_credit += entry.amount;
            }
            summary.count += 1;
        })
        .cloned()
        .collect();
    (kept, summary)
}
