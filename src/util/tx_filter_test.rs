use super::*;

const ACCOUNT: &str = "1000000001";

fn entry(from: &str, to: &str, amount: f64, time: &str) -> LedgerEntry {
    LedgerEntry {
        from_account: from.to_owned(),
        to_account: to.to_owned(),
        amount,
        time: time.to_owned(),
    }
}

fn ledger() -> Vec<LedgerEntry> {
    vec![
        entry(ACCOUNT, "2000000002", 500.0, "2024-03-01T09:00:00"),
        entry("3000000003", ACCOUNT, 1200.0, "2024-03-05T18:30:00"),
        entry(ACCOUNT, "3000000003", 50.0, "2024-03-10T23:59:59.500000"),
        entry("2000000002", ACCOUNT, 75.0, "2024-03-11T00:00:00"),
    ]
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_filter_keeps_everything() {
    let (kept, summary) = apply(&LedgerFilter::default(), ACCOUNT, &ledger());
    assert_eq!(kept.len(), 4);
    assert_eq!(summary.count, 4);
    assert_eq!(summary.total_credit, 1275.0);
    assert_eq!(summary.total_debit, 550.0);
    assert_eq!(summary.net_flow(), 725.0);
}

#[test]
fn kind_filter_splits_credit_and_debit() {
    let credits = LedgerFilter { kind: KindFilter::Credit, ..LedgerFilter::default() };
    let (kept, summary) = apply(&credits, ACCOUNT, &ledger());
    assert_eq!(kept.len(), 2);
    assert_eq!(summary.total_debit, 0.0);

    let debits = LedgerFilter { kind: KindFilter::Debit, ..LedgerFilter::default() };
    let (kept, summary) = apply(&debits, ACCOUNT, &ledger());
    assert!(kept.iter().all(|e| e.from_account == ACCOUNT));
    assert_eq!(summary.total_debit, 550.0);
}

#[test]
fn date_bounds_are_inclusive_by_day() {
    let filter = LedgerFilter::from_inputs("all", "2024-03-05", "2024-03-10", "");
    let (kept, _) = apply(&filter, ACCOUNT, &ledger());
    let times: Vec<_> = kept.iter().map(|e| e.time.as_str()).collect();
    // 23:59:59.5 on the last day falls past the 23:59:59 cutoff.
    assert_eq!(times, vec!["2024-03-05T18:30:00"]);
}

#[test]
fn from_date_includes_midnight_of_that_day() {
    let filter = LedgerFilter::from_inputs("all", "2024-03-11", "", "");
    let (kept, _) = apply(&filter, ACCOUNT, &ledger());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].amount, 75.0);
}

#[test]
fn min_amount_drops_smaller_entries() {
    let filter = LedgerFilter::from_inputs("all", "", "", "100");
    let (kept, summary) = apply(&filter, ACCOUNT, &ledger());
    assert_eq!(kept.len(), 2);
    assert_eq!(summary.total_credit, 1200.0);
    assert_eq!(summary.total_debit, 500.0);
}

#[test]
fn from_inputs_ignores_blank_and_garbage_values() {
    let filter = LedgerFilter::from_inputs("bogus", "  ", "", "abc");
    assert_eq!(filter, LedgerFilter::default());
}

#[test]
fn self_transfer_counts_both_sides() {
    let entries = vec![entry(ACCOUNT, ACCOUNT, 10.0, "2024-01-01T00:00:00")];
    let (_, summary) = apply(&LedgerFilter::default(), ACCOUNT, &entries);
    assert_eq!(summary.total_credit, 10.0);
    assert_eq!(summary.total_debit, 10.0);
    assert_eq!(summary.net_flow(), 0.0);
    assert_eq!(summary.count, 1);
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_is_relative_to_account() {
    let rows = ledger();
    assert_eq!(direction(ACCOUNT, &rows[0]), Some(TransactionKind::Debit));
    assert_eq!(direction(ACCOUNT, &rows[1]), Some(TransactionKind::Credit));
    assert_eq!(direction("9999999999", &rows[0]), None);
}

#[test]
fn kind_filter_parse_round_trips_select_values() {
    for filter in KindFilter::ALL {
        assert_eq!(KindFilter::parse(filter.as_str()), filter);
    }
}
