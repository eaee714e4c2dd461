//! Display formatting for money and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Rupee amount with two decimals, e.g. `₹1500.00` or `-₹20.50`.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-₹{:.2}", -amount)
    } else {
        format!("₹{amount:.2}")
    }
}

/// Human-readable timestamp.
///
/// In the browser this defers to the locale-aware `Date#toLocaleString`;
/// elsewhere (and for unparsable input) it falls back to [`compact_timestamp`].
pub fn format_time(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    compact_timestamp(iso)
}

/// `2024-05-01T10:20:30.123456` -> `2024-05-01 10:20:30`.
pub fn compact_timestamp(iso: &str) -> String {
    let without_fraction = iso.split('.').next().unwrap_or(iso);
    without_fraction.replacen('T', " ", 1)
}
