//! Small browser primitives used by page handlers.
//!
//! TRADE-OFFS
//! ==========
//! These only run from event handlers, which never fire during SSR, so the
//! server fallbacks simply pick the harmless answer.

/// Ask the user to confirm a destructive action via `window.confirm`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Wait `millis` milliseconds before continuing.
pub async fn sleep_ms(millis: u64) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(millis)).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = millis;
    }
}
