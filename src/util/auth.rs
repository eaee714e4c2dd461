//! Shared guard navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both route guards must perform identical redirect behavior: replace the
//! current history entry so "back" never returns to a page the visitor was
//! bounced from.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::access::AccessDecision;

/// History-replacing navigation options used by every guard redirect.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `decision` settles on a redirect.
pub fn install_guard_redirect<F>(decision: Memo<AccessDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let AccessDecision::Redirect(target) = decision.get() {
            log::debug!("guard redirect to {target}");
            navigate(target, replace_options());
        }
    });
}
