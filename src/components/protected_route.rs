//! Onboarding guard for customer routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `/dashboard`, `/transaction`, and `/create-account`. On mount it
//! fetches the dashboard payload once (no retry, no polling) and feeds the
//! result to [`decide_access`]. If the guard unmounts before the fetch
//! resolves, the result is dropped.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::state::session::Session;
use crate::util::access::{AccessDecision, StatusCheck, decide_access};
use crate::util::auth::install_guard_redirect;

/// Render `children` only once the signed-in customer has finished onboarding
/// (or is already on the onboarding step they still owe).
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let location = use_location();
    let check = RwSignal::new(StatusCheck::Pending);

    #[cfg(feature = "hydrate")]
    {
        let client = crate::net::api::ApiClient::new(&config, &session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = match client.dashboard().await {
                Ok(data) => StatusCheck::Loaded(data.onboarding()),
                Err(e) => {
                    log::debug!("onboarding status unavailable: {e}");
                    StatusCheck::Failed
                }
            };
            let _ = check.try_set(result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, config);
    }

    let decision = Memo::new(move |_| decide_access(&location.pathname.get(), check.get()));
    install_guard_redirect(decision, use_navigate());

    view! { <GuardOutcome decision=decision children=children/> }
}

/// Shared rendering of a guard decision.
#[component]
pub fn GuardOutcome(decision: Memo<AccessDecision>, children: ChildrenFn) -> impl IntoView {
    move || match decision.get() {
        AccessDecision::Render => children().into_any(),
        AccessDecision::Loading => view! { <div class="guard-status">"Checking access..."</div> }.into_any(),
        AccessDecision::Redirect(_) => view! { <div class="guard-status">"Redirecting..."</div> }.into_any(),
    }
}
