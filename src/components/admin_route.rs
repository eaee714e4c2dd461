//! Admin console guard.
//!
//! TRADE-OFFS
//! ==========
//! The role comes from the unverified token payload, so this gate only keeps
//! customers from seeing a console whose every call would fail. The session
//! is read from browser storage, which the server cannot see; the decision
//! waits until after hydration so server and client markup agree.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::GuardOutcome;
use crate::state::session::Session;
use crate::util::access::{AccessDecision, decide_admin};
use crate::util::auth::install_guard_redirect;

#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let hydrated = RwSignal::new(false);
    Effect::new(move || hydrated.set(true));

    let decision = Memo::new(move |_| {
        if hydrated.get() {
            session.with(decide_admin)
        } else {
            AccessDecision::Loading
        }
    });
    install_guard_redirect(decision, use_navigate());

    view! { <GuardOutcome decision=decision children=children/> }
}
