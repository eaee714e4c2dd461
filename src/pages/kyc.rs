//! KYC submission page (PAN, address, phone).
//!
//! On success the backend's confirmation is shown briefly before moving on to
//! account creation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::Notice;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::access::CREATE_ACCOUNT_PATH;
use crate::util::browser::sleep_ms;
use crate::util::validation::{normalize_pan_input, validate_kyc};

const CONFIRMATION_DELAY_MS: u64 = 1200;

#[component]
pub fn KycPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let pan = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        message.set(String::new());
        let request = match validate_kyc(&pan.get(), &address.get(), &phone.get()) {
            Ok(r) => r,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::new(&config, &session.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.submit_kyc(&request).await {
                Ok(resp) => {
                    message.set(resp.message);
                    busy.set(false);
                    sleep_ms(CONFIRMATION_DELAY_MS).await;
                    navigate(CREATE_ACCOUNT_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(e.user_message("KYC submission failed"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"KYC Verification"</h1>
                <p class="auth-card__subtitle">"Complete your KYC to activate your bank account"</p>
                <Notice error=error message=message/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="PAN Number (e.g. ABCDE1234F)"
                        prop:value=move || pan.get()
                        on:input=move |ev| pan.set(normalize_pan_input(&event_target_value(&ev)))
                    />
                    <textarea
                        class="auth-input"
                        placeholder="Residential Address"
                        rows="3"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Phone Number"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying KYC..." } else { "Submit KYC" }}
                    </button>
                </form>
                <p class="auth-card__footer">"Your information is encrypted and securely stored"</p>
            </div>
        </div>
    }
}
