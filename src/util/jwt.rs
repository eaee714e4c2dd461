//! Unverified JWT payload decoding for UI routing.
//!
//! TRADE-OFFS
//! ==========
//! The signature is never checked in the browser. The decoded role only
//! decides which screen to show; every admin endpoint re-validates the token
//! server-side, so a forged payload gains nothing but a page of failing calls.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

pub const ADMIN_ROLE: &str = "admin";

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Decode the claims object from the middle segment of `header.payload.signature`.
///
/// Returns `None` for a wrong segment count, invalid base64 (standard or
/// URL-safe, padding optional), invalid JSON, or a non-object payload.
pub fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    let bytes = STANDARD_LENIENT
        .decode(payload)
        .or_else(|_| URL_SAFE_LENIENT.decode(payload))
        .ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

/// The `role` claim of `token`, or `None` on any decoding failure.
pub fn role_from_token(token: &str) -> Option<String> {
    decode_claims(token)?.get("role")?.as_str().map(str::to_owned)
}

pub fn is_admin_token(token: &str) -> bool {
    role_from_token(token).as_deref() == Some(ADMIN_ROLE)
}
