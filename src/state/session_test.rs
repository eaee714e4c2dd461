use super::*;

const ADMIN_TOKEN: &str = "a.eyJyb2xlIjoiYWRtaW4ifQ.b";

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.role(), None);
}

#[test]
fn from_token_treats_blank_as_absent() {
    assert!(!Session::from_token(Some(String::new())).is_authenticated());
    assert!(!Session::from_token(Some("  ".to_owned())).is_authenticated());
    assert!(!Session::from_token(None).is_authenticated());
}

#[test]
fn restore_outside_browser_yields_empty_session() {
    assert_eq!(Session::restore(), Session::default());
}

#[test]
fn login_stores_token_and_exposes_role() {
    let mut session = Session::default();
    session.login(ADMIN_TOKEN);
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some(ADMIN_TOKEN));
    assert_eq!(session.role().as_deref(), Some("admin"));
}

#[test]
fn login_with_opaque_token_is_authenticated_without_role() {
    let mut session = Session::default();
    session.login("opaque-token");
    assert!(session.is_authenticated());
    assert_eq!(session.role(), None);
}

#[test]
fn login_with_blank_token_clears_session() {
    let mut session = Session::from_token(Some(ADMIN_TOKEN.to_owned()));
    session.login("");
    assert!(!session.is_authenticated());
}

#[test]
fn logout_clears_token() {
    let mut session = Session::from_token(Some(ADMIN_TOKEN.to_owned()));
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
}
