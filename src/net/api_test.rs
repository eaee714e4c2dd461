use super::*;

fn config() -> ClientConfig {
    ClientConfig { api_base_url: "https://bank.test".to_owned() }
}

#[test]
fn admin_user_endpoint_formats_expected_path() {
    assert_eq!(admin_user_endpoint("1234567890"), "/admin/user/1234567890");
}

#[test]
fn admin_account_endpoint_formats_expected_path() {
    assert_eq!(admin_account_endpoint("1234567890"), "/admin/account/1234567890");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn client_joins_base_url_and_path() {
    let client = ApiClient::new(&config(), &Session::default());
    assert_eq!(client.url("/user/dashboard"), "https://bank.test/user/dashboard");
}

#[test]
fn client_without_session_sends_no_authorization() {
    let client = ApiClient::new(&config(), &Session::default());
    assert_eq!(client.authorization(), None);
}

#[test]
fn client_snapshots_session_token() {
    let mut session = Session::default();
    session.login("tok-1");
    let client = ApiClient::new(&config(), &session);
    session.login("tok-2");
    assert_eq!(client.authorization().as_deref(), Some("Bearer tok-1"));
}
