use crate::Client;

#[test]
fn given_trailing_slash_when_client_created_then_slash_is_trimmed() {
    let client = Client::new("http://127.0.0.1:3001/");

    assert_eq!(client.base_url, "http://127.0.0.1:3001");
}

#[test]
fn given_several_trailing_slashes_when_client_created_then_all_are_trimmed() {
    let client = Client::new("http://localhost:8000///");

    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn given_clean_url_when_client_created_then_url_is_unchanged() {
    let client = Client::new("http://localhost:8000");

    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn given_query_params_when_url_built_then_values_are_encoded() {
    let client = Client::new("http://localhost:8000");

    let url = client
        .url("/scope/guest-token", &[("scopeId", "101"), ("subject", "a b&c")])
        .unwrap();

    assert_eq!(
        url.as_str(),
        "http://localhost:8000/scope/guest-token?scopeId=101&subject=a+b%26c"
    );
}

#[test]
fn given_no_params_when_url_built_then_no_query_is_appended() {
    let client = Client::new("http://localhost:8000");

    let url = client.url("/scopes", &[]).unwrap();

    assert_eq!(url.as_str(), "http://localhost:8000/scopes");
}

#[test]
fn given_garbage_base_when_url_built_then_url_error() {
    let client = Client::new("not a url");

    let result = client.url("/scopes", &[]);

    assert!(matches!(result, Err(crate::ClientError::Url { .. })));
}
