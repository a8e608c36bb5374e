use api_relay::http_client::HttpClientConfig;
use api_relay::token_client::TokenClient;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use httpmock::prelude::*;

fn http_client() -> reqwest::Client {
    HttpClientConfig {
        accept_invalid_certs: true,
        egress_proxy: None,
    }
    .to_client()
    .expect("reqwest client should build")
}

#[tokio::test]
async fn posts_client_credentials_grant_with_basic_auth() {
    let server = MockServer::start_async().await;
    let expected_auth = format!("Basic {}", STANDARD.encode("svc-id:svc-secret"));
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v4/access_token")
                .query_param("grant_type", "client_credentials")
                .header("content-type", "application/x-www-form-urlencoded")
                .header("authorization", expected_auth.as_str());
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"access_token":"tok-123","token_type":"Bearer","expires_in":300}"#);
        })
        .await;

    let token_client = TokenClient::new(&server.url("/v4/access_token"));
    let token = token_client
        .fetch_access_token(&http_client(), "svc-id", "svc-secret")
        .await
        .expect("token fetch should succeed");

    token_mock.assert_async().await;

    assert_eq!(token, "tok-123");
}

#[tokio::test]
async fn malformed_token_reply_yields_empty_token() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/v4/access_token");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>service unavailable</html>");
        })
        .await;

    let token_client = TokenClient::new(&server.url("/v4/access_token"));
    let token = token_client
        .fetch_access_token(&http_client(), "svc-id", "svc-secret")
        .await
        .expect("transport succeeded, so the fetch should too");

    assert_eq!(token, "");
}

#[tokio::test]
async fn token_reply_without_access_token_yields_empty_token() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/v4/access_token");
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{"error":"unauthorized_client"}"#);
        })
        .await;

    let token_client = TokenClient::new(&server.url("/v4/access_token"));
    let token = token_client
        .fetch_access_token(&http_client(), "svc-id", "bad-secret")
        .await
        .expect("only transport failures are errors");

    assert_eq!(token, "");
}
