mod common;

use axum::http::StatusCode;
use link_shortener::domain::repositories::LinkStore;
use serde_json::json;

#[tokio::test]
async fn test_shorten_new_url_created() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["short_url"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(json["long_url"], "https://example.com/some/long/path");
}

#[tokio::test]
async fn test_shorten_same_url_returns_same_code() {
    let (server, store) = common::create_test_server_with_store();
    let body = json!({ "long_url": "https://example.com/dedup" });

    let first = server.post("/api/shorten").json(&body).await;
    first.assert_status(StatusCode::CREATED);

    let second = server.post("/api/shorten").json(&body).await;
    second.assert_status_ok();

    assert_eq!(
        first.json::<serde_json::Value>()["short_code"],
        second.json::<serde_json::Value>()["short_code"]
    );
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, store) = common::create_test_server_with_store();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
    assert_eq!(json["error"]["details"]["url"], "not-a-url");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_with_custom_alias() {
    let (server, store) = common::create_test_server_with_store();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com/sale",
            "custom_alias": "promo"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "promo");
    assert_eq!(json["short_url"], "https://s.example.com/promo");
    assert_eq!(
        store.get("promo").await.unwrap().as_deref(),
        Some("https://example.com/sale")
    );
}

#[tokio::test]
async fn test_shorten_alias_conflict() {
    let (server, store) = common::create_test_server_with_store();

    server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://first.com", "custom_alias": "promo" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://second.com", "custom_alias": "promo" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "code_conflict");
    assert_eq!(json["error"]["details"]["code"], "promo");
    assert_eq!(
        store.get("promo").await.unwrap().as_deref(),
        Some("https://first.com")
    );
}

#[tokio::test]
async fn test_shorten_invalid_alias() {
    let server = common::create_test_server();

    for alias in ["bad alias", "semi;colon", "api"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "long_url": "https://example.com", "custom_alias": alias }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "invalid_alias",
            "alias {alias:?}"
        );
    }
}

#[tokio::test]
async fn test_shorten_oversized_alias_fails_validation() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_alias": "a".repeat(65)
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_shorten_empty_alias_means_random_code() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/empty", "custom_alias": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["short_code"]
            .as_str()
            .unwrap()
            .len(),
        6
    );
}

#[tokio::test]
async fn test_shorten_accepts_camel_case_body() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "longURL": "https://example.com/camel", "customAlias": "camel" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["short_code"], "camel");
}

#[tokio::test]
async fn test_shorten_accepts_custom_url_key() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/x", "custom_url": "promo" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["short_code"], "promo");
}

#[tokio::test]
async fn test_shorten_www_url_without_scheme() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "www.example.com/page" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["long_url"],
        "www.example.com/page"
    );
}

#[tokio::test]
async fn test_shorten_rejects_control_characters() {
    let (server, store) = common::create_test_server_with_store();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/a\u{1}b" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_url"
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_url_rejected() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "custom_alias": "promo" }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
}
