mod common;

use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/some/path" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "1");
    assert_eq!(json["short_url"], "https://sho.rt/1");
    assert_eq!(json["long_url"], "https://example.com/some/path");
}

#[tokio::test]
async fn test_shorten_codes_are_sequential() {
    let server = common::create_test_server();

    let mut codes = Vec::new();
    for i in 0..3 {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;
        let json = response.json::<serde_json::Value>();
        codes.push(json["code"].as_str().unwrap().to_string());
    }

    assert_eq!(codes, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_shorten_same_url_twice() {
    let server = common::create_test_server();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dup.example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dup.example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["code"], second["code"]);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_url_too_long() {
    let server = common::create_test_server();
    let url = format!("https://example.com/{}", "a".repeat(2048));

    let response = server.post("/api/shorten").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_shortened_link_resolves() {
    let server = common::create_test_server();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "http://example.com" }))
        .await
        .json::<serde_json::Value>();
    let code = created["code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "http://example.com");
}

async fn assert_shorten_rejected(url: &str) {
    let server = common::create_test_server();

    let response = server.post("/api/shorten").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error", "{url}");

    // A rejected request must not burn a code.
    let next = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(next["code"], "1", "{url}");
}

#[tokio::test]
async fn test_shorten_rejects_javascript_scheme() {
    assert_shorten_rejected("javascript:alert(1)").await;
}

#[tokio::test]
async fn test_shorten_rejects_file_scheme() {
    assert_shorten_rejected("file:///etc/passwd").await;
}

#[tokio::test]
async fn test_shorten_rejects_ftp_scheme() {
    assert_shorten_rejected("ftp://files.example.com/x").await;
}

#[tokio::test]
async fn test_shorten_rejects_data_scheme() {
    assert_shorten_rejected("data:text/html,<script>alert(1)</script>").await;
}

#[tokio::test]
async fn test_shorten_rejects_embedded_newline() {
    assert_shorten_rejected("https://example.com/a\nb").await;
}

#[tokio::test]
async fn test_shorten_rejects_embedded_tab() {
    assert_shorten_rejected("https://example.com/a\tb").await;
}

#[tokio::test]
async fn test_shortened_link_with_query_redirects_verbatim() {
    let server = common::create_test_server();
    let url = "https://example.com/search?q=rust%20lang&page=2#results";

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await
        .json::<serde_json::Value>();
    let code = created["code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), url);
}
