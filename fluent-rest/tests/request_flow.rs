//! Integration tests for the builder-to-response flow.
//!
//! These tests use wiremock to mock HTTP responses and verify what the
//! builder puts on the wire and how responses are mapped back.

use std::time::Duration;

use fluent_rest::{
    BodyKind, HttpTransport, NamingPolicy, RequestBuilder, RestMethod, SerializerOptions,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    user_id: u64,
    display_name: String,
}

fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::builder()
        .base_url(server.uri())
        .unwrap()
        .build()
        .unwrap()
}

/// Test that a camelCase policy renames outgoing keys and that
/// case-insensitive decoding reads them back.
#[tokio::test]
async fn test_camel_case_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/profiles/9"))
        .and(body_json(serde_json::json!({
            "userId": 9,
            "displayName": "Ada"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "userId": 9,
            "displayName": "Ada L."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = Arc::new(
        SerializerOptions::default()
            .naming_policy(NamingPolicy::CamelCase)
            .case_insensitive(true),
    );
    let response = RequestBuilder::with_options(transport(&mock_server), options)
        .with_method(RestMethod::Patch)
        .with_endpoint("/profiles/9")
        .with_body(&Profile {
            user_id: 9,
            display_name: "Ada".to_string(),
        })
        .unwrap()
        .build_request()
        .unwrap()
        .send_data::<Profile>()
        .await
        .unwrap();

    assert!(response.is_successful());
    assert_eq!(
        response.data().map(|p| p.display_name.as_str()),
        Some("Ada L.")
    );
}

/// Test that GET never sends a configured body.
#[tokio::test]
async fn test_get_drops_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let response = RequestBuilder::new(transport(&mock_server))
        .with_method(RestMethod::Get)
        .with_endpoint("/profiles")
        .with_body(&serde_json::json!({"ignored": true}))
        .unwrap()
        .build_request()
        .unwrap()
        .send()
        .await;

    assert!(response.is_successful());
    assert_eq!(response.content(), Some("[]"));

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
    assert!(!received[0].headers.contains_key("content-type"));
}

/// Test that an explicit response kind overrides the body kind.
#[tokio::test]
async fn test_response_kind_overrides_body_kind() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profiles"))
        .and(header("accept", "application/xml"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .respond_with(ResponseTemplate::new(201).set_body_string(
            "<profile><user_id>4</user_id><display_name>Grace</display_name></profile>",
        ))
        .mount(&mock_server)
        .await;

    let response = RequestBuilder::new(transport(&mock_server))
        .with_method(RestMethod::Post)
        .with_endpoint("/profiles")
        .with_body(&Profile {
            user_id: 4,
            display_name: "Grace".to_string(),
        })
        .unwrap()
        .with_response_kind(BodyKind::Xml)
        .build_request()
        .unwrap()
        .send_data::<Profile>()
        .await
        .unwrap();

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.data().map(|p| p.user_id), Some(4));
}

/// Test that the transport's default timeout applies when the request sets none.
#[tokio::test]
async fn test_default_timeout_applies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::builder()
        .base_url(mock_server.uri())
        .unwrap()
        .timeout(Duration::from_millis(150))
        .build()
        .unwrap();

    let executor = RequestBuilder::new(transport)
        .with_method(RestMethod::Get)
        .with_endpoint("/slow")
        .build_request()
        .unwrap();
    assert_eq!(executor.request().timeout(), Some(Duration::from_millis(150)));

    let response = executor.send().await;
    assert!(!response.is_successful());
    assert_eq!(response.status_code(), 500);
    assert_eq!(response.status_description(), Some("Request failed"));
    assert_eq!(response.error_body(), Some("Request timeout after 150ms"));
}

/// Test that builders sharing one transport can send concurrently.
#[tokio::test]
async fn test_concurrent_requests_share_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(|req: &wiremock::Request| {
            let page = req
                .url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            ResponseTemplate::new(200).set_body_string(page)
        })
        .expect(3)
        .mount(&mock_server)
        .await;

    let shared = transport(&mock_server);
    let send = |page: &'static str| {
        RequestBuilder::new(shared.clone())
            .with_method(RestMethod::Get)
            .with_endpoint("/items")
            .with_query_parameter("page", page)
            .build_request()
            .unwrap()
            .send()
    };

    let (a, b, c) = tokio::join!(send("1"), send("2"), send("3"));
    assert_eq!(a.content(), Some("1"));
    assert_eq!(b.content(), Some("2"));
    assert_eq!(c.content(), Some("3"));
}

/// Test that server errors keep the raw body for diagnostics.
#[tokio::test]
async fn test_server_error_body_preserved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/profiles/1"))
        .and(query_param("hard", "true"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let response = RequestBuilder::new(transport(&mock_server))
        .with_method(RestMethod::Delete)
        .with_endpoint("/profiles/1")
        .with_query_parameter("hard", "true")
        .build_request()
        .unwrap()
        .send_data::<Profile>()
        .await
        .unwrap();

    assert!(!response.is_successful());
    assert_eq!(response.status_code(), 503);
    assert_eq!(response.status_description(), Some("Service Unavailable"));
    assert_eq!(response.error_body(), Some("maintenance"));
    assert!(response.into_data().is_none());
}
