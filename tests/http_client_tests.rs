//! Integration tests for the shared invoker.
//!
//! These tests run the client against a local mock server and verify URL
//! construction, authentication headers, retry behavior, error
//! classification and cancellation.

use std::time::Duration;

use serde_json::{json, Value};
use shopify_rest::clients::{HttpMethod, InvalidHttpRequestError};
use shopify_rest::rest::resources::{Customer, Webhook};
use shopify_rest::{
    ApiVersion, Credentials, HostUrl, HttpError, ResourceError, RestClient, RetryPolicy,
    ShopDomain, ShopifyConfig,
};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client pointed at the mock server with fast retries.
fn client_for(server: &MockServer, credentials: Credentials, version: Option<&str>) -> RestClient {
    let mut builder = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .credentials(credentials)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retry_policy(
            RetryPolicy::new(3, Duration::from_millis(1), Duration::from_millis(5)).unwrap(),
        );
    if let Some(version) = version {
        builder = builder.api_version_str(version);
    }
    RestClient::new(&builder.build().unwrap()).unwrap()
}

fn token_client(server: &MockServer) -> RestClient {
    client_for(server, Credentials::access_token("shpat_test").unwrap(), None)
}

// ============================================================================
// URL and header construction
// ============================================================================

#[tokio::test]
async fn test_access_token_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let body: Value = client.get("shop", &()).await.unwrap();

    assert_eq!(body["shop"]["id"], 1);
}

#[tokio::test]
async fn test_basic_auth_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .and(header("Authorization", "Basic a2V5OnBhc3N3b3Jk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::basic("key", "password").unwrap(), None);
    let _: Value = client.get("/shop.json", &()).await.unwrap();
}

#[tokio::test]
async fn test_versioned_prefix_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(
        &server,
        Credentials::access_token("t").unwrap(),
        Some("2024-07"),
    );
    assert_eq!(client.api_version(), Some(&ApiVersion::V2024_07));

    let orders = client.orders().list(&()).await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_unrecognized_version_falls_back_to_unversioned_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(
        &server,
        Credentials::access_token("t").unwrap(),
        Some("not-a-version"),
    );
    assert_eq!(client.api_version(), None);
    assert_eq!(client.admin_path_prefix(), "admin");

    client.orders().list(&()).await.unwrap();
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/webhooks.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"webhook": {"topic": "orders/create", "address": "https://example.com/hook"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "webhook": {"id": 901431826, "topic": "orders/create", "address": "https://example.com/hook"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let created = client
        .webhooks()
        .create(&Webhook {
            topic: Some("orders/create".into()),
            address: Some("https://example.com/hook".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, Some(901431826));
}

#[tokio::test]
async fn test_post_with_null_body_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let error = client
        .post::<Value, _>("orders/1/close", &())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody { .. })
    ));
}

// ============================================================================
// Retry and error classification
// ============================================================================

#[tokio::test]
async fn test_rate_limited_without_retry_after_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/customers/count.json"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"errors": "Exceeded 2 calls per second"})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/customers/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let count = client.count("customers/count", &()).await.unwrap();

    assert_eq!(count, 7);
}

#[tokio::test]
async fn test_rate_limited_honors_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products/count.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0.0"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/products/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    assert_eq!(client.products().count(&()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_server_error_honors_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders/count.json"))
        .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/orders/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .credentials(Credentials::access_token("t").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retry_policy(
            RetryPolicy::new(2, Duration::from_secs(20), Duration::from_secs(60)).unwrap(),
        )
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let count = tokio::time::timeout(Duration::from_secs(5), client.orders().count(&()))
        .await
        .expect("Retry-After: 0 should skip the exponential backoff")
        .unwrap();
    assert_eq!(count, 4);
}

#[tokio::test]
async fn test_transport_failures_exhaust_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"shop": {}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .credentials(Credentials::access_token("t").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .timeout(Duration::from_millis(100))
        .retry_policy(
            RetryPolicy::new(2, Duration::from_millis(1), Duration::from_millis(5)).unwrap(),
        )
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let error = client
        .execute(HttpMethod::Get, "shop", None, &())
        .await
        .unwrap_err();

    match error {
        HttpError::RetryExhausted(exhausted) => {
            assert_eq!(exhausted.tries, 2);
            match *exhausted.last {
                HttpError::Transport(source) => assert!(source.is_timeout()),
                other => panic!("expected a transport error, got {other:?}"),
            }
        }
        other => panic!("expected retry exhaustion, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_error_is_not_retried_and_keeps_field_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/customers.json"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("X-Request-Id", "req-422")
                .set_body_json(json!({
                    "errors": {"email": ["has already been taken"], "phone": ["is invalid"]}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let error = client
        .customers()
        .create(&Customer {
            email: Some("bob.norman@mail.example.com".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(error.field_errors("email"), ["has already been taken"]);
    assert_eq!(error.field_errors("phone"), ["is invalid"]);
    assert_eq!(error.request_id(), Some("req-422"));
    match error {
        ResourceError::Http(HttpError::Validation(response)) => {
            assert_eq!(response.code, 422);
            assert_eq!(
                response.message,
                "email: has already been taken, phone: is invalid"
            );
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/customers/404.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let error = client.customers().get(404, &()).await.unwrap_err();

    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_persistent_server_error_exhausts_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(3)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let error = client
        .execute(HttpMethod::Get, "orders", None, &())
        .await
        .unwrap_err();

    match error {
        HttpError::RetryExhausted(exhausted) => {
            assert_eq!(exhausted.tries, 3);
            match *exhausted.last {
                HttpError::Server(error) => assert_eq!(error.response.code, 503),
                other => panic!("expected a server error, got {other:?}"),
            }
        }
        other => panic!("expected retry exhaustion, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_attempt_returns_bare_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .credentials(Credentials::access_token("t").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retry_policy(RetryPolicy::no_retry())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let error = client
        .execute(HttpMethod::Get, "orders", None, &())
        .await
        .unwrap_err();
    assert!(matches!(error, HttpError::Server(ref e) if e.response.code == 500));
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/customers/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let error = client.count("customers/count", &()).await.unwrap_err();

    assert!(matches!(error, HttpError::Decode(_)));
}

#[tokio::test]
async fn test_missing_envelope_key_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/customers/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let error = client.customers().get(1, &()).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Http(HttpError::Decode(_))
    ));
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_cancellation_interrupts_backoff() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .credentials(Credentials::access_token("t").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retry_policy(
            RetryPolicy::new(5, Duration::from_secs(20), Duration::from_secs(60)).unwrap(),
        )
        .build()
        .unwrap();
    let token = CancellationToken::new();
    let client = RestClient::new(&config)
        .unwrap()
        .with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client.execute(HttpMethod::Get, "orders", None, &()),
    )
    .await
    .expect("cancellation should end the retry loop promptly");

    canceller.await.unwrap();
    assert!(matches!(result, Err(HttpError::Cancelled)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_already_cancelled_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    token.cancel();
    let client = token_client(&server).with_cancellation(token);

    let result = client.count("orders/count", &()).await;
    assert!(matches!(result, Err(HttpError::Cancelled)));
}
