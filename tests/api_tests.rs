//! Integration tests for busha-commerce.
//!
//! Each test starts an in-process axum server on a random local port,
//! points a real `CommerceClient` at it and checks both what the client
//! sent and how it decoded the canned reply.
//!
//! Run with: cargo test --test api_tests
//! Set RUST_LOG=busha_commerce=debug to see request logging.

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use futures_util::StreamExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use busha_commerce::prelude::*;
use busha_commerce::RequestLogger;

const TEST_KEY: &str = "test_3f6c1a9e2b";
const CHARGE_ID: &str = "7d9f1b2e-3c4a-4b5d-8e6f-0a1b2c3d4e5f";

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

// ============================================================================
// MOCK SERVER
// ============================================================================

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }

    fn query_param(&self, key: &str) -> Option<String> {
        self.query.as_deref().and_then(|q| {
            q.split('&').find_map(|pair| {
                let (k, v) = pair.split_once('=')?;
                (k == key).then(|| v.to_string())
            })
        })
    }
}

type Responder = Arc<dyn Fn(&Recorded) -> (u16, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responder: Responder,
    delay: Duration,
}

struct MockServer {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
    {
        Self::start_with_delay(Duration::ZERO, responder).await
    }

    async fn start_with_delay<F>(delay: Duration, responder: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
    {
        init_logging();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: requests.clone(),
            responder: Arc::new(responder),
            delay,
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    fn client(&self) -> CommerceClient {
        self.client_with(ClientConfig::default())
    }

    fn client_with(&self, config: ClientConfig) -> CommerceClient {
        CommerceClient::with_config(TEST_KEY, config.with_base_url(&self.base_url))
            .expect("valid test client")
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let recorded = Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(String::from),
        headers,
        body: body.to_vec(),
    };
    let (status, reply) = (state.responder)(&recorded);
    state.requests.lock().unwrap().push(recorded);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply,
    )
}

// ============================================================================
// FIXTURES
// ============================================================================

fn success(data: Value) -> (u16, String) {
    (
        200,
        json!({"status": "success", "message": "Request successful", "data": data}).to_string(),
    )
}

fn success_page(data: Value, page: i64, total_pages: i64) -> (u16, String) {
    let count = data.as_array().map(|a| a.len()).unwrap_or(0);
    (
        200,
        json!({
            "status": "success",
            "message": "Retrieved",
            "pagination": {
                "page": page,
                "per_page": 2,
                "offset": (page - 1) * 2,
                "total_entries_size": total_pages * 2,
                "current_entries_size": count,
                "total_pages": total_pages
            },
            "data": data
        })
        .to_string(),
    )
}

fn api_error(status: u16, name: &str, message: &str) -> (u16, String) {
    (
        status,
        json!({"error": {"name": name, "message": message}}).to_string(),
    )
}

fn charge_json(reference: &str) -> Value {
    json!({
        "id": CHARGE_ID,
        "business_id": "11111111-2222-3333-4444-555555555555",
        "business_name": "Acme",
        "reference": reference,
        "hosted_url": format!("https://pay.busha.co/charges/{reference}"),
        "price_fixed": true,
        "meta": {"name": "test", "email": "sarah.shaw@example.co"},
        "expires_at": "2024-01-01T10:00:00Z",
        "timeline": [{"status": "NEW", "context": "", "created_at": "2024-01-01T09:00:00Z"}],
        "supported_assets": [{"currency_id": "USDT", "chains": ["TRX", "ETH"], "name": "Tether"}],
        "payments": [],
        "pricing": [{"currency_id": "USDT", "amount": "3.10", "rate": "1612.9", "is_local": false}],
        "addresses": [{"currency_id": "USDT", "chain": "TRX", "address": "TXyz", "memo": "", "label": ""}],
        "local_amount": "5000",
        "local_currency": "NGN"
    })
}

fn checkout_json() -> Value {
    json!({
        "id": "0b6f4a2c-8f4e-4e4b-9a3d-2f1e0d9c8b7a",
        "business_id": "biz_1",
        "name": "Tip jar",
        "description": "Coffee",
        "checkout_type": "donation",
        "requested_info": ["name", "email"],
        "local_amount": "0",
        "local_currency": "NGN",
        "active": false,
        "created_at": "2024-01-01T09:00:00Z"
    })
}

fn address_json(currency: &str) -> Value {
    json!({
        "id": "3c0a2f7e-1111-4a2b-9c3d-4e5f6a7b8c9d",
        "business_id": "11111111-2222-3333-4444-555555555555",
        "currency_id": currency,
        "chain": "TRX",
        "address": "TAbc",
        "memo": "",
        "label": "treasury",
        "created_at": "2024-01-01T09:00:00Z"
    })
}

// ============================================================================
// DISPATCH CORE TESTS
// ============================================================================

mod dispatch_tests {
    use super::*;

    #[tokio::test]
    async fn test_request_headers() {
        let server = MockServer::start(|_| success(charge_json("BCC_1"))).await;
        server.client().charges().get(CHARGE_ID).await.unwrap();

        let req = server.only_request();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, format!("/charges/{CHARGE_ID}"));
        assert_eq!(req.header("x-bc-api-key").as_deref(), Some(TEST_KEY));
        assert_eq!(req.header("user-agent").as_deref(), Some("Busha/Commerce-SDK"));
        assert_eq!(req.header("content-type").as_deref(), Some("application/json"));
        assert!(req.body.is_empty(), "GET must not send a body");
    }

    #[tokio::test]
    async fn test_custom_user_agent() {
        let server = MockServer::start(|_| success(charge_json("BCC_1"))).await;
        let client = server.client_with(ClientConfig::default().with_user_agent("shop/1.2"));
        client.charges().get(CHARGE_ID).await.unwrap();

        assert_eq!(server.only_request().header("user-agent").as_deref(), Some("shop/1.2"));
    }

    #[tokio::test]
    async fn test_success_populates_nested_data() {
        let server = MockServer::start(|_| success(charge_json("BCC_42"))).await;
        let resp = server.client().charges().get(CHARGE_ID).await.unwrap();

        assert!(resp.envelope.is_success());
        assert_eq!(resp.envelope.message, "Request successful");
        assert_eq!(resp.data.reference, "BCC_42");
        assert_eq!(resp.data.local_amount, dec!(5000));
        assert_eq!(resp.data.pricing[0].amount, dec!(3.10));
        assert_eq!(resp.data.supported_assets[0].chains, vec!["TRX", "ETH"]);
        assert_eq!(resp.data.meta["email"], "sarah.shaw@example.co");
    }

    #[tokio::test]
    async fn test_success_with_null_fields() {
        let server = MockServer::start(|_| {
            let mut charge = charge_json("BCC_NULL");
            charge["business_id"] = Value::Null;
            charge["callback_url"] = Value::Null;
            charge["addresses"][0]["memo"] = Value::Null;
            charge["payments"] = Value::Null;
            (
                200,
                json!({"status": "success", "message": null, "data": charge}).to_string(),
            )
        })
        .await;
        let resp = server.client().charges().get(CHARGE_ID).await.unwrap();

        assert!(resp.envelope.is_success());
        assert_eq!(resp.envelope.message, "");
        assert_eq!(resp.data.reference, "BCC_NULL");
        assert!(resp.data.business_id.is_nil());
        assert_eq!(resp.data.callback_url, "");
        assert_eq!(resp.data.addresses[0].memo, "");
        assert!(resp.data.payments.is_empty());
    }

    #[tokio::test]
    async fn test_id_is_sent_as_one_path_segment() {
        let server = MockServer::start(|_| success(charge_json("BCC_1"))).await;
        server.client().charges().get("x/../../events").await.unwrap();

        assert_eq!(server.only_request().path, "/charges/x%2F..%2F..%2Fevents");
    }

    #[tokio::test]
    async fn test_api_error_is_lowercased_message() {
        let server =
            MockServer::start(|_| api_error(404, "NotFoundError", "Charge Not Found")).await;
        let err = server.client().charges().get("999").await.unwrap_err();

        assert!(err.is_api_error());
        assert_eq!(err.to_string(), "charge not found");
        let api = err.as_api_error().unwrap();
        assert_eq!(api.status, 404);
        assert_eq!(api.name, "NotFoundError");
        assert_eq!(api.message, "Charge Not Found");
    }

    #[tokio::test]
    async fn test_api_error_for_every_non_2xx() {
        for status in [301u16, 400, 401, 422, 500, 503] {
            let server =
                MockServer::start(move |_| api_error(status, "Err", "Something Failed")).await;
            let err = server.client().events().get("evt_1").await.unwrap_err();
            match err {
                Error::Api(api) => {
                    assert_eq!(api.status, status);
                    assert_eq!(api.to_string(), "something failed");
                }
                other => panic!("status {status}: expected Api error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_malformed_error_body() {
        let server = MockServer::start(|_| (502, "<html>Bad Gateway</html>".to_string())).await;
        let err = server.client().charges().get(CHARGE_ID).await.unwrap_err();

        assert!(!err.is_api_error());
        assert!(matches!(err, Error::MalformedError { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start(|_| success(json!({"id": "not-a-uuid"}))).await;
        let err = server.client().charges().get(CHARGE_ID).await.unwrap_err();

        assert!(!err.is_api_error());
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_error_is_not_api_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CommerceClient::with_config(
            TEST_KEY,
            ClientConfig::default().with_base_url(format!("http://{addr}")),
        )
        .unwrap();
        let err = client.charges().get(CHARGE_ID).await.unwrap_err();

        assert!(matches!(err, Error::Http(_)));
        assert!(!err.is_api_error());
    }

    #[tokio::test]
    async fn test_transport_timeout() {
        let server = MockServer::start_with_delay(Duration::from_millis(500), |_| {
            success(charge_json("BCC_1"))
        })
        .await;
        let client =
            server.client_with(ClientConfig::default().with_timeout(Duration::from_millis(50)));

        match client.charges().get(CHARGE_ID).await.unwrap_err() {
            Error::Http(err) => assert!(err.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_debug_logger_sees_requests_only_when_enabled() {
        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<(String, String, Option<String>)>>>);

        impl RequestLogger for Capture {
            fn log_request(&self, method: &reqwest::Method, url: &str, body: Option<&str>) {
                self.0.lock().unwrap().push((
                    method.to_string(),
                    url.to_string(),
                    body.map(String::from),
                ));
            }
        }

        let server = MockServer::start(|_| success(charge_json("BCC_1"))).await;
        let capture = Capture::default();
        let client = server.client_with(ClientConfig::default().with_logger(capture.clone()));

        client.charges().get(CHARGE_ID).await.unwrap();
        assert!(capture.0.lock().unwrap().is_empty());

        client.set_debug(true);
        client
            .charges()
            .create(&ChargeRequest::fixed(dec!(10), "USD"))
            .await
            .unwrap();

        let logged = capture.0.lock().unwrap().clone();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].0, "POST");
        assert_eq!(logged[0].1, format!("{}/charges", server.base_url));
        let body: Value = serde_json::from_str(logged[0].2.as_deref().unwrap()).unwrap();
        assert_eq!(body["local_amount"], "10");
    }
}

// ============================================================================
// LIST QUERY TESTS
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_without_filters_sends_no_query() {
        let server = MockServer::start(|_| success_page(json!([]), 1, 1)).await;
        let resp = server.client().charges().list(&ListParams::default()).await.unwrap();

        assert!(resp.envelope.is_success());
        assert!(resp.data.is_empty());
        let req = server.only_request();
        assert_eq!(req.path, "/charges");
        assert_eq!(req.query, None);
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let server = MockServer::start(|_| {
            success_page(json!([charge_json("BCC_1"), charge_json("BCC_2")]), 1, 3)
        })
        .await;
        let params = ListParams::new().sort("asc").page(1).limit(2);
        let resp = server.client().charges().list(&params).await.unwrap();

        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[1].reference, "BCC_2");
        assert_eq!(resp.pagination.page, 1);
        assert_eq!(resp.pagination.per_page, 2);
        assert_eq!(resp.pagination.total_pages, 3);
        assert_eq!(resp.pagination.total_entries_size, 6);
        assert_eq!(resp.pagination.current_entries_size, 2);
        assert_eq!(
            server.only_request().query.as_deref(),
            Some("sort=asc&limit=2&page=1")
        );
    }

    #[tokio::test]
    async fn test_currency_only_sent_for_addresses() {
        let server = MockServer::start(|req| {
            if req.path == "/addresses" {
                success_page(json!([address_json("USDT")]), 1, 1)
            } else {
                success_page(json!([]), 1, 1)
            }
        })
        .await;
        let client = server.client();
        let params = ListParams::new().limit(5).currency("USDT");

        let addresses = client.addresses().list(&params).await.unwrap();
        client.invoices().list(&params).await.unwrap();

        assert_eq!(addresses.data[0].currency_id, "USDT");
        let requests = server.requests();
        assert_eq!(requests[0].query.as_deref(), Some("limit=5&currency=USDT"));
        assert_eq!(requests[1].path, "/invoices");
        assert_eq!(requests[1].query.as_deref(), Some("limit=5"));
    }

    #[tokio::test]
    async fn test_events_list_reads_events_key() {
        let server = MockServer::start(|_| {
            (
                200,
                json!({
                    "status": "success",
                    "message": "Events retrieved",
                    "pagination": {"page": 1, "per_page": 10, "total_pages": 1},
                    "events": [{
                        "id": "evt_1",
                        "resource": "charge",
                        "created_at": "2024-02-02T12:00:00Z",
                        "data": {"id": CHARGE_ID, "reference": "BCC_1", "type": "charge:pending"}
                    }]
                })
                .to_string(),
            )
        })
        .await;

        let resp = server.client().events().list(&ListParams::default()).await.unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].resource, "charge");
        assert_eq!(resp.data[0].data.event_type.as_deref(), Some("charge:pending"));
        assert_eq!(resp.pagination.per_page, 10);
    }

    #[tokio::test]
    async fn test_list_stream_walks_pages() {
        let server = MockServer::start(|req| {
            let page: i64 = req.query_param("page").unwrap().parse().unwrap();
            let refs = json!([
                charge_json(&format!("BCC_{page}a")),
                charge_json(&format!("BCC_{page}b"))
            ]);
            success_page(refs, page, 3)
        })
        .await;

        let references: Vec<String> = server
            .client()
            .charges()
            .list_stream(ListParams::new().limit(2).sort("desc"))
            .map(|r| r.unwrap().reference)
            .collect()
            .await;

        assert_eq!(
            references,
            vec!["BCC_1a", "BCC_1b", "BCC_2a", "BCC_2b", "BCC_3a", "BCC_3b"]
        );
        let queries: Vec<_> = server.requests().into_iter().map(|r| r.query.unwrap()).collect();
        assert_eq!(
            queries,
            vec![
                "sort=desc&limit=2&page=1",
                "sort=desc&limit=2&page=2",
                "sort=desc&limit=2&page=3"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_stream_surfaces_api_error() {
        let server = MockServer::start(|req| {
            if req.query_param("page").as_deref() == Some("1") {
                success_page(json!([checkout_json()]), 1, 2)
            } else {
                api_error(500, "InternalError", "Try Again")
            }
        })
        .await;

        let results: Vec<_> = server
            .client()
            .checkouts()
            .list_stream(ListParams::default())
            .collect()
            .await;

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err().to_string(), "try again");
    }
}

// ============================================================================
// RESOURCE SERVICE TESTS
// ============================================================================

mod charges_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_charge_sends_json_body() {
        let server = MockServer::start(|_| success(charge_json("BCC_NEW"))).await;
        let req = ChargeRequest::open()
            .with_meta(json!({"name": "test", "email": "sarah.shaw@example.co"}));

        let resp = server.client().charges().create(&req).await.unwrap();
        assert_eq!(resp.envelope.status, "success");

        let sent = server.only_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.path, "/charges");
        assert_eq!(
            sent.json(),
            json!({"fixed_price": false, "meta": {"name": "test", "email": "sarah.shaw@example.co"}})
        );
    }

    #[tokio::test]
    async fn test_create_fixed_charge_without_amount_is_api_error() {
        let server = MockServer::start(|req| {
            if req.json().get("local_amount").is_none() {
                api_error(422, "ValidationError", "Local Amount Is Required")
            } else {
                success(charge_json("BCC_1"))
            }
        })
        .await;
        let req = ChargeRequest {
            fixed_price: true,
            ..Default::default()
        };

        let err = server.client().charges().create(&req).await.unwrap_err();
        assert!(err.is_api_error());
        assert!(!err.is_validation_error());
        assert_eq!(err.to_string(), "local amount is required");
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_and_cancel() {
        let server = MockServer::start(|_| success(charge_json("BCC_1"))).await;
        let client = server.client();

        client.charges().resolve(CHARGE_ID, "UNDERPAID").await.unwrap();
        client.charges().cancel(&format!("  {CHARGE_ID} ")).await.unwrap();

        let requests = server.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, format!("/charges/{CHARGE_ID}/resolve"));
        assert_eq!(requests[0].json(), json!({"context": "UNDERPAID"}));

        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(requests[1].path, format!("/charges/{CHARGE_ID}/cancel"));
        assert_eq!(requests[1].json(), Value::Null);
    }
}

mod checkouts_tests {
    use super::*;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            name: "Tip jar".into(),
            description: "Coffee".into(),
            checkout_type: CheckoutType::Donation,
            requested_info: vec!["name".into(), "email".into()],
            local_amount: dec!(0),
            local_currency: "NGN".into(),
        }
    }

    #[tokio::test]
    async fn test_checkout_lifecycle_requests() {
        let server = MockServer::start(|req| match (req.method.as_str(), req.path.as_str()) {
            ("PUT", _) | ("DELETE", _) => (
                200,
                json!({"status": "success", "message": "Done"}).to_string(),
            ),
            (_, path) if path.ends_with("/charge") => success(charge_json("BCC_CO")),
            _ => success(checkout_json()),
        })
        .await;
        let client = server.client();
        let id = "0b6f4a2c-8f4e-4e4b-9a3d-2f1e0d9c8b7a";

        let created = client.checkouts().create(&request()).await.unwrap();
        assert_eq!(created.data.checkout_type, CheckoutType::Donation);

        let updated = client.checkouts().update(id, &request()).await.unwrap();
        assert!(updated.is_success());
        assert_eq!(updated.message, "Done");

        let toggled = client.checkouts().toggle_status(id).await.unwrap();
        assert!(!toggled.data.active);

        let deleted = client.checkouts().delete(id).await.unwrap();
        assert!(deleted.is_success());

        let charge = client
            .checkouts()
            .create_charge(id, &ChargeRequest::open())
            .await
            .unwrap();
        assert_eq!(charge.data.reference, "BCC_CO");

        let sent: Vec<_> = server
            .requests()
            .into_iter()
            .map(|r| (r.method.to_string(), r.path, r.body.is_empty()))
            .collect();
        assert_eq!(
            sent,
            vec![
                ("POST".to_string(), "/checkouts".to_string(), false),
                ("PUT".to_string(), format!("/checkouts/{id}"), false),
                ("PATCH".to_string(), format!("/checkouts/{id}/active"), true),
                ("DELETE".to_string(), format!("/checkouts/{id}"), true),
                ("POST".to_string(), format!("/checkouts/{id}/charge"), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_checkout_request_echo_round_trip() {
        let server = MockServer::start(|req| {
            (200, json!({"status": "success", "echo": req.json()}).to_string())
        })
        .await;
        let client = server.client();

        client.checkouts().update("co_1", &request()).await.unwrap();
        let echoed: CheckoutRequest = serde_json::from_value(server.only_request().json()).unwrap();
        assert_eq!(echoed, request());
    }
}

mod payment_links_tests {
    use super::*;

    fn link_json() -> Value {
        json!({
            "id": "5e8d7c6b-5a49-4838-9271-6a5b4c3d2e1f",
            "business_id": "biz_1",
            "name": "Workshop ticket",
            "description": "Saturday session",
            "payment_link_type": "fixed_price",
            "requested_info": ["email"],
            "local_amount": "15000",
            "local_currency": "NGN",
            "active": true
        })
    }

    #[tokio::test]
    async fn test_payment_link_requests() {
        let server = MockServer::start(|req| match req.method.as_str() {
            "DELETE" => (200, json!({"status": "success", "message": "Deleted"}).to_string()),
            "GET" if req.path == "/payment_links" => success_page(json!([link_json()]), 1, 1),
            _ if req.path.ends_with("/charge") => success(charge_json("BCC_PL")),
            _ => success(link_json()),
        })
        .await;
        let client = server.client();
        let id = "5e8d7c6b-5a49-4838-9271-6a5b4c3d2e1f";
        let request = PaymentLinkRequest {
            name: "Workshop ticket".into(),
            description: "Saturday session".into(),
            payment_link_type: PaymentLinkType::FixedPrice,
            requested_info: vec!["email".into()],
            local_amount: dec!(15000),
            local_currency: "NGN".into(),
        };

        let created = client.payment_links().create(&request).await.unwrap();
        assert_eq!(created.data.local_amount, dec!(15000));
        assert!(created.data.active);

        let listed = client
            .payment_links()
            .list(&ListParams::new().sort("desc"))
            .await
            .unwrap();
        assert_eq!(listed.data[0].name, "Workshop ticket");

        client.payment_links().get(id).await.unwrap();
        client.payment_links().toggle_status(id).await.unwrap();
        let deleted = client.payment_links().delete(id).await.unwrap();
        assert_eq!(deleted.message, "Deleted");

        let charge = client
            .payment_links()
            .create_charge(id, &ChargeRequest::open())
            .await
            .unwrap();
        assert_eq!(charge.data.reference, "BCC_PL");

        let sent: Vec<_> = server
            .requests()
            .into_iter()
            .map(|r| (r.method.to_string(), r.path, r.query))
            .collect();
        assert_eq!(
            sent,
            vec![
                ("POST".to_string(), "/payment_links".to_string(), None),
                ("GET".to_string(), "/payment_links".to_string(), Some("sort=desc".to_string())),
                ("GET".to_string(), format!("/payment_links/{id}"), None),
                ("PATCH".to_string(), format!("/payment_links/{id}/active"), None),
                ("DELETE".to_string(), format!("/payment_links/{id}"), None),
                ("POST".to_string(), format!("/payment_links/{id}/charge"), None),
            ]
        );
    }
}

mod invoices_tests {
    use super::*;

    #[tokio::test]
    async fn test_invoice_requests() {
        let server = MockServer::start(|req| match req.method.as_str() {
            "DELETE" => (
                200,
                json!({"status": "success", "message": "Invoice voided"}).to_string(),
            ),
            _ => success(charge_json("BCC_INV")),
        })
        .await;
        let client = server.client();

        let voided = client.invoices().void("inv_1").await.unwrap();
        assert_eq!(voided.message, "Invoice voided");

        let charge = client.invoices().create_charge("inv_1").await.unwrap();
        assert_eq!(charge.data.reference, "BCC_INV");

        let requests = server.requests();
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].path, "/invoices/inv_1");
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].path, "/invoices/inv_1/charge");
        assert_eq!(requests[1].json(), json!({}));
    }
}

mod addresses_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_address_with_no_chains_is_api_error() {
        let server = MockServer::start(|req| {
            let chains_empty = req.json()["chains"].as_array().map_or(true, |c| c.is_empty());
            if chains_empty {
                api_error(400, "BadRequest", "Chains Cannot Be Empty")
            } else {
                success(address_json("USDT"))
            }
        })
        .await;
        let client = server.client();

        let err = client
            .addresses()
            .create(&AddressRequest {
                currency_id: "USDT".into(),
                chains: vec![],
                label: String::new(),
            })
            .await
            .unwrap_err();
        assert!(err.is_api_error());
        assert_eq!(err.to_string(), "chains cannot be empty");

        let created = client
            .addresses()
            .create(&AddressRequest {
                currency_id: "USDT".into(),
                chains: vec!["TRX".into()],
                label: "treasury".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.data.label, "treasury");
        assert_eq!(server.requests().len(), 2);
    }
}

// ============================================================================
// VALIDATION TESTS
// ============================================================================

mod validation_tests {
    use super::*;

    fn assert_missing(result: Result<impl std::fmt::Debug>, resource: &str) {
        match result {
            Err(Error::MissingId(name)) => assert_eq!(name, resource),
            other => panic!("expected MissingId({resource}), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_ids_never_reach_the_server() {
        let server = MockServer::start(|_| success(json!({}))).await;
        let client = server.client();

        assert_missing(client.charges().get("").await, "charge");
        assert_missing(client.charges().cancel("").await, "charge");
        assert_missing(client.charges().resolve(" ", "UNDERPAID").await, "charge");

        assert_missing(client.checkouts().get("").await, "checkout");
        assert_missing(client.checkouts().delete("").await, "checkout");
        assert_missing(client.checkouts().toggle_status("").await, "checkout");
        assert_missing(
            client.checkouts().update("", &CheckoutRequest::default()).await,
            "checkout",
        );
        assert_missing(
            client.checkouts().create_charge("", &ChargeRequest::open()).await,
            "checkout",
        );

        assert_missing(client.invoices().get("").await, "invoice");
        assert_missing(client.invoices().void("").await, "invoice");
        assert_missing(client.invoices().create_charge("\t").await, "invoice");

        assert_missing(client.payment_links().get("").await, "payment link");
        assert_missing(client.payment_links().delete("").await, "payment link");
        assert_missing(client.payment_links().toggle_status("").await, "payment link");
        assert_missing(
            client.payment_links().update("", &PaymentLinkRequest::default()).await,
            "payment link",
        );
        assert_missing(
            client.payment_links().create_charge("", &ChargeRequest::open()).await,
            "payment link",
        );

        assert_missing(client.addresses().get("").await, "address");
        assert_missing(client.events().get("").await, "event");

        assert!(server.requests().is_empty());
    }

    #[test]
    fn test_invalid_keys_rejected_at_construction() {
        for key in ["", "sk_live_123", "prod_123"] {
            let err = CommerceClient::new(key).unwrap_err();
            assert!(err.is_validation_error(), "{key:?} should be rejected");
        }
        assert_eq!(CommerceClient::new("live_1").unwrap().environment(), Environment::Live);
    }
}
