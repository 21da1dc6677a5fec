use std::sync::{Arc, Mutex};

use axum::body::{Body, to_bytes};
use axum::http::Request;
use serde_json::Value;
use tower::ServiceExt as _;

use super::*;
use crate::customer_api::CustomerApi;

// =============================================================================
// MOCK UPSTREAM
// =============================================================================

struct MockApi {
    reply: Result<UpstreamReply, String>,
    created: Mutex<Vec<CustomerDraft>>,
    list_calls: Mutex<usize>,
}

impl MockApi {
    fn replying(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(UpstreamReply { status, body }),
            created: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
        })
    }

    fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            reply: Err("connection refused".to_owned()),
            created: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
        })
    }

    fn result(&self) -> Result<UpstreamReply, CustomerApiError> {
        self.reply.clone().map_err(CustomerApiError::Request)
    }
}

#[async_trait::async_trait]
impl CustomerApi for MockApi {
    async fn create_customer(&self, draft: &CustomerDraft) -> Result<UpstreamReply, CustomerApiError> {
        self.created.lock().unwrap().push(draft.clone());
        self.result()
    }

    async fn list_customers(&self) -> Result<UpstreamReply, CustomerApiError> {
        *self.list_calls.lock().unwrap() += 1;
        self.result()
    }
}

fn state_with(api: Arc<MockApi>) -> AppState {
    AppState::new(api)
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn draft() -> CustomerDraft {
    CustomerDraft {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        ..CustomerDraft::default()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[tokio::test]
async fn create_forwards_draft_and_relays_created() {
    let api = MockApi::replying(201, json!({ "id": "c-1", "firstName": "Ada" }));
    let response = create_customer(State(state_with(api.clone())), Json(draft())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!({ "id": "c-1", "firstName": "Ada" }));
    assert_eq!(*api.created.lock().unwrap(), vec![draft()]);
}

#[tokio::test]
async fn create_relays_validation_payload_unchanged() {
    let payload = json!({ "message": ["First name required", "Email invalid"], "statusCode": 400 });
    let api = MockApi::replying(400, payload.clone());
    let response = create_customer(State(state_with(api)), Json(CustomerDraft::default())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, payload);
}

#[tokio::test]
async fn create_relays_conflict_message() {
    let api = MockApi::replying(409, json!({ "message": "Email already exists" }));
    let response = create_customer(State(state_with(api)), Json(draft())).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message"], "Email already exists");
}

#[tokio::test]
async fn create_unreachable_upstream_is_bad_gateway() {
    let response = create_customer(State(state_with(MockApi::unreachable())), Json(draft())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await, json!({ "message": UNAVAILABLE_MESSAGE }));
}

#[tokio::test]
async fn list_relays_upstream_array() {
    let api = MockApi::replying(200, json!([{ "id": "c-1" }, { "id": "c-2" }]));
    let response = list_customers(State(state_with(api.clone()))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().map(Vec::len), Some(2));
    assert_eq!(*api.list_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn invalid_upstream_status_becomes_bad_gateway() {
    let api = MockApi::replying(42, json!({}));
    let response = list_customers(State(state_with(api))).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// ROUTER
// =============================================================================

#[tokio::test]
async fn router_posts_json_to_create() {
    let api = MockApi::replying(201, json!({ "id": "c-9" }));
    let app = crate::routes::api_routes(state_with(api.clone()));
    let request = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"firstName":"Grace","lastName":"","email":"","phone":"","address":"","city":""}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(api.created.lock().unwrap()[0].first_name, "Grace");
}

#[tokio::test]
async fn router_rejects_malformed_json_before_upstream() {
    let api = MockApi::replying(201, json!({}));
    let app = crate::routes::api_routes(state_with(api.clone()));
    let request = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
    assert!(api.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn router_healthz_ok() {
    let app = crate::routes::api_routes(state_with(MockApi::replying(200, json!([]))));
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
