use super::*;
use crate::net::error::{ErrorNotice, classify};

#[test]
fn customers_endpoint_is_same_origin_api_path() {
    assert_eq!(CUSTOMERS_ENDPOINT, "/api/customers");
}

#[test]
fn status_failure_message_formats_status() {
    assert_eq!(status_failure_message(409), "request failed with status code 409");
}

#[test]
fn failure_from_response_keeps_json_body() {
    let failure = failure_from_response(400, r#"{"message":["Email invalid"],"statusCode":400}"#);
    match &failure {
        SubmitFailure::Transport { status, message, payload } => {
            assert_eq!(*status, Some(400));
            assert_eq!(message, "request failed with status code 400");
            assert_eq!(payload.as_ref().and_then(|p| p.get("statusCode")), Some(&serde_json::json!(400)));
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
    assert_eq!(classify(&failure), ErrorNotice::ValidationErrors(vec!["Email invalid".to_owned()]));
}

#[test]
fn failure_from_response_tolerates_non_json_body() {
    let failure = failure_from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(
        failure,
        SubmitFailure::Transport {
            status: Some(502),
            message: "request failed with status code 502".to_owned(),
            payload: None,
        }
    );
}

#[test]
fn failure_from_response_tolerates_empty_body() {
    let failure = failure_from_response(500, "");
    assert_eq!(classify(&failure), ErrorNotice::SingleMessage("request failed with status code 500".to_owned()));
}

#[test]
fn network_failure_has_no_status() {
    let failure = network_failure("Network down");
    assert_eq!(failure, SubmitFailure::Transport { status: None, message: "Network down".to_owned(), payload: None });
}

#[test]
fn create_customer_is_unavailable_without_browser() {
    let draft = CustomerDraft::default();
    let result = block_on_ready(create_customer(&draft));
    assert_eq!(result, Err(SubmitFailure::Runtime("not available on server".to_owned())));
}

/// Poll a future that is ready on first poll (the non-hydrate stubs never await).
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}

#[test]
fn created_from_body_reads_record() {
    let customer = created_from_body(r#"{"id":"c-9","firstName":"Ada"}"#).unwrap();
    assert_eq!(customer.id, "c-9");
    assert_eq!(customer.first_name, "Ada");
}

#[test]
fn created_from_body_unwraps_data_envelope() {
    let customer = created_from_body(r#"{"data":{"id":"c-9","email":"ada@example.com"}}"#).unwrap();
    assert_eq!(customer.id, "c-9");
    assert_eq!(customer.email, "ada@example.com");
}

#[test]
fn created_from_body_ignores_empty_or_non_record_bodies() {
    assert_eq!(created_from_body(""), None);
    assert_eq!(created_from_body("null"), None);
    assert_eq!(created_from_body("created"), None);
    assert_eq!(created_from_body(r#"["c-9"]"#), None);
}
