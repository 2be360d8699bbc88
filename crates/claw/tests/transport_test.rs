//! Integration tests for the transport layer against a stub HTTP endpoint.

use std::io::Read;
use std::sync::mpsc;
use std::thread;

use serde_json::json;

use claw::transport::{self, Endpoint};
use claw::{ClawError, FailureKind};

/// Spawn a stub server answering a single request; returns its port.
fn serve_once(status: u16, body: &'static str) -> u16 {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind stub server");
    let port = server.server_addr().to_ip().expect("stub addr").port();
    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    port
}

/// Stub that captures method, content type, and body, then replies 201.
fn serve_capture() -> (u16, mpsc::Receiver<(String, Option<String>, String)>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind stub server");
    let port = server.server_addr().to_ip().expect("stub addr").port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let method = request.method().to_string();
            let content_type = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.to_string());
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let _ = tx.send((method, content_type, body));
            let response =
                tiny_http::Response::from_string(r#"{"id":"123"}"#).with_status_code(201);
            let _ = request.respond(response);
        }
    });
    (port, rx)
}

/// A port nothing is listening on.
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    listener.local_addr().expect("probe addr").port()
}

fn local_endpoint(port: u16) -> Endpoint {
    Endpoint::resolve(&format!("127.0.0.1:{}", port), "/api/submissions")
}

#[test]
fn test_created_response_is_parsed() {
    let port = serve_once(201, r#"{"id":"123"}"#);
    let body = transport::post(&local_endpoint(port), &json!({"title": "t"})).unwrap();
    assert_eq!(body, json!({"id": "123"}));
}

#[test]
fn test_ok_response_is_parsed() {
    let port = serve_once(200, r#"{"value": 1}"#);
    let body = transport::post(&local_endpoint(port), &json!({})).unwrap();
    assert_eq!(body, json!({"value": 1}));
}

#[test]
fn test_rate_limit_uses_error_field_and_classification() {
    let port = serve_once(429, r#"{"error": "too many requests"}"#);
    match transport::post(&local_endpoint(port), &json!({})) {
        Err(ClawError::Transport { kind, message }) => {
            assert_eq!(kind, FailureKind::RateLimited);
            assert_eq!(message, "too many requests");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_bad_request_classification() {
    let port = serve_once(400, r#"{"error": "title too short"}"#);
    match transport::post(&local_endpoint(port), &json!({})) {
        Err(ClawError::Transport { kind, message }) => {
            assert_eq!(kind, FailureKind::ValidationRejected);
            assert_eq!(message, "title too short");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_other_status_without_error_field() {
    let port = serve_once(500, r#"{"status": "down"}"#);
    match transport::post(&local_endpoint(port), &json!({})) {
        Err(ClawError::Transport { kind, message }) => {
            assert_eq!(kind, FailureKind::Other);
            assert_eq!(message, r#"HTTP 500: {"status": "down"}"#);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_unparseable_success_body() {
    let port = serve_once(200, "not json");
    match transport::post(&local_endpoint(port), &json!({})) {
        Err(ClawError::Transport { kind, message }) => {
            assert_eq!(kind, FailureKind::Other);
            assert_eq!(message, "Failed to parse response: not json");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_unparseable_error_body_keeps_classification() {
    let port = serve_once(429, "slow down");
    match transport::post(&local_endpoint(port), &json!({})) {
        Err(ClawError::Transport { kind, message }) => {
            assert_eq!(kind, FailureKind::RateLimited);
            assert_eq!(message, "Failed to parse response: slow down");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_connection_refused() {
    let endpoint = local_endpoint(closed_port());
    match transport::post(&endpoint, &json!({})) {
        Err(ClawError::Transport { kind, message }) => {
            assert_eq!(kind, FailureKind::Other);
            assert!(
                message.starts_with("Request failed:"),
                "unexpected message: {}",
                message
            );
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_request_shape() {
    let (port, rx) = serve_capture();
    let payload = json!({"title": "My title", "skills": ["a", "b"]});
    transport::post(&local_endpoint(port), &payload).unwrap();

    let (method, content_type, body) = rx.recv().expect("captured request");
    assert_eq!(method, "POST");
    let content_type = content_type.expect("content type header");
    assert!(content_type.starts_with("application/json"));

    let sent: serde_json::Value = serde_json::from_str(&body).expect("request body is JSON");
    assert_eq!(sent, payload);
}
