use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use actix_web::http::header::COOKIE;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use serial_test::serial;
use tracing::subscriber::set_global_default;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

use crate::support::app_builder::test_state;
use crate::support::create_test_app;

/// Appends JSON lines to a shared buffer.
#[derive(Clone)]
struct BufWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[actix_web::test]
#[serial]
async fn rejected_session_event_carries_request_trace_id() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufWriter(buf.clone())
    };
    let subscriber = Registry::default().with(
        fmt::Layer::default()
            .json()
            .with_span_list(true)
            .with_ansi(false)
            .with_writer(make_writer),
    );
    set_global_default(subscriber).expect("set global subscriber");

    let app = create_test_app(test_state()).await;
    let req = test::TestRequest::get()
        .uri("/dashboard")
        .insert_header((COOKIE, "token=garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let request_id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header present")
        .to_str()
        .unwrap()
        .to_string();

    let data = String::from_utf8(buf.lock().unwrap().clone()).expect("utf8");
    let event = data
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .find(|v| v["fields"]["event"] == "SECURITY_SESSION_REJECTED")
        .expect("session rejection was logged");

    assert_eq!(event["fields"]["trace_id"], request_id.as_str());
    assert_eq!(event["fields"]["path"], "/dashboard");

    let in_request_span = event["spans"].as_array().is_some_and(|spans| {
        spans
            .iter()
            .any(|s| s["name"] == "request" && s["trace_id"] == request_id.as_str())
    });
    assert!(in_request_span, "event was not logged inside the request span");
}
