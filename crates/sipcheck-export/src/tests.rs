//! Sink tests against a throwaway local webhook.

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::NaiveDate;
use serde_json::Value;
use sipcheck_core::{
  beverage::{Category, Tier},
  record::ExportRow,
  sink::{Delivery, ExportSink},
};
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::{
  ConfiguredSink, ConfirmedSink, Error, ExportConfig, ExportMode, OpaqueSink,
};

#[derive(Clone)]
struct Hook {
  status:   StatusCode,
  received: Arc<Mutex<Vec<Value>>>,
}

async fn receive(State(hook): State<Hook>, Json(body): Json<Value>) -> StatusCode {
  hook.received.lock().unwrap().push(body);
  hook.status
}

/// Serve a webhook on an ephemeral port and return its URL.
async fn spawn_hook(status: StatusCode) -> (String, Arc<Mutex<Vec<Value>>>) {
  let received = Arc::new(Mutex::new(Vec::new()));
  let app = Router::new()
    .route("/exec", post(receive))
    .with_state(Hook {
      status,
      received: received.clone(),
    });

  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  (format!("http://{addr}/exec"), received)
}

/// A URL on a port nothing is listening on.
async fn dead_url() -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);
  format!("http://{addr}/exec")
}

fn config(url: String, mode: ExportMode) -> ExportConfig {
  ExportConfig {
    url,
    mode,
    timeout_secs: 5,
  }
}

fn rows() -> Vec<ExportRow> {
  vec![
    ExportRow {
      row_id:         Uuid::new_v4(),
      timestamp:      NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
      beverage_type:  Category::Other,
      beverage_name:  Some("Lemonade".into()),
      recommendation: Tier::Red,
      reason:         Some("Total sugar exceeds 12g".into()),
    },
    ExportRow {
      row_id:         Uuid::new_v4(),
      timestamp:      NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
      beverage_type:  Category::Milk,
      beverage_name:  None,
      recommendation: Tier::Green,
      reason:         None,
    },
  ]
}

// ─── Confirmed ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn confirmed_posts_rows_as_json_array() {
  let (url, received) = spawn_hook(StatusCode::OK).await;
  let sink = ConfirmedSink::new(&config(url, ExportMode::Confirmed)).unwrap();

  let rows = rows();
  let delivery = sink.deliver(&rows).await.unwrap();
  assert_eq!(delivery, Delivery::Confirmed);

  let received = received.lock().unwrap();
  assert_eq!(received.len(), 1);
  let body = received[0].as_array().unwrap();
  assert_eq!(body.len(), 2);
  assert_eq!(body[0]["BeverageType"], "Other");
  assert_eq!(body[0]["Recommendation"], "red");
  assert_eq!(body[0]["Timestamp"], "2025-06-01");
  assert_eq!(body[1]["Reason"], Value::Null);
  assert_eq!(body[1]["RowID"], rows[1].row_id.to_string());
}

#[tokio::test]
async fn confirmed_surfaces_non_200_status() {
  let (url, _) = spawn_hook(StatusCode::INTERNAL_SERVER_ERROR).await;
  let sink = ConfirmedSink::new(&config(url, ExportMode::Confirmed)).unwrap();

  let err = sink.deliver(&rows()).await.unwrap_err();
  assert!(matches!(err, Error::Status(500)), "got {err:?}");
  assert_eq!(err.to_string(), "Server returned status 500");
}

#[tokio::test]
async fn confirmed_treats_other_success_codes_as_errors() {
  let (url, _) = spawn_hook(StatusCode::ACCEPTED).await;
  let sink = ConfirmedSink::new(&config(url, ExportMode::Confirmed)).unwrap();

  let err = sink.deliver(&rows()).await.unwrap_err();
  assert!(matches!(err, Error::Status(202)));
}

#[tokio::test]
async fn confirmed_reports_connection_failure() {
  let sink =
    ConfirmedSink::new(&config(dead_url().await, ExportMode::Confirmed)).unwrap();
  let err = sink.deliver(&rows()).await.unwrap_err();
  assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

// ─── Opaque ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn opaque_ignores_the_status_code() {
  let (url, received) = spawn_hook(StatusCode::BAD_GATEWAY).await;
  let sink = OpaqueSink::new(&config(url, ExportMode::Opaque)).unwrap();

  let delivery = sink.deliver(&rows()).await.unwrap();
  assert_eq!(delivery, Delivery::Unverified);
  assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn opaque_still_fails_when_send_fails() {
  let sink = OpaqueSink::new(&config(dead_url().await, ExportMode::Opaque)).unwrap();
  assert!(sink.deliver(&rows()).await.is_err());
}

#[tokio::test]
async fn configured_opaque_sink_ignores_status() {
  let (url, received) = spawn_hook(StatusCode::INTERNAL_SERVER_ERROR).await;
  let sink = ConfiguredSink::from_config(&config(url, ExportMode::Opaque)).unwrap();
  assert_eq!(sink.mode(), "opaque");

  let delivery = sink.deliver(&rows()).await.unwrap();
  assert_eq!(delivery, Delivery::Unverified);
  assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn configured_confirmed_sink_checks_status() {
  let (url, _) = spawn_hook(StatusCode::INTERNAL_SERVER_ERROR).await;
  let sink =
    ConfiguredSink::from_config(&config(url, ExportMode::Confirmed)).unwrap();
  assert_eq!(sink.mode(), "confirmed");
  assert!(matches!(
    sink.deliver(&rows()).await,
    Err(Error::Status(500))
  ));
}

// ─── Config ──────────────────────────────────────────────────────────────────

#[test]
fn export_config_defaults() {
  let cfg: ExportConfig =
    serde_json::from_value(serde_json::json!({ "url": "http://hook" })).unwrap();
  assert_eq!(cfg.mode, ExportMode::Confirmed);
  assert_eq!(cfg.timeout_secs, 30);

  let cfg: ExportConfig = serde_json::from_value(
    serde_json::json!({ "url": "http://hook", "mode": "opaque" }),
  )
  .unwrap();
  assert_eq!(cfg.mode, ExportMode::Opaque);
}
