//! Handlers for `/submissions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/submissions` | Insertion order |
//! | `POST`   | `/submissions` | Body: [`Submission`]; 201 + record and classification |
//! | `GET`    | `/submissions/export` | Export payload, nothing is sent |
//! | `DELETE` | `/submissions/:id` | 204 whether or not the id existed |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use sipcheck_core::{
  intake::Submission,
  record::{ExportRow, SubmissionRecord},
  sink::ExportSink,
};
use uuid::Uuid;

use crate::{error::ApiError, session::Session};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /submissions`
pub async fn list<K>(
  State(session): State<Arc<Session<K>>>,
) -> Json<Vec<SubmissionRecord>>
where
  K: ExportSink,
{
  Json(session.list().await)
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /submissions` — classify and record.
pub async fn create<K>(
  State(session): State<Arc<Session<K>>>,
  Json(body): Json<Submission>,
) -> Result<impl IntoResponse, ApiError>
where
  K: ExportSink,
{
  let submitted = session.submit(&body).await?;
  Ok((StatusCode::CREATED, Json(submitted)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /submissions/:id` — an id that is not a UUID cannot match a row,
/// so it is ignored like any other miss.
pub async fn delete_one<K>(
  State(session): State<Arc<Session<K>>>,
  Path(id): Path<String>,
) -> StatusCode
where
  K: ExportSink,
{
  match Uuid::parse_str(&id) {
    Ok(id) => {
      session.delete(id).await;
    }
    Err(_) => tracing::debug!(%id, "delete ignored, not a submission id"),
  }
  StatusCode::NO_CONTENT
}

// ─── Export payload ───────────────────────────────────────────────────────────

/// `GET /submissions/export`
pub async fn export_rows<K>(
  State(session): State<Arc<Session<K>>>,
) -> Json<Vec<ExportRow>>
where
  K: ExportSink,
{
  Json(session.export_rows().await)
}
