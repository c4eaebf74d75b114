//! Handler for `POST /classify`.
//!
//! Runs intake validation and the tier rules without touching the ledger.

use std::sync::Arc;

use axum::{Json, extract::State};
use sipcheck_core::{
  classify::Classification, intake::Submission, sink::ExportSink,
};

use crate::{error::ApiError, session::Session};

/// `POST /classify` — body: [`Submission`]
pub async fn handler<K>(
  State(session): State<Arc<Session<K>>>,
  Json(body): Json<Submission>,
) -> Result<Json<Classification>, ApiError>
where
  K: ExportSink,
{
  Ok(Json(session.classify(&body)?))
}
