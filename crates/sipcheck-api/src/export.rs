//! Handler for `POST /export`.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use sipcheck_core::sink::{Delivery, ExportSink};

use crate::{
  error::ApiError,
  session::{ExportReport, Session},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
  Empty,
  Confirmed,
  Unverified,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
  pub status:  ExportStatus,
  pub rows:    usize,
  pub message: &'static str,
}

impl From<ExportReport> for ExportResponse {
  fn from(report: ExportReport) -> Self {
    let (status, rows) = match report {
      ExportReport::Empty => (ExportStatus::Empty, 0),
      ExportReport::Sent { rows, delivery } => match delivery {
        Delivery::Confirmed => (ExportStatus::Confirmed, rows),
        Delivery::Unverified => (ExportStatus::Unverified, rows),
      },
    };
    ExportResponse {
      status,
      rows,
      message: report.message(),
    }
  }
}

/// `POST /export` — send the ledger to the configured sink.
pub async fn handler<K>(
  State(session): State<Arc<Session<K>>>,
) -> Result<Json<ExportResponse>, ApiError>
where
  K: ExportSink,
{
  let report = session
    .export()
    .await
    .map_err(|e| ApiError::Export(Box::new(e)))?;
  Ok(Json(report.into()))
}
