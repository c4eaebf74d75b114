//! The `ExportSink` trait.
//!
//! Implemented by transport crates (e.g. `sipcheck-export`). The API layer is
//! written against this abstraction and picks a concrete sink once at
//! startup.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::record::ExportRow;

/// What the sink could tell us about a delivery that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
  /// The remote end acknowledged the payload.
  Confirmed,
  /// The request went out but the response could not be inspected.
  /// Treated as best-effort success.
  Unverified,
}

/// Destination for a copy of the ledger.
///
/// Delivery never touches the ledger itself: callers hand over a snapshot
/// and the ledger keeps every record whatever the outcome.
pub trait ExportSink: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Short name for logs, e.g. `"confirmed"`.
  fn mode(&self) -> &'static str;

  /// Send `rows` to the sink.
  fn deliver<'a>(
    &'a self,
    rows: &'a [ExportRow],
  ) -> impl Future<Output = Result<Delivery, Self::Error>> + Send + 'a;
}
