//! [`Session`] — the ledger and export sink for one running instance.
//!
//! The ledger sits behind a [`RwLock`]. Export copies the rows out under a
//! read lock and releases it before talking to the sink, so submissions and
//! deletes never wait on the network.

use serde::Serialize;
use sipcheck_core::{
  Result,
  classify::{Classification, classify},
  intake::Submission,
  ledger::Ledger,
  record::{ExportRow, SubmissionRecord},
  sink::{Delivery, ExportSink},
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Outcome of [`Session::export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportReport {
  /// The ledger was empty; nothing was sent.
  Empty,
  Sent { rows: usize, delivery: Delivery },
}

impl ExportReport {
  pub fn message(&self) -> &'static str {
    match self {
      Self::Empty => "No data to save",
      Self::Sent {
        delivery: Delivery::Confirmed,
        ..
      } => "Data saved successfully!",
      Self::Sent {
        delivery: Delivery::Unverified,
        ..
      } => "Data sent to the server (no confirmation available)",
    }
  }
}

/// A freshly appended record together with the classification behind it.
#[derive(Debug, Clone, Serialize)]
pub struct Submitted {
  pub record:         SubmissionRecord,
  pub classification: Classification,
}

pub struct Session<K> {
  ledger: RwLock<Ledger>,
  sink:   K,
}

impl<K: ExportSink> Session<K> {
  pub fn new(sink: K) -> Self { Self::with_ledger(Ledger::new(), sink) }

  pub fn with_ledger(ledger: Ledger, sink: K) -> Self {
    Self {
      ledger: RwLock::new(ledger),
      sink,
    }
  }

  pub fn sink(&self) -> &K { &self.sink }

  /// Validate and classify without recording anything.
  pub fn classify(&self, submission: &Submission) -> Result<Classification> {
    let valid = submission.parse()?;
    Ok(classify(&valid.attributes))
  }

  /// Validate, classify and append. A validation failure leaves the ledger
  /// untouched.
  pub async fn submit(&self, submission: &Submission) -> Result<Submitted> {
    let valid = submission.parse()?;
    let classification = classify(&valid.attributes);

    let record = self
      .ledger
      .write()
      .await
      .append_record(
        valid.category(),
        valid.name,
        classification.tier,
        classification.reason.clone(),
      )
      .clone();

    tracing::info!(
      id = %record.id,
      category = %record.category,
      tier = %record.tier,
      "recorded submission"
    );
    Ok(Submitted {
      record,
      classification,
    })
  }

  pub async fn list(&self) -> Vec<SubmissionRecord> {
    self.ledger.read().await.list()
  }

  /// Delete by id. Unknown ids are ignored.
  pub async fn delete(&self, id: Uuid) -> bool {
    let removed = self.ledger.write().await.delete(id);
    if removed {
      tracing::info!(%id, "deleted submission");
    } else {
      tracing::debug!(%id, "delete ignored, no such submission");
    }
    removed
  }

  pub async fn export_rows(&self) -> Vec<ExportRow> {
    self.ledger.read().await.export()
  }

  /// Send the current ledger to the sink. Failures leave the ledger as it
  /// was, so the caller can simply retry.
  pub async fn export(&self) -> Result<ExportReport, K::Error> {
    let rows = self.export_rows().await;
    if rows.is_empty() {
      return Ok(ExportReport::Empty);
    }

    match self.sink.deliver(&rows).await {
      Ok(delivery) => {
        tracing::info!(
          rows = rows.len(),
          mode = self.sink.mode(),
          ?delivery,
          "exported ledger"
        );
        Ok(ExportReport::Sent {
          rows: rows.len(),
          delivery,
        })
      }
      Err(e) => {
        tracing::warn!(error = %e, mode = self.sink.mode(), "export failed");
        Err(e)
      }
    }
  }
}
