//! Ledger rows and their export shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::beverage::{Category, Tier};

/// One classification event. Immutable once appended; removed only by an
/// explicit delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
  pub id:        Uuid,
  /// Local calendar date the record was appended.
  pub timestamp: NaiveDate,
  pub category:  Category,
  pub name:      Option<String>,
  pub tier:      Tier,
  pub reason:    Option<String>,
}

/// A [`SubmissionRecord`] renamed for the spreadsheet webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRow {
  #[serde(rename = "RowID")]
  pub row_id:         Uuid,
  pub timestamp:      NaiveDate,
  pub beverage_type:  Category,
  pub beverage_name:  Option<String>,
  pub recommendation: Tier,
  pub reason:         Option<String>,
}

impl From<&SubmissionRecord> for ExportRow {
  fn from(r: &SubmissionRecord) -> Self {
    ExportRow {
      row_id:         r.id,
      timestamp:      r.timestamp,
      beverage_type:  r.category,
      beverage_name:  r.name.clone(),
      recommendation: r.tier,
      reason:         r.reason.clone(),
    }
  }
}
