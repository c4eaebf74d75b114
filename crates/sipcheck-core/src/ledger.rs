//! [`Ledger`] — the session's ordered list of submission records.
//!
//! Records are appended at the end and never edited. The only other mutation
//! is delete-by-id, which is silent when the id is unknown.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::{
  beverage::{Category, Tier},
  record::{ExportRow, SubmissionRecord},
};

/// Source of the date stamped on new records.
pub type Clock = fn() -> NaiveDate;

fn today() -> NaiveDate { Local::now().date_naive() }

/// In-memory, insertion-ordered submission ledger owned by one session.
#[derive(Debug, Clone)]
pub struct Ledger {
  records: Vec<SubmissionRecord>,
  clock:   Clock,
}

impl Default for Ledger {
  fn default() -> Self { Self::new() }
}

impl Ledger {
  /// An empty ledger stamping records with the local date.
  pub fn new() -> Self { Self::with_clock(today) }

  /// An empty ledger with a caller-supplied date source.
  pub fn with_clock(clock: Clock) -> Self {
    Self {
      records: Vec::new(),
      clock,
    }
  }

  /// Append a record and return its freshly minted id.
  pub fn append(
    &mut self,
    category: Category,
    name: Option<String>,
    tier: Tier,
    reason: Option<String>,
  ) -> Uuid {
    self.append_record(category, name, tier, reason).id
  }

  /// Like [`Ledger::append`], returning the stored record.
  pub fn append_record(
    &mut self,
    category: Category,
    name: Option<String>,
    tier: Tier,
    reason: Option<String>,
  ) -> &SubmissionRecord {
    let mut id = Uuid::new_v4();
    while self.get(id).is_some() {
      id = Uuid::new_v4();
    }

    let index = self.records.len();
    self.records.push(SubmissionRecord {
      id,
      timestamp: (self.clock)(),
      category,
      name,
      tier,
      reason,
    });
    &self.records[index]
  }

  /// A snapshot of every record in insertion order.
  pub fn list(&self) -> Vec<SubmissionRecord> { self.records.clone() }

  pub fn get(&self, id: Uuid) -> Option<&SubmissionRecord> {
    self.records.iter().find(|r| r.id == id)
  }

  /// Remove the record with `id`. Returns `false`, leaving the ledger
  /// untouched, when no record matches.
  pub fn delete(&mut self, id: Uuid) -> bool {
    match self.records.iter().position(|r| r.id == id) {
      Some(index) => {
        self.records.remove(index);
        true
      }
      None => false,
    }
  }

  /// Every current record in the webhook's column layout.
  pub fn export(&self) -> Vec<ExportRow> {
    self.records.iter().map(ExportRow::from).collect()
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
