//! Error types for `sipcheck-core`.
//!
//! Messages are phrased for the person filling in the form; the API layer
//! forwards them verbatim.

use thiserror::Error;

/// Rejection raised before classification runs. No ledger record is created
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Unknown beverage type: {0:?}")]
  UnknownCategory(String),

  #[error("Missing required field: {0}")]
  MissingField(&'static str),

  #[error("Please enter a numeric value for {field} (got {value:?})")]
  NotNumeric { field: &'static str, value: String },

  #[error("Please answer yes or no for {field} (got {value:?})")]
  NotBoolean { field: &'static str, value: String },

  #[error("Please enter a valid serving size greater than 0")]
  ServingSize,

  #[error("Please enter a valid total sugar amount (0 or greater)")]
  TotalSugar,

  #[error("Please enter a valid added sugar amount (0 or greater)")]
  AddedSugar,

  #[error("Added sugar cannot be greater than total sugar")]
  AddedExceedsTotal,
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
