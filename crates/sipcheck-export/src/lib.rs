//! HTTP export sinks for the sipcheck ledger.
//!
//! Two [`ExportSink`](sipcheck_core::sink::ExportSink) implementations cover
//! the two network contexts the webhook is reached from:
//!
//! - [`ConfirmedSink`] reads the response status and only reports success on
//!   `200 OK`.
//! - [`OpaqueSink`] fires the request and never looks at the response, so a
//!   delivery that does not fail outright is reported as unverified.
//!
//! Which one runs is decided once, from [`ExportConfig::mode`], by
//! [`ConfiguredSink::from_config`].

mod sink;

pub mod error;

pub use error::{Error, Result};
pub use sink::{ConfiguredSink, ConfirmedSink, OpaqueSink};

use std::time::Duration;

use serde::Deserialize;

/// How the webhook response is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
  /// Full client: the status code is observable.
  #[default]
  Confirmed,
  /// Restricted client: the response is opaque.
  Opaque,
}

/// The `[export]` section of the server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
  /// Webhook endpoint that receives the JSON array of rows.
  pub url:          String,
  #[serde(default)]
  pub mode:         ExportMode,
  /// Transport-level timeout for one delivery.
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

impl ExportConfig {
  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

#[cfg(test)]
mod tests;
