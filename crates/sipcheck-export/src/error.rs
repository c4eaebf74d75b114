//! Error type for `sipcheck-export`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The request could not be sent or the connection failed.
  #[error("export request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The webhook answered with something other than `200 OK`.
  #[error("Server returned status {0}")]
  Status(u16),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
