//! [`ConfirmedSink`] and [`OpaqueSink`] — `reqwest` implementations of
//! [`ExportSink`].

use reqwest::{Client, StatusCode};
use sipcheck_core::{
  record::ExportRow,
  sink::{Delivery, ExportSink},
};

use crate::{Error, ExportConfig, ExportMode, Result};

fn build_client(config: &ExportConfig) -> Result<Client> {
  Ok(Client::builder().timeout(config.timeout()).build()?)
}

// ─── Confirmed ───────────────────────────────────────────────────────────────

/// Posts the rows and requires `200 OK` back.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ConfirmedSink {
  client: Client,
  url:    String,
}

impl ConfirmedSink {
  pub fn new(config: &ExportConfig) -> Result<Self> {
    Ok(Self {
      client: build_client(config)?,
      url:    config.url.clone(),
    })
  }
}

impl ExportSink for ConfirmedSink {
  type Error = Error;

  fn mode(&self) -> &'static str { "confirmed" }

  async fn deliver(&self, rows: &[ExportRow]) -> Result<Delivery> {
    let resp = self.client.post(&self.url).json(rows).send().await?;

    let status = resp.status();
    if status != StatusCode::OK {
      tracing::warn!(%status, url = %self.url, "export rejected by webhook");
      return Err(Error::Status(status.as_u16()));
    }

    tracing::debug!(rows = rows.len(), "export confirmed");
    Ok(Delivery::Confirmed)
  }
}

// ─── Opaque ──────────────────────────────────────────────────────────────────

/// Posts the rows without reading the response. Only a failure to send is
/// reported; anything the server says is ignored.
#[derive(Clone)]
pub struct OpaqueSink {
  client: Client,
  url:    String,
}

impl OpaqueSink {
  pub fn new(config: &ExportConfig) -> Result<Self> {
    Ok(Self {
      client: build_client(config)?,
      url:    config.url.clone(),
    })
  }
}

impl ExportSink for OpaqueSink {
  type Error = Error;

  fn mode(&self) -> &'static str { "opaque" }

  async fn deliver(&self, rows: &[ExportRow]) -> Result<Delivery> {
    self.client.post(&self.url).json(rows).send().await?;
    tracing::debug!(rows = rows.len(), "export sent, no confirmation available");
    Ok(Delivery::Unverified)
  }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// The sink named by [`ExportConfig::mode`], built once at startup.
#[derive(Clone)]
pub enum ConfiguredSink {
  Confirmed(ConfirmedSink),
  Opaque(OpaqueSink),
}

impl ConfiguredSink {
  pub fn from_config(config: &ExportConfig) -> Result<Self> {
    Ok(match config.mode {
      ExportMode::Confirmed => Self::Confirmed(ConfirmedSink::new(config)?),
      ExportMode::Opaque => Self::Opaque(OpaqueSink::new(config)?),
    })
  }
}

impl ExportSink for ConfiguredSink {
  type Error = Error;

  fn mode(&self) -> &'static str {
    match self {
      Self::Confirmed(sink) => sink.mode(),
      Self::Opaque(sink) => sink.mode(),
    }
  }

  async fn deliver(&self, rows: &[ExportRow]) -> Result<Delivery> {
    match self {
      Self::Confirmed(sink) => sink.deliver(rows).await,
      Self::Opaque(sink) => sink.deliver(rows).await,
    }
  }
}
