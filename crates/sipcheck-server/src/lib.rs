//! Server wiring for sipcheck: configuration, router assembly and the
//! startup-time choice of export sink.

use std::{path::Path, sync::Arc};

use axum::Router;
use serde::Deserialize;
use sipcheck_api::{Session, api_router};
use sipcheck_core::sink::ExportSink;
use sipcheck_export::{ConfiguredSink, ExportConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SIPCHECK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:   String,
  #[serde(default = "default_port")]
  pub port:   u16,
  pub export: ExportConfig,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

impl ServerConfig {
  /// Layer the optional TOML file at `path` under the environment.
  /// Nested keys use a double underscore, e.g. `SIPCHECK_EXPORT__URL`.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("SIPCHECK")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the JSON API under `/api` with request tracing.
pub fn router<K>(session: Arc<Session<K>>) -> Router
where
  K: ExportSink + 'static,
{
  Router::new()
    .nest("/api", api_router(session))
    .layer(TraceLayer::new_for_http())
}

/// Build the sink named by `config.export.mode` and serve until shutdown.
pub async fn serve(
  listener: TcpListener,
  config: &ServerConfig,
) -> anyhow::Result<()> {
  let sink = ConfiguredSink::from_config(&config.export)?;
  tracing::info!(mode = sink.mode(), "export sink ready");

  let session = Arc::new(Session::new(sink));
  axum::serve(listener, router(session)).await?;
  Ok(())
}
