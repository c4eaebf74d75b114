//! `sipcheck` — beverage compliance classifier.
//!
//! # Usage
//!
//! ```text
//! sipcheck serve --config config.toml
//! sipcheck classify other --set total_sugar_g=20 --set added_sugar_g=5 --set artificial=no
//! ```

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use sipcheck_core::{classify::classify, intake::Submission};
use sipcheck_server::ServerConfig;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Beverage compliance classifier")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run the JSON API.
  Serve {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
  },

  /// Classify one beverage and print the result as JSON.
  Classify {
    /// Beverage category: juice, milk or other.
    category: String,

    /// Attribute as `key=value`, e.g. `serving_size_oz=8`. Repeatable.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    attributes: Vec<String>,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  match Cli::parse().command {
    Command::Serve { config } => serve(config).await,
    Command::Classify {
      category,
      attributes,
    } => classify_once(category, &attributes),
  }
}

async fn serve(config_path: PathBuf) -> anyhow::Result<()> {
  let server_cfg = ServerConfig::load(&config_path)
    .with_context(|| format!("failed to load config from {config_path:?}"))?;

  let address = server_cfg.address();
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  tracing::info!("Listening on http://{address}");
  sipcheck_server::serve(listener, &server_cfg)
    .await
    .context("server error")
}

fn classify_once(category: String, pairs: &[String]) -> anyhow::Result<()> {
  let mut attributes = Map::new();
  for pair in pairs {
    let (key, value) = pair
      .split_once('=')
      .ok_or_else(|| anyhow!("expected KEY=VALUE, got {pair:?}"))?;
    attributes.insert(key.trim().to_owned(), Value::String(value.to_owned()));
  }

  let submission = Submission {
    category,
    name: None,
    attributes,
  };
  let valid = submission.parse()?;
  let classification = classify(&valid.attributes);

  println!("{}", serde_json::to_string_pretty(&classification)?);
  Ok(())
}
