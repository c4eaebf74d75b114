//! JSON API for sipcheck.
//!
//! Exposes an axum [`Router`] backed by a [`Session`] over any
//! [`ExportSink`]. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", sipcheck_api::api_router(session.clone()))
//! ```

pub mod classify;
pub mod error;
pub mod export;
pub mod session;
pub mod submissions;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use sipcheck_core::sink::ExportSink;

pub use error::ApiError;
pub use session::{ExportReport, Session, Submitted};

/// Build the API router for `session`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<K>(session: Arc<Session<K>>) -> Router<()>
where
  K: ExportSink + 'static,
{
  Router::new()
    // Classification
    .route("/classify", post(classify::handler::<K>))
    // Ledger
    .route(
      "/submissions",
      get(submissions::list::<K>).post(submissions::create::<K>),
    )
    .route("/submissions/export", get(submissions::export_rows::<K>))
    .route("/submissions/{id}", delete(submissions::delete_one::<K>))
    // Export sink
    .route("/export", post(export::handler::<K>))
    .with_state(session)
}
