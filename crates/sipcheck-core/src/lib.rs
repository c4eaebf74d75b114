//! Core types for the sipcheck beverage classifier.
//!
//! This crate is deliberately free of HTTP and runtime dependencies. It holds
//! the attribute model, intake validation, the tier rules, the session ledger
//! and the [`sink::ExportSink`] trait that transport crates implement.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod beverage;
pub mod classify;
pub mod error;
pub mod intake;
pub mod ledger;
pub mod record;
pub mod sink;

pub use error::{Result, ValidationError};
