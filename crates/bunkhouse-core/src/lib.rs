//! Core types and trait definitions for the Bunkhouse tenancy store.
//!
//! This crate is deliberately free of database and IO dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod bunk;
pub mod clock;
pub mod error;
pub mod payment;
pub mod room;
pub mod store;
pub mod tenancy;

pub use error::{Classify, Error, ErrorKind, Result};
