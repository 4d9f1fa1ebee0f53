//! SQLite backend for the Bunkhouse tenancy store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a single dedicated
//! thread without blocking the async runtime. That thread is also the one
//! serialization point for every read and write.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
