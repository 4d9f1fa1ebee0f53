//! Error type for `bunkhouse-store-sqlite`.

use bunkhouse_core::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An expected, operator-facing failure (unknown id, bad payment, occupied
  /// bunk).
  #[error(transparent)]
  Core(#[from] bunkhouse_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl Error {
  /// The domain error, if this is one.
  pub fn as_core(&self) -> Option<&bunkhouse_core::Error> {
    match self {
      Self::Core(e) => Some(e),
      Self::Database(_) => None,
    }
  }
}

impl Classify for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Self::Core(e) => e.kind(),
      Self::Database(_) => ErrorKind::Storage,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
