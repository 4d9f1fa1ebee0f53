//! Error types for `bunkhouse-core`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tenancy::TenancyId;

/// Expected, operator-facing failures. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("tenancy not found: {0}")]
  NotFound(TenancyId),

  #[error("invalid payment amount: {0:?}")]
  InvalidPayment(String),

  #[error("bunk {bunk} in {room} is currently occupied")]
  BunkOccupied { room: String, bunk: String },

  #[error("invalid bunk identifier: {0:?}")]
  InvalidBunk(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of a failure, used by front ends to decide how to
/// surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  NotFound,
  ValidationFailed,
  OccupancyConflict,
  /// Anything below the domain layer (disk, SQLite). Not recoverable.
  Storage,
}

impl ErrorKind {
  pub fn is_recoverable(self) -> bool { !matches!(self, Self::Storage) }
}

/// Implemented by every store error type so callers can classify failures
/// without knowing the backend.
pub trait Classify {
  fn kind(&self) -> ErrorKind;
}

impl Classify for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Self::NotFound(_) => ErrorKind::NotFound,
      Self::InvalidPayment(_) | Self::InvalidBunk(_) => {
        ErrorKind::ValidationFailed
      }
      Self::BunkOccupied { .. } => ErrorKind::OccupancyConflict,
    }
  }
}
