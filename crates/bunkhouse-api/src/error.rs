//! API error type and its wire representation.

use bunkhouse_core::{Classify, ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::Response;

/// Machine-readable failure code carried by [`Response::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
  NotFound,
  ValidationFailed,
  OccupancyConflict,
  UnknownRoom,
  BadRequest,
  Storage,
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("validation failed: {0}")]
  ValidationFailed(String),

  #[error("occupancy conflict: {0}")]
  OccupancyConflict(String),

  #[error("unknown room: {0}")]
  UnknownRoom(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Sort a store error into the operator-facing variants. Anything the
  /// store classifies as a storage failure is logged and kept opaque.
  pub fn from_store<E>(e: E) -> Self
  where
    E: std::error::Error + Classify + Send + Sync + 'static,
  {
    match e.kind() {
      ErrorKind::NotFound => Self::NotFound(e.to_string()),
      ErrorKind::ValidationFailed => Self::ValidationFailed(e.to_string()),
      ErrorKind::OccupancyConflict => Self::OccupancyConflict(e.to_string()),
      ErrorKind::Storage => {
        tracing::error!(error = %e, "storage failure");
        Self::Store(Box::new(e))
      }
    }
  }

  pub fn code(&self) -> ErrorCode {
    match self {
      Self::NotFound(_) => ErrorCode::NotFound,
      Self::ValidationFailed(_) => ErrorCode::ValidationFailed,
      Self::OccupancyConflict(_) => ErrorCode::OccupancyConflict,
      Self::UnknownRoom(_) => ErrorCode::UnknownRoom,
      Self::BadRequest(_) => ErrorCode::BadRequest,
      Self::Store(_) => ErrorCode::Storage,
    }
  }

  pub fn into_response(self) -> Response {
    let message = match &self {
      Self::NotFound(m)
      | Self::ValidationFailed(m)
      | Self::OccupancyConflict(m)
      | Self::UnknownRoom(m)
      | Self::BadRequest(m) => m.clone(),
      Self::Store(e) => e.to_string(),
    };
    Response::Error { code: self.code(), message }
  }
}
