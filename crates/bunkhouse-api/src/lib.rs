//! Request/response API for Bunkhouse front ends.
//!
//! Any UI shell drives the store through [`Api::dispatch`] with plain
//! [`Request`] values, or over a byte stream with [`Api::serve_lines`]
//! (one JSON request per line in, one JSON response per line out). There is
//! no network listener; the stream is normally the process's stdin/stdout.
//!
//! # Example
//!
//! ```rust,ignore
//! let api = Api::new(Arc::new(store), rooms, BunkStyle::Long);
//! api.serve_lines(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
//! ```

pub mod error;
pub mod protocol;
pub mod rooms;
pub mod tenants;

use std::sync::Arc;

use bunkhouse_core::{bunk::BunkStyle, room::RoomLayout, store::TenancyStore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _, AsyncWrite, AsyncWriteExt as _};

pub use error::{ApiError, ErrorCode};
pub use protocol::{Request, Response};

/// A store handle plus the deployment's room configuration.
pub struct Api<S> {
  store: Arc<S>,
  rooms: Vec<RoomLayout>,
  style: BunkStyle,
}

impl<S: TenancyStore> Api<S> {
  pub fn new(store: Arc<S>, rooms: Vec<RoomLayout>, style: BunkStyle) -> Self {
    Self { store, rooms, style }
  }

  pub fn store(&self) -> &S { &self.store }

  /// Run one request to completion.
  pub async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
    let store = self.store.as_ref();
    match request {
      // Tenants
      Request::ListActiveTenants => tenants::list_active(store).await,
      Request::ListAllTenants => tenants::list_all(store).await,
      Request::GetTenant { id } => tenants::get_one(store, id).await,
      Request::FindTenantsByName { query } => {
        tenants::find_by_name(store, &query).await
      }
      Request::CreateTenant(input) => {
        tenants::create(store, self.style, input).await
      }
      Request::UpdatePayment { id, payment } => {
        tenants::update_payment(store, id, &payment).await
      }
      Request::UpdateLeaveDate { id, leave_date } => {
        tenants::update_leave_date(store, id, &leave_date).await
      }
      Request::DeleteTenant { id } => tenants::delete(store, id).await,
      // Rooms
      Request::OccupancyOf { room, bunk } => {
        rooms::occupancy(store, self.style, room, &bunk).await
      }
      Request::ListRooms => Ok(rooms::list(&self.rooms)),
      Request::RoomMap { room } => {
        rooms::map(store, &self.rooms, self.style, &room).await
      }
    }
  }

  /// Decode one JSON request and answer it. Never fails: malformed input
  /// and store errors both come back as [`Response::Error`].
  pub async fn handle_line(&self, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
      Ok(r) => r,
      Err(e) => return ApiError::BadRequest(e.to_string()).into_response(),
    };
    tracing::debug!(?request, "dispatching");

    match self.dispatch(request).await {
      Ok(response) => response,
      Err(e) => e.into_response(),
    }
  }

  /// Serve JSON lines from `reader` to `writer` until end of input.
  /// Blank lines are skipped.
  pub async fn serve_lines<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
  where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
  {
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
      if line.trim().is_empty() {
        continue;
      }
      let response = self.handle_line(&line).await;
      let mut out = serde_json::to_string(&response)?;
      out.push('\n');
      writer.write_all(out.as_bytes()).await?;
      writer.flush().await?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests;
