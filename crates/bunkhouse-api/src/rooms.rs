//! Handlers for room and occupancy requests.

use bunkhouse_core::{
  bunk::{BunkId, BunkStyle},
  room::RoomLayout,
  store::TenancyStore,
};

use crate::{error::ApiError, protocol::Response};

/// `occupancy_of` — whether `(room, bunk)` has an active occupant.
pub async fn occupancy<S: TenancyStore>(
  store: &S,
  style: BunkStyle,
  room: String,
  bunk: &str,
) -> Result<Response, ApiError> {
  let bunk = BunkId::normalize(bunk, style);
  let occupied = store
    .occupancy_of(&room, &bunk)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Response::Occupancy { room, bunk, occupied })
}

pub fn list(rooms: &[RoomLayout]) -> Response {
  Response::Rooms { rooms: rooms.to_vec() }
}

/// `room_map` — every bunk of a configured room with its derived state.
pub async fn map<S: TenancyStore>(
  store: &S,
  rooms: &[RoomLayout],
  style: BunkStyle,
  room: &str,
) -> Result<Response, ApiError> {
  let layout = rooms
    .iter()
    .find(|r| r.name == room)
    .ok_or_else(|| ApiError::UnknownRoom(room.to_owned()))?;

  let active = store
    .list_active_tenants()
    .await
    .map_err(ApiError::from_store)?;

  Ok(Response::RoomMap {
    room:  layout.name.clone(),
    bunks: layout.bunk_map(style, &active),
  })
}
