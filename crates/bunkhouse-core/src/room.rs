//! Room layouts and the derived per-bunk occupancy map.
//!
//! Occupancy is never stored. A bunk is [`BunkState::Occupied`] exactly when
//! at least one active tenancy names its `(room, bunk)` pair.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;

use crate::{
  bunk::{BunkId, BunkStyle, Position},
  tenancy::TenancyRecord,
};

/// A room with `bunks` bed frames, each holding an upper and a lower bunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayout {
  pub name:  String,
  pub bunks: u32,
}

impl RoomLayout {
  pub fn new(name: impl Into<String>, bunks: u32) -> Self {
    Self { name: name.into(), bunks }
  }

  /// The two rooms of the original property.
  pub fn defaults() -> Vec<Self> {
    vec![Self::new("RM A", 6), Self::new("RM B", 5)]
  }

  /// Bunk ids in display order: `upper-1, lower-1, upper-2, lower-2, …`.
  pub fn bunk_ids(&self, style: BunkStyle) -> Vec<String> {
    (1..=self.bunks)
      .flat_map(|i| Position::iter().map(move |p| BunkId::new(p, i)))
      .map(|id| id.format(style))
      .collect()
  }

  /// Build the occupancy map for this room from the current active tenants.
  ///
  /// `active` should already be filtered to active records; records for
  /// other rooms are ignored.
  pub fn bunk_map(
    &self,
    style: BunkStyle,
    active: &[TenancyRecord],
  ) -> Vec<BunkStatus> {
    self
      .bunk_ids(style)
      .into_iter()
      .map(|bunk| {
        let occupants: Vec<TenancyRecord> = active
          .iter()
          .filter(|r| r.occupies(&self.name, &bunk))
          .cloned()
          .collect();
        BunkStatus::new(bunk, occupants)
      })
      .collect()
  }
}

/// Derived state of a single bunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BunkState {
  Free,
  Occupied,
}

impl BunkState {
  pub fn from_occupied(occupied: bool) -> Self {
    if occupied { Self::Occupied } else { Self::Free }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BunkStatus {
  pub bunk:      String,
  pub state:     BunkState,
  /// Normally zero or one record. More than one means the bunk was
  /// double-booked before the occupancy check existed.
  pub occupants: Vec<TenancyRecord>,
}

impl BunkStatus {
  fn new(bunk: String, occupants: Vec<TenancyRecord>) -> Self {
    let state = BunkState::from_occupied(!occupants.is_empty());
    Self { bunk, state, occupants }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tenancy::TenancyId;

  fn tenant(id: i64, room: &str, bunk: &str) -> TenancyRecord {
    TenancyRecord {
      id:             TenancyId(id),
      room:           room.into(),
      bunk:           bunk.into(),
      name:           format!("tenant {id}"),
      start_date:     "2024-01-01".into(),
      contact_number: String::new(),
      payment:        String::new(),
      leave_date:     None,
    }
  }

  #[test]
  fn bunk_ids_interleave_positions() {
    let room = RoomLayout::new("RM B", 2);
    assert_eq!(
      room.bunk_ids(BunkStyle::Long),
      ["upper-1", "lower-1", "upper-2", "lower-2"]
    );
    assert_eq!(room.bunk_ids(BunkStyle::Short), ["Up1", "Low1", "Up2", "Low2"]);
  }

  #[test]
  fn bunk_map_marks_occupied_bunks() {
    let room = RoomLayout::new("RM A", 2);
    let active = vec![
      tenant(1, "RM A", "lower-1"),
      tenant(2, "RM B", "upper-1"),
      tenant(3, "RM A", "upper-2"),
      tenant(4, "RM A", "upper-2"),
    ];

    let map = room.bunk_map(BunkStyle::Long, &active);
    let states: Vec<_> = map.iter().map(|b| (b.bunk.as_str(), b.state)).collect();
    assert_eq!(
      states,
      [
        ("upper-1", BunkState::Free),
        ("lower-1", BunkState::Occupied),
        ("upper-2", BunkState::Occupied),
        ("lower-2", BunkState::Free),
      ]
    );
    assert_eq!(map[2].occupants.len(), 2);
  }

  #[test]
  fn default_rooms_match_the_property() {
    let rooms = RoomLayout::defaults();
    assert_eq!(rooms[0].bunk_ids(BunkStyle::Long).len(), 12);
    assert_eq!(rooms[1].bunk_ids(BunkStyle::Long).len(), 10);
  }
}
