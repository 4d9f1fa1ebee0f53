//! Request and response shapes.
//!
//! Requests are tagged by `"op"`, responses by `"kind"`:
//!
//! ```json
//! {"op":"update_payment","id":3,"payment":"150.50"}
//! {"kind":"tenant","tenant":{"id":3,"room":"RM A", ...}}
//! {"kind":"error","code":"validation_failed","message":"..."}
//! ```

use bunkhouse_core::{
  room::{BunkStatus, RoomLayout},
  tenancy::{NewTenancy, TenancyId, TenancyRecord},
};
use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
  // ── Tenants ─────────────────────────────────────────────────────────────
  ListActiveTenants,
  ListAllTenants,
  GetTenant { id: TenancyId },
  FindTenantsByName { query: String },
  CreateTenant(NewTenancy),
  UpdatePayment { id: TenancyId, payment: String },
  UpdateLeaveDate { id: TenancyId, leave_date: String },
  DeleteTenant { id: TenancyId },

  // ── Rooms ───────────────────────────────────────────────────────────────
  OccupancyOf { room: String, bunk: String },
  ListRooms,
  RoomMap { room: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
  Tenant { tenant: TenancyRecord },
  Tenants { tenants: Vec<TenancyRecord> },
  /// The record as it was just before removal.
  Deleted { tenant: TenancyRecord },
  Occupancy { room: String, bunk: String, occupied: bool },
  Rooms { rooms: Vec<RoomLayout> },
  RoomMap { room: String, bunks: Vec<BunkStatus> },
  Error { code: ErrorCode, message: String },
}
