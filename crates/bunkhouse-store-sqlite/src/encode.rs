//! Decoding helpers between `tenants` rows and [`TenancyRecord`].
//!
//! Every text column is nullable in tables written by older releases, so rows
//! are read as `Option<String>` first and defaulted while converting.

use bunkhouse_core::tenancy::{TenancyId, TenancyRecord};

/// Column list shared by every `SELECT` that builds a [`RawTenancy`].
pub const TENANT_COLUMNS: &str =
  "id, room, bunk, name, date, number, payment, leave_date";

/// Raw values read directly from a `tenants` row.
pub struct RawTenancy {
  pub id:         i64,
  pub room:       Option<String>,
  pub bunk:       Option<String>,
  pub name:       Option<String>,
  pub date:       Option<String>,
  pub number:     Option<String>,
  pub payment:    Option<String>,
  pub leave_date: Option<String>,
}

impl RawTenancy {
  /// Row mapper for statements selecting [`TENANT_COLUMNS`] in order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      room:       row.get(1)?,
      bunk:       row.get(2)?,
      name:       row.get(3)?,
      date:       row.get(4)?,
      number:     row.get(5)?,
      payment:    row.get(6)?,
      leave_date: row.get(7)?,
    })
  }

  pub fn into_record(self) -> TenancyRecord {
    TenancyRecord {
      id:             TenancyId(self.id),
      room:           self.room.unwrap_or_default(),
      bunk:           self.bunk.unwrap_or_default(),
      name:           self.name.unwrap_or_default(),
      start_date:     self.date.unwrap_or_default(),
      contact_number: self.number.unwrap_or_default(),
      payment:        self.payment.unwrap_or_default(),
      leave_date:     self.leave_date,
    }
  }
}
