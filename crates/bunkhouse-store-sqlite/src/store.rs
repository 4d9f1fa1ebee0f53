//! [`SqliteStore`] — the SQLite implementation of [`TenancyStore`].

use std::{path::Path, sync::Arc};

use chrono::NaiveDate;
use rusqlite::{OptionalExtension as _, TransactionBehavior};
use tracing::{debug, info, warn};

use bunkhouse_core::{
  clock::{Clock, SystemClock},
  payment::parse_payment,
  store::TenancyStore,
  tenancy::{NewTenancy, TenancyId, TenancyRecord, is_active_on},
};

use crate::{
  Error, Result,
  encode::{RawTenancy, TENANT_COLUMNS},
  schema::{self, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Bunkhouse tenancy store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:  tokio_rusqlite::Connection,
  clock: Arc<dyn Clock>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, clock: Arc::new(SystemClock) };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, clock: Arc::new(SystemClock) };
    store.init_schema().await?;
    Ok(store)
  }

  /// Replace the clock used to decide which tenancies are active.
  pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
    self.clock = Arc::new(clock);
    self
  }

  pub fn today(&self) -> NaiveDate { self.clock.today() }

  async fn init_schema(&self) -> Result<()> {
    let added = self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(schema::patch(conn)?)
      })
      .await?;

    if !added.is_empty() {
      info!(columns = ?added, "patched tenants table");
    }
    Ok(())
  }

  /// All rows in insertion order.
  async fn select_all(&self) -> Result<Vec<TenancyRecord>> {
    let raws: Vec<RawTenancy> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {TENANT_COLUMNS} FROM tenants ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawTenancy::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(raws.into_iter().map(RawTenancy::into_record).collect())
  }

  /// Overwrite one column of one row and return the updated record.
  async fn update_column(
    &self,
    id:     TenancyId,
    column: &'static str,
    value:  String,
  ) -> Result<TenancyRecord> {
    let raw: Option<RawTenancy> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          &format!("UPDATE tenants SET {column} = ?1 WHERE id = ?2"),
          rusqlite::params![value, id.0],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(
          conn
            .query_row(
              &format!("SELECT {TENANT_COLUMNS} FROM tenants WHERE id = ?1"),
              rusqlite::params![id.0],
              RawTenancy::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    let record = raw
      .map(RawTenancy::into_record)
      .ok_or(bunkhouse_core::Error::NotFound(id))?;
    debug!(%id, column, "updated tenancy");
    Ok(record)
  }
}

// ─── TenancyStore impl ───────────────────────────────────────────────────────

impl TenancyStore for SqliteStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_active_tenants(&self) -> Result<Vec<TenancyRecord>> {
    let today = self.today();
    let mut records = self.select_all().await?;
    records.retain(|r| r.is_active(today));
    Ok(records)
  }

  async fn list_all_tenants(&self) -> Result<Vec<TenancyRecord>> {
    self.select_all().await
  }

  async fn get_tenant(&self, id: TenancyId) -> Result<Option<TenancyRecord>> {
    let raw: Option<RawTenancy> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {TENANT_COLUMNS} FROM tenants WHERE id = ?1"),
              rusqlite::params![id.0],
              RawTenancy::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(raw.map(RawTenancy::into_record))
  }

  async fn occupancy_of(&self, room: &str, bunk: &str) -> Result<bool> {
    let today = self.today();
    let room = room.to_owned();
    let bunk = bunk.to_owned();

    let leave_dates: Vec<Option<String>> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare("SELECT leave_date FROM tenants WHERE room = ?1 AND bunk = ?2")?;
        let rows = stmt
          .query_map(rusqlite::params![room, bunk], |row| {
            row.get::<_, Option<String>>(0)
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(leave_dates.iter().any(|d| is_active_on(d.as_deref(), today)))
  }

  async fn find_tenants_by_name(&self, query: &str) -> Result<Vec<TenancyRecord>> {
    if query.trim().is_empty() {
      return Ok(Vec::new());
    }
    let mut records = self.list_active_tenants().await?;
    records.retain(|r| r.name_matches(query));
    Ok(records)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create_tenant(&self, input: NewTenancy) -> Result<TenancyRecord> {
    let payment = match input.payment.as_deref().map(parse_payment).transpose() {
      Ok(p) => p.unwrap_or_default(),
      Err(e) => {
        warn!(error = %e, "dropping invalid opening payment");
        String::new()
      }
    };

    let mut record = TenancyRecord {
      id:             TenancyId(0),
      room:           input.room,
      bunk:           input.bunk,
      name:           input.name,
      start_date:     input.start_date,
      contact_number: input.contact_number,
      payment,
      leave_date:     Some(input.leave_date),
    };

    let today = self.today();
    let row = record.clone();

    // The occupancy re-check and the insert share one IMMEDIATE transaction,
    // so no other writer can claim the bunk in between.
    let inserted: Option<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let occupied = {
          let mut stmt =
            tx.prepare("SELECT leave_date FROM tenants WHERE room = ?1 AND bunk = ?2")?;
          let leave_dates = stmt
            .query_map(rusqlite::params![row.room, row.bunk], |r| {
              r.get::<_, Option<String>>(0)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
          leave_dates.iter().any(|d| is_active_on(d.as_deref(), today))
        };
        if occupied {
          return Ok(None);
        }

        tx.execute(
          "INSERT INTO tenants (room, bunk, name, date, number, payment, leave_date)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            row.room,
            row.bunk,
            row.name,
            row.start_date,
            row.contact_number,
            row.payment,
            row.leave_date,
          ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Some(id))
      })
      .await?;

    let Some(id) = inserted else {
      return Err(
        bunkhouse_core::Error::BunkOccupied { room: record.room, bunk: record.bunk }
          .into(),
      );
    };

    record.id = TenancyId(id);
    info!(id = %record.id, room = %record.room, bunk = %record.bunk, "created tenancy");
    Ok(record)
  }

  async fn update_payment(&self, id: TenancyId, payment: &str) -> Result<TenancyRecord> {
    let payment = parse_payment(payment)?;
    self.update_column(id, "payment", payment).await
  }

  async fn update_leave_date(
    &self,
    id:         TenancyId,
    leave_date: &str,
  ) -> Result<TenancyRecord> {
    self.update_column(id, "leave_date", leave_date.to_owned()).await
  }

  async fn delete_tenant(&self, id: TenancyId) -> Result<TenancyRecord> {
    let raw: Option<RawTenancy> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let raw = tx
          .query_row(
            &format!("SELECT {TENANT_COLUMNS} FROM tenants WHERE id = ?1"),
            rusqlite::params![id.0],
            RawTenancy::from_row,
          )
          .optional()?;
        if raw.is_some() {
          tx.execute("DELETE FROM tenants WHERE id = ?1", rusqlite::params![id.0])?;
          tx.commit()?;
        }
        Ok(raw)
      })
      .await?;

    let record = raw
      .map(RawTenancy::into_record)
      .ok_or(bunkhouse_core::Error::NotFound(id))?;
    info!(%id, room = %record.room, bunk = %record.bunk, "deleted tenancy");
    Ok(record)
  }
}
