//! SQL schema for the Bunkhouse SQLite store.
//!
//! Executed once at connection startup. Tables created by older releases are
//! brought up to date by adding missing optional columns; nothing is ever
//! dropped or rewritten. `PRAGMA user_version` records the applied version.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The column names are a durable contract with existing `tenants.db` files.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS tenants (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,  -- never reused
    room        TEXT,
    bunk        TEXT,
    name        TEXT,
    date        TEXT,             -- start date, free text
    number      TEXT,             -- contact number
    payment     TEXT DEFAULT '',
    leave_date  TEXT DEFAULT ''   -- '' / NULL / 'N/A' = no planned departure
);

CREATE INDEX IF NOT EXISTS tenants_bunk_idx ON tenants(room, bunk);
";

pub const SCHEMA_VERSION: i64 = 1;

/// Optional columns that older tables may lack, with their declarations.
pub const PATCH_COLUMNS: &[(&str, &str)] = &[
  ("payment", "TEXT DEFAULT ''"),
  ("leave_date", "TEXT DEFAULT ''"),
];

/// Add any [`PATCH_COLUMNS`] missing from `tenants` and stamp the schema
/// version. Returns the names of the columns that were added.
pub fn patch(conn: &rusqlite::Connection) -> rusqlite::Result<Vec<&'static str>> {
  let existing: Vec<String> = {
    let mut stmt = conn.prepare("PRAGMA table_info(tenants)")?;
    stmt
      .query_map([], |row| row.get::<_, String>(1))?
      .collect::<rusqlite::Result<_>>()?
  };

  let mut added = Vec::new();
  for &(column, decl) in PATCH_COLUMNS {
    if !existing.iter().any(|c| c.eq_ignore_ascii_case(column)) {
      conn.execute_batch(&format!("ALTER TABLE tenants ADD COLUMN {column} {decl}"))?;
      added.push(column);
    }
  }

  conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
  Ok(added)
}
