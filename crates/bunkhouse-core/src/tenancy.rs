//! Tenancy records — the fundamental unit of the Bunkhouse store.
//!
//! A record is one tenancy assignment of a person to a `(room, bunk)` pair.
//! Records are never archived: a departed tenant keeps their row, with a
//! leave date on or before today. Whether a record is *active* is computed at
//! query time from its leave date and the current date.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave-date placeholder shown by front ends for "no planned departure".
/// Stored values equal to it are treated the same as an empty leave date.
pub const NO_LEAVE_DATE: &str = "N/A";

/// The date format used for every stored date. Fixed-width and zero-padded,
/// so lexicographic comparison orders dates correctly.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned, monotonic record id. Never reused, even after deletion.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TenancyId(pub i64);

impl fmt::Display for TenancyId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::str::FromStr for TenancyId {
  type Err = std::num::ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> { s.trim().parse().map(Self) }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// One persisted tenancy assignment, historical or current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenancyRecord {
  pub id:             TenancyId,
  pub room:           String,
  /// Bunk within the room, e.g. `upper-1` or `Up1`.
  pub bunk:           String,
  pub name:           String,
  /// Free text, nominally `YYYY-MM-DD`.
  pub start_date:     String,
  pub contact_number: String,
  /// Validated decimal text, or empty when nothing has been recorded.
  pub payment:        String,
  /// `None`, empty, or [`NO_LEAVE_DATE`] all mean "no planned departure".
  pub leave_date:     Option<String>,
}

impl TenancyRecord {
  /// Whether the tenant is still present on `today`.
  pub fn is_active(&self, today: NaiveDate) -> bool {
    is_active_on(self.leave_date.as_deref(), today)
  }

  /// Case-insensitive exact name match, ignoring surrounding whitespace.
  pub fn name_matches(&self, query: &str) -> bool {
    let query = query.trim();
    !query.is_empty() && normalize_name(&self.name) == normalize_name(query)
  }

  pub fn occupies(&self, room: &str, bunk: &str) -> bool {
    self.room == room && self.bunk == bunk
  }
}

/// The activity rule. A tenancy is active when its leave date is missing,
/// empty, the literal `"N/A"`, or strictly after `today`.
///
/// Dates compare as strings, which is exact for `YYYY-MM-DD`. Malformed
/// dates compare however their bytes happen to order; no validation is done.
pub fn is_active_on(leave_date: Option<&str>, today: NaiveDate) -> bool {
  match leave_date {
    None => true,
    Some("") | Some(NO_LEAVE_DATE) => true,
    Some(date) => date > format_date(today).as_str(),
  }
}

pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

fn normalize_name(name: &str) -> String { name.trim().to_lowercase() }

// ─── NewTenancy ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::TenancyStore::create_tenant`].
/// `id` is always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTenancy {
  pub room:           String,
  pub bunk:           String,
  pub name:           String,
  pub start_date:     String,
  pub contact_number: String,
  #[serde(default)]
  pub leave_date:     String,
  /// Optional opening payment. Absent or malformed values store as empty.
  #[serde(default)]
  pub payment:        Option<String>,
}

impl NewTenancy {
  /// Convenience constructor with no leave date and no payment.
  pub fn new(
    room: impl Into<String>,
    bunk: impl Into<String>,
    name: impl Into<String>,
    start_date: impl Into<String>,
    contact_number: impl Into<String>,
  ) -> Self {
    Self {
      room: room.into(),
      bunk: bunk.into(),
      name: name.into(),
      start_date: start_date.into(),
      contact_number: contact_number.into(),
      leave_date: String::new(),
      payment: None,
    }
  }

  pub fn with_leave_date(mut self, leave_date: impl Into<String>) -> Self {
    self.leave_date = leave_date.into();
    self
  }

  pub fn with_payment(mut self, payment: impl Into<String>) -> Self {
    self.payment = Some(payment.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use chrono::Days;

  use super::*;

  fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 6, 15).unwrap() }

  fn record(name: &str, leave_date: Option<&str>) -> TenancyRecord {
    TenancyRecord {
      id:             TenancyId(1),
      room:           "RM A".into(),
      bunk:           "upper-1".into(),
      name:           name.into(),
      start_date:     "2024-01-01".into(),
      contact_number: "0917".into(),
      payment:        String::new(),
      leave_date:     leave_date.map(str::to_owned),
    }
  }

  #[test]
  fn missing_or_placeholder_leave_date_is_active() {
    assert!(is_active_on(None, today()));
    assert!(is_active_on(Some(""), today()));
    assert!(is_active_on(Some("N/A"), today()));
  }

  #[test]
  fn leave_date_relative_to_today() {
    let tomorrow = format_date(today().checked_add_days(Days::new(1)).unwrap());
    let yesterday = format_date(today().checked_sub_days(Days::new(1)).unwrap());

    assert!(is_active_on(Some(&tomorrow), today()));
    assert!(!is_active_on(Some("2024-06-15"), today()));
    assert!(!is_active_on(Some(&yesterday), today()));
  }

  #[test]
  fn name_match_ignores_case_and_padding() {
    let r = record("  juan  ", None);
    assert!(r.name_matches("Juan"));
    assert!(r.name_matches(" JUAN"));
    assert!(!record("Juana", None).name_matches("Juan"));
    assert!(!r.name_matches("   "));
  }

  #[test]
  fn record_activity_uses_leave_date() {
    assert!(record("Ana", Some("2024-12-31")).is_active(today()));
    assert!(!record("Ana", Some("2024-01-01")).is_active(today()));
  }

  #[test]
  fn tenancy_id_parses_with_whitespace() {
    assert_eq!(" 42 ".parse::<TenancyId>().unwrap(), TenancyId(42));
    assert!("x".parse::<TenancyId>().is_err());
  }

  #[test]
  fn new_tenancy_deserialises_without_optional_fields() {
    let input: NewTenancy = serde_json::from_value(serde_json::json!({
      "room": "RM A",
      "bunk": "lower-2",
      "name": "Ana",
      "start_date": "2024-01-01",
      "contact_number": "0917",
    }))
    .unwrap();
    assert_eq!(input.leave_date, "");
    assert_eq!(input.payment, None);
  }
}
