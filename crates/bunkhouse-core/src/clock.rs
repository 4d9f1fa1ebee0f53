//! Source of "today" for the activity rule.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
  fn today(&self) -> NaiveDate;
}

/// The operator's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate { Local::now().date_naive() }
}

/// A pinned date, for tests and replaying history.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate { self.0 }
}
