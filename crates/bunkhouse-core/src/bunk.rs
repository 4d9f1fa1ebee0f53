//! Structured bunk identifiers.
//!
//! The store keeps bunks as plain text. Two spellings exist: the long form
//! `upper-3` / `lower-3` and the short form `Up3` / `Low3`. A deployment
//! picks one [`BunkStyle`] and sticks to it, since the occupancy check compares
//! bunk text exactly.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{Error, Result};

/// Which berth of a bunk bed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Position {
  Upper,
  Lower,
}

impl Position {
  fn short(self) -> &'static str {
    match self {
      Self::Upper => "Up",
      Self::Lower => "Low",
    }
  }
}

/// Spelling used when rendering a [`BunkId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BunkStyle {
  /// `upper-1`
  #[default]
  Long,
  /// `Up1`
  Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BunkId {
  pub position: Position,
  /// 1-based.
  pub index:    u32,
}

impl BunkId {
  pub fn new(position: Position, index: u32) -> Self { Self { position, index } }

  pub fn format(&self, style: BunkStyle) -> String {
    match style {
      BunkStyle::Long => format!("{}-{}", self.position, self.index),
      BunkStyle::Short => format!("{}{}", self.position.short(), self.index),
    }
  }

  /// Parse either spelling. Position names are case-insensitive.
  pub fn parse(input: &str) -> Result<Self> {
    let s = input.trim();
    let invalid = || Error::InvalidBunk(input.to_owned());

    let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
    let (head, digits) = s.split_at(split);
    let head = head.strip_suffix('-').unwrap_or(head);

    let position = match head.to_ascii_lowercase().as_str() {
      "upper" | "up" => Position::Upper,
      "lower" | "low" => Position::Lower,
      _ => return Err(invalid()),
    };
    let index: u32 = digits.parse().map_err(|_| invalid())?;
    if index == 0 {
      return Err(invalid());
    }
    Ok(Self { position, index })
  }

  /// Re-spell a bunk string in `style`. Strings that are not recognisable
  /// bunk ids come back unchanged.
  pub fn normalize(input: &str, style: BunkStyle) -> String {
    Self::parse(input)
      .map(|id| id.format(style))
      .unwrap_or_else(|_| input.to_owned())
  }
}

impl fmt::Display for BunkId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.format(BunkStyle::Long))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_both_styles() {
    let id = BunkId::new(Position::Upper, 3);
    assert_eq!(id.format(BunkStyle::Long), "upper-3");
    assert_eq!(id.format(BunkStyle::Short), "Up3");
    let id = BunkId::new(Position::Lower, 12);
    assert_eq!(id.format(BunkStyle::Long), "lower-12");
    assert_eq!(id.format(BunkStyle::Short), "Low12");
  }

  #[test]
  fn parses_both_styles() {
    assert_eq!(BunkId::parse("upper-1").unwrap(), BunkId::new(Position::Upper, 1));
    assert_eq!(BunkId::parse("Low4").unwrap(), BunkId::new(Position::Lower, 4));
    assert_eq!(BunkId::parse(" UP10 ").unwrap(), BunkId::new(Position::Upper, 10));
  }

  #[test]
  fn rejects_garbage() {
    for bad in ["", "upper", "middle-1", "upper-0", "1", "upper--1"] {
      assert!(BunkId::parse(bad).is_err(), "{bad:?}");
    }
  }

  #[test]
  fn normalize_respells_or_passes_through() {
    assert_eq!(BunkId::normalize("Up2", BunkStyle::Long), "upper-2");
    assert_eq!(BunkId::normalize("lower-5", BunkStyle::Short), "Low5");
    assert_eq!(BunkId::normalize("cot by door", BunkStyle::Short), "cot by door");
  }
}
