//! Payment amount validation.
//!
//! Amounts are kept as the text the operator typed so a stored `"150.50"`
//! reads back as `"150.50"`. Only non-negative decimals are accepted: ASCII
//! digits with at most one decimal point.

use crate::{Error, Result};

/// Validate `input` and return the trimmed amount to store.
pub fn parse_payment(input: &str) -> Result<String> {
  let amount = input.trim();
  let mut digits = 0usize;
  let mut points = 0usize;

  for c in amount.chars() {
    match c {
      '0'..='9' => digits += 1,
      '.' => points += 1,
      _ => return Err(Error::InvalidPayment(input.to_owned())),
    }
  }

  if digits == 0 || points > 1 {
    return Err(Error::InvalidPayment(input.to_owned()));
  }
  Ok(amount.to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_plain_and_decimal_amounts() {
    assert_eq!(parse_payment("150.50").unwrap(), "150.50");
    assert_eq!(parse_payment(" 1500 ").unwrap(), "1500");
    assert_eq!(parse_payment("0").unwrap(), "0");
    assert_eq!(parse_payment(".5").unwrap(), ".5");
  }

  #[test]
  fn rejects_non_numeric_and_negative() {
    for bad in ["abc", "", "  ", "-5", "1.2.3", ".", "1e3", "₱100", "12,000"] {
      assert!(
        matches!(parse_payment(bad), Err(Error::InvalidPayment(_))),
        "{bad:?} should be rejected"
      );
    }
  }
}
