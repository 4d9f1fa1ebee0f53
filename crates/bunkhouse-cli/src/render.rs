//! Plain-text rendering of API responses.

use std::fmt::Write as _;

use bunkhouse_api::Response;
use bunkhouse_core::{
  room::{BunkState, BunkStatus},
  tenancy::{NO_LEAVE_DATE, TenancyRecord},
};

/// `₱150.50`, or `₱0.00` when no payment has been recorded.
pub fn format_payment(symbol: &str, payment: &str) -> String {
  let amount = if payment.is_empty() { "0.00" } else { payment };
  format!("{symbol}{amount}")
}

fn leave_label(tenant: &TenancyRecord) -> &str {
  match tenant.leave_date.as_deref() {
    None | Some("") => NO_LEAVE_DATE,
    Some(d) => d,
  }
}

pub fn tenant_card(symbol: &str, t: &TenancyRecord) -> String {
  format!(
    "#{id}\n  Room:    {room}\n  Bunk:    {bunk}\n  Name:    {name}\n  Date:    {date}\n  Contact: {contact}\n  Leave:   {leave}\n  Payment: {payment}",
    id = t.id,
    room = t.room,
    bunk = t.bunk,
    name = t.name,
    date = t.start_date,
    contact = t.contact_number,
    leave = leave_label(t),
    payment = format_payment(symbol, &t.payment),
  )
}

fn bunk_line(b: &BunkStatus) -> String {
  let state = match b.state {
    BunkState::Free => "FREE",
    BunkState::Occupied => "OCCUPIED",
  };
  let names: Vec<&str> = b.occupants.iter().map(|t| t.name.trim()).collect();
  format!("  {:<10} {:<9} {}", b.bunk, state, names.join(", "))
    .trim_end()
    .to_string()
}

/// Render any non-error response for a terminal.
pub fn render(symbol: &str, response: &Response) -> String {
  match response {
    Response::Tenant { tenant } => tenant_card(symbol, tenant),
    Response::Tenants { tenants } if tenants.is_empty() => {
      "No tenants found.".to_string()
    }
    Response::Tenants { tenants } => tenants
      .iter()
      .map(|t| tenant_card(symbol, t))
      .collect::<Vec<_>>()
      .join("\n\n"),
    Response::Deleted { tenant } => format!(
      "Deleted #{} ({}, {} {})",
      tenant.id,
      tenant.name.trim(),
      tenant.room,
      tenant.bunk
    ),
    Response::Occupancy { room, bunk, occupied } => format!(
      "{room} {bunk}: {}",
      if *occupied { "OCCUPIED" } else { "FREE" }
    ),
    Response::Rooms { rooms } => rooms
      .iter()
      .map(|r| format!("{} ({} bunk beds)", r.name, r.bunks))
      .collect::<Vec<_>>()
      .join("\n"),
    Response::RoomMap { room, bunks } => {
      let mut out = String::new();
      let free = bunks.iter().filter(|b| b.state == BunkState::Free).count();
      let _ = writeln!(out, "{room} ({free}/{} free)", bunks.len());
      let lines: Vec<String> = bunks.iter().map(bunk_line).collect();
      out.push_str(&lines.join("\n"));
      out
    }
    Response::Error { code, message } => format!("error ({code:?}): {message}"),
  }
}

#[cfg(test)]
mod tests {
  use bunkhouse_core::tenancy::TenancyId;

  use super::*;

  fn ana() -> TenancyRecord {
    TenancyRecord {
      id:             TenancyId(3),
      room:           "RM A".into(),
      bunk:           "upper-1".into(),
      name:           "Ana".into(),
      start_date:     "2024-01-01".into(),
      contact_number: "0917".into(),
      payment:        String::new(),
      leave_date:     Some(String::new()),
    }
  }

  #[test]
  fn payment_defaults_to_zero() {
    assert_eq!(format_payment("₱", ""), "₱0.00");
    assert_eq!(format_payment("₱", "150.50"), "₱150.50");
  }

  #[test]
  fn card_shows_placeholders() {
    let card = tenant_card("₱", &ana());
    assert!(card.contains("Leave:   N/A"));
    assert!(card.contains("Payment: ₱0.00"));
  }

  #[test]
  fn room_map_lists_occupants() {
    let response = Response::RoomMap {
      room:  "RM A".into(),
      bunks: vec![
        BunkStatus { bunk: "upper-1".into(), state: BunkState::Occupied, occupants: vec![ana()] },
        BunkStatus { bunk: "lower-1".into(), state: BunkState::Free, occupants: vec![] },
      ],
    };
    let text = render("₱", &response);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "RM A (1/2 free)");
    assert!(lines[1].contains("OCCUPIED") && lines[1].ends_with("Ana"));
    assert!(lines[2].ends_with("FREE"));
  }
}
