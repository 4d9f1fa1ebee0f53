//! Dispatch tests against an in-memory SQLite store.

use std::sync::Arc;

use bunkhouse_core::{
  bunk::BunkStyle,
  clock::FixedClock,
  room::{BunkState, RoomLayout},
  tenancy::{NewTenancy, TenancyId},
};
use bunkhouse_store_sqlite::SqliteStore;
use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::{Api, ErrorCode, Request, Response};

async fn api() -> Api<SqliteStore> {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
    .with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
  Api::new(Arc::new(store), vec![RoomLayout::new("RM A", 2)], BunkStyle::Long)
}

fn ana() -> NewTenancy {
  NewTenancy::new("RM A", "upper-1", "Ana", "2024-01-01", "0917")
}

fn error_code(response: &Response) -> Option<ErrorCode> {
  match response {
    Response::Error { code, .. } => Some(*code),
    _ => None,
  }
}

async fn create(api: &Api<SqliteStore>, input: NewTenancy) -> TenancyId {
  match api.dispatch(Request::CreateTenant(input)).await.unwrap() {
    Response::Tenant { tenant } => tenant.id,
    other => panic!("unexpected response: {other:?}"),
  }
}

#[tokio::test]
async fn create_marks_bunk_occupied() {
  let api = api().await;
  create(&api, ana()).await;

  let response = api
    .dispatch(Request::OccupancyOf { room: "RM A".into(), bunk: "upper-1".into() })
    .await
    .unwrap();
  assert_eq!(
    response,
    Response::Occupancy { room: "RM A".into(), bunk: "upper-1".into(), occupied: true }
  );
}

#[tokio::test]
async fn short_bunk_spelling_hits_the_same_bunk() {
  let api = api().await;
  create(&api, ana()).await;

  let mut twin = ana();
  twin.bunk = "Up1".into();
  let err = api.dispatch(Request::CreateTenant(twin)).await.unwrap_err();
  assert_eq!(err.code(), ErrorCode::OccupancyConflict);
}

#[tokio::test]
async fn errors_map_to_codes() {
  let api = api().await;
  let id = create(&api, ana()).await;

  let bad_payment = api
    .handle_line(&json!({"op": "update_payment", "id": id, "payment": "abc"}).to_string())
    .await;
  assert_eq!(error_code(&bad_payment), Some(ErrorCode::ValidationFailed));

  let missing = api
    .handle_line(&json!({"op": "delete_tenant", "id": 999}).to_string())
    .await;
  assert_eq!(error_code(&missing), Some(ErrorCode::NotFound));

  let missing = api.handle_line(r#"{"op":"get_tenant","id":999}"#).await;
  assert_eq!(error_code(&missing), Some(ErrorCode::NotFound));

  let room = api.handle_line(r#"{"op":"room_map","room":"RM Z"}"#).await;
  assert_eq!(error_code(&room), Some(ErrorCode::UnknownRoom));

  let garbage = api.handle_line("{not json").await;
  assert_eq!(error_code(&garbage), Some(ErrorCode::BadRequest));
}

#[tokio::test]
async fn room_map_reports_states() {
  let api = api().await;
  create(&api, ana()).await;

  let response = api
    .dispatch(Request::RoomMap { room: "RM A".into() })
    .await
    .unwrap();
  let Response::RoomMap { bunks, .. } = response else {
    panic!("expected room map");
  };
  assert_eq!(bunks.len(), 4);
  assert_eq!(bunks[0].bunk, "upper-1");
  assert_eq!(bunks[0].state, BunkState::Occupied);
  assert!(bunks[1..].iter().all(|b| b.state == BunkState::Free));
}

#[tokio::test]
async fn serve_lines_answers_each_request() {
  let api = api().await;
  let input = [
    json!({
      "op": "create_tenant",
      "room": "RM A",
      "bunk": "lower-2",
      "name": "Ben",
      "start_date": "2024-02-01",
      "contact_number": "0918",
      "leave_date": "",
    })
    .to_string(),
    String::new(),
    "oops".to_string(),
    json!({"op": "find_tenants_by_name", "query": " BEN "}).to_string(),
  ]
  .join("\n");

  let mut output = Vec::new();
  api.serve_lines(input.as_bytes(), &mut output).await.unwrap();

  let replies: Vec<Value> = String::from_utf8(output)
    .unwrap()
    .lines()
    .map(|l| serde_json::from_str(l).unwrap())
    .collect();

  assert_eq!(replies.len(), 3);
  assert_eq!(replies[0]["kind"], "tenant");
  assert_eq!(replies[0]["tenant"]["bunk"], "lower-2");
  assert_eq!(replies[1]["kind"], "error");
  assert_eq!(replies[1]["code"], "bad_request");
  assert_eq!(replies[2]["kind"], "tenants");
  assert_eq!(replies[2]["tenants"][0]["name"], "Ben");
}

#[tokio::test]
async fn checkout_then_history() {
  let api = api().await;
  let id = create(&api, ana()).await;

  api
    .dispatch(Request::UpdateLeaveDate { id, leave_date: "2024-06-15".into() })
    .await
    .unwrap();

  let Response::Tenants { tenants } =
    api.dispatch(Request::ListActiveTenants).await.unwrap()
  else {
    panic!("expected tenants");
  };
  assert!(tenants.is_empty());

  let Response::Tenants { tenants } = api.dispatch(Request::ListAllTenants).await.unwrap()
  else {
    panic!("expected tenants");
  };
  assert_eq!(tenants.len(), 1);
}
