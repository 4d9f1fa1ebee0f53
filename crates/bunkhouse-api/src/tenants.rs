//! Handlers for tenant requests.
//!
//! | Op | Notes |
//! |----|-------|
//! | `list_active_tenants` | Insertion order |
//! | `list_all_tenants` | Includes departed tenants |
//! | `get_tenant` | `not_found` if the id is unknown |
//! | `find_tenants_by_name` | Exact, case-insensitive, active tenants only |
//! | `create_tenant` | `occupancy_conflict` if the bunk is taken |
//! | `update_payment` | `validation_failed` on non-numeric amounts |
//! | `update_leave_date` | Stored verbatim |
//! | `delete_tenant` | Irreversible |

use bunkhouse_core::{
  bunk::{BunkId, BunkStyle},
  store::TenancyStore,
  tenancy::{NewTenancy, TenancyId},
};

use crate::{error::ApiError, protocol::Response};

pub async fn list_active<S: TenancyStore>(store: &S) -> Result<Response, ApiError> {
  let tenants = store
    .list_active_tenants()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Response::Tenants { tenants })
}

pub async fn list_all<S: TenancyStore>(store: &S) -> Result<Response, ApiError> {
  let tenants = store.list_all_tenants().await.map_err(ApiError::from_store)?;
  Ok(Response::Tenants { tenants })
}

pub async fn get_one<S: TenancyStore>(
  store: &S,
  id: TenancyId,
) -> Result<Response, ApiError> {
  let tenant = store
    .get_tenant(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("tenancy {id} not found")))?;
  Ok(Response::Tenant { tenant })
}

pub async fn find_by_name<S: TenancyStore>(
  store: &S,
  query: &str,
) -> Result<Response, ApiError> {
  let tenants = store
    .find_tenants_by_name(query)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Response::Tenants { tenants })
}

/// Bunk ids are re-spelt in the deployment's style before the occupancy
/// check so `Up1` and `upper-1` can never be booked as two bunks.
pub async fn create<S: TenancyStore>(
  store: &S,
  style: BunkStyle,
  mut input: NewTenancy,
) -> Result<Response, ApiError> {
  input.bunk = BunkId::normalize(&input.bunk, style);
  let tenant = store.create_tenant(input).await.map_err(ApiError::from_store)?;
  Ok(Response::Tenant { tenant })
}

pub async fn update_payment<S: TenancyStore>(
  store: &S,
  id: TenancyId,
  payment: &str,
) -> Result<Response, ApiError> {
  let tenant = store
    .update_payment(id, payment)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Response::Tenant { tenant })
}

pub async fn update_leave_date<S: TenancyStore>(
  store: &S,
  id: TenancyId,
  leave_date: &str,
) -> Result<Response, ApiError> {
  let tenant = store
    .update_leave_date(id, leave_date)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Response::Tenant { tenant })
}

pub async fn delete<S: TenancyStore>(
  store: &S,
  id: TenancyId,
) -> Result<Response, ApiError> {
  let tenant = store.delete_tenant(id).await.map_err(ApiError::from_store)?;
  Ok(Response::Deleted { tenant })
}
