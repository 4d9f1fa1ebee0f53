//! The `TenancyStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `bunkhouse-store-sqlite`). Front ends (`bunkhouse-api`, `bunkhouse-cli`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Classify,
  tenancy::{NewTenancy, TenancyId, TenancyRecord},
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Bunkhouse tenancy store backend.
///
/// "Active" always means active as of the store's clock at call time; see
/// [`crate::tenancy::is_active_on`].
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait TenancyStore: Send + Sync {
  type Error: std::error::Error + Classify + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every active record, in insertion order.
  fn list_active_tenants(
    &self,
  ) -> impl Future<Output = Result<Vec<TenancyRecord>, Self::Error>> + Send + '_;

  /// Every record including departed tenants, in insertion order.
  fn list_all_tenants(
    &self,
  ) -> impl Future<Output = Result<Vec<TenancyRecord>, Self::Error>> + Send + '_;

  /// Retrieve a record by id, active or not. Returns `None` if not found.
  fn get_tenant(
    &self,
    id: TenancyId,
  ) -> impl Future<Output = Result<Option<TenancyRecord>, Self::Error>> + Send + '_;

  /// `true` iff at least one active record exists for `(room, bunk)`.
  fn occupancy_of<'a>(
    &'a self,
    room: &'a str,
    bunk: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Active records whose name equals `query`, ignoring case and surrounding
  /// whitespace. An empty query matches nothing.
  fn find_tenants_by_name<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<TenancyRecord>, Self::Error>> + Send + 'a;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new tenancy and return it with its assigned id.
  ///
  /// Fails with [`crate::Error::BunkOccupied`] if the bunk already has an
  /// active occupant; the check and the insert are atomic.
  fn create_tenant(
    &self,
    input: NewTenancy,
  ) -> impl Future<Output = Result<TenancyRecord, Self::Error>> + Send + '_;

  /// Overwrite the payment of `id`. Non-numeric or negative amounts are
  /// rejected with [`crate::Error::InvalidPayment`] and nothing changes.
  fn update_payment<'a>(
    &'a self,
    id: TenancyId,
    payment: &'a str,
  ) -> impl Future<Output = Result<TenancyRecord, Self::Error>> + Send + 'a;

  /// Overwrite the leave date of `id` with `leave_date` verbatim. Setting it
  /// to today or earlier checks the tenant out; empty re-activates.
  fn update_leave_date<'a>(
    &'a self,
    id: TenancyId,
    leave_date: &'a str,
  ) -> impl Future<Output = Result<TenancyRecord, Self::Error>> + Send + 'a;

  /// Irreversibly remove `id`, returning the removed record.
  fn delete_tenant(
    &self,
    id: TenancyId,
  ) -> impl Future<Output = Result<TenancyRecord, Self::Error>> + Send + '_;
}
