//! # fleet-store
//!
//! In-memory state containers for FleetOps.
//!
//! [`EntityStore`] tracks one record family: the currently-viewed record, the
//! full list, one [`OpStatus`](fleet_core::enums::OpStatus) per CRUD
//! operation, and the last error. Server responses merge into the list by
//! identifier equality. [`AuthStore`] does the same for the sign-in /
//! sign-up / OTP flow.

mod auth;
mod entity;

pub use auth::{AuthAction, AuthStore};
pub use entity::EntityStore;
