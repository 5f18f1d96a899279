//! # fleet-core
//!
//! Core types shared across all FleetOps crates:
//! - Entity structs for the seven record families (maintenance log,
//!   maintenance request, movement register, monthly checklist, daily
//!   inspection, activity report, site report)
//! - Status and role enums
//! - Date parsing/formatting helpers for the wire format
//! - Client-side validation
//! - Cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod validate;

pub use entities::Keyed;
pub use errors::CoreError;
