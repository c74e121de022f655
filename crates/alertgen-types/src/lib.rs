//! Shared type definitions for the synthetic compliance alert generator.
//!
//! This crate is the single source of truth for the alert record shared by
//! the generator, the HTTP query API, and the CSV exporter.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for alert identifiers
//! - [`enums`] -- Impact levels, statuses, teams, alert types, conclusions
//! - [`structs`] -- The [`Alert`] entity and its flat [`AlertRecord`] form
//! - [`timestamp`] -- Second-precision timestamp wire format
//! - [`error`] -- Validation errors for flat records

pub mod enums;
pub mod error;
pub mod ids;
pub mod structs;
pub mod timestamp;

// Re-export all public types at crate root for convenience.
pub use enums::{AlertStatus, AlertType, Conclusion, ImpactLevel, Team};
pub use error::RecordError;
pub use ids::AlertId;
pub use structs::{Alert, AlertRecord, COLUMNS, Resolution};
