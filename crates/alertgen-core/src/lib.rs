//! Dataset side of the synthetic compliance alert generator.
//!
//! The pipeline runs once per process:
//!
//! 1. [`generator`] draws the alerts into an [`AlertStore`]
//! 2. [`export`] writes the store to a CSV file
//! 3. [`table`] flattens the store into a [`Table`] for analysis
//!
//! The store is never modified after generation, so the query API (in
//! `alertgen-observer`) can read it concurrently without locks.
//! [`config`] holds the optional YAML configuration for all of the above.

pub mod config;
pub mod export;
pub mod generator;
pub mod store;
pub mod table;

pub use config::{AlertgenConfig, ConfigError};
pub use export::{ExportError, export_csv, read_csv};
pub use generator::{generate, generate_with_clock};
pub use store::AlertStore;
pub use table::{Cell, Column, ColumnKind, Table};
