//! Domain model for bundled catalog records.
//!
//! # Responsibility
//! - Define canonical data structures shared by loader, index and views.
//!
//! # Invariants
//! - Every record is identified by a stable positive `RecordId`.
//! - Records are read-only after the catalog is loaded.

pub mod record;
