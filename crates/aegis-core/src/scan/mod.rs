//! Scan domain models.
//!
//! Types describing the findings produced by a simulated security scan and
//! the rows persisted to the record store.

pub mod model;

pub use model::{FindingKind, FindingRecord, ScanFinding, Severity};
