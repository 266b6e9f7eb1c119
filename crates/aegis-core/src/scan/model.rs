//! Scan finding types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a scan finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// Something worth attention but not necessarily broken.
    Warning,
    /// A detected problem.
    Error,
    /// Neutral observation.
    Info,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FindingKind::Warning => "warning",
            FindingKind::Error => "error",
            FindingKind::Info => "info",
        };
        write!(f, "{}", label)
    }
}

/// Severity assigned to a scan finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// A single finding produced by a completed scan.
///
/// Findings are immutable once created. A scan produces them in a batch that
/// replaces the previous batch wholesale; individual findings are never
/// edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFinding {
    /// Classification of the finding.
    pub kind: FindingKind,
    /// Human-readable description.
    pub message: String,
    /// Assigned severity.
    pub severity: Severity,
}

impl ScanFinding {
    /// Creates a new finding.
    pub fn new(kind: FindingKind, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
        }
    }
}

/// Row shape persisted to the `scan_results` collection.
///
/// The record store receives one row per finding, each stamped with the
/// timestamp of the scan that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRecord {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub message: String,
    pub severity: Severity,
    /// RFC 3339 timestamp of the producing scan.
    pub timestamp: String,
}

impl FindingRecord {
    /// Builds the persisted row for a finding.
    pub fn new(finding: &ScanFinding, timestamp: impl Into<String>) -> Self {
        Self {
            kind: finding.kind,
            message: finding.message.clone(),
            severity: finding.severity,
            timestamp: timestamp.into(),
        }
    }
}
