//! Canned data produced by the simulated operations.

use aegis_core::scan::{FindingKind, ScanFinding, Severity};

/// The fixed finding batch produced by every completed scan: one finding of
/// each kind.
pub(crate) fn scan_findings() -> Vec<ScanFinding> {
    vec![
        ScanFinding::new(
            FindingKind::Warning,
            "Port 22 (SSH) is open",
            Severity::Medium,
        ),
        ScanFinding::new(
            FindingKind::Error,
            "Outdated SSL certificate detected",
            Severity::High,
        ),
        ScanFinding::new(
            FindingKind::Info,
            "Web server running on port 80",
            Severity::Low,
        ),
    ]
}

/// The deterministic assistant reply: quotes the user text verbatim and
/// appends the fixed recommendation.
pub(crate) fn assistant_reply(user_text: &str) -> String {
    format!(
        "I've analyzed your security concern about \"{}\". Based on our current security posture, \
         I recommend implementing additional firewall rules and enabling two-factor authentication \
         for all admin accounts.",
        user_text
    )
}
