//! Wire contract of the remote audit service.
//!
//! A session result is the complete outcome of one audit request: a final
//! status plus the ordered history of audit/fix iterations. Everything in
//! here is externally-sourced, read-only view data; the client never mutates
//! it. Deserializing into these types is the response validation boundary:
//! payloads that do not match this shape never reach the renderer.

use serde::{Deserialize, Serialize};

/// Terminal state of a healing session.
///
/// The set is closed on purpose: a status outside these three has no defined
/// presentation, so it is rejected during deserialization instead of leaving
/// the badge in a stale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalStatus {
    /// The submitted code was safe from the start.
    Safe,
    /// Vulnerabilities were found and fixed within the iteration budget.
    Healed,
    /// The service gave up with unresolved findings.
    MaxIterationsReached,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    #[serde(default)]
    pub original_code: String,

    /// Final state of the code after all iterations. Empty when the service
    /// omits it; only used for the healed-code export, never rendered.
    #[serde(default)]
    pub final_code: String,

    pub final_status: FinalStatus,

    /// Should equal `history.len()`; a mismatch is tolerated and both values
    /// are rendered as-is.
    pub total_iterations: u32,

    pub history: Vec<IterationRecord>,
}

/// One audit/fix cycle within a session, numbered from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: u32,

    /// Code state at this step. Untrusted text, never interpreted as markup.
    pub code_snapshot: String,

    pub audit_report: AuditReport,

    /// Fixed code when the fixer ran at this step. Absent or empty means no
    /// fix was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_applied: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub is_safe: bool,

    /// Overall summary; only rendered when `is_safe` is true.
    #[serde(default)]
    pub summary: String,

    /// Findings in service order; only rendered when `is_safe` is false.
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub severity: Severity,

    /// Weakness-classification identifier, e.g. "CWE-89". Always displayed.
    pub cwe_id: String,

    pub description: String,

    /// Only displayed when present and non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,

    pub suggested_fix_snippet: String,
}

/// Severity label as reported by the service.
///
/// The label is an open string: the known tiers drive styling, anything else
/// degrades to unstyled display rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
            SeverityTier::Critical => "critical",
        }
    }
}

impl Severity {
    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn tier(&self) -> Option<SeverityTier> {
        match self.0.trim().to_ascii_lowercase().as_str() {
            "low" => Some(SeverityTier::Low),
            "medium" => Some(SeverityTier::Medium),
            "high" => Some(SeverityTier::High),
            "critical" => Some(SeverityTier::Critical),
            _ => None,
        }
    }
}
