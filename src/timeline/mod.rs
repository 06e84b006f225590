//! Timeline renderer: projects a session result onto display cards.
//!
//! The projection is split in two: a pure, deterministic view model built
//! here, and replaceable renderers that bind it to an output medium
//! (`console`, `html`). Rendering the same session result twice yields the
//! same view; a new result replaces the previous view wholesale.

use crate::session::{FinalStatus, IterationRecord, SessionResult, SeverityTier};

pub mod console;
pub mod escape;
pub mod html;

// ============================================================================
// View Model Data Structures
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Secure,
    Healed,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub variant: BadgeVariant,
    pub icon: &'static str,
    pub label: &'static str,
}

impl BadgeView {
    fn from_status(status: FinalStatus) -> Self {
        match status {
            FinalStatus::Safe => Self {
                variant: BadgeVariant::Secure,
                icon: "✓",
                label: "Code is Secure",
            },
            FinalStatus::Healed => Self {
                variant: BadgeVariant::Healed,
                icon: "🛡",
                label: "Code Healed Successfully",
            },
            FinalStatus::MaxIterationsReached => Self {
                variant: BadgeVariant::Warning,
                icon: "⚠",
                label: "Max Iterations Reached",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VulnerabilityView {
    pub severity_label: String,
    pub tier: Option<SeverityTier>,
    pub cwe_id: String,
    pub description: String,
    pub line_number: Option<u32>,
    pub suggested_fix: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardVerdict {
    Safe { summary: String },
    Findings { vulnerabilities: Vec<VulnerabilityView> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub code_snapshot: String,
    pub verdict: CardVerdict,
    pub fix_applied: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub badge: BadgeView,
    pub iteration_label: String,
    pub cards: Vec<CardView>,
}

// ============================================================================
// View Building (Materialization)
// ============================================================================

impl TimelineView {
    pub fn from_result(result: &SessionResult) -> Self {
        Self {
            badge: BadgeView::from_status(result.final_status),
            iteration_label: iteration_label(result.total_iterations),
            cards: result.history.iter().map(build_card).collect(),
        }
    }
}

pub fn iteration_label(total: u32) -> String {
    if total == 1 {
        "1 iteration".to_string()
    } else {
        format!("{total} iterations")
    }
}

fn build_card(record: &IterationRecord) -> CardView {
    let report = &record.audit_report;

    // A safe verdict wins even over a populated vulnerability list.
    let verdict = if report.is_safe {
        CardVerdict::Safe {
            summary: report.summary.clone(),
        }
    } else {
        CardVerdict::Findings {
            vulnerabilities: report
                .vulnerabilities
                .iter()
                .map(|vuln| VulnerabilityView {
                    severity_label: vuln.severity.label().to_string(),
                    tier: vuln.severity.tier(),
                    cwe_id: vuln.cwe_id.clone(),
                    description: vuln.description.clone(),
                    line_number: vuln.line_number.filter(|line| *line != 0),
                    suggested_fix: vuln.suggested_fix_snippet.clone(),
                })
                .collect(),
        }
    };

    CardView {
        title: format!("Iteration {}", record.iteration + 1),
        code_snapshot: record.code_snapshot.clone(),
        verdict,
        fix_applied: record
            .fix_applied
            .as_deref()
            .filter(|fix| !fix.trim().is_empty())
            .map(|fix| fix.to_string()),
    }
}

// ============================================================================
// Local UI State
// ============================================================================

/// Per-card collapse flags, owned by whoever drives the renderer. Recreated
/// for every new session result; toggling one card never touches another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: Vec<bool>,
}

impl CollapseState {
    /// Every card starts expanded.
    pub fn for_view(view: &TimelineView) -> Self {
        Self {
            collapsed: vec![false; view.cards.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed.get(index).copied().unwrap_or(false)
    }

    /// Flips one card and returns its new collapsed state. Out-of-range
    /// indexes are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(flag) = self.collapsed.get_mut(index) {
            *flag = !*flag;
            *flag
        } else {
            false
        }
    }
}
