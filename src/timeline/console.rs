//! Terminal renderer: timeline view -> markdown -> termimad.
//!
//! Untrusted fields are neutralized through the escape primitives while the
//! console projection is built, so the askama template only ever
//! interpolates inert text.

use askama::Template;
use termimad::MadSkin;

use super::escape::{code_block, code_span};
use super::{CardVerdict, CollapseState, TimelineView};
use crate::session::SeverityTier;

#[derive(Template)]
#[template(path = "timeline/console.md")]
struct ConsoleTimeline {
    badge_icon: &'static str,
    badge_label: &'static str,
    iteration_label: String,
    cards: Vec<ConsoleCard>,
}

struct ConsoleCard {
    marker: &'static str,
    title: String,
    expanded: bool,
    code_block: String,
    safe: bool,
    has_summary: bool,
    safe_summary: String,
    findings_heading: String,
    vulnerabilities: Vec<ConsoleVulnerability>,
    has_fix: bool,
    fix_block: String,
}

struct ConsoleVulnerability {
    severity_tag: String,
    cwe: String,
    description: String,
    has_line: bool,
    line: u32,
    fix_block: String,
}

fn severity_tag(tier: Option<SeverityTier>, label: &str) -> String {
    match tier {
        // known tiers render as a trusted constant, anything else stays an
        // inert literal with no styling
        Some(tier) => format!("**{}**", tier.as_str().to_ascii_uppercase()),
        None => code_span(label),
    }
}

fn build(view: &TimelineView, collapse: &CollapseState) -> ConsoleTimeline {
    let cards = view
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let collapsed = collapse.is_collapsed(index);

            let (safe, safe_summary, findings_heading, vulnerabilities) = match &card.verdict {
                CardVerdict::Safe { summary } => {
                    let summary = if summary.trim().is_empty() {
                        String::new()
                    } else {
                        code_span(summary)
                    };
                    (true, summary, String::new(), Vec::new())
                }
                CardVerdict::Findings { vulnerabilities } => {
                    let views = vulnerabilities
                        .iter()
                        .map(|vuln| ConsoleVulnerability {
                            severity_tag: severity_tag(vuln.tier, &vuln.severity_label),
                            cwe: code_span(&vuln.cwe_id),
                            description: code_span(&vuln.description),
                            has_line: vuln.line_number.is_some(),
                            line: vuln.line_number.unwrap_or_default(),
                            fix_block: code_block(&vuln.suggested_fix),
                        })
                        .collect::<Vec<ConsoleVulnerability>>();

                    let heading = format!("Detected Vulnerabilities ({})", views.len());
                    (false, String::new(), heading, views)
                }
            };

            ConsoleCard {
                marker: if collapsed { "▸" } else { "▾" },
                title: card.title.clone(),
                expanded: !collapsed,
                code_block: code_block(&card.code_snapshot),
                safe,
                has_summary: !safe_summary.is_empty(),
                safe_summary,
                findings_heading,
                vulnerabilities,
                has_fix: card.fix_applied.is_some(),
                fix_block: card.fix_applied.as_deref().map(code_block).unwrap_or_default(),
            }
        })
        .collect();

    ConsoleTimeline {
        badge_icon: view.badge.icon,
        badge_label: view.badge.label,
        iteration_label: view.iteration_label.clone(),
        cards,
    }
}

pub fn render_markdown(view: &TimelineView, collapse: &CollapseState) -> String {
    build(view, collapse)
        .render()
        .expect("Template rendering failed")
}

/// Prints the timeline, fully replacing whatever was shown before it.
pub fn print(view: &TimelineView, collapse: &CollapseState) {
    let markdown = render_markdown(view, collapse);
    let skin = MadSkin::default();
    skin.print_text(&markdown);
}
