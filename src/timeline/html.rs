//! HTML report renderer: a self-contained document with one collapsible
//! `<details>` card per iteration, every card initially open. Askama's
//! autoescape on the `.html` template keeps every untrusted field inert.

use askama::Template;

use super::{BadgeVariant, CardVerdict, TimelineView};

#[derive(Template)]
#[template(path = "timeline/report.html")]
struct HtmlReport {
    generated_at: String,
    badge_class: &'static str,
    badge_icon: &'static str,
    badge_label: &'static str,
    iteration_label: String,
    cards: Vec<HtmlCard>,
}

struct HtmlCard {
    title: String,
    code: String,
    safe: bool,
    has_summary: bool,
    summary: String,
    findings_heading: String,
    vulnerabilities: Vec<HtmlVulnerability>,
    has_fix: bool,
    fix: String,
}

struct HtmlVulnerability {
    severity_class: &'static str,
    severity: String,
    cwe: String,
    description: String,
    has_line: bool,
    line: u32,
    fix: String,
}

fn badge_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Secure => "safe",
        BadgeVariant::Healed => "healed",
        BadgeVariant::Warning => "warning",
    }
}

fn build(view: &TimelineView) -> HtmlReport {
    let cards = view
        .cards
        .iter()
        .map(|card| {
            let (safe, summary, findings_heading, vulnerabilities) = match &card.verdict {
                CardVerdict::Safe { summary } => {
                    (true, summary.clone(), String::new(), Vec::new())
                }
                CardVerdict::Findings { vulnerabilities } => {
                    let views = vulnerabilities
                        .iter()
                        .map(|vuln| HtmlVulnerability {
                            severity_class: vuln
                                .tier
                                .map(|tier| tier.as_str())
                                .unwrap_or_default(),
                            severity: vuln.severity_label.clone(),
                            cwe: vuln.cwe_id.clone(),
                            description: vuln.description.clone(),
                            has_line: vuln.line_number.is_some(),
                            line: vuln.line_number.unwrap_or_default(),
                            fix: vuln.suggested_fix.clone(),
                        })
                        .collect::<Vec<HtmlVulnerability>>();

                    let heading = format!("Detected Vulnerabilities ({})", views.len());
                    (false, String::new(), heading, views)
                }
            };

            HtmlCard {
                title: card.title.clone(),
                code: card.code_snapshot.clone(),
                safe,
                has_summary: !summary.trim().is_empty(),
                summary,
                findings_heading,
                vulnerabilities,
                has_fix: card.fix_applied.is_some(),
                fix: card.fix_applied.clone().unwrap_or_default(),
            }
        })
        .collect();

    HtmlReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        badge_class: badge_class(view.badge.variant),
        badge_icon: view.badge.icon,
        badge_label: view.badge.label,
        iteration_label: view.iteration_label.clone(),
        cards,
    }
}

pub fn render(view: &TimelineView) -> String {
    build(view)
        .render()
        .expect("Template rendering failed")
}
