use clap::Args as ClapArgs;
use inquire::{Editor, Select};
use miette::IntoDiagnostic;

use crate::client::AuditClient;
use crate::config::{ProfileConfig, RootConfig};
use crate::timeline::{CollapseState, TimelineView, console};

// Demonstration snippet pre-populating the editor on first load.
const SAMPLE_CODE: &str = include_str!("../../templates/demo/sample.py");

#[derive(ClapArgs)]
pub struct Args {}

/// The single currently displayed session, replaced wholesale on each
/// successful submission.
struct DisplayedSession {
    view: TimelineView,
    collapse: CollapseState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Edit,
    Analyze,
    Toggle,
    Clear,
    Quit,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Edit => write!(f, "Edit code"),
            Action::Analyze => write!(f, "Analyze"),
            Action::Toggle => write!(f, "Toggle an iteration card"),
            Action::Clear => write!(f, "Clear"),
            Action::Quit => write!(f, "Quit"),
        }
    }
}

pub fn run(_args: Args, _config: &RootConfig, profile: &ProfileConfig) -> miette::Result<()> {
    let client = AuditClient::new(&profile.resolved_service());

    let mut input = SAMPLE_CODE.to_string();
    let mut displayed: Option<DisplayedSession> = None;

    loop {
        let action = Select::new(
            "mend session",
            vec![
                Action::Edit,
                Action::Analyze,
                Action::Toggle,
                Action::Clear,
                Action::Quit,
            ],
        )
        .prompt()
        .into_diagnostic()?;

        match action {
            Action::Edit => {
                input = Editor::new("Edit the code to analyze")
                    .with_predefined_text(&input)
                    .prompt()
                    .into_diagnostic()?;
            }
            Action::Analyze => {
                eprintln!("analyzing with {} ...", client.audit_endpoint());

                match client.submit(&input) {
                    Ok(result) => {
                        let view = TimelineView::from_result(&result);
                        let collapse = CollapseState::for_view(&view);
                        console::print(&view, &collapse);
                        displayed = Some(DisplayedSession { view, collapse });
                    }
                    // input and previously rendered results stay untouched
                    Err(error) => eprintln!("{:?}", miette::Report::new(error)),
                }
            }
            Action::Toggle => match displayed.as_mut() {
                Some(session) if !session.view.cards.is_empty() => {
                    let titles: Vec<String> = session
                        .view
                        .cards
                        .iter()
                        .map(|card| card.title.clone())
                        .collect();

                    let choice = Select::new("Toggle which card?", titles)
                        .raw_prompt()
                        .into_diagnostic()?;

                    session.collapse.toggle(choice.index);
                    console::print(&session.view, &session.collapse);
                }
                _ => println!("nothing to toggle yet, analyze some code first"),
            },
            Action::Clear => {
                input.clear();
                displayed = None;
                println!("input cleared");
            }
            Action::Quit => break,
        }
    }

    Ok(())
}
