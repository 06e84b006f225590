use clap::Args as ClapArgs;
use miette::{Context, IntoDiagnostic};
use std::path::PathBuf;

use crate::config::{ProfileConfig, RootConfig};
use crate::session::SessionResult;
use crate::timeline::{CollapseState, TimelineView, console, html};

#[derive(ClapArgs)]
pub struct Args {
    /// Saved session-result JSON file
    pub path: PathBuf,

    /// Write a self-contained HTML report to this path
    #[arg(long)]
    pub html: Option<PathBuf>,
}

pub fn run(args: Args, _config: &RootConfig, _profile: &ProfileConfig) -> miette::Result<()> {
    let content = std::fs::read_to_string(&args.path)
        .into_diagnostic()
        .with_context(|| format!("Failed to read session result {}", args.path.display()))?;

    let result: SessionResult = serde_json::from_str(&content)
        .into_diagnostic()
        .context("File is not a valid session result")?;

    let view = TimelineView::from_result(&result);
    let collapse = CollapseState::for_view(&view);
    console::print(&view, &collapse);

    if let Some(path) = &args.html {
        super::write_text_file(path, &html::render(&view))?;
        println!("report written to {}", path.display());
    }

    Ok(())
}
