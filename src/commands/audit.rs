use clap::Args as ClapArgs;
use miette::{Context, IntoDiagnostic};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::client::AuditClient;
use crate::config::{ProfileConfig, RootConfig};
use crate::timeline::{CollapseState, TimelineView, console, html};

#[derive(ClapArgs)]
pub struct Args {
    /// Source file to analyze; use '-' for stdin. Defaults to the project
    /// source from mend.toml.
    pub path: Option<PathBuf>,

    /// Write a self-contained HTML report to this path
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Save the raw session result as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the healed code to this path
    #[arg(long)]
    pub fixed_out: Option<PathBuf>,
}

pub fn run(args: Args, config: &RootConfig, profile: &ProfileConfig) -> miette::Result<()> {
    let code = read_source(&args, config)?;

    let client = AuditClient::new(&profile.resolved_service());
    eprintln!("analyzing with {} ...", client.audit_endpoint());

    let result = client.submit(&code)?;

    let view = TimelineView::from_result(&result);
    let collapse = CollapseState::for_view(&view);
    console::print(&view, &collapse);

    if let Some(path) = &args.json {
        let serialized = serde_json::to_string_pretty(&result).into_diagnostic()?;
        super::write_text_file(path, &serialized)?;
        println!("session result written to {}", path.display());
    }

    if let Some(path) = &args.html {
        super::write_text_file(path, &html::render(&view))?;
        println!("report written to {}", path.display());
    }

    if let Some(path) = &args.fixed_out {
        if result.final_code.trim().is_empty() {
            miette::bail!("the session did not produce healed code to write");
        }
        super::write_text_file(path, &result.final_code)?;
        println!("healed code written to {}", path.display());
    }

    Ok(())
}

fn read_source(args: &Args, config: &RootConfig) -> miette::Result<String> {
    if let Some(path) = &args.path {
        if path == Path::new("-") {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .into_diagnostic()?;
            return Ok(code);
        }

        return read_file(path);
    }

    if let Some(source) = &config.project.source {
        return read_file(source);
    }

    Err(miette::miette!(
        "No source file given. Pass a path, use '-' for stdin, or set project.source in mend.toml"
    ))
}

fn read_file(path: &Path) -> miette::Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .with_context(|| format!("Failed to read source file {}", path.display()))
}
