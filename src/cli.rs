//! CLI parsing for mend

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "mend")]
#[command(about = "Client for the self-healing code auditor", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile that selects the audit service endpoint
    #[arg(long, short, default_value = "local", global = true)]
    pub profile: String,

    /// Print debug-level progress information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new mend project
    Init(commands::init::Args),

    /// Submit code for analysis and render the healing timeline
    Audit(commands::audit::Args),

    /// Interactive analyze-and-explore loop
    Session(commands::session::Args),

    /// Render a saved session result
    Show(commands::show::Args),

    /// Check that the audit service is reachable
    Ping(commands::ping::Args),
}
