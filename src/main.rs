use clap::Parser;
use miette::Result;

use mend::cli::{Cli, Commands};
use mend::commands;
use mend::config::{ProfileConfig, RootConfig};

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(profile_name: &str) -> Result<(RootConfig, ProfileConfig)> {
    let config = RootConfig::load_or_default()?;
    let profile = config.resolve_profile(profile_name)?;

    Ok((config, profile))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Audit(args) => {
            let (config, profile) = load(&cli.profile)?;
            commands::audit::run(args, &config, &profile)
        }
        Commands::Session(args) => {
            let (config, profile) = load(&cli.profile)?;
            commands::session::run(args, &config, &profile)
        }
        Commands::Show(args) => {
            let (config, profile) = load(&cli.profile)?;
            commands::show::run(args, &config, &profile)
        }
        Commands::Ping(args) => {
            let (config, profile) = load(&cli.profile)?;
            commands::ping::run(args, &config, &profile)
        }
    }
}
