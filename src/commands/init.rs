use std::path::{Path, PathBuf};

use clap::Args as ClapArgs;
use inquire::{Confirm, Text};
use miette::IntoDiagnostic;

use crate::config::{
    CONFIG_FILE_NAME, LOCAL_SERVICE_URL, ProfileConfig, RootConfig, ServiceConfig, ServiceOption,
};

const SAMPLE_SOURCE: &str = include_str!("../../templates/demo/sample.py");
const SAMPLE_FILE_NAME: &str = "sample.py";

#[derive(ClapArgs)]
pub struct Args {
    /// Use default configuration
    #[arg(short, long)]
    yes: bool,
}

pub fn run(args: Args) -> miette::Result<()> {
    let current_dir = std::env::current_dir().into_diagnostic()?;
    let mut config = default_config(&current_dir);

    if !args.yes {
        config = inquire_config(&config)?;
    }

    apply(&config)
}

fn default_config(dir: &Path) -> RootConfig {
    let mut config = RootConfig::default_for(dir);
    config.project.source = Some(SAMPLE_FILE_NAME.into());
    config
}

fn inquire_config(initial: &RootConfig) -> miette::Result<RootConfig> {
    let name = Text::new("Project name:")
        .with_initial_value(&initial.project.name)
        .prompt()
        .into_diagnostic()?;

    let description = Text::new("Description:")
        .prompt_skippable()
        .into_diagnostic()?;

    let service_url = Text::new("Audit service URL:")
        .with_default(LOCAL_SERVICE_URL)
        .prompt()
        .into_diagnostic()?;

    let mut config = initial.clone();
    config.project.name = name;
    config.project.description = description.filter(|text| !text.trim().is_empty());

    // a non-default URL overrides the built-in local profile
    if service_url != LOCAL_SERVICE_URL {
        config.profiles.insert(
            "local".to_string(),
            ProfileConfig {
                name: "local".to_string(),
                service: ServiceOption::Custom(ServiceConfig {
                    url: service_url,
                    headers: Default::default(),
                }),
            },
        );
    }

    let confirm = Confirm::new("Is this OK?")
        .with_default(true)
        .prompt()
        .into_diagnostic()?;

    if !confirm {
        return Err(miette::miette!("Nothing done"));
    }

    Ok(config)
}

fn apply(config: &RootConfig) -> miette::Result<()> {
    config.save(&PathBuf::from(CONFIG_FILE_NAME))?;
    std::fs::write(SAMPLE_FILE_NAME, SAMPLE_SOURCE).into_diagnostic()?;

    println!("mend project initialized, run `mend audit` to analyze {SAMPLE_FILE_NAME}");
    Ok(())
}
