use clap::Args as ClapArgs;

use crate::client::AuditClient;
use crate::config::{ProfileConfig, RootConfig};

#[derive(ClapArgs)]
pub struct Args {}

pub fn run(_args: Args, _config: &RootConfig, profile: &ProfileConfig) -> miette::Result<()> {
    let client = AuditClient::new(&profile.resolved_service());

    let health = client.health()?;

    let name = if health.service.is_empty() {
        "audit service"
    } else {
        health.service.as_str()
    };

    println!(
        "{} at {} is {}",
        name,
        client.health_endpoint(),
        health.status
    );

    Ok(())
}
