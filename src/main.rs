//! Sannti CLI - Main entry point

use clap::Parser;
use log::{debug, info};

use sannti::config::api;
use sannti::ui::print_error;
use sannti::{
    run_compute_command, run_configure_command, run_firewall_command, run_ip_command,
    run_kubernetes_command, run_network_command, run_region_command, Cli, Command,
    CredentialsResolver, Result, SanntiClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting sannti v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: output={}, region={:?}, batch={}",
        cli.output, cli.region, cli.batch
    );

    if let Err(e) = run(&cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Reject a bad -o before anything touches the network
    cli.output_format()?;

    match &cli.command {
        Command::Configure { action } => run_configure_command(action.as_ref(), cli.batch),
        Command::Version => {
            print_version();
            Ok(())
        }
        Command::Region { action } => run_region_command(&connect()?, cli, action).await,
        Command::Compute { action } => run_compute_command(&connect()?, cli, action).await,
        Command::Network { action } => run_network_command(&connect()?, cli, action).await,
        Command::Firewall { action } => run_firewall_command(&connect()?, cli, action).await,
        Command::Ip { action } => run_ip_command(&connect()?, cli, action).await,
        Command::K8s { action } => run_kubernetes_command(&connect()?, cli, action).await,
    }
}

/// Resolve credentials and build the API client
fn connect() -> Result<SanntiClient> {
    let credentials = CredentialsResolver::new().resolve()?;
    let base_url =
        std::env::var(api::BASE_URL_ENV_VAR).unwrap_or_else(|_| api::BASE_URL.to_string());
    debug!("Using API endpoint {}", base_url);
    SanntiClient::with_base_url(credentials, base_url)
}

fn print_version() {
    println!("Sannti CLI v{}", env!("CARGO_PKG_VERSION"));
    println!("Built for Sannti Cloud - Beyond Cloud. Without Barriers.");
}
