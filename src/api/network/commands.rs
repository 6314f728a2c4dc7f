//! Network, firewall and public IP command handlers

use crate::api::SanntiClient;
use crate::cli::{Cli, FirewallAction, IpAction, NetworkAction};
use crate::error::Result;
use crate::output::network::{
    firewall_rule_row, ip_address_row, network_row, FIREWALL_RULE_HEADERS, IP_ADDRESS_HEADERS,
    NETWORK_HEADERS,
};
use crate::output::{self, Items};
use crate::ui::{print_info, with_spinner};

/// Run a `network` subcommand
pub async fn run_network_command(
    client: &SanntiClient,
    cli: &Cli,
    action: &NetworkAction,
) -> Result<()> {
    let format = cli.output_format()?;
    let region = client.effective_region(cli.region.as_deref());

    match action {
        NetworkAction::List => {
            let networks = with_spinner(
                "Fetching networks...",
                cli.batch,
                client.list_networks(region.as_deref()),
            )
            .await
            .map_err(|e| e.context("failed to list networks"))?;

            if networks.is_empty() {
                print_info("No networks found");
                return Ok(());
            }

            output::print(Items::Many(&networks), format, NETWORK_HEADERS, network_row)
        }
    }
}

/// Run a `firewall` subcommand
pub async fn run_firewall_command(
    client: &SanntiClient,
    cli: &Cli,
    action: &FirewallAction,
) -> Result<()> {
    let format = cli.output_format()?;
    let region = client.effective_region(cli.region.as_deref());

    match action {
        FirewallAction::List => {
            let rules = with_spinner(
                "Fetching firewall rules...",
                cli.batch,
                client.list_firewall_rules(region.as_deref()),
            )
            .await
            .map_err(|e| e.context("failed to list firewall rules"))?;

            if rules.is_empty() {
                print_info("No firewall rules found");
                return Ok(());
            }

            output::print(
                Items::Many(&rules),
                format,
                FIREWALL_RULE_HEADERS,
                firewall_rule_row,
            )
        }
    }
}

/// Run an `ip` subcommand
pub async fn run_ip_command(client: &SanntiClient, cli: &Cli, action: &IpAction) -> Result<()> {
    let format = cli.output_format()?;
    let region = client.effective_region(cli.region.as_deref());

    match action {
        IpAction::List => {
            let addresses = with_spinner(
                "Fetching IP addresses...",
                cli.batch,
                client.list_ip_addresses(region.as_deref()),
            )
            .await
            .map_err(|e| e.context("failed to list IP addresses"))?;

            if addresses.is_empty() {
                print_info("No IP addresses found");
                return Ok(());
            }

            output::print(
                Items::Many(&addresses),
                format,
                IP_ADDRESS_HEADERS,
                ip_address_row,
            )
        }
    }
}
