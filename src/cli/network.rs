//! Region and networking command definitions

use clap::Subcommand;

/// Region subcommands
#[derive(Subcommand, Debug)]
pub enum RegionAction {
    /// List all active regions
    List,
}

/// Network subcommands
#[derive(Subcommand, Debug)]
pub enum NetworkAction {
    /// List virtual networks
    List,
}

/// Firewall subcommands
#[derive(Subcommand, Debug)]
pub enum FirewallAction {
    /// List firewall rules
    List,
}

/// Public IP subcommands
#[derive(Subcommand, Debug)]
pub enum IpAction {
    /// List public IP addresses
    List,
}

/// Configure subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigureAction {
    /// Show the effective settings (keys masked)
    Show,
}
