//! Networking module: networks, public IPs and firewall rules

mod api;
mod commands;
mod models;

pub use commands::{run_firewall_command, run_ip_command, run_network_command};
pub use models::{FirewallRule, IpAddress, Network};
