//! CLI argument parsing

mod common;
mod compute;
mod kubernetes;
mod network;

use clap::{Parser, Subcommand};

use crate::config::defaults;
use crate::error::Result;

pub use common::{DeleteArgs, OutputFormat};
pub use compute::{ComputeAction, CreateInstanceArgs};
pub use kubernetes::{CreateClusterArgs, KubernetesAction};
pub use network::{ConfigureAction, FirewallAction, IpAction, NetworkAction, RegionAction};

/// Sannti Cloud CLI
#[derive(Parser, Debug)]
#[command(name = "sannti")]
#[command(version)]
#[command(about = "Manage Sannti Cloud compute, networking and Kubernetes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (table, json, yaml)
    #[arg(short = 'o', long, global = true, default_value = defaults::OUTPUT)]
    pub output: String,

    /// Region name (overrides the configured default region)
    #[arg(short = 'r', long, global = true)]
    pub region: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Parsed `--output` value
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure credentials and default region
    Configure {
        #[command(subcommand)]
        action: Option<ConfigureAction>,
    },

    /// Print version information
    Version,

    /// Region commands
    Region {
        #[command(subcommand)]
        action: RegionAction,
    },

    /// Compute instance commands
    Compute {
        #[command(subcommand)]
        action: ComputeAction,
    },

    /// Network commands
    Network {
        #[command(subcommand)]
        action: NetworkAction,
    },

    /// Firewall rule commands
    Firewall {
        #[command(subcommand)]
        action: FirewallAction,
    },

    /// Public IP address commands
    Ip {
        #[command(subcommand)]
        action: IpAction,
    },

    /// Kubernetes cluster commands
    #[command(visible_alias = "kubernetes")]
    K8s {
        #[command(subcommand)]
        action: KubernetesAction,
    },
}
