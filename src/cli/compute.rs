//! Compute command definitions and arguments

use clap::{Parser, Subcommand};

use super::common::DeleteArgs;

/// Compute subcommands
#[derive(Subcommand, Debug)]
pub enum ComputeAction {
    /// List compute instances
    List,

    /// Get compute instance details
    Get {
        /// Instance UUID
        uuid: String,
    },

    /// Create a compute instance
    Create(CreateInstanceArgs),

    /// Start a stopped compute instance
    Start {
        /// Instance UUID
        uuid: String,
    },

    /// Stop a running compute instance
    Stop {
        /// Instance UUID
        uuid: String,
    },

    /// Delete a compute instance permanently
    Delete(DeleteArgs),

    /// List available OS images
    #[command(visible_alias = "templates")]
    Images,

    /// List available compute sizes
    #[command(visible_alias = "offerings", visible_alias = "flavors")]
    Sizes,
}

/// Arguments for 'compute create'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        sannti compute create --name web-01 --image <TEMPLATE_UUID> --size <OFFERING_UUID> --network <NETWORK_UUID>\n  \
        sannti compute create --name web-01 --image <T> --size <O> --network <N> --ssh-key deploy -r br-southeast-1")]
pub struct CreateInstanceArgs {
    /// Instance name
    #[arg(long)]
    pub name: String,

    /// Image (template) UUID
    #[arg(long)]
    pub image: String,

    /// Compute size (offering) UUID
    #[arg(long)]
    pub size: String,

    /// Network UUID
    #[arg(long)]
    pub network: String,

    /// SSH key name
    #[arg(long)]
    pub ssh_key: Option<String>,

    /// Root disk size in GB
    #[arg(long)]
    pub disk_size: Option<i64>,

    /// Security group name
    #[arg(long)]
    pub security_group: Option<String>,
}
