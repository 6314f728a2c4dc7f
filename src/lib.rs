//! Sannti - command-line client for the Sannti Cloud REST API
//!
//! Manage compute instances, networking and Kubernetes clusters from the
//! terminal.
//!
//! # Features
//!
//! - Region names resolved to zone identifiers through a shared cache
//! - Table, JSON and YAML output for every listing
//! - Credentials from `~/.sannti/config.yaml` or environment variables
//!
//! # Example
//!
//! ```bash
//! # Store credentials and a default region
//! sannti configure
//!
//! # List active regions
//! sannti region list
//!
//! # List instances in a region as JSON
//! sannti compute list -r br-southeast-1 -o json
//!
//! # Delete a cluster without prompting
//! sannti k8s delete <UUID> --yes
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod settings;
pub mod ui;

pub use api::{
    run_compute_command, run_firewall_command, run_ip_command, run_kubernetes_command,
    run_network_command, run_region_command, Credentials, CredentialsResolver, RegionCache,
    SanntiClient, Zone,
};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{Result, SanntiError};
pub use output::{render, Items};
pub use settings::{run_configure_command, Settings, SettingsStore};
