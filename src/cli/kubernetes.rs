//! Kubernetes command definitions and arguments

use clap::{Parser, Subcommand};

use super::common::DeleteArgs;

/// Kubernetes subcommands
#[derive(Subcommand, Debug)]
pub enum KubernetesAction {
    /// List available Kubernetes versions
    Versions,

    /// List Kubernetes clusters
    List,

    /// Get Kubernetes cluster details
    Get {
        /// Cluster UUID
        uuid: String,
    },

    /// Create a Kubernetes cluster
    Create(CreateClusterArgs),

    /// Delete a Kubernetes cluster
    Delete(DeleteArgs),
}

/// Arguments for 'k8s create'
#[derive(Parser, Debug)]
pub struct CreateClusterArgs {
    /// Cluster name
    #[arg(long)]
    pub name: String,

    /// Kubernetes version UUID (see 'sannti k8s versions')
    #[arg(long = "version")]
    pub kubernetes_version: String,

    /// Node compute size (offering) UUID
    #[arg(long)]
    pub size: String,

    /// Network UUID
    #[arg(long)]
    pub network: String,

    /// Worker node count
    #[arg(long, default_value_t = 1)]
    pub nodes: i64,

    /// Control plane node count
    #[arg(long, default_value_t = 1)]
    pub control_nodes: i64,

    /// Enable high availability
    #[arg(long, default_value_t = false)]
    pub ha: bool,

    /// SSH key name
    #[arg(long)]
    pub ssh_key: Option<String>,

    /// Cluster description
    #[arg(long)]
    pub description: Option<String>,

    /// Node root disk size in GB
    #[arg(long)]
    pub disk_size: Option<i64>,
}
