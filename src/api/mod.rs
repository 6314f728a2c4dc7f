//! Sannti Cloud API client module
//!
//! Request execution, region resolution and the resource operations built on
//! top of them.

mod client;
mod credentials;
pub mod compute;
pub mod endpoint;
pub mod kubernetes;
pub mod network;
pub mod regions;

pub use client::SanntiClient;
pub use compute::{run_compute_command, ComputeOffering, CreateInstanceRequest, Instance, Template};
pub use credentials::{Credentials, CredentialsResolver};
pub use endpoint::{Endpoint, Envelope, RegionScope};
pub use kubernetes::{
    run_kubernetes_command, CreateKubernetesRequest, KubernetesCluster, KubernetesVersion,
};
pub use network::{
    run_firewall_command, run_ip_command, run_network_command, FirewallRule, IpAddress, Network,
};
pub use regions::{run_region_command, RegionCache, Zone};
