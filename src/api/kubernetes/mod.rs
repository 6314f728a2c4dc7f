//! Kubernetes module

mod api;
mod commands;
mod models;

pub use commands::run_kubernetes_command;
pub use models::{CreateKubernetesRequest, KubernetesCluster, KubernetesVersion};
