//! Kubernetes data models

use serde::{Deserialize, Serialize};

/// Kubernetes version offered for new clusters
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesVersion {
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub min_cpu_number: i64,
    /// Minimum node memory in MB
    pub min_memory: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesCluster {
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub state: String,
    pub zone_name: String,
    /// Worker node count
    pub size: i64,
    pub control_nodes: i64,
    pub kubernetes_version: String,
}

/// Payload for cluster creation
///
/// `region` is resolved to `zone_uuid` by the client and never sent.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateKubernetesRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub zone_uuid: String,
    #[serde(skip)]
    pub region: String,
    #[serde(rename = "kubernetesSupportedVersionUuid")]
    pub kubernetes_version_uuid: String,
    pub compute_offering_uuid: String,
    #[serde(rename = "transNetworkUuid")]
    pub network_uuid: String,
    pub size: i64,
    pub control_nodes: i64,
    pub ha_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_root_disk_size: Option<i64>,
}
