//! Kubernetes output projections

use crate::api::{KubernetesCluster, KubernetesVersion};

pub const VERSION_HEADERS: &[&str] = &["UUID", "VERSION", "MIN CPU", "MIN MEMORY (MB)"];

pub const CLUSTER_HEADERS: &[&str] = &[
    "UUID",
    "NAME",
    "STATE",
    "REGION",
    "VERSION",
    "SIZE",
    "CONTROL NODES",
];

pub fn version_row(version: &KubernetesVersion) -> Vec<String> {
    vec![
        version.uuid.clone(),
        version.name.clone(),
        version.min_cpu_number.to_string(),
        version.min_memory.to_string(),
    ]
}

pub fn cluster_row(cluster: &KubernetesCluster) -> Vec<String> {
    vec![
        cluster.uuid.clone(),
        cluster.name.clone(),
        cluster.state.clone(),
        cluster.zone_name.clone(),
        cluster.kubernetes_version.clone(),
        cluster.size.to_string(),
        cluster.control_nodes.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_row() {
        let version = KubernetesVersion {
            uuid: "v-1".to_string(),
            name: "1.28.4".to_string(),
            min_cpu_number: 2,
            min_memory: 2048,
            ..Default::default()
        };
        assert_eq!(version_row(&version), vec!["v-1", "1.28.4", "2", "2048"]);
    }

    #[test]
    fn test_cluster_row() {
        let cluster = KubernetesCluster {
            uuid: "k-1".to_string(),
            name: "prod".to_string(),
            state: "Running".to_string(),
            zone_name: "east".to_string(),
            size: 3,
            control_nodes: 1,
            kubernetes_version: "1.28.4".to_string(),
            ..Default::default()
        };
        assert_eq!(
            cluster_row(&cluster),
            vec!["k-1", "prod", "Running", "east", "1.28.4", "3", "1"]
        );
    }
}
