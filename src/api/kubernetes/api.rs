//! Kubernetes API operations

use log::debug;

use super::models::{CreateKubernetesRequest, KubernetesCluster, KubernetesVersion};
use crate::api::client::build_path;
use crate::api::endpoint::endpoints;
use crate::api::SanntiClient;
use crate::config::api;
use crate::error::{Result, SanntiError};

impl SanntiClient {
    /// List Kubernetes versions available in a region; region is mandatory
    pub async fn list_kubernetes_versions(
        &self,
        region: Option<&str>,
    ) -> Result<Vec<KubernetesVersion>> {
        self.fetch_list(&endpoints::KUBERNETES_VERSIONS, region, &[])
            .await
    }

    /// List every Kubernetes cluster of the account
    pub async fn list_kubernetes_clusters(&self) -> Result<Vec<KubernetesCluster>> {
        self.fetch_list(&endpoints::KUBERNETES_CLUSTERS, None, &[])
            .await
    }

    /// Get a single cluster by UUID
    pub async fn get_kubernetes_cluster(&self, uuid: &str) -> Result<KubernetesCluster> {
        self.fetch_one(
            &endpoints::KUBERNETES_CLUSTERS,
            None,
            "clusterUuid",
            uuid,
            "kubernetes cluster",
        )
        .await
    }

    /// Create a cluster in `request.region`
    pub async fn create_kubernetes_cluster(
        &self,
        mut request: CreateKubernetesRequest,
    ) -> Result<KubernetesCluster> {
        let region = request.region.trim();
        if region.is_empty() {
            return Err(SanntiError::MissingParameter(
                "region is required for creating a kubernetes cluster. Use --region or set a default with 'sannti configure'"
                    .to_string(),
            ));
        }

        request.zone_uuid = self.resolve_zone_id(region).await?;
        debug!(
            "Creating kubernetes cluster '{}' in zone {}",
            request.name, request.zone_uuid
        );

        let body = self.post(api::KUBERNETES_CREATE, &request).await?;
        serde_json::from_slice(&body).map_err(|e| SanntiError::Decoding {
            context: "create kubernetes cluster response".to_string(),
            message: e.to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }

    /// Destroy a cluster
    pub async fn delete_kubernetes_cluster(&self, uuid: &str) -> Result<()> {
        let path = build_path(api::KUBERNETES_DESTROY, &[("clusterUuid", uuid)]);
        self.delete(&path).await?;
        Ok(())
    }
}
