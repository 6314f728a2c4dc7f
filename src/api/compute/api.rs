//! Compute API operations

use log::debug;

use super::models::{ComputeOffering, CreateInstanceRequest, Instance, Template};
use crate::api::client::build_path;
use crate::api::endpoint::endpoints;
use crate::api::SanntiClient;
use crate::config::api;
use crate::error::{Result, SanntiError};

impl SanntiClient {
    /// List instances, filtered by region when one is given
    pub async fn list_instances(&self, region: Option<&str>) -> Result<Vec<Instance>> {
        self.fetch_list(&endpoints::INSTANCES, region, &[]).await
    }

    /// Get a single instance by UUID
    pub async fn get_instance(&self, uuid: &str, region: Option<&str>) -> Result<Instance> {
        self.fetch_one(&endpoints::INSTANCES, region, "vmUuid", uuid, "instance")
            .await
    }

    /// Create an instance in `request.region`
    ///
    /// Returns the first instance echoed back by the API.
    pub async fn create_instance(&self, mut request: CreateInstanceRequest) -> Result<Instance> {
        let region = request.region.trim();
        if region.is_empty() {
            return Err(SanntiError::MissingParameter(
                "region is required for creating an instance. Use --region or set a default with 'sannti configure'"
                    .to_string(),
            ));
        }

        request.zone_uuid = self.resolve_zone_id(region).await?;
        debug!(
            "Creating instance '{}' in zone {}",
            request.name, request.zone_uuid
        );

        let body = self.post(api::INSTANCE_CREATE, &request).await?;
        let instances: Vec<Instance> = endpoints::INSTANCES.decode(&body)?;

        instances
            .into_iter()
            .next()
            .ok_or_else(|| SanntiError::Decoding {
                context: "create instance response".to_string(),
                message: "response contained no instance".to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            })
    }

    /// Ask the API to start an instance
    pub async fn start_instance(&self, uuid: &str) -> Result<()> {
        let path = build_path(api::INSTANCE_START, &[("uuid", uuid)]);
        self.get(&path).await?;
        Ok(())
    }

    /// Ask the API to stop an instance (graceful)
    pub async fn stop_instance(&self, uuid: &str) -> Result<()> {
        let path = build_path(api::INSTANCE_STOP, &[("uuid", uuid), ("forceStop", "false")]);
        self.get(&path).await?;
        Ok(())
    }

    /// Destroy and expunge an instance
    pub async fn delete_instance(&self, uuid: &str) -> Result<()> {
        let path = build_path(api::INSTANCE_DESTROY, &[("uuid", uuid), ("expunge", "true")]);
        self.get(&path).await?;
        Ok(())
    }

    /// List compute offerings (VM sizes); region is mandatory
    pub async fn list_compute_offerings(&self, region: Option<&str>) -> Result<Vec<ComputeOffering>> {
        self.fetch_list(&endpoints::COMPUTE_OFFERINGS, region, &[])
            .await
    }

    /// List OS templates (images); region is mandatory
    pub async fn list_templates(&self, region: Option<&str>) -> Result<Vec<Template>> {
        self.fetch_list(&endpoints::TEMPLATES, region, &[]).await
    }
}
