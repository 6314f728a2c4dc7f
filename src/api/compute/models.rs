//! Compute data models

use serde::{Deserialize, Serialize};

/// Compute instance (virtual machine)
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    pub uuid: String,
    pub name: String,
    pub display_name: String,
    pub state: String,
    pub zone_name: String,
    pub template_name: String,
    pub service_offering_name: String,
    pub created: String,
    /// Memory in MB
    pub memory: String,
    pub cpu_number: i64,
    pub cpu_speed: i64,
    pub public_ip_address: String,
    pub cpu_core: String,
    pub instance_private_ip: String,
    pub network_name: String,
    /// Root volume size in bytes
    pub volume_size: String,
    pub status: String,
}

/// Compute offering: a VM size
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputeOffering {
    pub uuid: String,
    pub name: String,
    pub display_text: String,
    pub number_of_cores: String,
    pub clock_speed: String,
    pub memory: String,
    pub storage_type: String,
    pub is_active: bool,
}

/// OS image an instance boots from
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub os_category_name: String,
    pub zone_name: String,
    /// Ready for use
    pub is_active: bool,
}

/// Payload for instance creation
///
/// `region` is resolved to `zone_uuid` by the client and never sent.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    pub name: String,
    pub template_uuid: String,
    pub compute_offering_uuid: String,
    pub network_uuid: String,
    pub zone_uuid: String,
    #[serde(skip)]
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_name: Option<String>,
    #[serde(rename = "securitygroupName", skip_serializing_if = "Option::is_none")]
    pub security_group_name: Option<String>,
}
