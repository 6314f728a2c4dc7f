//! Networking data models

use serde::{Deserialize, Serialize};

/// Virtual network
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Network {
    pub uuid: String,
    pub name: String,
    pub display_text: String,
    pub zone_name: String,
    pub state: String,
    pub cidr: String,
    pub gateway: String,
    #[serde(rename = "type")]
    pub network_type: String,
}

/// Public IP address
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IpAddress {
    pub uuid: String,
    pub public_ip_address: String,
    pub state: String,
    pub zone_name: String,
    pub is_sourcenat: bool,
}

/// Firewall rule
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FirewallRule {
    pub uuid: String,
    pub protocol: String,
    pub start_port: String,
    pub end_port: String,
    pub cidr_list: String,
    pub status: String,
}

impl FirewallRule {
    /// `22` for a single port, `8000-8080` for a range
    pub fn port_range(&self) -> String {
        if self.start_port == self.end_port {
            self.start_port.clone()
        } else {
            format!("{}-{}", self.start_port, self.end_port)
        }
    }
}
