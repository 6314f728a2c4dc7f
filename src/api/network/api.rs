//! Networking API operations

use super::models::{FirewallRule, IpAddress, Network};
use crate::api::endpoint::endpoints;
use crate::api::SanntiClient;
use crate::error::Result;

impl SanntiClient {
    /// List networks, filtered by region when one is given
    pub async fn list_networks(&self, region: Option<&str>) -> Result<Vec<Network>> {
        self.fetch_list(&endpoints::NETWORKS, region, &[]).await
    }

    /// List public IP addresses; region is mandatory
    pub async fn list_ip_addresses(&self, region: Option<&str>) -> Result<Vec<IpAddress>> {
        self.fetch_list(&endpoints::IP_ADDRESSES, region, &[]).await
    }

    /// List firewall rules, filtered by region when one is given
    pub async fn list_firewall_rules(&self, region: Option<&str>) -> Result<Vec<FirewallRule>> {
        self.fetch_list(&endpoints::FIREWALL_RULES, region, &[])
            .await
    }
}
