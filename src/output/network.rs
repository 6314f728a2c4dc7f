//! Network, IP address and firewall rule output projections

use super::yes_no;
use crate::api::{FirewallRule, IpAddress, Network};

pub const NETWORK_HEADERS: &[&str] = &["UUID", "NAME", "STATE", "REGION", "CIDR"];

pub const IP_ADDRESS_HEADERS: &[&str] = &["UUID", "IP ADDRESS", "STATE", "REGION", "SOURCE NAT"];

pub const FIREWALL_RULE_HEADERS: &[&str] = &["UUID", "PROTOCOL", "PORT RANGE", "CIDR", "STATE"];

pub fn network_row(network: &Network) -> Vec<String> {
    vec![
        network.uuid.clone(),
        network.name.clone(),
        network.state.clone(),
        network.zone_name.clone(),
        network.cidr.clone(),
    ]
}

pub fn ip_address_row(ip: &IpAddress) -> Vec<String> {
    vec![
        ip.uuid.clone(),
        ip.public_ip_address.clone(),
        ip.state.clone(),
        ip.zone_name.clone(),
        yes_no(ip.is_sourcenat),
    ]
}

pub fn firewall_rule_row(rule: &FirewallRule) -> Vec<String> {
    vec![
        rule.uuid.clone(),
        rule.protocol.clone(),
        rule.port_range(),
        rule.cidr_list.clone(),
        rule.status.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firewall_rule_row_range() {
        let rule = FirewallRule {
            uuid: "fw-1".to_string(),
            protocol: "tcp".to_string(),
            start_port: "8000".to_string(),
            end_port: "8080".to_string(),
            cidr_list: "10.0.0.0/8".to_string(),
            status: "Active".to_string(),
        };
        assert_eq!(
            firewall_rule_row(&rule),
            vec!["fw-1", "tcp", "8000-8080", "10.0.0.0/8", "Active"]
        );
    }

    #[test]
    fn test_ip_address_row_source_nat() {
        let ip = IpAddress {
            uuid: "ip-1".to_string(),
            public_ip_address: "203.0.113.7".to_string(),
            state: "Allocated".to_string(),
            zone_name: "east".to_string(),
            is_sourcenat: false,
        };
        let row = ip_address_row(&ip);
        assert_eq!(row[4], "no");
        assert_eq!(row.len(), IP_ADDRESS_HEADERS.len());
    }

    #[test]
    fn test_network_row_width() {
        assert_eq!(network_row(&Network::default()).len(), NETWORK_HEADERS.len());
    }
}
