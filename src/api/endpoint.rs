//! List endpoint descriptors and the generic list/get operations built on them

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::client::{build_path, SanntiClient};
use crate::config::api;
use crate::error::{Result, SanntiError};

/// Where the records sit in a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{"<key>": [ ... ]}`
    Keyed(&'static str),
    /// `[ ... ]`
    BareArray,
}

/// Whether a list endpoint needs a zone identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionScope {
    /// Never takes a zone
    Unscoped,
    /// Filters by zone when a region is given, lists everything otherwise
    Optional,
    /// Refuses to run without a region
    Mandatory,
}

/// Declarative description of one list endpoint
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: Method,
    pub envelope: Envelope,
    pub region: RegionScope,
    /// Plural resource name used in messages ("instances")
    pub label: &'static str,
}

impl Endpoint {
    /// Decode a response body into records according to the envelope
    ///
    /// A keyed envelope whose key is missing or null is an empty list.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<Vec<T>> {
        let decoding = |message: String| SanntiError::Decoding {
            context: format!("{} response", self.label),
            message,
            body: String::from_utf8_lossy(body).into_owned(),
        };

        match self.envelope {
            Envelope::BareArray => {
                serde_json::from_slice(body).map_err(|e| decoding(e.to_string()))
            }
            Envelope::Keyed(key) => {
                let mut value: Value =
                    serde_json::from_slice(body).map_err(|e| decoding(e.to_string()))?;

                let object = value
                    .as_object_mut()
                    .ok_or_else(|| decoding(format!("expected a JSON object with key '{}'", key)))?;

                match object.remove(key) {
                    None | Some(Value::Null) => Ok(Vec::new()),
                    Some(list) => serde_json::from_value(list).map_err(|e| decoding(e.to_string())),
                }
            }
        }
    }
}

/// Endpoint table for every list operation
pub mod endpoints {
    use super::*;

    pub const ZONES: Endpoint = Endpoint {
        path: api::ZONE_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listZoneResponse"),
        region: RegionScope::Unscoped,
        label: "zones",
    };

    pub const INSTANCES: Endpoint = Endpoint {
        path: api::INSTANCE_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listInstanceResponse"),
        region: RegionScope::Optional,
        label: "instances",
    };

    pub const COMPUTE_OFFERINGS: Endpoint = Endpoint {
        path: api::COMPUTE_OFFERING_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listComputeOfferingResponse"),
        region: RegionScope::Mandatory,
        label: "compute offerings",
    };

    pub const TEMPLATES: Endpoint = Endpoint {
        path: api::TEMPLATE_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listTemplateResponse"),
        region: RegionScope::Mandatory,
        label: "templates",
    };

    pub const NETWORKS: Endpoint = Endpoint {
        path: api::NETWORK_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listNetworkResponse"),
        region: RegionScope::Optional,
        label: "networks",
    };

    pub const IP_ADDRESSES: Endpoint = Endpoint {
        path: api::IP_ADDRESS_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listIpAddressResponse"),
        region: RegionScope::Mandatory,
        label: "IP addresses",
    };

    pub const FIREWALL_RULES: Endpoint = Endpoint {
        path: api::FIREWALL_RULE_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listFirewallRuleResponse"),
        region: RegionScope::Optional,
        label: "firewall rules",
    };

    pub const KUBERNETES_VERSIONS: Endpoint = Endpoint {
        path: api::KUBERNETES_VERSION_LIST,
        method: Method::GET,
        envelope: Envelope::Keyed("listKubernetesVersion"),
        region: RegionScope::Mandatory,
        label: "kubernetes versions",
    };

    pub const KUBERNETES_CLUSTERS: Endpoint = Endpoint {
        path: api::KUBERNETES_CLUSTER_LIST,
        method: Method::GET,
        envelope: Envelope::BareArray,
        region: RegionScope::Unscoped,
        label: "kubernetes clusters",
    };
}

impl SanntiClient {
    /// Run a list endpoint, resolving the region to a zone identifier first
    ///
    /// An empty region counts as absent. Filters are appended to the query
    /// before the zone parameter.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        region: Option<&str>,
        filters: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let region = region.map(str::trim).filter(|r| !r.is_empty());

        let zone_id = match (endpoint.region, region) {
            (RegionScope::Unscoped, _) => None,
            (RegionScope::Mandatory, None) => {
                return Err(SanntiError::MissingParameter(format!(
                    "region is required for listing {}. Use --region or set a default with 'sannti configure'",
                    endpoint.label
                )));
            }
            (RegionScope::Optional, None) => None,
            (_, Some(name)) => Some(self.resolve_zone_id(name).await?),
        };

        let mut query: Vec<(&str, &str)> = filters.to_vec();
        if let Some(zone_id) = zone_id.as_deref() {
            query.push((api::ZONE_PARAM, zone_id));
        }

        let path = build_path(endpoint.path, &query);
        let body = self
            .execute::<()>(endpoint.method.clone(), &path, None)
            .await?;
        let items: Vec<T> = endpoint.decode(&body)?;

        debug!("Fetched {} {}", items.len(), endpoint.label);
        Ok(items)
    }

    /// Run a list endpoint filtered by identifier and return the single match
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        region: Option<&str>,
        id_param: &str,
        id: &str,
        resource: &str,
    ) -> Result<T> {
        let id = id.trim();
        if id.is_empty() {
            return Err(SanntiError::MissingParameter(format!(
                "{} identifier is required",
                resource
            )));
        }

        let items: Vec<T> = self.fetch_list(endpoint, region, &[(id_param, id)]).await?;
        items.into_iter().next().ok_or_else(|| SanntiError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        })
    }
}
