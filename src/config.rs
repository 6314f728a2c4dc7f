/// Configuration constants for the Sannti REST API
pub mod api {
    /// Base URL of the Sannti REST API
    pub const BASE_URL: &str = "https://console.sannti.cloud/restapi";

    /// Environment variable overriding the base URL
    pub const BASE_URL_ENV_VAR: &str = "SANNTI_API_URL";

    /// Whole-request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Query parameter carrying the resolved zone identifier
    pub const ZONE_PARAM: &str = "zoneUuid";

    pub const ZONE_LIST: &str = "/zone/zonelist";
    pub const INSTANCE_LIST: &str = "/instance/instanceList";
    pub const INSTANCE_CREATE: &str = "/instance/createInstance";
    pub const INSTANCE_START: &str = "/instance/startInstance";
    pub const INSTANCE_STOP: &str = "/instance/stopInstance";
    pub const INSTANCE_DESTROY: &str = "/instance/destroyInstance";
    pub const COMPUTE_OFFERING_LIST: &str = "/compute/computeOfferingList";
    pub const TEMPLATE_LIST: &str = "/template/templateList";
    pub const NETWORK_LIST: &str = "/network/networkList";
    pub const IP_ADDRESS_LIST: &str = "/ipaddress/ipAddressList";
    pub const FIREWALL_RULE_LIST: &str = "/firewallrule/firewallRuleList";
    pub const KUBERNETES_VERSION_LIST: &str = "/costestimate/kubernetes-version-list";
    pub const KUBERNETES_CLUSTER_LIST: &str = "/kubernetes/listCluster";
    pub const KUBERNETES_CREATE: &str = "/kubernetes/createKubernetes";
    pub const KUBERNETES_DESTROY: &str = "/kubernetes/destroyKubernetes";
}

/// Configuration constants for the settings file and environment
pub mod settings {
    /// Settings directory (relative to HOME)
    pub const DIR_NAME: &str = ".sannti";

    /// Settings file name
    pub const FILE_NAME: &str = "config.yaml";

    pub const ACCESS_KEY_ENV_VAR: &str = "SANNTI_ACCESS_KEY";
    pub const SECRET_KEY_ENV_VAR: &str = "SANNTI_SECRET_KEY";

    /// Environment variables for the default region (checked in order)
    pub const REGION_ENV_VARS: &[&str] = &["SANNTI_DEFAULT_REGION", "SANNTI_REGION"];
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Region offered by `sannti configure`
    pub const REGION: &str = "br-southeast-1";

    /// Default output format
    pub const OUTPUT: &str = "table";
}
