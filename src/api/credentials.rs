//! API credential resolution from multiple sources

use log::debug;
use std::fmt;

use crate::config::settings as settings_config;
use crate::error::{Result, SanntiError};
use crate::settings::SettingsStore;

/// API key pair plus the default region, fixed for one invocation
#[derive(Clone)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
    default_region: Option<String>,
}

impl Credentials {
    /// Build credentials, refusing empty keys
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        default_region: Option<String>,
    ) -> Result<Self> {
        let access_key = access_key.into().trim().to_string();
        let secret_key = secret_key.into().trim().to_string();

        if access_key.is_empty() || secret_key.is_empty() {
            return Err(SanntiError::Credentials(missing_credentials_message()));
        }

        Ok(Self {
            access_key,
            secret_key,
            default_region: default_region
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        })
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Configured default region, if any
    pub fn default_region(&self) -> Option<&str> {
        self.default_region.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"****")
            .field("default_region", &self.default_region)
            .finish()
    }
}

/// Credential resolution with fallback logic
pub struct CredentialsResolver {
    store: SettingsStore,
}

impl Default for CredentialsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsResolver {
    /// Resolver reading the default settings file (~/.sannti/config.yaml)
    pub fn new() -> Self {
        Self {
            store: SettingsStore::new(),
        }
    }

    /// Resolver reading a specific settings store
    pub fn with_store(store: SettingsStore) -> Self {
        Self { store }
    }

    /// Resolve credentials from the process environment and the settings file
    pub fn resolve(&self) -> Result<Credentials> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve each field with fallback:
    /// 1. Environment variable (SANNTI_ACCESS_KEY, SANNTI_SECRET_KEY, SANNTI_DEFAULT_REGION/SANNTI_REGION)
    /// 2. Settings file
    pub fn resolve_with<F>(&self, env: F) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = self.store.load()?;

        let access_key = pick(
            &env,
            &[settings_config::ACCESS_KEY_ENV_VAR],
            settings.access_key,
            "access key",
        );
        let secret_key = pick(
            &env,
            &[settings_config::SECRET_KEY_ENV_VAR],
            settings.secret_key,
            "secret key",
        );
        let default_region = pick(
            &env,
            settings_config::REGION_ENV_VARS,
            settings.default_region,
            "default region",
        );

        match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => {
                Credentials::new(access_key, secret_key, default_region)
            }
            _ => Err(SanntiError::Credentials(missing_credentials_message())),
        }
    }
}

/// First non-empty value from the environment variables, then the file value
fn pick<F>(env: &F, vars: &[&str], file_value: Option<String>, label: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    for var in vars {
        if let Some(value) = env(var).filter(|v| !v.trim().is_empty()) {
            debug!("Using {} from {} environment variable", label, var);
            return Some(value);
        }
    }

    let value = file_value.filter(|v| !v.trim().is_empty());
    if value.is_some() {
        debug!("Using {} from settings file", label);
    }
    value
}

fn missing_credentials_message() -> String {
    format!(
        "missing credentials. Please run 'sannti configure' first\n\
         (or export {} and {})",
        settings_config::ACCESS_KEY_ENV_VAR,
        settings_config::SECRET_KEY_ENV_VAR
    )
}
