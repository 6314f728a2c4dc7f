//! `sannti configure` command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use dialoguer::{Input, Password};
use log::debug;

use crate::cli::ConfigureAction;
use crate::config::{defaults, settings as settings_config};
use crate::error::{Result, SanntiError};
use crate::ui::{print_info, print_success};

use super::models::{mask_key, Settings};
use super::store::SettingsStore;

/// Dispatch configure subcommands
pub fn run_configure_command(action: Option<&ConfigureAction>, batch: bool) -> Result<()> {
    let store = SettingsStore::new();
    match action {
        None => run_configure(&store, batch),
        Some(ConfigureAction::Show) => run_configure_show(&store),
    }
}

/// Prompt for credentials and default region, then save them
fn run_configure(store: &SettingsStore, batch: bool) -> Result<()> {
    if batch {
        return Err(SanntiError::Config(format!(
            "'sannti configure' is interactive. In batch mode export {} and {} instead",
            settings_config::ACCESS_KEY_ENV_VAR,
            settings_config::SECRET_KEY_ENV_VAR
        )));
    }

    let current = store.load()?;

    let access_key: String = Input::new()
        .with_prompt("Sannti Access Key")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| SanntiError::Config(format!("failed to read access key: {}", e)))?;

    let secret_key = Password::new()
        .with_prompt("Sannti Secret Key")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| SanntiError::Config(format!("failed to read secret key: {}", e)))?;

    let region_default = current
        .default_region
        .clone()
        .unwrap_or_else(|| defaults::REGION.to_string());
    let default_region: String = Input::new()
        .with_prompt("Default Region")
        .default(region_default)
        .interact_text()
        .map_err(|e| SanntiError::Config(format!("failed to read default region: {}", e)))?;

    let settings = build_settings(&access_key, &secret_key, &default_region)?;
    store.save(&settings)?;
    debug!("Saved settings to {}", store.path().display());

    print_success(&format!(
        "Configuration saved to {}",
        store.path().display()
    ));
    print_info("You can now use Sannti CLI commands!");
    print_info("Try: sannti region list");
    Ok(())
}

/// Validate prompt answers; both keys are required, region falls back to the default
fn build_settings(access_key: &str, secret_key: &str, default_region: &str) -> Result<Settings> {
    let access_key = access_key.trim();
    let secret_key = secret_key.trim();
    if access_key.is_empty() || secret_key.is_empty() {
        return Err(SanntiError::Config(
            "access key and secret key cannot be empty".to_string(),
        ));
    }

    let default_region = match default_region.trim() {
        "" => defaults::REGION,
        region => region,
    };

    Ok(Settings {
        access_key: Some(access_key.to_string()),
        secret_key: Some(secret_key.to_string()),
        default_region: Some(default_region.to_string()),
    })
}

/// Print the effective settings with their source
fn run_configure_show(store: &SettingsStore) -> Result<()> {
    let settings = store.load()?;
    let rows = effective_rows(&settings, |name| std::env::var(name).ok());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("SETTING"), Cell::new("VALUE"), Cell::new("SOURCE")]);

    for row in &rows {
        table.add_row(vec![
            Cell::new(row.name),
            Cell::new(&row.value),
            Cell::new(&row.source),
        ]);
    }

    println!("Settings file: {}", store.path().display());
    println!("{table}");
    Ok(())
}

/// One line of `configure show`
#[derive(Debug, PartialEq)]
struct SettingRow {
    name: &'static str,
    value: String,
    source: String,
}

fn effective_rows<F>(settings: &Settings, env: F) -> Vec<SettingRow>
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = |vars: &[&str]| {
        vars.iter().find_map(|var| {
            env(var)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (v, format!("env ({})", var)))
        })
    };
    let from_file = |value: &Option<String>| {
        value
            .clone()
            .filter(|v| !v.trim().is_empty())
            .map(|v| (v, "file".to_string()))
    };
    let row = |name, found: Option<(String, String)>, secret: bool| {
        let (value, source) = found.unwrap_or_else(|| ("<not set>".to_string(), "-".to_string()));
        let value = if secret && source != "-" {
            mask_key(&value)
        } else {
            value
        };
        SettingRow {
            name,
            value,
            source,
        }
    };

    vec![
        row(
            "access_key",
            from_env(&[settings_config::ACCESS_KEY_ENV_VAR])
                .or_else(|| from_file(&settings.access_key)),
            true,
        ),
        row(
            "secret_key",
            from_env(&[settings_config::SECRET_KEY_ENV_VAR])
                .or_else(|| from_file(&settings.secret_key)),
            true,
        ),
        row(
            "default_region",
            from_env(settings_config::REGION_ENV_VARS)
                .or_else(|| from_file(&settings.default_region)),
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_settings_requires_keys() {
        assert!(build_settings("", "secret", "east").is_err());
        assert!(build_settings("access", "  ", "east").is_err());
    }

    #[test]
    fn test_build_settings_region_fallback() {
        let settings = build_settings(" AK ", "SK", "").unwrap();
        assert_eq!(settings.access_key.as_deref(), Some("AK"));
        assert_eq!(settings.default_region.as_deref(), Some(defaults::REGION));
    }

    #[test]
    fn test_effective_rows_env_wins_and_masks() {
        let settings = Settings {
            access_key: Some("file-access-1234".to_string()),
            secret_key: Some("file-secret-5678".to_string()),
            default_region: None,
        };
        let rows = effective_rows(&settings, |name| match name {
            "SANNTI_SECRET_KEY" => Some("env-secret-9999".to_string()),
            "SANNTI_REGION" => Some("us-east-1".to_string()),
            _ => None,
        });

        assert_eq!(rows[0].value, "****1234");
        assert_eq!(rows[0].source, "file");
        assert_eq!(rows[1].value, "****9999");
        assert_eq!(rows[1].source, "env (SANNTI_SECRET_KEY)");
        assert_eq!(rows[2].value, "us-east-1");
        assert_eq!(rows[2].source, "env (SANNTI_REGION)");
    }

    #[test]
    fn test_effective_rows_not_set() {
        let rows = effective_rows(&Settings::default(), |_| None);
        assert!(rows.iter().all(|r| r.value == "<not set>" && r.source == "-"));
    }

    #[test]
    fn test_configure_refuses_batch_mode() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::with_path(dir.path().join("config.yaml"));
        let err = run_configure(&store, true).unwrap_err();
        assert!(matches!(err, SanntiError::Config(_)));
        assert!(!store.path().exists());
    }
}
