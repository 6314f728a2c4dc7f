//! Settings file data model

use serde::{Deserialize, Serialize};

/// Contents of `~/.sannti/config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_region: Option<String>,
}

/// Mask a secret for display, keeping the last 4 characters
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_yaml_keys() {
        let settings = Settings {
            access_key: Some("AK123".to_string()),
            secret_key: Some("SK456".to_string()),
            default_region: Some("br-southeast-1".to_string()),
        };

        let yaml = serde_yml::to_string(&settings).unwrap();
        assert!(yaml.contains("access_key: AK123"));
        assert!(yaml.contains("secret_key: SK456"));
        assert!(yaml.contains("default_region: br-southeast-1"));

        let parsed: Settings = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_settings_partial_yaml() {
        let parsed: Settings = serde_yml::from_str("access_key: only-this\n").unwrap();
        assert_eq!(parsed.access_key.as_deref(), Some("only-this"));
        assert!(parsed.secret_key.is_none());
        assert!(parsed.default_region.is_none());
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("abcdefgh1234"), "****1234");
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key(""), "****");
    }
}
