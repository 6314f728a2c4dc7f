//! Zone data models

use serde::{Deserialize, Serialize};

/// A vendor zone; its display name is what users call a region
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    pub uuid: String,
    pub name: String,
    pub country_name: String,
    pub is_active: bool,
}

impl Zone {
    /// Status label shown in region tables
    pub fn status(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}
