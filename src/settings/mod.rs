//! Local settings: credentials and default region in `~/.sannti/config.yaml`

mod commands;
mod models;
mod store;

pub use commands::run_configure_command;
pub use models::{mask_key, Settings};
pub use store::SettingsStore;
