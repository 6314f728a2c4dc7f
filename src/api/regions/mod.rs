//! Region (zone) module

mod api;
mod cache;
mod commands;
mod models;

pub use cache::RegionCache;
pub use commands::run_region_command;
pub use models::Zone;
