//! Compute module

mod api;
mod commands;
mod models;

pub use commands::run_compute_command;
pub use models::{ComputeOffering, CreateInstanceRequest, Instance, Template};
