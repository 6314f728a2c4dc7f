//! UI utilities for terminal output
//!
//! Progress spinners, status lines and confirmation prompts.

mod confirm;
mod messages;
mod spinner;

pub use confirm::confirm_action;
pub use messages::{print_error, print_info, print_success};
pub use spinner::{create_spinner, finish_spinner, with_spinner};
