//! Output formatting module
//!
//! Renders any serializable result as an aligned table, JSON or YAML.
//! Tables go through a caller-supplied projector; structured formats ignore it
//! and serialize the items themselves.

mod json;
mod table;
mod yaml;

pub mod compute;
pub mod kubernetes;
pub mod network;
pub mod regions;

use serde::{Serialize, Serializer};
use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::error::Result;

/// A single value or a sequence of values to render
#[derive(Debug)]
pub enum Items<'a, T> {
    One(&'a T),
    Many(&'a [T]),
}

impl<'a, T> Items<'a, T> {
    /// View as a slice; a single value is a one-element slice
    pub fn as_slice(&self) -> &'a [T] {
        match *self {
            Items::One(item) => std::slice::from_ref(item),
            Items::Many(items) => items,
        }
    }
}

impl<T: Serialize> Serialize for Items<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Items::One(item) => item.serialize(serializer),
            Items::Many(items) => items.serialize(serializer),
        }
    }
}

/// Render items to a writer in the given format
pub fn render<T, W, F>(
    out: &mut W,
    items: Items<'_, T>,
    format: OutputFormat,
    headers: &[&str],
    project: F,
) -> Result<()>
where
    T: Serialize,
    W: Write,
    F: Fn(&T) -> Vec<String>,
{
    match format {
        OutputFormat::Table => {
            let rows = items.as_slice().iter().map(project);
            table::write_table(out, headers, rows)
        }
        OutputFormat::Json => json::write_json(out, &items),
        OutputFormat::Yaml => yaml::write_yaml(out, &items),
    }
}

/// `yes`/`no` cell for boolean flags
pub(crate) fn yes_no(flag: bool) -> String {
    let label = if flag { "yes" } else { "no" };
    label.to_string()
}

/// Render items to stdout
pub fn print<T, F>(items: Items<'_, T>, format: OutputFormat, headers: &[&str], project: F) -> Result<()>
where
    T: Serialize,
    F: Fn(&T) -> Vec<String>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, items, format, headers, project)?;
    out.flush()?;
    Ok(())
}
