//! JSON output

use serde::Serialize;
use std::io::Write;

use crate::error::{Result, SanntiError};

/// Pretty-print with two-space indentation and a trailing newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| {
        if e.is_io() {
            SanntiError::Io(e.into())
        } else {
            SanntiError::Encoding(e.to_string())
        }
    })?;
    writeln!(out)?;
    Ok(())
}
