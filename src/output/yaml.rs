//! YAML output

use serde::Serialize;
use std::io::Write;

use crate::error::{Result, SanntiError};

pub fn write_yaml<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let yaml = serde_yml::to_string(value).map_err(|e| SanntiError::Encoding(e.to_string()))?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_yaml_mapping() {
        let mut buf = Vec::new();
        write_yaml(&mut buf, &serde_json::json!({"name": "east"})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "name: east\n");
    }
}
