use std::fmt;

/// Custom error type for Sannti operations
#[derive(Debug)]
pub enum SanntiError {
    /// Network-level failure (DNS, connect, timeout, body read)
    Transport(reqwest::Error),
    /// API returned a non-2xx status; body is kept verbatim
    Api { status: u16, body: String },
    /// Request payload could not be serialized
    Encoding(String),
    /// Response payload did not match the expected shape
    Decoding {
        context: String,
        message: String,
        body: String,
    },
    /// Region name is not an active zone
    RegionNotFound {
        region: String,
        available: Vec<String>,
    },
    /// A mandatory parameter (region, identifier) was not supplied
    MissingParameter(String),
    /// A get-by-identifier lookup returned nothing
    NotFound { resource: String, id: String },
    /// Output representation is not one of table/json/yaml
    UnsupportedFormat(String),
    /// Access key or secret key missing
    Credentials(String),
    /// Settings file could not be read or written
    Config(String),
    /// Writing output failed
    Io(std::io::Error),
    /// An error wrapped with the operation that produced it
    Context {
        action: String,
        source: Box<SanntiError>,
    },
}

impl SanntiError {
    /// Wrap this error with the intent of the failing operation
    pub fn context(self, action: impl Into<String>) -> Self {
        SanntiError::Context {
            action: action.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping any context wrappers
    pub fn root(&self) -> &SanntiError {
        match self {
            SanntiError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for SanntiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanntiError::Transport(e) => write!(f, "request failed: {}", e),
            SanntiError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            SanntiError::Encoding(msg) => write!(f, "failed to encode request body: {}", msg),
            SanntiError::Decoding {
                context, message, ..
            } => write!(f, "failed to parse {}: {}", context, message),
            SanntiError::RegionNotFound { region, available } => write!(
                f,
                "region '{}' not found. Available regions: [{}]. Run 'sannti region list' for details",
                region,
                available.join(", ")
            ),
            SanntiError::MissingParameter(msg) => write!(f, "{}", msg),
            SanntiError::NotFound { resource, id } => write!(f, "{} not found: {}", resource, id),
            SanntiError::UnsupportedFormat(format) => write!(
                f,
                "unsupported output format: {} (expected table, json or yaml)",
                format
            ),
            SanntiError::Credentials(msg) => write!(f, "{}", msg),
            SanntiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SanntiError::Io(e) => write!(f, "I/O error: {}", e),
            SanntiError::Context { action, source } => write!(f, "{}: {}", action, source),
        }
    }
}

impl std::error::Error for SanntiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SanntiError::Transport(e) => Some(e),
            SanntiError::Io(e) => Some(e),
            SanntiError::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SanntiError {
    fn from(err: reqwest::Error) -> Self {
        SanntiError::Transport(err)
    }
}

impl From<std::io::Error> for SanntiError {
    fn from(err: std::io::Error) -> Self {
        SanntiError::Io(err)
    }
}

/// Result type alias for Sannti operations
pub type Result<T> = std::result::Result<T, SanntiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_keeps_body_verbatim() {
        let err = SanntiError::Api {
            status: 404,
            body: r#"{"errorMessage":"VM not found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"API error (status 404): {"errorMessage":"VM not found"}"#
        );
    }

    #[test]
    fn test_region_not_found_lists_available() {
        let err = SanntiError::RegionNotFound {
            region: "north".to_string(),
            available: vec!["east".to_string(), "south".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'north'"));
        assert!(msg.contains("[east, south]"));
        assert!(msg.contains("sannti region list"));
    }

    #[test]
    fn test_not_found_display() {
        let err = SanntiError::NotFound {
            resource: "instance".to_string(),
            id: "vm-123".to_string(),
        };
        assert_eq!(err.to_string(), "instance not found: vm-123");
    }

    #[test]
    fn test_decoding_display_omits_body() {
        let err = SanntiError::Decoding {
            context: "instances response".to_string(),
            message: "expected value at line 1 column 1".to_string(),
            body: "<html>".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("instances response"));
        assert!(!msg.contains("<html>"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = SanntiError::UnsupportedFormat("xml".to_string());
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_context_wraps_and_root_unwraps() {
        use std::error::Error;

        let err = SanntiError::MissingParameter("region is required".to_string())
            .context("failed to list compute sizes")
            .context("compute sizes");
        assert_eq!(
            err.to_string(),
            "compute sizes: failed to list compute sizes: region is required"
        );
        assert!(matches!(err.root(), SanntiError::MissingParameter(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_root_of_unwrapped_error_is_itself() {
        let err = SanntiError::Config("bad".to_string());
        assert!(matches!(err.root(), SanntiError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SanntiError>();
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SanntiError = io_err.into();
        match err {
            SanntiError::Io(e) => assert!(e.to_string().contains("pipe closed")),
            _ => panic!("Expected SanntiError::Io"),
        }
    }
}
