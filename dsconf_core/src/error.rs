use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The configuration API call failed, either in transport or with a
    /// non-success status. `body` holds the response text when one was read.
    #[error("Upstream API error{}: {message}", status_suffix(.status))]
    Upstream {
        status: Option<u16>,
        body: Option<String>,
        message: String,
    },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to assemble state: {0}")]
    Assembly(String),

    #[error("HTTP servlet extension not found: {0}")]
    NotFound(String),

    #[error("Unrecognized HTTP servlet extension {id:?} with schemas {schemas:?}")]
    UnrecognizedKind {
        id: Option<String>,
        schemas: Vec<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn upstream(status: Option<u16>, body: Option<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body,
            message: message.into(),
        }
    }

    /// HTTP status attached to an upstream failure, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_includes_status() {
        let err = Error::upstream(Some(500), Some("boom".to_string()), "Internal Server Error");
        assert_eq!(
            err.to_string(),
            "Upstream API error (HTTP 500): Internal Server Error"
        );
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn upstream_display_without_status() {
        let err = Error::upstream(None, None, "connection refused");
        assert_eq!(err.to_string(), "Upstream API error: connection refused");
        assert_eq!(err.status(), None);
    }
}
