//! Failures of README and inline-demo fetches
//!
//! Every variant renders as a short human-readable line. Callers never
//! propagate these; they display them in place of the content.

/// Why a GET for a README or demo page produced no content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP error, status = {0}")]
    Status(u16),
    /// The request could not complete
    #[error("{0}")]
    Transport(String),
    /// The failure carried nothing we could describe
    #[error("Unknown error - See console for details")]
    Unknown,
}

impl FetchError {
    /// Transport failure from an underlying error message. Blank messages
    /// degrade to [`FetchError::Unknown`].
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Transport(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error, status = 404");
    }

    #[test]
    fn test_transport_keeps_underlying_message() {
        let err = FetchError::transport("error sending request");
        assert_eq!(err.to_string(), "error sending request");
    }

    #[test]
    fn test_blank_transport_is_unknown() {
        assert_eq!(FetchError::transport("  "), FetchError::Unknown);
        assert_eq!(
            FetchError::Unknown.to_string(),
            "Unknown error - See console for details"
        );
    }
}
