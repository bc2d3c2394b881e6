//! Error types exposed by the review API gateway.

use thiserror::Error;

/// Broad classification of a gateway failure.
///
/// Users see the same alert for every kind; the kind is recorded as the
/// `failure` field when the TUI logs a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request could not be completed.
    Network,
    /// The server answered, but not with a usable success response.
    Server,
    /// The request was rejected before being sent.
    Client,
}

/// Errors surfaced while talking to the review API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Networking failed before a response was received.
    #[error("network error talking to the review API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("review API returned status {status}: {message}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, truncated for display.
        message: String,
    },

    /// The API answered with a success status but an unreadable body.
    #[error("review API response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The request violates a client-side precondition and was not sent.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Description of the violated precondition.
        message: String,
    },

    /// The gateway could not be configured.
    #[error("gateway configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl GatewayError {
    /// Classifies the error for logging and user notification.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } => FailureKind::Network,
            Self::Server { .. } | Self::Decode { .. } => FailureKind::Server,
            Self::InvalidRequest { .. } | Self::Configuration { .. } => FailureKind::Client,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{FailureKind, GatewayError};

    #[rstest]
    #[case::network(GatewayError::Network { message: "refused".to_owned() }, FailureKind::Network)]
    #[case::server(
        GatewayError::Server { status: 500, message: "boom".to_owned() },
        FailureKind::Server
    )]
    #[case::decode(GatewayError::Decode { message: "eof".to_owned() }, FailureKind::Server)]
    #[case::invalid(
        GatewayError::InvalidRequest { message: "page".to_owned() },
        FailureKind::Client
    )]
    fn kind_classifies_variants(#[case] error: GatewayError, #[case] expected: FailureKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn server_error_message_includes_status() {
        let error = GatewayError::Server {
            status: 404,
            message: "not found".to_owned(),
        };

        assert_eq!(
            error.to_string(),
            "review API returned status 404: not found"
        );
    }
}
