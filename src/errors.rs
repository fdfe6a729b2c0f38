use std::fmt;

use thiserror::Error;

/// Coarse category of a [`BhashiniError`], so callers can branch without
/// matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP exchange itself failed (connection, timeout, non-2xx status).
    Transport,
    /// The service answered but the body did not carry recognized text.
    InvalidResponse,
    /// Configuration was missing or could not be applied.
    Config,
}

/// Which part of `pipelineResponse[0].output[0].source` was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStructure {
    MissingPipelineResponse,
    EmptyPipelineResponse,
    EmptyOutput,
    MissingSource,
    /// Body was not JSON, or not an object of the expected shape.
    Undecodable(String),
}

impl fmt::Display for InvalidStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPipelineResponse => write!(f, "missing pipelineResponse"),
            Self::EmptyPipelineResponse => write!(f, "pipelineResponse is empty"),
            Self::EmptyOutput => write!(f, "pipelineResponse[0].output is empty"),
            Self::MissingSource => write!(f, "pipelineResponse[0].output[0].source is missing"),
            Self::Undecodable(reason) => write!(f, "undecodable body: {}", reason),
        }
    }
}

/// Error returned by every fallible operation of the client.
#[derive(Debug, Error)]
pub enum BhashiniError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bhashini API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response structure: {0}")]
    InvalidResponse(InvalidStructure),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BhashiniError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Status { .. } => ErrorKind::Transport,
            Self::InvalidResponse(_) => ErrorKind::InvalidResponse,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, BhashiniError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_split_transport_from_structure() {
        let status = BhashiniError::Status {
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(status.kind(), ErrorKind::Transport);

        let invalid = BhashiniError::InvalidResponse(InvalidStructure::EmptyOutput);
        assert_eq!(invalid.kind(), ErrorKind::InvalidResponse);
        assert!(invalid.to_string().starts_with("Invalid response structure"));

        assert_eq!(
            BhashiniError::Config("no service".into()).kind(),
            ErrorKind::Config
        );
    }
}
