//! Error types for the placeholder client.
//!
//! # Design
//! None of these escape `RequestExecutor::execute`: each is folded into
//! `Outcome::TransportError` with its message. Non-2xx responses are not
//! errors at this level; they become `Outcome::HttpError`.

/// Errors raised while building, sending or decoding a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("{0}")]
    Serialization(String),

    /// The transport failed before a response was received.
    #[error("{0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("{0}")]
    Deserialization(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
