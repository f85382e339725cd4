/// Error types shared by the API, form and service layers
use thiserror::Error;

/// Errors raised while talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("Request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Backend returned {status}: {detail}")]
    Status {
        status: u16,
        /// `detail` or `message` from the body, or the canonical reason
        detail: String,
    },

    /// The response body was not the JSON shape the endpoint promises
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The request could not be built (bad URL, unsupported method)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Client-side validation failures. Raising one means no request was issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Port must be a number between 1 and 65535 (got '{0}').")]
    InvalidPort(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ServiceError {
    /// True when the failure happened before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Form(_))
    }
}
