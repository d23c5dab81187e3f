use thiserror::Error;

/// Errors that can occur when talking to a vision backend.
#[derive(Error, Debug)]
pub enum VisionError {
    /// The backend returned a non-success response without a structured error body.
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// The backend returned a structured error response.
    #[error("API error ({code}): {message}")]
    Api { code: String, message: String },

    /// Credential resolution or request signing failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A required provider parameter is missing.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// The backend endpoint URL is invalid.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// A blob could not be read (for example, its size is indeterminate).
    #[error("I/O error: {0}")]
    Io(String),

    /// The request payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP request failed at the transport level.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type alias for vision operations.
pub type VisionResult<T> = std::result::Result<T, VisionError>;
