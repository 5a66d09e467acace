use thiserror::Error;

/// Errors returned by the generation API, keyed by HTTP status
#[derive(Debug, Error)]
pub enum GenerationApiError {
    #[error("Invalid request (400): {message}")]
    InvalidRequest { message: String },

    #[error("Authentication error (401): {message}")]
    Authentication { message: String },

    #[error("Permission error (403): {message}")]
    Permission { message: String },

    #[error("Not found (404): {message}")]
    NotFound { message: String },

    #[error("Request too large (413): {message}")]
    RequestTooLarge { message: String },

    #[error("Rate limit exceeded (429): {message}")]
    RateLimit { message: String },

    #[error("Internal API error (500): {message}")]
    Api { message: String },

    /// Catch-all for unexpected status codes
    #[error("Unexpected API error ({status}): {message}")]
    Unexpected { status: u16, message: String },
}

impl GenerationApiError {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();

        match status {
            400 => Self::InvalidRequest { message },
            401 => Self::Authentication { message },
            403 => Self::Permission { message },
            404 => Self::NotFound { message },
            413 => Self::RequestTooLarge { message },
            429 => Self::RateLimit { message },
            500 => Self::Api { message },
            other => Self::Unexpected {
                status: other,
                message,
            },
        }
    }
}
