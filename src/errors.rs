/// Error returned by the transport layer before an HTTP status is known.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// All error types that can occur when talking to Artemis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An exchange with the Artemis server did not succeed.
    ///
    /// Covers transport failures, unexpected status codes, a missing or wrong
    /// `Content-Type`, and response bodies that are not valid JSON.
    #[error("cannot connect to Artemis: {message}")]
    CannotConnect {
        message: String,
        status: Option<u16>,
        body: Option<String>,
        #[source]
        source: Option<TransportError>,
    },

    /// The client configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an error for a response with an unexpected status code.
    pub fn status(status: u16, body: &str) -> Self {
        Error::CannotConnect {
            message: format!("Server returned status {status}: {body}"),
            status: Some(status),
            body: Some(body.to_string()),
            source: None,
        }
    }

    /// Create an error for a read that did not return JSON.
    pub fn content_type(found: Option<&str>) -> Self {
        Error::CannotConnect {
            message: format!(
                "Expected JSON response but got {}",
                found.map_or("no content type".to_string(), |ct| format!("content type {ct:?}"))
            ),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Create an error for a failure below the HTTP layer.
    pub fn transport(url: &str, err: TransportError) -> Self {
        Error::CannotConnect {
            message: format!("Failed to reach {url}"),
            status: None,
            body: None,
            source: Some(err),
        }
    }

    /// Create an error for a JSON body that could not be decoded.
    pub fn decode(url: &str, err: serde_json::Error) -> Self {
        Error::CannotConnect {
            message: format!("Invalid JSON returned by {url}"),
            status: None,
            body: None,
            source: Some(Box::new(err)),
        }
    }

    /// Whether this is a failed exchange with the server.
    pub fn is_cannot_connect(&self) -> bool {
        matches!(self, Error::CannotConnect { .. })
    }

    /// Status code of the failed response, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::CannotConnect { status, .. } => *status,
            Error::InvalidConfig(_) => None,
        }
    }

    /// Body text of the failed response, if one was read.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::CannotConnect { body, .. } => body.as_deref(),
            Error::InvalidConfig(_) => None,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
