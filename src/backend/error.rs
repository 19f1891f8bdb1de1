//! Backend-specific error types.

/// Errors that can occur while talking to the exercise backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Response body was not the expected JSON envelope
    #[error("Failed to deserialize backend response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Request { status: u16, message: String },
}

impl BackendError {
    /// Build a request error for a failed status, preferring the message the
    /// backend reported.
    ///
    pub fn request(status: reqwest::StatusCode, reported: Option<String>) -> Self {
        let message = match reported.filter(|message| !message.is_empty()) {
            Some(message) => message,
            None => format!(
                "Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            ),
        };
        BackendError::Request {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_request_error_uses_reported_message() {
        let error = BackendError::request(StatusCode::NOT_FOUND, Some("Not found".to_string()));
        assert_eq!(error.to_string(), "Not found");
        assert!(matches!(error, BackendError::Request { status: 404, .. }));
    }

    #[test]
    fn test_request_error_falls_back_to_status() {
        let error = BackendError::request(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(error.to_string(), "Error 500: Internal Server Error");

        let error = BackendError::request(StatusCode::BAD_GATEWAY, Some(String::new()));
        assert_eq!(error.to_string(), "Error 502: Bad Gateway");
    }

    #[test]
    fn test_deserialization_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error: BackendError = source.into();
        assert!(error.to_string().contains("Failed to deserialize"));
    }
}
