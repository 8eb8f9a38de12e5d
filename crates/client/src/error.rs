//! Client error types.

/// Errors from the catalog REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection refused, DNS, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}: {body}")]
    Api {
        status: u16,
        /// Raw response body, usually `{"error": ..., "code": ...}`.
        body: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Transport failures and 5xx answers may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Request(_) => true,
            ClientError::Api { status, .. } => *status >= 500,
            ClientError::Decode(_) => false,
        }
    }

    /// The `error` field of a JSON error body, when there is one.
    pub fn server_message(&self) -> Option<String> {
        let ClientError::Api { body, .. } = self else {
            return None;
        };
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        json.get("error")?.as_str().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, body: &str) -> ClientError {
        ClientError::Api {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn message_embeds_status() {
        let err = api(404, "{}");
        assert!(err.to_string().contains("HTTP error! status: 404"));
        assert!(err.is_not_found());
    }

    #[test]
    fn only_server_errors_are_retryable() {
        assert!(api(503, "").is_retryable());
        assert!(!api(409, "").is_retryable());
        assert!(!api(404, "").is_retryable());
    }

    #[test]
    fn server_message_reads_error_field() {
        let err = api(409, r#"{"error":"Brand 'Fiat' already exists","code":"CONFLICT"}"#);
        assert_eq!(err.server_message().as_deref(), Some("Brand 'Fiat' already exists"));
        assert_eq!(api(500, "not json").server_message(), None);
    }
}
