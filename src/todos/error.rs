//! Remote todo service-specific error types.

/// Errors that can occur during remote todo service operations.
#[derive(Debug, thiserror::Error)]
pub enum TodosError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// Failed to deserialize service response
    #[error("Failed to deserialize service response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todos_error_display() {
        let error = TodosError::Service {
            status: 404,
            message: "Not found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));
    }

    #[test]
    fn test_todos_error_deserialization() {
        let source = serde_json::from_str::<u64>("not a number").unwrap_err();
        let error = TodosError::Deserialization(source);
        assert!(error.to_string().contains("deserialize"));
    }
}
