use serde::{Deserialize, Serialize};

/// Represents an error response from the backend.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_display() {
        assert_eq!(ErrorResponse::new("boom").to_string(), "boom");
        assert_eq!(
            ErrorResponse::with_details("boom", "fuse blew").to_string(),
            "boom: fuse blew"
        );
    }

    #[test]
    fn error_response_deserialization() {
        let json = r#"{"message":"role update rejected","details":null}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "role update rejected");
        assert_eq!(error.details, None);
    }
}
