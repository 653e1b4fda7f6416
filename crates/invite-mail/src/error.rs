//! Email delivery error types.

use thiserror::Error;

/// Errors that can occur when delivering an enquiry email.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// The email service answered with a non-2xx status.
    #[error("Email service rejected the message (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Sender is missing credentials or has an unusable endpoint.
    #[error("Mail configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MailError {
    fn from(e: serde_json::Error) -> Self {
        MailError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for MailError {
    fn from(e: reqwest::Error) -> Self {
        MailError::Request(e.to_string())
    }
}

impl MailError {
    /// HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            MailError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = MailError::Rejected {
            status: 400,
            message: "The user_id parameter is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Email service rejected the message (HTTP 400): The user_id parameter is required"
        );
        assert_eq!(err.status(), Some(400));
        assert_eq!(MailError::Config("x".into()).status(), None);
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(MailError::from(err), MailError::Json(_)));
    }
}
