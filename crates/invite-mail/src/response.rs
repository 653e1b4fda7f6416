//! HTTP response handling.

use crate::MailError;

/// An HTTP response, fully buffered.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, MailError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| MailError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The body text becomes the error message, as the email service reports
    /// its reasons in plain text.
    pub fn error_for_status(self) -> Result<Self, MailError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(MailError::Rejected {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"OK").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(400, b"").is_success());
        assert!(!make_response(302, b"").is_success());
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(matches!(resp.text(), Err(MailError::Parse(_))));
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());

        let err = make_response(412, b"Template not found")
            .error_for_status()
            .unwrap_err();
        assert_eq!(
            err,
            MailError::Rejected {
                status: 412,
                message: "Template not found".to_string(),
            }
        );
    }
}
