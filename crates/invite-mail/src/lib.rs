//! Transactional email delivery for storefront enquiries.
//!
//! The storefront hands a flattened enquiry ([`TemplateParams`]) to an
//! [`EmailSender`]. The production sender talks to an EmailJS-compatible
//! HTTP API through [`MailClient`], a small builder over `reqwest` that works
//! natively and in the browser.
//!
//! # Example
//!
//! ```rust,ignore
//! use invite_mail::{EmailJsSender, EmailSender, MailSettings, TemplateParams};
//!
//! let sender = EmailJsSender::new(MailSettings {
//!     service_id: "service_x".into(),
//!     template_id: "template_y".into(),
//!     public_key: "public-key".into(),
//!     ..MailSettings::default()
//! })?;
//!
//! sender.send(&TemplateParams::from_payload(&payload, 330)).await?;
//! ```

mod error;
mod request;
mod response;
mod sender;
mod template;

pub use error::MailError;
pub use request::RequestBuilder;
pub use response::Response;
pub use sender::{EmailJsSender, EmailSender, MailSettings, MemorySender, DEFAULT_ENDPOINT};
pub use template::{TemplateParams, DEFAULT_UTC_OFFSET_MINUTES, NO_ITEMS};

/// HTTP client for the email service.
#[derive(Debug, Clone)]
pub struct MailClient {
    inner: reqwest::Client,
    base_url: Option<String>,
}

impl Default for MailClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MailClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        ClientRequestBuilder {
            client: self.inner.clone(),
            builder: RequestBuilder::new(full_url),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    client: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, MailError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// The request as built so far.
    pub fn as_request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, MailError> {
        let RequestBuilder { url, headers, body } = self.builder;

        let mut request = self.client.post(&url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{EmailJsSender, EmailSender, MailClient, MailError, MailSettings, TemplateParams};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_prepended() {
        let client = MailClient::new().with_base_url("https://mail.test/");
        let request = client.post("/api/v1.0/email/send");
        assert_eq!(
            request.as_request().url(),
            "https://mail.test/api/v1.0/email/send"
        );
    }

    #[test]
    fn test_absolute_url_wins() {
        let client = MailClient::new().with_base_url("https://mail.test");
        let request = client.post("https://other.test/send");
        assert_eq!(request.as_request().url(), "https://other.test/send");
    }
}
