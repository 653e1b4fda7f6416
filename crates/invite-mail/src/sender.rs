//! Email senders.

use std::cell::RefCell;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{MailClient, MailError, TemplateParams};

/// Public EmailJS API host.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Delivers one enquiry email.
///
/// Futures are not required to be `Send`: in the browser the sender runs on
/// the page's single thread.
#[async_trait(?Send)]
pub trait EmailSender {
    /// Send the template once. No retries.
    async fn send(&self, params: &TemplateParams) -> Result<(), MailError>;
}

/// Credentials and endpoint for an EmailJS-compatible service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// API host, without the send path.
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Account public key, sent as `user_id`.
    pub public_key: String,
    /// Private key, required only when the account enforces it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
        }
    }
}

impl MailSettings {
    /// Names of required settings that are blank.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("endpoint", &self.endpoint),
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Check that the sender can be built from these settings.
    pub fn validate(&self) -> Result<(), MailError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(MailError::Config(format!(
                "missing mail settings: {}",
                missing.join(", ")
            )));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(MailError::Config(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// Sends enquiries through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: MailClient,
    settings: MailSettings,
}

impl EmailJsSender {
    /// Create a sender. Fails if any required setting is blank.
    pub fn new(settings: MailSettings) -> Result<Self, MailError> {
        settings.validate()?;
        let client = MailClient::new().with_base_url(settings.endpoint.clone());
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &MailSettings {
        &self.settings
    }
}

#[async_trait(?Send)]
impl EmailSender for EmailJsSender {
    async fn send(&self, params: &TemplateParams) -> Result<(), MailError> {
        let body = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            access_token: self.settings.access_token.as_deref(),
            template_params: params,
        };

        self.client
            .post(SEND_PATH)
            .json(&body)?
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Sender that records every message instead of delivering it.
///
/// Used for headless runs and tests. A failing sender still records the
/// attempt before reporting its error.
#[derive(Debug, Default)]
pub struct MemorySender {
    sent: RefCell<Vec<TemplateParams>>,
    failure: Option<MailError>,
}

impl MemorySender {
    /// A sender whose sends all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose sends all fail with `error`.
    pub fn failing(error: MailError) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// Messages received so far.
    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl EmailSender for MemorySender {
    async fn send(&self, params: &TemplateParams) -> Result<(), MailError> {
        self.sent.borrow_mut().push(params.clone());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_commerce::money::Money;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params() -> TemplateParams {
        TemplateParams {
            customer_name: "Asha".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "9876543210".to_string(),
            cart_details: "Holi Colors (Qty: 2)".to_string(),
            total: Money::new(218),
            date: "2026-02-14T09:05:07.000Z".to_string(),
            time: "02:35 pm".to_string(),
            comments: "No additional comments".to_string(),
        }
    }

    fn settings(endpoint: String) -> MailSettings {
        MailSettings {
            endpoint,
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public-test".to_string(),
            access_token: None,
        }
    }

    #[test]
    fn test_missing_settings() {
        let err = EmailJsSender::new(MailSettings::default()).unwrap_err();
        assert_eq!(
            err,
            MailError::Config(
                "missing mail settings: service_id, template_id, public_key".to_string()
            )
        );
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let err = EmailJsSender::new(settings("ftp://mail.test".to_string())).unwrap_err();
        assert!(matches!(err, MailError::Config(_)));
    }

    #[tokio::test]
    async fn test_send_posts_emailjs_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public-test",
                "template_params": {
                    "customer_name": "Asha",
                    "customer_email": "asha@example.com",
                    "customer_phone": "9876543210",
                    "cart_details": "Holi Colors (Qty: 2)",
                    "total": 218,
                    "date": "2026-02-14T09:05:07.000Z",
                    "time": "02:35 pm",
                    "comments": "No additional comments"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let sender = EmailJsSender::new(settings(server.uri())).unwrap();
        sender.send(&params()).await.unwrap();
    }

    #[tokio::test]
    async fn test_access_token_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(wiremock::matchers::body_partial_json(
                serde_json::json!({"accessToken": "private-test"}),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut settings = settings(server.uri());
        settings.access_token = Some("private-test".to_string());
        EmailJsSender::new(settings)
            .unwrap()
            .send(&params())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string("The Public Key is invalid"),
            )
            .mount(&server)
            .await;

        let sender = EmailJsSender::new(settings(server.uri())).unwrap();
        let err = sender.send(&params()).await.unwrap_err();
        assert_eq!(
            err,
            MailError::Rejected {
                status: 400,
                message: "The Public Key is invalid".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let sender = EmailJsSender::new(settings("http://127.0.0.1:1".to_string())).unwrap();
        let err = sender.send(&params()).await.unwrap_err();
        assert!(matches!(err, MailError::Request(_)));
    }

    #[tokio::test]
    async fn test_memory_sender_records() {
        let sender = MemorySender::new();
        sender.send(&params()).await.unwrap();
        assert_eq!(sender.sent(), vec![params()]);

        let failing = MemorySender::failing(MailError::Request("offline".to_string()));
        assert!(failing.send(&params()).await.is_err());
        assert_eq!(failing.sent().len(), 1);
    }
}
