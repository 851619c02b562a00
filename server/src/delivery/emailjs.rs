//! EmailJS REST client.
//!
//! Sends the same template parameters the contact form used to post from the
//! browser, so an existing EmailJS template keeps working unchanged.

use folio_engine::ContactMessage;
use serde::Serialize;
use std::time::Duration;

use super::DeliveryError;
use crate::config::EmailJsConfig;

/// EmailJS send endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Upper bound on one send, connect through response body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Template variables filled in by the EmailJS template.
#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub to_email: &'a str,
}

/// Request body for the send endpoint.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a EmailJsConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                subject: &message.subject,
                message: &message.message,
                to_email: &config.to_email,
            },
        }
    }
}

/// Client for the EmailJS API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, DeliveryError> {
        Self::with_endpoint(config, EMAILJS_SEND_URL, DEFAULT_TIMEOUT)
    }

    /// Point the client at a different endpoint (useful for a local stub).
    pub fn with_endpoint(
        config: EmailJsConfig,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            config,
        })
    }

    pub async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let request = SendRequest::new(&self.config, message);

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(service_id = %self.config.service_id, "EmailJS accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Router};

    fn config(private_key: Option<&str>) -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "public_1".into(),
            private_key: private_key.map(String::from),
            to_email: "me@example.com".into(),
        }
    }

    #[test]
    fn send_request_format() {
        let config = config(None);
        let message = ContactMessage::new("Ada", "ada@example.com", "Hello", "Nice work");
        let json = serde_json::to_value(SendRequest::new(&config, &message)).unwrap();

        assert_eq!(json["service_id"], "service_1");
        assert_eq!(json["template_id"], "template_1");
        assert_eq!(json["user_id"], "public_1");
        assert!(json.get("accessToken").is_none());
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["from_email"], "ada@example.com");
        assert_eq!(json["template_params"]["subject"], "Hello");
        assert_eq!(json["template_params"]["message"], "Nice work");
        assert_eq!(json["template_params"]["to_email"], "me@example.com");
    }

    #[test]
    fn access_token_included_when_configured() {
        let config = config(Some("secret"));
        let message = ContactMessage::new("a", "b", "c", "d");
        let json = serde_json::to_value(SendRequest::new(&config, &message)).unwrap();
        assert_eq!(json["accessToken"], "secret");
    }

    async fn stub(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/send", post(move || async move { (status, body) }));
        serve(app).await
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/send", addr)
    }

    #[tokio::test]
    async fn accepted_message_succeeds() {
        let endpoint = stub(StatusCode::OK, "OK").await;
        let client = EmailJsClient::with_endpoint(config(None), endpoint, DEFAULT_TIMEOUT).unwrap();
        let message = ContactMessage::new("Ada", "ada@example.com", "Hello", "Nice work");

        client.send(&message).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_message_reports_status() {
        let endpoint = stub(StatusCode::BAD_REQUEST, "The template ID is invalid").await;
        let client = EmailJsClient::with_endpoint(config(None), endpoint, DEFAULT_TIMEOUT).unwrap();
        let message = ContactMessage::new("Ada", "ada@example.com", "Hello", "Nice work");

        match client.send(&message).await.unwrap_err() {
            DeliveryError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The template ID is invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn stalled_provider_times_out() {
        let app = Router::new().route(
            "/send",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                "OK"
            }),
        );
        let endpoint = serve(app).await;
        let timeout = Duration::from_millis(200);
        let client = EmailJsClient::with_endpoint(config(None), endpoint, timeout).unwrap();
        let message = ContactMessage::new("Ada", "ada@example.com", "Hello", "Nice work");

        match client.send(&message).await.unwrap_err() {
            DeliveryError::Http(e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
