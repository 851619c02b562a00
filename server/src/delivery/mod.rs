//! Outbound delivery of contact messages.

mod emailjs;

pub use emailjs::*;

use folio_engine::ContactMessage;

use crate::config::DeliveryConfig;

/// Delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("delivery provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl DeliveryError {
    /// Failure summary safe to return to the submitting browser. Provider
    /// response bodies stay in the server log.
    pub fn public_detail(&self) -> Option<String> {
        match self {
            DeliveryError::Http(e) if e.is_timeout() => {
                Some("delivery provider timed out".to_string())
            }
            DeliveryError::Http(_) => None,
            DeliveryError::Rejected { status, .. } => {
                Some(format!("delivery provider returned status {}", status))
            }
        }
    }
}

/// The collaborator contact messages are handed to.
#[derive(Debug)]
pub enum Delivery {
    EmailJs(EmailJsClient),
    /// Records the message in the log and reports success
    Log,
}

impl Delivery {
    /// Build the delivery backend described by the configuration.
    pub fn from_config(config: &DeliveryConfig) -> Result<Self, DeliveryError> {
        Ok(match config {
            DeliveryConfig::EmailJs(emailjs) => {
                Delivery::EmailJs(EmailJsClient::new(emailjs.clone())?)
            }
            DeliveryConfig::Log => Delivery::Log,
        })
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Delivery::EmailJs(_) => "emailjs",
            Delivery::Log => "log",
        }
    }

    /// Hand a validated message to the backend.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        match self {
            Delivery::EmailJs(client) => client.send(message).await,
            Delivery::Log => {
                tracing::debug!(
                    from_name = %message.name,
                    from_email = %message.email,
                    subject = %message.subject,
                    "Contact message sender"
                );
                tracing::info!(
                    length = message.message.len(),
                    "Contact message recorded (log delivery)"
                );
                Ok(())
            }
        }
    }
}
