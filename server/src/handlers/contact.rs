//! Contact handler - validates a form submission and hands it to delivery.

use crate::delivery::Delivery;
use crate::error::Result;
use chrono::{DateTime, Utc};
use folio_engine::ContactMessage;
use serde::Serialize;
use uuid::Uuid;

/// Response for an accepted contact message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    /// Server-assigned message id
    pub id: Uuid,
    pub status: String,
    pub received_at: DateTime<Utc>,
}

/// Process a contact form submission.
pub async fn handle_contact(
    delivery: &Delivery,
    message: ContactMessage,
) -> Result<ContactReceipt> {
    if let Err(e) = message.validate() {
        tracing::debug!("Rejected contact message: {}", e);
        return Err(e.into());
    }

    let id = Uuid::new_v4();
    let received_at = Utc::now();

    tracing::info!(
        message_id = %id,
        delivery = delivery.name(),
        "Contact message received"
    );

    delivery.send(&message).await?;

    Ok(ContactReceipt {
        id,
        status: "sent".to_string(),
        received_at,
    })
}
