//! Contact form route.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use folio_engine::ContactMessage;

use crate::error::Result;
use crate::handlers::{handle_contact, ContactReceipt};
use crate::AppState;

/// Create contact routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(contact_handler))
}

/// POST /api/contact - Submit the contact form.
async fn contact_handler(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<(StatusCode, Json<ContactReceipt>)> {
    let receipt = handle_contact(&state.delivery, message).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
