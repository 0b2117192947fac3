//! Contact form endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{is_valid_email, require, ApiResponse, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::ContactFormData;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

pub fn validate_contact(form: &ContactFormData) -> Result<(), AppError> {
    require(&form.name, "Name")?;
    require(&form.email, "Email")?;
    require(&form.subject, "Subject")?;
    require(&form.message, "Message")?;
    if !is_valid_email(&form.email) {
        return Err(AppError::Validation(
            "Email address is not valid".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/contact - Acknowledge a contact message. Nothing is stored or sent.
pub async fn submit_contact(JsonBody(form): JsonBody<ContactFormData>) -> ApiResult<ContactReceipt> {
    validate_contact(&form)?;

    let receipt = ContactReceipt {
        reference: uuid::Uuid::new_v4().to_string(),
        received_at: Utc::now(),
        property_id: form
            .property_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string),
    };

    tracing::info!(
        reference = %receipt.reference,
        subject = %form.subject,
        property_id = receipt.property_id.as_deref().unwrap_or("-"),
        "Contact message received"
    );

    Ok(ApiResponse::new(receipt).with_message("Message Sent!"))
}
