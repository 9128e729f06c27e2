//! Feedback response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use showroom_app::domain::feedback::records::FeedbackRecord;
use uuid::Uuid;

/// A published testimonial. The customer's email is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FeedbackResponse {
    /// Feedback identifier
    pub uuid: Uuid,

    /// Customer name
    pub name: String,

    /// Customer role
    pub role: String,

    /// Customer location
    pub location: String,

    /// Star rating, 1 to 5
    pub rating: u8,

    /// Products the customer bought
    pub purchased_items: Vec<String>,

    /// Product the feedback is mainly about
    pub product_name: String,

    /// The testimonial
    pub feedback_text: String,

    /// When the feedback was submitted
    pub created_at: String,
}

impl From<&FeedbackRecord> for FeedbackResponse {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            name: record.name.clone(),
            role: record.role.clone(),
            location: record.location.clone(),
            rating: record.rating.get(),
            purchased_items: record.purchased_items.clone(),
            product_name: record.product_name.clone(),
            feedback_text: record.feedback_text.clone(),
            created_at: record.created_at.to_string(),
        }
    }
}
