//! Feedback Records

use jiff::Timestamp;
use showroom::feedback::{Rating, Testimonial};

use crate::uuids::TypedUuid;

/// Feedback UUID
pub type FeedbackUuid = TypedUuid<FeedbackRecord>;

/// Feedback Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub uuid: FeedbackUuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub location: String,
    pub rating: Rating,
    pub purchased_items: Vec<String>,
    pub product_name: String,
    pub feedback_text: String,
    pub created_at: Timestamp,
}

impl Testimonial for FeedbackRecord {
    fn rating(&self) -> Rating {
        self.rating
    }

    fn role(&self) -> &str {
        &self.role
    }
}
