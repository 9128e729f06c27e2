//! Create Feedback Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showroom::feedback::{FeedbackSubmission, Rating, parse_purchased_items};

use crate::{
    extensions::*,
    feedback::{errors::into_status_error, models::FeedbackResponse},
    state::State,
};

/// Create Feedback Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateFeedbackRequest {
    /// Customer name
    pub name: String,

    /// Contact email, kept private
    pub email: String,

    /// Customer role, e.g. "Home Owner"
    pub role: String,

    /// Customer location
    pub location: String,

    /// Star rating; out-of-range values are clamped, missing means 5
    pub rating: Option<i64>,

    /// Comma-separated list of purchased products
    pub purchased_items: String,

    /// Product the feedback is mainly about
    #[serde(default)]
    pub product_name: String,

    /// The testimonial
    pub feedback_text: String,
}

impl From<CreateFeedbackRequest> for FeedbackSubmission {
    fn from(request: CreateFeedbackRequest) -> Self {
        FeedbackSubmission {
            name: request.name,
            email: request.email,
            role: request.role,
            location: request.location,
            rating: request.rating.map(Rating::clamped).unwrap_or_default(),
            purchased_items: parse_purchased_items(&request.purchased_items),
            product_name: request.product_name,
            feedback_text: request.feedback_text,
        }
    }
}

/// Create Feedback Handler
///
/// Validates and stores a testimonial.
#[endpoint(
    tags("feedback"),
    summary = "Submit Feedback",
    responses(
        (status_code = StatusCode::CREATED, description = "Feedback stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid submission"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateFeedbackRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FeedbackResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stored = state
        .app
        .feedback_flow()
        .submit(&json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(FeedbackResponse::from(&stored)))
}
