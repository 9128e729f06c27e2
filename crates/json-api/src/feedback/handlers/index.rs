//! Feedback Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showroom::feedback::{self, Rating};

use crate::{
    extensions::*,
    feedback::{errors::into_status_error, models::FeedbackResponse},
    state::State,
};

/// Feedback Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FeedbackListResponse {
    /// Matching testimonials, newest first
    pub feedback: Vec<FeedbackResponse>,

    /// Mean rating of the matching testimonials
    pub average_rating: Option<f64>,
}

fn parse_rating(rating: Option<i64>) -> Result<Option<Rating>, StatusError> {
    match rating {
        None => Ok(None),
        Some(value) if (1..=5).contains(&value) => Ok(Some(Rating::clamped(value))),
        Some(value) => {
            Err(StatusError::bad_request().brief(format!("rating must be 1 to 5, got {value}")))
        }
    }
}

/// Feedback Index Handler
///
/// Returns testimonials, newest first, optionally narrowed to one customer
/// role and one star rating.
#[endpoint(tags("feedback"), summary = "List Feedback")]
pub(crate) async fn handler(
    role: QueryParam<String, false>,
    rating: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<FeedbackListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let rating = parse_rating(rating.into_inner())?;
    let role = role.into_inner().filter(|role| !role.trim().is_empty());

    let all = state
        .app
        .feedback_flow()
        .recent()
        .await
        .map_err(into_status_error)?;

    let matching = feedback::filter(&all, role.as_deref(), rating);

    Ok(Json(FeedbackListResponse {
        average_rating: feedback::average_rating(&matching),
        feedback: matching.into_iter().map(FeedbackResponse::from).collect(),
    }))
}
