//! Top Feedback Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use showroom_app::flows::feedback::DEFAULT_TOP_LIMIT;

use crate::{
    extensions::*,
    feedback::{errors::into_status_error, models::FeedbackResponse},
    state::State,
};

/// Largest `limit` accepted by the top feedback endpoint.
const MAX_TOP_LIMIT: u32 = 20;

/// Top Feedback Handler
///
/// Returns the highest-rated testimonials, three by default.
#[endpoint(tags("feedback"), summary = "Top Feedback")]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<FeedbackResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let limit = limit
        .into_inner()
        .unwrap_or(DEFAULT_TOP_LIMIT)
        .min(MAX_TOP_LIMIT);

    let top = state
        .app
        .feedback_flow()
        .top(limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(top.iter().map(FeedbackResponse::from).collect()))
}
