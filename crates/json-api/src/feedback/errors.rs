//! Errors

use salvo::http::StatusError;
use tracing::error;

use showroom_app::flows::FeedbackError;

pub(crate) fn into_status_error(error: FeedbackError) -> StatusError {
    match error {
        FeedbackError::Validation(source) => StatusError::bad_request().brief(source.to_string()),
        FeedbackError::Persistence(source) => {
            error!("feedback storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
