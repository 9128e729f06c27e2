//! Errors

use salvo::http::StatusError;
use tracing::error;

use showroom_app::flows::ContactError;

pub(crate) fn into_status_error(error: ContactError) -> StatusError {
    match error {
        ContactError::Validation(source) => StatusError::bad_request().brief(source.to_string()),
        ContactError::Persistence(source) => {
            error!("contact storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
