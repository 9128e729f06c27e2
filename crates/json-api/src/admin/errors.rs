//! Errors

use salvo::http::StatusError;
use tracing::error;

use showroom_app::flows::AdminError;

pub(crate) fn into_status_error(error: AdminError) -> StatusError {
    match error {
        AdminError::Validation(source) => StatusError::bad_request().brief(source.to_string()),
        AdminError::NotFound => StatusError::not_found().brief("Order not found"),
        AdminError::Persistence(source) => {
            error!("order administration failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
