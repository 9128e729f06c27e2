//! Errors

use salvo::http::StatusError;
use tracing::error;

use showroom_app::{domain::orders::OrdersServiceError, flows::CheckoutError};

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData
        | OrdersServiceError::InvalidAmount(_) => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn checkout_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::Form(source) => StatusError::bad_request().brief(source.to_string()),
        CheckoutError::Persistence(source) => {
            error!("failed to place order: {source}");

            StatusError::internal_server_error().brief("Failed to place order, please try again")
        }
    }
}
