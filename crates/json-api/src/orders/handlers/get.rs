//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use showroom_app::domain::orders::records::OrderUuid;
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Get Order Handler
///
/// Returns an order for its confirmation view. Shoppers only see their own
/// orders; administrators see any.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let order = state
        .app
        .orders
        .get_order(OrderUuid::from_uuid(order.into_inner()))
        .await
        .map_err(into_status_error)?;

    let owned = order.user_id.as_deref() == Some(session.user_id.as_str());

    if !owned && !session.is_admin() {
        return Err(StatusError::not_found().brief("Order not found"));
    }

    Ok(Json(order.into()))
}
