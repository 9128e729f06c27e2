//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showroom::orders::OrderStatus;
use showroom_app::domain::orders::records::OrderUuid;
use uuid::Uuid;

use crate::{
    admin::errors::into_status_error, extensions::*, orders::models::OrderResponse, state::State,
};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// `pending` or `completed`
    pub status: String,
}

/// Update Order Status Handler
///
/// Moves an order between pending and completed.
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .or_400("invalid status")?;

    let updated = state
        .app
        .dashboard()
        .set_status(OrderUuid::from_uuid(order.into_inner()), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
