//! Admin Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    admin::errors::into_status_error, extensions::*, orders::models::OrderResponse, state::State,
};

/// Order counts.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderSummaryResponse {
    /// Every order
    pub total: usize,

    /// Orders awaiting fulfilment
    pub pending: usize,

    /// Fulfilled orders
    pub completed: usize,
}

/// Admin Orders Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminOrdersResponse {
    /// Counts by status
    pub summary: OrderSummaryResponse,

    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// Admin Order Index Handler
///
/// Returns every order, newest first, with counts by status.
#[endpoint(
    tags("admin"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders listed"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AdminOrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let mut dashboard = state.app.dashboard();

    dashboard.refresh().await.map_err(into_status_error)?;

    let summary = dashboard.summary();

    Ok(Json(AdminOrdersResponse {
        summary: OrderSummaryResponse {
            total: summary.total,
            pending: summary.pending,
            completed: summary.completed,
        },
        orders: dashboard
            .orders()
            .iter()
            .cloned()
            .map(OrderResponse::from)
            .collect(),
    }))
}
