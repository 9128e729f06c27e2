//! Edit Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showroom::orders::OrderField;
use showroom_app::domain::orders::records::OrderUuid;
use uuid::Uuid;

use crate::{
    admin::errors::into_status_error, extensions::*, orders::models::OrderResponse, state::State,
};

/// Edit Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EditOrderRequest {
    /// One of `customer_name`, `phone`, `address`, `city` or `notes`
    pub field: String,

    /// New value; only notes may be blank
    pub value: String,
}

/// Edit Order Handler
///
/// Overwrites one customer field. Line items and totals cannot be edited.
#[endpoint(
    tags("admin"),
    summary = "Edit Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order edited"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown field or blank value"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<EditOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let field = request
        .field
        .parse::<OrderField>()
        .or_400("invalid field")?;

    let updated = state
        .app
        .dashboard()
        .edit_field(OrderUuid::from_uuid(order.into_inner()), field, &request.value)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use showroom::orders::OrderStatus;
    use showroom_app::{
        auth::Role,
        domain::orders::{MockOrdersService, records::OrderRecord},
    };
    use testresult::TestResult;

    use crate::test_helpers::{make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> TestResult<Service> {
        orders_service(
            orders,
            Role::Admin,
            Router::with_path("admin/orders/{order}").patch(handler),
        )
    }

    #[tokio::test]
    async fn test_edit_trims_and_stores_value() -> TestResult {
        let mut orders = MockOrdersService::new();
        let uuid = Uuid::now_v7();

        orders
            .expect_update_field()
            .once()
            .withf(move |order, field, value| {
                order.into_uuid() == uuid && *field == OrderField::City && value == "Karachi"
            })
            .return_once(move |_, _, value| {
                Ok(OrderRecord {
                    city: value,
                    ..make_order(uuid, OrderStatus::Pending)
                })
            });

        let mut res = TestClient::patch(format!("http://example.com/admin/orders/{uuid}"))
            .json(&json!({ "field": "city", "value": "  Karachi " }))
            .send(&make_service(orders)?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.city, "Karachi");

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_required_field_returns_400_without_storing() -> TestResult {
        let mut orders = MockOrdersService::new();
        let uuid = Uuid::now_v7();

        orders.expect_update_field().never();

        let res = TestClient::patch(format!("http://example.com/admin/orders/{uuid}"))
            .json(&json!({ "field": "phone", "value": " " }))
            .send(&make_service(orders)?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_total_is_not_editable() -> TestResult {
        let mut orders = MockOrdersService::new();
        let uuid = Uuid::now_v7();

        orders.expect_update_field().never();

        let res = TestClient::patch(format!("http://example.com/admin/orders/{uuid}"))
            .json(&json!({ "field": "total_amount", "value": "1" }))
            .send(&make_service(orders)?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
