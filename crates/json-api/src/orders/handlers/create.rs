//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showroom::{
    cart::{CartStore, MAX_LINE_QUANTITY},
    catalog::Catalog,
    orders::{CheckoutForm, PaymentMethod},
};

use crate::{
    extensions::*,
    observability::record_order_submitted,
    orders::{errors::checkout_status_error, models::OrderResponse},
    state::State,
};

/// Cart line as held by the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineRequest {
    /// Product identifier
    pub id: String,

    /// Units wanted, 1 to 99
    pub quantity: u32,
}

/// Customer details.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerRequest {
    /// Customer name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Delivery address
    pub address: String,

    /// Delivery city
    pub city: String,

    /// Optional notes
    #[serde(default)]
    pub notes: String,
}

impl From<CustomerRequest> for CheckoutForm {
    fn from(request: CustomerRequest) -> Self {
        CheckoutForm {
            name: request.name,
            phone: request.phone,
            address: request.address,
            city: request.city,
            notes: request.notes,
        }
    }
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// Cart contents
    pub items: Vec<CartLineRequest>,

    /// Customer details
    pub customer: CustomerRequest,

    /// `cod` or `bank`
    pub payment_method: String,
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    /// The stored order
    pub order: OrderResponse,

    /// Confirmation view for the shopper
    pub redirect: String,
}

/// Rebuild the cart from catalog prices; the client only supplies ids and
/// quantities.
fn build_cart(catalog: &Catalog, lines: &[CartLineRequest]) -> Result<CartStore, StatusError> {
    let mut cart = CartStore::new();

    for line in lines {
        let location = catalog
            .product(&line.id)
            .ok_or_else(|| StatusError::bad_request().brief(format!("Unknown product: {}", line.id)))?;

        let quantity = cart
            .get(&line.id)
            .map_or(0, |existing| existing.quantity)
            .saturating_add(line.quantity);

        if quantity > MAX_LINE_QUANTITY {
            return Err(StatusError::bad_request().brief(format!(
                "At most {MAX_LINE_QUANTITY} units of {} per order",
                line.id
            )));
        }

        cart.add(location.product);
        cart.update_quantity(&line.id, quantity)
            .or_400("invalid cart line")?;
    }

    Ok(cart)
}

/// Create Order Handler
///
/// Places a pending order for the signed-in shopper from the posted cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or incomplete form"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;
    let request = json.into_inner();

    if request.items.is_empty() {
        return Err(StatusError::bad_request().brief("Your cart is empty"));
    }

    let payment_method = request
        .payment_method
        .parse::<PaymentMethod>()
        .or_400("invalid payment method")?;

    let mut cart = build_cart(&state.app.catalog, &request.items)?;

    let confirmation = state
        .app
        .checkout()
        .submit(
            &mut cart,
            &request.customer.into(),
            payment_method,
            Some(session.user_id.clone()),
        )
        .await
        .map_err(checkout_status_error)?;

    record_order_submitted(payment_method.as_str());

    res.add_header(LOCATION, format!("/orders/{}", confirmation.order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse {
        order: confirmation.order.into(),
        redirect: confirmation.redirect,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use showroom::orders::{OrderDraft, OrderStatus};
    use showroom_app::{
        auth::Role,
        domain::orders::{MockOrdersService, OrdersServiceError},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::test_helpers::{TEST_USER_ID, make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> TestResult<Service> {
        orders_service(orders, Role::Customer, Router::with_path("orders").post(handler))
    }

    fn customer() -> serde_json::Value {
        json!({
            "name": "Ayesha Khan",
            "phone": "0300 1234567",
            "address": "12 Canal Road",
            "city": "Lahore"
        })
    }

    #[tokio::test]
    async fn test_create_returns_201_with_catalog_prices() -> TestResult {
        let mut orders = MockOrdersService::new();
        let uuid = Uuid::now_v7();

        orders
            .expect_create_order()
            .once()
            .withf(|draft: &OrderDraft| {
                let totals: Vec<u64> = draft.order_items.iter().map(|item| item.total).collect();

                draft.user_id.as_deref() == Some(TEST_USER_ID)
                    && draft.payment_method == PaymentMethod::CashOnDelivery
                    && totals == [50_000, 8_000]
                    && draft.total_amount == 58_000
            })
            .return_once(move |_| Ok(make_order(uuid, OrderStatus::Pending)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "items": [
                    { "id": "wp1", "quantity": 2 },
                    { "id": "mb1", "quantity": 1 }
                ],
                "customer": customer(),
                "payment_method": "cod"
            }))
            .send(&make_service(orders)?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            res.headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some(format!("/orders/{uuid}").as_str())
        );

        let body: OrderCreatedResponse = res.take_json().await?;

        assert_eq!(body.order.uuid, uuid);
        assert_eq!(body.order.status, "pending");
        assert_eq!(body.redirect, format!("/checkout/confirmation?order_id={uuid}"));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "items": [],
                "customer": customer(),
                "payment_method": "cod"
            }))
            .send(&make_service(orders)?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_city_returns_400_without_storing() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "items": [{ "id": "wp1", "quantity": 1 }],
                "customer": {
                    "name": "Ayesha Khan",
                    "phone": "0300 1234567",
                    "address": "12 Canal Road",
                    "city": "  "
                },
                "payment_method": "bank"
            }))
            .send(&make_service(orders)?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(res.take_string().await?.contains("city is required"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_product_or_payment_method_returns_400() -> TestResult {
        for body in [
            json!({
                "items": [{ "id": "sofa9", "quantity": 1 }],
                "customer": customer(),
                "payment_method": "cod"
            }),
            json!({
                "items": [{ "id": "wp1", "quantity": 1 }],
                "customer": customer(),
                "payment_method": "cheque"
            }),
            json!({
                "items": [{ "id": "wp1", "quantity": 0 }],
                "customer": customer(),
                "payment_method": "cod"
            }),
            json!({
                "items": [{ "id": "wp1", "quantity": 60 }, { "id": "wp1", "quantity": 40 }],
                "customer": customer(),
                "payment_method": "cod"
            }),
        ] {
            let mut orders = MockOrdersService::new();

            orders.expect_create_order().never();

            let res = TestClient::post("http://example.com/orders")
                .json(&body)
                .send(&make_service(orders)?)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::InvalidData));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "items": [{ "id": "wp1", "quantity": 1 }],
                "customer": customer(),
                "payment_method": "cod"
            }))
            .send(&make_service(orders)?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[test]
    fn repeated_lines_are_merged() -> TestResult {
        let catalog = Catalog::furniture()?;

        let cart = build_cart(
            &catalog,
            &[
                CartLineRequest {
                    id: "bb1".to_string(),
                    quantity: 2,
                },
                CartLineRequest {
                    id: "bb1".to_string(),
                    quantity: 3,
                },
            ],
        )?;

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), 90_000);

        Ok(())
    }
}
