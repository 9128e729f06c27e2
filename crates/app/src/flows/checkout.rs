//! Order submission

use std::sync::Arc;

use showroom::{
    cart::{self, CartStore},
    orders::{CheckoutForm, CheckoutFormError, OrderDraft, PaymentMethod},
};
use thiserror::Error;
use tracing::{error, info};

use crate::domain::orders::{
    OrdersService, OrdersServiceError,
    records::{OrderRecord, OrderUuid},
};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Form(#[from] CheckoutFormError),

    #[error("failed to place order, please try again")]
    Persistence(#[source] OrdersServiceError),
}

/// A placed order and where to send the shopper next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order: OrderRecord,
    pub redirect: String,
}

/// Path of the confirmation view for an order.
#[must_use]
pub fn confirmation_path(order: OrderUuid) -> String {
    format!("/checkout/confirmation?order_id={order}")
}

#[derive(Clone)]
pub struct CheckoutFlow {
    orders: Arc<dyn OrdersService>,
}

impl CheckoutFlow {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>) -> Self {
        Self { orders }
    }

    /// Turn the cart into a pending order.
    ///
    /// The cart is cleared only after the order has been stored; on any error
    /// it keeps its contents so the shopper can retry.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Form`] for an incomplete form (nothing is sent
    /// to storage) and [`CheckoutError::Persistence`] when the order could not
    /// be stored.
    pub async fn submit(
        &self,
        cart: &mut CartStore,
        form: &CheckoutForm,
        payment_method: PaymentMethod,
        user_id: Option<String>,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let draft = OrderDraft::from_cart(cart, form, payment_method, user_id)?;

        let order = self.orders.create_order(draft).await.map_err(|source| {
            let products = cart::product_ids(cart);

            error!(error = %source, ?products, "order submission failed");

            CheckoutError::Persistence(source)
        })?;

        info!(
            order = %order.uuid,
            total_amount = order.total_amount,
            items = order.order_items.len(),
            "order submitted"
        );

        cart.clear();

        Ok(OrderConfirmation {
            redirect: confirmation_path(order.uuid),
            order,
        })
    }
}

impl std::fmt::Debug for CheckoutFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutFlow").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use showroom::{
        cart::NewCartItem,
        orders::{OrderField, OrderStatus},
    };
    use testresult::TestResult;

    use crate::{domain::orders::MockOrdersService, test::helpers::order_record};

    use super::*;

    fn cart() -> TestResult<CartStore> {
        let mut cart = CartStore::new();

        cart.add(NewCartItem {
            id: "wp1".to_string(),
            name: "Classic Wall Panel".to_string(),
            price: 1_000,
            image: "/images/wall-panel-1.jpg".to_string(),
        });
        cart.add(NewCartItem {
            id: "mb1".to_string(),
            name: "Mini Blind".to_string(),
            price: 500,
            image: "/images/mini-blinder-1.jpg".to_string(),
        });
        cart.update_quantity("wp1", 2)?;

        Ok(cart)
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Ayesha Khan".to_string(),
            phone: "0300 1234567".to_string(),
            address: "12 Canal Road".to_string(),
            city: "Lahore".to_string(),
            notes: "Call before delivery".to_string(),
        }
    }

    #[tokio::test]
    async fn successful_submission_clears_cart_and_redirects() -> TestResult {
        let mut orders = MockOrdersService::new();
        let stored = order_record(OrderStatus::Pending);
        let stored_uuid = stored.uuid;

        orders
            .expect_create_order()
            .once()
            .withf(|draft| {
                draft.total_amount == 2_500
                    && draft.order_items.len() == 2
                    && draft.user_id.as_deref() == Some("user_2a")
                    && draft.notes == "Call before delivery"
            })
            .return_once(move |_| Ok(stored));

        let flow = CheckoutFlow::new(Arc::new(orders));
        let mut cart = cart()?;

        let confirmation = flow
            .submit(
                &mut cart,
                &form(),
                PaymentMethod::CashOnDelivery,
                Some("user_2a".to_string()),
            )
            .await?;

        assert!(cart.is_empty());
        assert_eq!(confirmation.order.uuid, stored_uuid);
        assert_eq!(
            confirmation.redirect,
            format!("/checkout/confirmation?order_id={stored_uuid}")
        );

        Ok(())
    }

    #[tokio::test]
    async fn persistence_failure_keeps_cart_contents() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let flow = CheckoutFlow::new(Arc::new(orders));
        let mut cart = cart()?;
        let before = cart.clone();

        let result = flow
            .submit(&mut cart, &form(), PaymentMethod::BankTransfer, None)
            .await;

        assert!(matches!(result, Err(CheckoutError::Persistence(_))));
        assert_eq!(cart, before);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_storage() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let flow = CheckoutFlow::new(Arc::new(orders));
        let mut cart = cart()?;

        let form = CheckoutForm {
            phone: " ".to_string(),
            ..form()
        };

        let result = flow
            .submit(&mut cart, &form, PaymentMethod::CashOnDelivery, None)
            .await;

        assert!(matches!(
            result,
            Err(CheckoutError::Form(CheckoutFormError::Required(
                OrderField::Phone
            )))
        ));
        assert_eq!(cart.total_items(), 3);

        Ok(())
    }
}
