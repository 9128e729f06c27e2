//! Order administration

use std::sync::Arc;

use serde::Serialize;
use showroom::orders::{CheckoutFormError, OrderField, OrderStatus};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::orders::{
    OrdersService, OrdersServiceError,
    records::{OrderRecord, OrderUuid},
};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] CheckoutFormError),

    #[error("order not found")]
    NotFound,

    #[error("failed to update order")]
    Persistence(#[source] OrdersServiceError),
}

impl From<OrdersServiceError> for AdminError {
    fn from(error: OrdersServiceError) -> Self {
        match error {
            OrdersServiceError::NotFound => Self::NotFound,
            other => Self::Persistence(other),
        }
    }
}

/// Order counts shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Administrator's view of all orders.
///
/// Mutations go to storage first; the cached copy is only replaced with the
/// record storage returns. Concurrent edits from other dashboards are last
/// write wins.
pub struct OrderDashboard {
    orders: Arc<dyn OrdersService>,
    cache: Vec<OrderRecord>,
}

impl OrderDashboard {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>) -> Self {
        Self {
            orders,
            cache: Vec::new(),
        }
    }

    /// Reload every order, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Persistence`] when orders cannot be loaded; the
    /// previous cache is kept.
    pub async fn refresh(&mut self) -> Result<&[OrderRecord], AdminError> {
        self.cache = self.orders.list_orders().await?;

        Ok(&self.cache)
    }

    /// Cached orders from the last refresh, newest first.
    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        &self.cache
    }

    /// Fetch a single order from storage.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for unknown ids.
    pub async fn order(&self, order: OrderUuid) -> Result<OrderRecord, AdminError> {
        Ok(self.orders.get_order(order).await?)
    }

    /// Change an order's status.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] or [`AdminError::Persistence`]; the
    /// cache is untouched in both cases.
    pub async fn set_status(
        &mut self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, AdminError> {
        let updated = self
            .orders
            .update_status(order, status)
            .await
            .inspect_err(|error| warn!(%order, %status, %error, "status update failed"))?;

        info!(%order, %status, "order status changed");

        Ok(self.mirror(updated))
    }

    /// Overwrite one customer field.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] without calling storage when a
    /// required field would be blanked, otherwise as [`Self::set_status`].
    pub async fn edit_field(
        &mut self,
        order: OrderUuid,
        field: OrderField,
        value: &str,
    ) -> Result<OrderRecord, AdminError> {
        let value = field.normalise(value)?;

        let updated = self
            .orders
            .update_field(order, field, value)
            .await
            .inspect_err(|error| warn!(%order, %field, %error, "order edit failed"))?;

        info!(%order, %field, "order field edited");

        Ok(self.mirror(updated))
    }

    /// Counts over the cached orders.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        self.cache
            .iter()
            .fold(OrderSummary::default(), |mut summary, order| {
                summary.total += 1;

                match order.status {
                    OrderStatus::Pending => summary.pending += 1,
                    OrderStatus::Completed => summary.completed += 1,
                }

                summary
            })
    }

    fn mirror(&mut self, updated: OrderRecord) -> OrderRecord {
        if let Some(cached) = self
            .cache
            .iter_mut()
            .find(|cached| cached.uuid == updated.uuid)
        {
            cached.clone_from(&updated);
        }

        updated
    }
}

impl std::fmt::Debug for OrderDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderDashboard")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
