//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use showroom::orders::{OrderDraft, OrderField, OrderStatus};

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        records::{OrderRecord, OrderUuid},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderRecord, OrdersServiceError> {
        let total_amount = i64::try_from(draft.total_amount)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_order(&mut tx, OrderUuid::new(), &draft, total_amount)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_status(&mut tx, order, status)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn update_field(
        &self,
        order: OrderUuid,
        field: OrderField,
        value: String,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_field(&mut tx, order, field, &value)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist a new pending order and return it with its assigned id.
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderRecord, OrdersServiceError>;

    /// All orders, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Change an order's status.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Overwrite one customer metadata field.
    async fn update_field(
        &self,
        order: OrderUuid,
        field: OrderField,
        value: String,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
