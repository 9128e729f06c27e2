//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use showroom::orders::{OrderDraft, OrderField, OrderItem, OrderStatus};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};

use crate::domain::orders::records::{OrderRecord, OrderUuid};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const UPDATE_ORDER_FIELD_SQL: &str = include_str!("sql/update_order_field.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        draft: &OrderDraft,
        total_amount: i64,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(draft.user_id.as_deref())
            .bind(&draft.customer_name)
            .bind(&draft.phone)
            .bind(&draft.address)
            .bind(&draft.city)
            .bind(&draft.notes)
            .bind(draft.payment_method.as_str())
            .bind(total_amount)
            .bind(OrderStatus::Pending.as_str())
            .bind(Json(&draft.order_items))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_field(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        field: OrderField,
        value: &str,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_FIELD_SQL)
            .bind(order.into_uuid())
            .bind(field.column())
            .bind(value)
            .fetch_one(&mut **tx)
            .await
    }
}

fn decode_error(
    column: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total_amount = u64::try_from(row.try_get::<i64, _>("total_amount")?)
            .map_err(|error| decode_error("total_amount", error))?;

        let payment_method = row
            .try_get::<&str, _>("payment_method")?
            .parse()
            .map_err(|error| decode_error("payment_method", error))?;

        let status = row
            .try_get::<&str, _>("status")?
            .parse()
            .map_err(|error| decode_error("status", error))?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_id: row.try_get("user_id")?,
            customer_name: row.try_get("customer_name")?,
            phone: row.try_get("phone")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            notes: row.try_get("notes")?,
            payment_method,
            total_amount,
            status,
            order_items: row
                .try_get::<Json<Vec<OrderItem>>, _>("order_items")?
                .0,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
