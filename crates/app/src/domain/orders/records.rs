//! Order Records

use jiff::Timestamp;
use showroom::orders::{OrderItem, OrderStatus, PaymentMethod};

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_id: Option<String>,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub notes: String,
    pub payment_method: PaymentMethod,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub order_items: Vec<OrderItem>,
    pub created_at: Timestamp,
}
