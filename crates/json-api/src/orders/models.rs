//! Order response bodies, shared with the admin routes.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use showroom::orders::OrderItem;
use showroom_app::domain::orders::records::OrderRecord;
use uuid::Uuid;

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Order identifier
    pub uuid: Uuid,

    /// Customer name
    pub customer_name: String,

    /// Contact phone number
    pub phone: String,

    /// Delivery address
    pub address: String,

    /// Delivery city
    pub city: String,

    /// Free-text notes
    pub notes: String,

    /// Payment method, `cod` or `bank`
    pub payment_method: String,

    /// Sum of item totals in whole currency units
    pub total_amount: u64,

    /// `pending` or `completed`
    pub status: String,

    /// Items frozen at submission
    pub order_items: Vec<OrderItemResponse>,

    /// When the order was placed
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            customer_name: order.customer_name,
            phone: order.phone,
            address: order.address,
            city: order.city,
            notes: order.notes,
            payment_method: order.payment_method.to_string(),
            total_amount: order.total_amount,
            status: order.status.to_string(),
            order_items: order
                .order_items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// Product identifier
    pub product_id: String,

    /// Product name at submission
    pub product_name: String,

    /// Unit price
    pub price: u64,

    /// Units ordered
    pub quantity: u32,

    /// Line total
    pub total: u64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
            total: item.total,
        }
    }
}
