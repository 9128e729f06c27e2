use std::sync::Arc;

use clap::{Args, Subcommand};
use showroom::{
    orders::{OrderField, OrderStatus},
    pricing::format_price,
};
use showroom_app::{
    domain::orders::{PgOrdersService, records::OrderRecord, records::OrderUuid},
    flows::OrderDashboard,
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List every order, newest first
    List,

    /// Show one order with its line items
    Show {
        /// Order UUID
        order: OrderUuid,
    },

    /// Change an order's status
    SetStatus {
        /// Order UUID
        order: OrderUuid,

        /// New status (pending, completed)
        status: OrderStatus,
    },

    /// Overwrite one customer field
    Edit {
        /// Order UUID
        order: OrderUuid,

        /// Field to change (customer_name, phone, address, city, notes)
        field: OrderField,

        /// New value
        value: String,
    },
}

pub(crate) async fn run(command: OrdersCommand, service: PgOrdersService) -> Result<(), String> {
    let mut dashboard = OrderDashboard::new(Arc::new(service));

    match command.command {
        OrdersSubcommand::List => {
            let orders = dashboard
                .refresh()
                .await
                .map_err(|error| format!("failed to list orders: {error}"))?;

            if orders.is_empty() {
                println!("no orders found");
                return Ok(());
            }

            for order in orders {
                print_order(order);
                println!();
            }

            let summary = dashboard.summary();

            println!(
                "total: {}, pending: {}, completed: {}",
                summary.total, summary.pending, summary.completed
            );
        }
        OrdersSubcommand::Show { order } => {
            let order = dashboard
                .order(order)
                .await
                .map_err(|error| format!("failed to load order {order}: {error}"))?;

            print_order(&order);

            for item in &order.order_items {
                println!(
                    "  {} x{} @ {} = {}",
                    item.product_name,
                    item.quantity,
                    price(item.price),
                    price(item.total)
                );
            }
        }
        OrdersSubcommand::SetStatus { order, status } => {
            let order = dashboard
                .set_status(order, status)
                .await
                .map_err(|error| format!("failed to update order {order}: {error}"))?;

            println!("order {} is now {}", order.uuid, order.status);
        }
        OrdersSubcommand::Edit {
            order,
            field,
            value,
        } => {
            let order = dashboard
                .edit_field(order, field, &value)
                .await
                .map_err(|error| format!("failed to edit order {order}: {error}"))?;

            print_order(&order);
        }
    }

    Ok(())
}

fn price(amount: u64) -> String {
    format_price(amount).unwrap_or_else(|_| amount.to_string())
}

fn print_order(order: &OrderRecord) {
    println!("order_uuid: {}", order.uuid);
    println!("created_at: {}", order.created_at);
    println!("status: {}", order.status);
    println!("customer: {} ({})", order.customer_name, order.phone);
    println!("deliver_to: {}, {}", order.address, order.city);
    println!("payment_method: {}", order.payment_method);
    println!("total_amount: {}", price(order.total_amount));

    if !order.notes.is_empty() {
        println!("notes: {}", order.notes);
    }
}
