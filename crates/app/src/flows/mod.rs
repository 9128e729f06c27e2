//! Storefront flows
//!
//! Each flow validates its input, talks to one persistence service and only
//! touches local state once the service has confirmed the write.

pub mod admin;
pub mod checkout;
pub mod contact;
pub mod feedback;

pub use admin::{AdminError, OrderDashboard, OrderSummary};
pub use checkout::{CheckoutError, CheckoutFlow, OrderConfirmation, confirmation_path};
pub use contact::{ContactError, ContactFlow};
pub use feedback::{FeedbackError, FeedbackFlow};
