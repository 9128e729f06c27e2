//! Showroom
//!
//! Storefront domain for a furniture retailer: the static catalog, the
//! session-scoped shopping cart, order drafting and the validation rules for
//! customer feedback and contact messages. Nothing in this crate performs I/O.

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod feedback;
pub mod orders;
pub mod prelude;
pub mod pricing;
