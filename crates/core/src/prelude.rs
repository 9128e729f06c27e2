//! Showroom prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartError, CartItem, CartStore, MAX_LINE_QUANTITY, NewCartItem, Quantity},
    catalog::{
        Catalog, CatalogError, Category, Product, ProductLocation, SearchResults, SubCategory,
    },
    contact::{ContactMessage, ContactValidationError},
    feedback::{
        FeedbackSubmission, FeedbackValidationError, Rating, Testimonial, is_valid_email,
        parse_purchased_items, top_rated,
    },
    orders::{
        CheckoutForm, CheckoutFormError, OrderDraft, OrderField, OrderItem, OrderParseError,
        OrderStatus, PaymentMethod,
    },
    pricing::{PriceError, format_price},
};
