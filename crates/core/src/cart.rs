//! Cart
//!
//! The cart is owned by whoever owns the shopper's session. It keeps at most
//! one line per product id, in the order products were first added. Totals are
//! derived from the lines on every read.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{catalog::Product, pricing};

/// Largest quantity a single cart line accepts from free-text input.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Errors from cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A line quantity was set to zero; remove the line instead.
    #[error("quantity for {0} must be at least 1")]
    ZeroQuantity(String),
}

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier
    pub id: String,

    /// Product name at the time it was added
    pub name: String,

    /// Unit price in whole currency units
    pub price: u64,

    /// Image reference
    pub image: String,

    /// Number of units, at least 1
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity.
    pub fn line_total(&self) -> u64 {
        pricing::line_total(self.price, self.quantity)
    }
}

/// Product details for [`CartStore::add`]; the quantity is owned by the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price in whole currency units
    pub price: u64,

    /// Image reference
    pub image: String,
}

impl From<&Product> for NewCartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Quantity parsed from user input, always within `1..=MAX_LINE_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// Clamp an arbitrary integer into the accepted range.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(1, i64::from(MAX_LINE_QUANTITY));

        Self(u32::try_from(clamped).unwrap_or(MAX_LINE_QUANTITY))
    }

    /// The quantity as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

/// Cart Store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product. A product already in the cart has its
    /// quantity incremented; otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, item: impl Into<NewCartItem>) {
        let item = item.into();

        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartItem {
            id: item.id,
            name: item.name,
            price: item.price,
            image: item.image,
            quantity: 1,
        });
    }

    /// Remove a line. Removing an id that is not in the cart does nothing.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|line| line.id != id);
    }

    /// Set the quantity of an existing line. Unknown ids are ignored, whatever
    /// the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] when `quantity` is zero for a line
    /// in the cart; the cart is left unchanged.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<(), CartError> {
        let Some(line) = self.line_mut(id) else {
            return Ok(());
        };

        if quantity == 0 {
            return Err(CartError::ZeroQuantity(id.to_string()));
        }

        line.quantity = quantity;

        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line by product id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |total: u64, line| total.saturating_add(line.line_total()))
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|line| line.id == id)
    }
}

impl From<Vec<CartItem>> for CartStore {
    /// Restore a cart from stored lines, merging repeated ids and dropping
    /// zero-quantity lines.
    fn from(lines: Vec<CartItem>) -> Self {
        let mut items: Vec<CartItem> = Vec::with_capacity(lines.len());

        for line in lines.into_iter().filter(|line| line.quantity > 0) {
            match items.iter_mut().find(|existing| existing.id == line.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => items.push(line),
            }
        }

        Self { items }
    }
}

impl From<CartStore> for Vec<CartItem> {
    fn from(cart: CartStore) -> Self {
        cart.items
    }
}

impl FromIterator<NewCartItem> for CartStore {
    fn from_iter<I: IntoIterator<Item = NewCartItem>>(iter: I) -> Self {
        let mut cart = Self::new();

        for item in iter {
            cart.add(item);
        }

        cart
    }
}

/// Product ids in the cart, for logging.
pub fn product_ids(cart: &CartStore) -> SmallVec<[&str; 8]> {
    cart.items.iter().map(|line| line.id.as_str()).collect()
}
