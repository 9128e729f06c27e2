//! Orders
//!
//! Everything about an order that can be decided without talking to storage:
//! the checkout form, the draft built from a cart, and the closed sets of
//! payment methods, statuses and editable fields.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cart::CartStore, pricing};

/// Errors raised while validating checkout or order edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutFormError {
    /// A required field is blank.
    #[error("{0} is required")]
    Required(OrderField),
}

/// Errors raised when parsing one of the closed order enums from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderParseError {
    /// Not a known payment method
    #[error("unknown payment method: {0}")]
    PaymentMethod(String),

    /// Not a known order status
    #[error("unknown order status: {0}")]
    Status(String),

    /// Not an editable order field
    #[error("unknown order field: {0}")]
    Field(String),
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery
    #[serde(rename = "cod")]
    CashOnDelivery,

    /// Bank transfer
    #[serde(rename = "bank")]
    BankTransfer,
}

impl PaymentMethod {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cod",
            Self::BankTransfer => "bank",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = OrderParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cod" => Ok(Self::CashOnDelivery),
            "bank" => Ok(Self::BankTransfer),
            other => Err(OrderParseError::PaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fulfilment status. New orders start as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting fulfilment
    #[default]
    Pending,

    /// Fulfilled
    Completed,
}

impl OrderStatus {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = OrderParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(OrderParseError::Status(other.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cart line frozen at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product identifier
    pub product_id: String,

    /// Product name
    pub product_name: String,

    /// Unit price in whole currency units
    pub price: u64,

    /// Units ordered
    pub quantity: u32,

    /// `price * quantity`
    pub total: u64,
}

/// Customer metadata fields an administrator may edit after submission.
///
/// Line items and the total are not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    /// Customer name
    CustomerName,

    /// Contact phone number
    Phone,

    /// Delivery address
    Address,

    /// Delivery city
    City,

    /// Free-text notes
    Notes,
}

impl OrderField {
    /// Every editable field.
    pub const ALL: [Self; 5] = [
        Self::CustomerName,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::Notes,
    ];

    /// Column name in the orders table.
    pub fn column(self) -> &'static str {
        match self {
            Self::CustomerName => "customer_name",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::Notes => "notes",
        }
    }

    /// Whether the field may not be blank.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Notes)
    }

    /// Trim a new value for this field, rejecting blanks for required fields.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutFormError::Required`] when a required field is blank.
    pub fn normalise(self, value: &str) -> Result<String, CheckoutFormError> {
        let value = value.trim();

        if value.is_empty() && self.is_required() {
            return Err(CheckoutFormError::Required(self));
        }

        Ok(value.to_string())
    }
}

impl FromStr for OrderField {
    type Err = OrderParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.column() == value)
            .ok_or_else(|| OrderParseError::Field(value.to_string()))
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Customer details captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    /// Customer name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Delivery address
    pub address: String,

    /// Delivery city
    pub city: String,

    /// Optional notes
    #[serde(default)]
    pub notes: String,
}

impl CheckoutForm {
    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutFormError::Required`] naming the first blank field.
    pub fn validate(&self) -> Result<(), CheckoutFormError> {
        self.normalised().map(|_form| ())
    }

    fn normalised(&self) -> Result<Self, CheckoutFormError> {
        Ok(Self {
            name: OrderField::CustomerName.normalise(&self.name)?,
            phone: OrderField::Phone.normalise(&self.phone)?,
            address: OrderField::Address.normalise(&self.address)?,
            city: OrderField::City.normalise(&self.city)?,
            notes: OrderField::Notes.normalise(&self.notes)?,
        })
    }
}

/// An order ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    /// Signed-in customer, if any
    pub user_id: Option<String>,

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

    /// Payment method
    pub payment_method: PaymentMethod,

    /// Sum of item totals
    pub total_amount: u64,

    /// Snapshot of the cart, one item per cart line
    pub order_items: Vec<OrderItem>,
}

impl OrderDraft {
    /// Build a draft from the cart's current lines and a validated form.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutFormError`] when the form is missing a required field.
    pub fn from_cart(
        cart: &CartStore,
        form: &CheckoutForm,
        payment_method: PaymentMethod,
        user_id: Option<String>,
    ) -> Result<Self, CheckoutFormError> {
        let form = form.normalised()?;

        let order_items: Vec<OrderItem> = cart
            .items()
            .iter()
            .map(|line| OrderItem {
                product_id: line.id.clone(),
                product_name: line.name.clone(),
                price: line.price,
                quantity: line.quantity,
                total: pricing::line_total(line.price, line.quantity),
            })
            .collect();

        let total_amount = order_items
            .iter()
            .fold(0, |total: u64, item| total.saturating_add(item.total));

        Ok(Self {
            user_id,
            customer_name: form.name,
            phone: form.phone,
            address: form.address,
            city: form.city,
            notes: form.notes,
            payment_method,
            total_amount,
            order_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::cart::NewCartItem;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Ayesha Khan".to_string(),
            phone: "0300 1234567".to_string(),
            address: " 12 Canal Road ".to_string(),
            city: "Lahore".to_string(),
            notes: String::new(),
        }
    }

    fn cart() -> TestResult<CartStore> {
        let mut cart = CartStore::new();

        cart.add(NewCartItem {
            id: "wp1".to_string(),
            name: "Wall Panel".to_string(),
            price: 1_000,
            image: "wp1.jpg".to_string(),
        });
        cart.add(NewCartItem {
            id: "mb1".to_string(),
            name: "Mini Blind".to_string(),
            price: 500,
            image: "mb1.jpg".to_string(),
        });
        cart.update_quantity("wp1", 2)?;

        Ok(cart)
    }

    #[test]
    fn draft_totals_match_cart_lines() -> TestResult {
        let draft = OrderDraft::from_cart(&cart()?, &form(), PaymentMethod::CashOnDelivery, None)?;

        let totals: Vec<u64> = draft.order_items.iter().map(|item| item.total).collect();

        assert_eq!(draft.total_amount, 2_500);
        assert_eq!(totals, [2_000, 500]);
        assert_eq!(draft.address, "12 Canal Road");

        Ok(())
    }

    #[test]
    fn blank_required_field_is_rejected() -> TestResult {
        let form = CheckoutForm {
            city: "   ".to_string(),
            ..form()
        };

        assert_eq!(
            OrderDraft::from_cart(&cart()?, &form, PaymentMethod::BankTransfer, None),
            Err(CheckoutFormError::Required(OrderField::City))
        );

        Ok(())
    }

    #[test]
    fn notes_may_be_blank() {
        assert_eq!(OrderField::Notes.normalise("  "), Ok(String::new()));
        assert_eq!(
            OrderField::Phone.normalise(""),
            Err(CheckoutFormError::Required(OrderField::Phone))
        );
    }

    #[test]
    fn enums_parse_their_stored_form() -> TestResult {
        assert_eq!("cod".parse::<PaymentMethod>()?, PaymentMethod::CashOnDelivery);
        assert_eq!("completed".parse::<OrderStatus>()?, OrderStatus::Completed);
        assert_eq!("customer_name".parse::<OrderField>()?, OrderField::CustomerName);
        assert!("total_amount".parse::<OrderField>().is_err());
        assert!("cheque".parse::<PaymentMethod>().is_err());

        Ok(())
    }

    #[test]
    fn payment_method_serialises_as_short_code() -> TestResult {
        assert_eq!(serde_json::to_string(&PaymentMethod::BankTransfer)?, "\"bank\"");
        assert_eq!(serde_json::to_string(&OrderStatus::Pending)?, "\"pending\"");

        Ok(())
    }
}
