//! Customer feedback
//!
//! Validation of testimonial submissions and the ordering and filtering rules
//! used when showing them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a feedback submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackValidationError {
    /// A required field is blank.
    #[error("{0} is required")]
    Required(&'static str),

    /// The email address is not shaped like one.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// No purchased items were listed.
    #[error("at least one purchased item is required")]
    NoPurchasedItems,
}

/// Star rating between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating
    pub const MIN: Self = Self(1);

    /// Highest rating, and the default for new submissions
    pub const MAX: Self = Self(5);

    /// Clamp an arbitrary integer into `1..=5`.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));

        Self(u8::try_from(clamped).unwrap_or(Self::MAX.0))
    }

    /// The rating as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A testimonial as entered by a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    /// Customer name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Customer role, e.g. "Home Owner"
    pub role: String,

    /// Customer location
    pub location: String,

    /// Star rating
    #[serde(default)]
    pub rating: Rating,

    /// Products the customer bought
    #[serde(default)]
    pub purchased_items: Vec<String>,

    /// Product the feedback is mainly about
    #[serde(default)]
    pub product_name: String,

    /// The testimonial itself
    pub feedback_text: String,
}

impl FeedbackSubmission {
    /// Check the submission and return a trimmed copy.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedbackValidationError`] for blank required fields, a
    /// malformed email, or an empty purchased item list.
    pub fn validate(&self) -> Result<Self, FeedbackValidationError> {
        let name = required("name", &self.name)?;
        let email = self.email.trim();

        if !is_valid_email(email) {
            return Err(FeedbackValidationError::InvalidEmail(email.to_string()));
        }

        let role = required("role", &self.role)?;
        let location = required("location", &self.location)?;

        let purchased_items: Vec<String> = self
            .purchased_items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if purchased_items.is_empty() {
            return Err(FeedbackValidationError::NoPurchasedItems);
        }

        let feedback_text = required("feedback text", &self.feedback_text)?;

        Ok(Self {
            name,
            email: email.to_string(),
            role,
            location,
            rating: self.rating,
            purchased_items,
            product_name: self.product_name.trim().to_string(),
            feedback_text,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FeedbackValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(FeedbackValidationError::Required(field));
    }

    Ok(value.to_string())
}

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Split a comma-separated list of purchased items, dropping blanks.
pub fn parse_purchased_items(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Anything shown on the testimonials page.
pub trait Testimonial {
    /// Star rating
    fn rating(&self) -> Rating;

    /// Customer role
    fn role(&self) -> &str;
}

impl<T: Testimonial + ?Sized> Testimonial for &T {
    fn rating(&self) -> Rating {
        (**self).rating()
    }

    fn role(&self) -> &str {
        (**self).role()
    }
}

impl Testimonial for FeedbackSubmission {
    fn rating(&self) -> Rating {
        self.rating
    }

    fn role(&self) -> &str {
        &self.role
    }
}

/// Highest-rated testimonials first, at most `limit` of them. Equal ratings
/// keep their input order.
pub fn top_rated<T: Testimonial>(testimonials: &[T], limit: usize) -> Vec<&T> {
    let mut ranked: Vec<&T> = testimonials.iter().collect();

    ranked.sort_by_key(|testimonial| std::cmp::Reverse(testimonial.rating()));
    ranked.truncate(limit);

    ranked
}

/// Testimonials matching a role and rating. `None` matches anything.
pub fn filter<'a, T: Testimonial>(
    testimonials: &'a [T],
    role: Option<&str>,
    rating: Option<Rating>,
) -> Vec<&'a T> {
    testimonials
        .iter()
        .filter(|testimonial| role.is_none_or(|role| testimonial.role() == role))
        .filter(|testimonial| rating.is_none_or(|rating| testimonial.rating() == rating))
        .collect()
}

/// Mean rating, or `None` when there is nothing to average.
pub fn average_rating<T: Testimonial>(testimonials: &[T]) -> Option<f64> {
    if testimonials.is_empty() {
        return None;
    }

    let sum: u32 = testimonials
        .iter()
        .map(|testimonial| u32::from(testimonial.rating().get()))
        .sum();

    let count = u32::try_from(testimonials.len()).ok()?;

    Some(f64::from(sum) / f64::from(count))
}
