//! Feedback

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::FeedbackServiceError;
pub use service::*;
