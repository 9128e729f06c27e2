//! Showroom Domain Concerns

pub mod contacts;
pub mod feedback;
pub mod orders;
