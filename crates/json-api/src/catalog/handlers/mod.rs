//! Catalog Handlers

pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod product;
pub(crate) mod products;
pub(crate) mod search;
