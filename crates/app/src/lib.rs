//! Showroom application services: persistence, the identity provider client
//! and the storefront flows built on top of them.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod flows;

#[cfg(test)]
mod test;

mod uuids;
