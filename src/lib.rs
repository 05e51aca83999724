//! Client for a demo storefront API: catalog paging and search, product
//! details, login/signup and an optimistic cart.
//!
//! Layers, from the wire up: [`api::ApiClient`] → [`repositories`] →
//! [`use_cases`] → [`view_models`]. [`storefront::Storefront`] wires them.

pub mod api;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod repositories;
pub mod storefront;
pub mod traits;
pub mod use_cases;
pub mod view_models;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApiError, StoreError};
pub use storefront::Storefront;
