//! HTTP-backed repositories, one per resource family

mod auth;
mod cart;
mod product;

pub use auth::HttpAuthRepository;
pub use cart::HttpCartRepository;
pub use product::HttpProductRepository;
