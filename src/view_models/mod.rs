//! UI-observable state holders, one per screen
//!
//! View models are the only layer that catches errors; they keep them as
//! display strings next to whatever data was loaded before.

mod auth;
mod cart;
mod product;
mod product_detail;

pub use auth::{AuthState, AuthViewModel};
pub use cart::{CartPhase, CartState, CartViewModel};
pub use product::{PAGE_SIZE, ProductListState, ProductViewModel};
pub use product_detail::{ProductDetailState, ProductDetailViewModel};
