//! The single cart of this install, read and replaced as a whole

use async_trait::async_trait;
use tracing::info;

use crate::dto::{CartDto, UpdateCartDto};
use crate::error::ApiError;
use crate::models::{Cart, CartProduct};
use crate::traits::{ApiService, CartRepository};

/// Only one cart is ever addressed
const CART_PATH: &str = "/carts/1";

pub struct HttpCartRepository<A> {
    api: A,
}

impl<A: ApiService> HttpCartRepository<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: ApiService> CartRepository for HttpCartRepository<A> {
    async fn fetch_cart(&self) -> Result<Cart, ApiError> {
        let response: CartDto = self.api.get(CART_PATH).await?;
        Ok(response.into_domain())
    }

    async fn update_cart(&self, products: &[CartProduct]) -> Result<Cart, ApiError> {
        info!("Replacing cart contents with {} line items", products.len());

        let request = UpdateCartDto::from(products);
        let response: CartDto = self.api.put(CART_PATH, &request).await?;
        Ok(response.into_domain())
    }
}
