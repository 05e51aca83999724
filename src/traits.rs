//! Traits and interfaces between the storefront layers

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, StoreError};
use crate::models::{Cart, CartProduct, Product, ProductDetail, ProductPage, User};

/// Key under which the access token is persisted
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Key under which the refresh token is persisted
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Typed JSON transport against a fixed base URL
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Fetch `path` and decode the body as `T`
    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send;

    /// Send `body` as JSON to `path` and decode the reply as `T`
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Replace the resource at `path` with `body` and decode the reply as `T`
    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError>;

    /// Registers a user through the API's generic create-user endpoint
    async fn signup(&self, username: &str, email: &str, password: &str)
    -> Result<User, ApiError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch one page of the catalog starting at `skip`
    async fn fetch_product_page(&self, skip: u32, limit: u32) -> Result<ProductPage, ApiError>;

    /// Free-text search; the query is escaped by the implementation
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError>;

    async fn fetch_product_detail(&self, id: u64) -> Result<ProductDetail, ApiError>;

    /// Same as [`fetch_product_page`](Self::fetch_product_page) without the paging counters
    async fn fetch_products(&self, skip: u32, limit: u32) -> Result<Vec<Product>, ApiError> {
        Ok(self.fetch_product_page(skip, limit).await?.products)
    }
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn fetch_cart(&self) -> Result<Cart, ApiError>;

    /// Replace the server-side line items with `products` and return the
    /// authoritative cart
    async fn update_cart(&self, products: &[CartProduct]) -> Result<Cart, ApiError>;
}

/// Key-value storage for credentials
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
