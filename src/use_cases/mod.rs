//! Orchestration between view models and repositories
//!
//! Each use case delegates straight to its repository. They exist so view
//! models depend on one stable entry point per feature.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Cart, CartProduct, Product, ProductDetail, ProductPage, User};
use crate::traits::{AuthRepository, CartRepository, ProductRepository};

#[derive(Clone)]
pub struct AuthUseCase {
    repository: Arc<dyn AuthRepository>,
}

impl AuthUseCase {
    pub fn new(repository: Arc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        self.repository.login(username, password).await
    }

    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<User, ApiError> {
        self.repository.signup(username, email, password).await
    }
}

#[derive(Clone)]
pub struct ProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl ProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn fetch_product_page(&self, skip: u32, limit: u32) -> Result<ProductPage, ApiError> {
        self.repository.fetch_product_page(skip, limit).await
    }

    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.repository.search_products(query).await
    }

    pub async fn fetch_product_detail(&self, id: u64) -> Result<ProductDetail, ApiError> {
        self.repository.fetch_product_detail(id).await
    }
}

#[derive(Clone)]
pub struct CartUseCase {
    repository: Arc<dyn CartRepository>,
}

impl CartUseCase {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }

    pub async fn fetch_cart(&self) -> Result<Cart, ApiError> {
        self.repository.fetch_cart().await
    }

    pub async fn update_cart(&self, products: &[CartProduct]) -> Result<Cart, ApiError> {
        self.repository.update_cart(products).await
    }
}
