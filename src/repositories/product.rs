//! Catalog paging, search and detail lookups

use async_trait::async_trait;
use tracing::info;

use crate::dto::{ProductDetailDto, ProductResponseDto};
use crate::error::ApiError;
use crate::models::{Product, ProductDetail, ProductPage};
use crate::traits::{ApiService, ProductRepository};

pub struct HttpProductRepository<A> {
    api: A,
}

impl<A: ApiService> HttpProductRepository<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Build the search path, escaping the free-text query
    fn search_path(query: &str) -> String {
        format!("/products/search?q={}", urlencoding::encode(query))
    }
}

#[async_trait]
impl<A: ApiService> ProductRepository for HttpProductRepository<A> {
    async fn fetch_product_page(&self, skip: u32, limit: u32) -> Result<ProductPage, ApiError> {
        let response: ProductResponseDto = self
            .api
            .get(&format!("/products?skip={skip}&limit={limit}"))
            .await?;

        let page = response.into_domain();
        info!(
            "Fetched {} products (skip {}, total {})",
            page.products.len(),
            page.skip,
            page.total
        );
        Ok(page)
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        info!("Searching products for: {}", query);

        let response: ProductResponseDto = self.api.get(&Self::search_path(query)).await?;
        Ok(response.into_domain().products)
    }

    async fn fetch_product_detail(&self, id: u64) -> Result<ProductDetail, ApiError> {
        let response: ProductDetailDto = self.api.get(&format!("/products/{id}")).await?;
        Ok(response.into_domain())
    }
}
