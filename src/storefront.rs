use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::database::SqliteTokenStore;
use crate::repositories::{HttpAuthRepository, HttpCartRepository, HttpProductRepository};
use crate::traits::{AuthRepository, CartRepository, ProductRepository, TokenStore};
use crate::use_cases::{AuthUseCase, CartUseCase, ProductUseCase};
use crate::view_models::{AuthViewModel, CartViewModel, ProductDetailViewModel, ProductViewModel};

/// Composition root: owns the shared collaborators and hands out view models.
///
/// Everything built here lives as long as the `Storefront` value.
#[derive(Clone)]
pub struct Storefront {
    tokens: Arc<dyn TokenStore>,
    auth: AuthUseCase,
    products: ProductUseCase,
    cart: CartUseCase,
}

impl Storefront {
    pub async fn new(config: &Config) -> Result<Self> {
        let api = ApiClient::new(&config.base_url)?;
        let tokens = SqliteTokenStore::connect(&config.token_db_url).await?;

        info!("Storefront wired against {}", api.base_url());
        Ok(Self::from_parts(
            Arc::new(HttpAuthRepository::new(api.clone())),
            Arc::new(HttpProductRepository::new(api.clone())),
            Arc::new(HttpCartRepository::new(api)),
            Arc::new(tokens),
        ))
    }

    pub fn from_parts(
        auth: Arc<dyn AuthRepository>,
        products: Arc<dyn ProductRepository>,
        cart: Arc<dyn CartRepository>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            tokens,
            auth: AuthUseCase::new(auth),
            products: ProductUseCase::new(products),
            cart: CartUseCase::new(cart),
        }
    }

    pub async fn auth_view_model(&self) -> AuthViewModel {
        AuthViewModel::new(self.auth.clone(), self.tokens.clone()).await
    }

    pub fn product_view_model(&self) -> ProductViewModel {
        ProductViewModel::new(self.products.clone())
    }

    pub fn product_detail_view_model(&self) -> ProductDetailViewModel {
        ProductDetailViewModel::new(self.products.clone())
    }

    pub fn cart_view_model(&self) -> CartViewModel {
        CartViewModel::new(self.cart.clone())
    }
}
