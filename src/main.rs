use anyhow::Result;
use tracing::{error, info};

use storefront_client::Storefront;
use storefront_client::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    info!("Starting storefront client");

    let config = Config::from_env();
    let storefront = Storefront::new(&config).await?;

    let auth = storefront.auth_view_model().await;
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        auth.login(username, password).await;
    }
    let auth_state = auth.state();
    if let Some(e) = &auth_state.error {
        error!("Login failed: {}", e);
    }
    info!("Authenticated: {}", auth_state.is_authenticated);

    let products = storefront.product_view_model();
    products.fetch_products().await;
    let product_state = products.state();
    match &product_state.error {
        Some(e) => error!("Error loading products: {}", e),
        None => info!(
            "Loaded {} of {} products",
            product_state.products.len(),
            product_state.total_available.unwrap_or_default()
        ),
    }

    let cart = storefront.cart_view_model();
    cart.fetch_cart().await;
    let cart_state = cart.state();
    if let Some(e) = &cart_state.error {
        error!("Error loading cart: {}", e);
    }
    if let Some(cart) = &cart_state.cart {
        info!(
            "Cart {}: {} items, subtotal {:.2}, discount {:.2}, total {:.2}",
            cart.id,
            cart.products.len(),
            cart.subtotal(),
            cart.total_discount(),
            cart.final_total()
        );
    }

    Ok(())
}
