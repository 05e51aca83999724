//! Domain entities for the storefront: users, products, and the cart

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price after applying a percentage discount.
fn discounted(price: f64, discount_percentage: f64) -> f64 {
    price * (1.0 - discount_percentage / 100.0)
}

/// An authenticated user as returned by login or signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub image: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// A catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    /// `"Unknown"` when the API omits it
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
}

impl Product {
    pub fn discounted_price(&self) -> f64 {
        discounted(self.price, self.discount_percentage)
    }
}

/// One page of the catalog together with the server's paging counters
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Full product information for the detail screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub sku: String,
    pub weight: f64,
    pub dimensions: ProductDimensions,
    pub warranty_information: String,
    pub shipping_information: String,
    pub availability_status: String,
    pub reviews: Vec<Review>,
    pub return_policy: String,
    pub minimum_order_quantity: u32,
    pub meta: ProductMeta,
}

impl ProductDetail {
    pub fn discounted_price(&self) -> f64 {
        discounted(self.price, self.discount_percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A customer review attached to a product detail.
///
/// `id` is a hex digest of product id, reviewer email and the raw review
/// date, so it is stable across reloads of the same product.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    /// 1 to 5
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub barcode: String,
    pub qr_code: String,
}

/// The user's cart.
///
/// `total` and `discounted_total` are the server's aggregates and are not
/// reconciled with the locally derived `subtotal`/`final_total`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: u64,
    pub user_id: u64,
    pub products: Vec<CartProduct>,
    pub total: f64,
    pub discounted_total: f64,
    pub total_products: u32,
    pub total_quantity: u32,
}

impl Cart {
    /// Sum of `price * quantity` over all line items
    pub fn subtotal(&self) -> f64 {
        self.products
            .iter()
            .map(|p| p.price * f64::from(p.quantity))
            .sum()
    }

    pub fn total_discount(&self) -> f64 {
        self.products
            .iter()
            .map(|p| {
                let quantity = f64::from(p.quantity);
                p.price * quantity - p.discounted_price() * quantity
            })
            .sum()
    }

    pub fn final_total(&self) -> f64 {
        self.subtotal() - self.total_discount()
    }

    /// Applies a quantity change to the local line items.
    ///
    /// A quantity of zero or less removes the line item. Otherwise the line
    /// item keeps its id, title, price and discount and gets the new quantity
    /// with `total = price * quantity`. Unknown ids leave the cart untouched.
    /// Quantities above `u32::MAX` are capped at `u32::MAX`.
    pub fn set_quantity(&mut self, product_id: u64, new_quantity: i64) {
        if new_quantity <= 0 {
            self.products.retain(|p| p.id != product_id);
            return;
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.products.iter_mut().find(|p| p.id == product_id) {
            *line = CartProduct {
                quantity,
                total: line.price * f64::from(quantity),
                ..line.clone()
            };
        }
    }
}

/// A line item in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    /// Zero means the line item is about to be removed
    pub quantity: u32,
    pub total: f64,
    pub discount_percentage: f64,
}

impl CartProduct {
    pub fn discounted_price(&self) -> f64 {
        discounted(self.price, self.discount_percentage)
    }

    pub fn thumbnail(&self) -> String {
        format!(
            "https://cdn.dummyjson.com/product-images/{}/thumbnail.jpg",
            self.id
        )
    }
}
