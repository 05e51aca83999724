//! Wire-format structures mirroring the storefront API's JSON schema
//!
//! Each response DTO is mapped exactly once into a domain entity from
//! [`crate::models`] through its `into_domain` method.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{
    Cart, CartProduct, Product, ProductDetail, ProductDimensions, ProductMeta, ProductPage,
    Review, User,
};

/// Parses an ISO-8601 timestamp, falling back to the current time.
fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |e| {
            warn!("Unparseable timestamp {:?} ({}), using now", raw, e);
            Utc::now()
        },
        |date| date.with_timezone(&Utc),
    )
}

#[derive(Debug, Serialize)]
pub struct LoginRequestDto<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignupRequestDto<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of both the login and the create-user endpoints.
///
/// The create-user endpoint does not issue tokens, so both default to empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub image: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl AuthResponseDto {
    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            image: self.image,
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductResponseDto {
    pub products: Vec<ProductDto>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

impl ProductResponseDto {
    pub fn into_domain(self) -> ProductPage {
        ProductPage {
            products: self
                .products
                .into_iter()
                .map(ProductDto::into_domain)
                .collect(),
            total: self.total,
            skip: self.skip,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: Option<String>,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            brand: self.brand.unwrap_or_else(|| "Unknown".to_string()),
            category: self.category,
            thumbnail: self.thumbnail,
            images: self.images,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailDto {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: Option<String>,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub sku: String,
    pub weight: f64,
    pub dimensions: DimensionsDto,
    pub warranty_information: String,
    pub shipping_information: String,
    pub availability_status: String,
    pub reviews: Vec<ReviewDto>,
    pub return_policy: String,
    pub minimum_order_quantity: u32,
    pub meta: MetaDto,
}

impl ProductDetailDto {
    pub fn into_domain(self) -> ProductDetail {
        let product_id = self.id;
        ProductDetail {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            brand: self.brand.unwrap_or_else(|| "Unknown".to_string()),
            category: self.category,
            thumbnail: self.thumbnail,
            images: self.images,
            tags: self.tags,
            sku: self.sku,
            weight: self.weight,
            dimensions: self.dimensions.into_domain(),
            warranty_information: self.warranty_information,
            shipping_information: self.shipping_information,
            availability_status: self.availability_status,
            reviews: self
                .reviews
                .into_iter()
                .map(|review| review.into_domain(product_id))
                .collect(),
            return_policy: self.return_policy,
            minimum_order_quantity: self.minimum_order_quantity,
            meta: self.meta.into_domain(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DimensionsDto {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl DimensionsDto {
    pub const fn into_domain(self) -> ProductDimensions {
        ProductDimensions {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

impl ReviewDto {
    pub fn into_domain(self, product_id: u64) -> Review {
        let id = format!(
            "{:x}",
            md5::compute(format!("{}:{}:{}", product_id, self.reviewer_email, self.date))
        );

        Review {
            id,
            rating: self.rating,
            comment: self.comment,
            date: parse_timestamp(&self.date),
            reviewer_name: self.reviewer_name,
            reviewer_email: self.reviewer_email,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDto {
    pub created_at: String,
    pub updated_at: String,
    pub barcode: String,
    pub qr_code: String,
}

impl MetaDto {
    pub fn into_domain(self) -> ProductMeta {
        ProductMeta {
            created_at: parse_timestamp(&self.created_at),
            updated_at: parse_timestamp(&self.updated_at),
            barcode: self.barcode,
            qr_code: self.qr_code,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub id: u64,
    pub products: Vec<CartProductDto>,
    pub total: f64,
    pub discounted_total: f64,
    pub total_products: u32,
    pub total_quantity: u32,
    /// Absent from some cart payloads; `0` when missing
    #[serde(default)]
    pub user_id: u64,
}

impl CartDto {
    pub fn into_domain(self) -> Cart {
        Cart {
            id: self.id,
            user_id: self.user_id,
            products: self
                .products
                .into_iter()
                .map(CartProductDto::into_domain)
                .collect(),
            total: self.total,
            discounted_total: self.discounted_total,
            total_products: self.total_products,
            total_quantity: self.total_quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProductDto {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
    pub discount_percentage: f64,
}

impl CartProductDto {
    pub fn into_domain(self) -> CartProduct {
        CartProduct {
            id: self.id,
            title: self.title,
            price: self.price,
            quantity: self.quantity,
            total: self.total,
            discount_percentage: self.discount_percentage,
        }
    }
}

/// Full replacement of the cart's line items
#[derive(Debug, Serialize)]
pub struct UpdateCartDto {
    pub products: Vec<UpdateCartProductDto>,
}

#[derive(Debug, Serialize)]
pub struct UpdateCartProductDto {
    pub id: u64,
    pub quantity: u32,
}

impl From<&[CartProduct]> for UpdateCartDto {
    fn from(products: &[CartProduct]) -> Self {
        Self {
            products: products
                .iter()
                .map(|p| UpdateCartProductDto {
                    id: p.id,
                    quantity: p.quantity,
                })
                .collect(),
        }
    }
}
