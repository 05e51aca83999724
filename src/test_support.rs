//! Test doubles shared by the unit tests
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::ApiError;
use crate::models::{Cart, CartProduct, Product, ProductDetail, ProductPage, User};
use crate::traits::{ApiService, AuthRepository, CartRepository, ProductRepository};

pub fn status_error(status: u16) -> ApiError {
    ApiError::InvalidResponse {
        status: Some(status),
        message: format!("status {status}"),
    }
}

/// A request seen by [`StubApi`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// In-memory [`ApiService`] answering canned JSON per path.
///
/// Unknown paths answer 404. The JSON goes through the same serde decoding
/// as the real client, so schema mismatches surface as `Decoding`.
#[derive(Default)]
pub struct StubApi {
    responses: Mutex<HashMap<String, Result<Value, u16>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path: &str, body: Value) -> Self {
        self.responses.lock().insert(path.to_string(), Ok(body));
        self
    }

    pub fn fail(self, path: &str, status: u16) -> Self {
        self.responses.lock().insert(path.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    fn answer<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        self.requests.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        let canned = self.responses.lock().get(path).cloned();
        match canned {
            Some(Ok(value)) => serde_json::from_value(value).map_err(ApiError::Decoding),
            Some(Err(status)) => Err(status_error(status)),
            None => Err(status_error(404)),
        }
    }
}

#[async_trait]
impl ApiService for StubApi {
    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        self.answer("GET", path, None)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Encoding)?;
        self.answer("POST", path, Some(body))
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Encoding)?;
        self.answer("PUT", path, Some(body))
    }
}

pub fn cart_line(id: u64, title: &str, price: f64, quantity: u32) -> CartProduct {
    CartProduct {
        id,
        title: title.to_string(),
        price,
        quantity,
        total: price * f64::from(quantity),
        discount_percentage: 0.0,
    }
}

/// Builds a cart whose server aggregates match its line items
pub fn server_cart(products: Vec<CartProduct>) -> Cart {
    let total = products.iter().map(|p| p.total).sum();
    let discounted_total = products
        .iter()
        .map(|p| p.discounted_price() * f64::from(p.quantity))
        .sum();
    let total_quantity = products.iter().map(|p| p.quantity).sum();
    Cart {
        id: 1,
        user_id: 33,
        total_products: u32::try_from(products.len()).unwrap_or(u32::MAX),
        products,
        total,
        discounted_total,
        total_quantity,
    }
}

/// Parks calls until released one at a time, oldest first
#[derive(Default, Clone)]
pub struct Gate {
    entered: Arc<AtomicUsize>,
    parked: Arc<Mutex<VecDeque<oneshot::Sender<()>>>>,
}

impl Gate {
    async fn pass(&self) {
        let (release, released) = oneshot::channel();
        self.parked.lock().push_back(release);
        self.entered.fetch_add(1, Ordering::SeqCst);
        released.await.ok();
    }

    /// Waits until `count` calls have reached the gate
    pub async fn wait_entered(&self, count: usize) {
        while self.entered.load(Ordering::SeqCst) < count {
            tokio::task::yield_now().await;
        }
    }

    /// Releases the oldest parked call
    pub fn open(&self) {
        if let Some(release) = self.parked.lock().pop_front() {
            release.send(()).ok();
        }
    }
}

/// Scripted [`CartRepository`].
///
/// `update_cart` echoes the sent line items back as the server cart unless
/// a result was queued with [`FakeCartRepository::push_update`].
#[derive(Default)]
pub struct FakeCartRepository {
    fetches: Mutex<VecDeque<Result<Cart, ApiError>>>,
    updates: Mutex<VecDeque<Result<Cart, ApiError>>>,
    sent: Mutex<Vec<Vec<CartProduct>>>,
    gate: Option<Gate>,
}

impl FakeCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Gate) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn push_fetch(&self, result: Result<Cart, ApiError>) {
        self.fetches.lock().push_back(result);
    }

    pub fn push_update(&self, result: Result<Cart, ApiError>) {
        self.updates.lock().push_back(result);
    }

    /// Line item lists received by `update_cart`, in call order
    pub fn sent(&self) -> Vec<Vec<CartProduct>> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl CartRepository for FakeCartRepository {
    async fn fetch_cart(&self) -> Result<Cart, ApiError> {
        self.fetches
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(status_error(404)))
    }

    async fn update_cart(&self, products: &[CartProduct]) -> Result<Cart, ApiError> {
        self.sent.lock().push(products.to_vec());
        let scripted = self.updates.lock().pop_front();
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        scripted.unwrap_or_else(|| Ok(server_cart(products.to_vec())))
    }
}

pub fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: String::new(),
        price: 10.0,
        discount_percentage: 0.0,
        rating: 4.5,
        stock: 10,
        brand: "Unknown".to_string(),
        category: "misc".to_string(),
        thumbnail: String::new(),
        images: Vec::new(),
    }
}

/// [`ProductRepository`] over a generated catalog of `total` products
pub struct FakeProductRepository {
    total: u32,
    pages: Mutex<Vec<(u32, u32)>>,
    searches: Mutex<Vec<String>>,
    failures: Mutex<VecDeque<ApiError>>,
    details: Mutex<HashMap<u64, ProductDetail>>,
    gate: Option<Gate>,
}

impl FakeProductRepository {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            pages: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
            details: Mutex::new(HashMap::new()),
            gate: None,
        }
    }

    pub fn gated(total: u32, gate: Gate) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(total)
        }
    }

    pub fn fail_next(&self, error: ApiError) {
        self.failures.lock().push_back(error);
    }

    pub fn insert_detail(&self, detail: ProductDetail) {
        self.details.lock().insert(detail.id, detail);
    }

    /// `(skip, limit)` of every page request, in call order
    pub fn pages(&self) -> Vec<(u32, u32)> {
        self.pages.lock().clone()
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().clone()
    }
}

#[async_trait]
impl ProductRepository for FakeProductRepository {
    async fn fetch_product_page(&self, skip: u32, limit: u32) -> Result<ProductPage, ApiError> {
        self.pages.lock().push((skip, limit));
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        if let Some(error) = self.failures.lock().pop_front() {
            return Err(error);
        }

        let end = skip.saturating_add(limit).min(self.total);
        let products = (skip..end)
            .map(|i| product(u64::from(i) + 1, &format!("Product {}", i + 1)))
            .collect();
        Ok(ProductPage {
            products,
            total: self.total,
            skip,
            limit,
        })
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.searches.lock().push(query.to_string());
        if let Some(error) = self.failures.lock().pop_front() {
            return Err(error);
        }
        Ok(vec![
            product(900, &format!("{query} one")),
            product(901, &format!("{query} two")),
        ])
    }

    async fn fetch_product_detail(&self, id: u64) -> Result<ProductDetail, ApiError> {
        if let Some(error) = self.failures.lock().pop_front() {
            return Err(error);
        }
        self.details
            .lock()
            .get(&id)
            .cloned()
            .ok_or_else(|| status_error(404))
    }
}

pub fn user(access_token: &str, refresh_token: &str) -> User {
    User {
        id: 1,
        username: "emilys".to_string(),
        email: "emily.johnson@x.dummyjson.com".to_string(),
        first_name: "Emily".to_string(),
        last_name: "Johnson".to_string(),
        gender: "female".to_string(),
        image: "https://dummyjson.com/icon/emilys/128".to_string(),
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    }
}

/// Accepts `emilys`/`emilyspass`; signup never issues tokens
#[derive(Default)]
pub struct FakeAuthRepository;

#[async_trait]
impl AuthRepository for FakeAuthRepository {
    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        if username == "emilys" && password == "emilyspass" {
            Ok(user("access-1", "refresh-1"))
        } else {
            Err(ApiError::InvalidResponse {
                status: Some(400),
                message: r#"{"message":"Invalid credentials"}"#.to_string(),
            })
        }
    }

    async fn signup(&self, username: &str, email: &str, _password: &str) -> Result<User, ApiError> {
        Ok(User {
            username: username.to_string(),
            email: email.to_string(),
            ..user("", "")
        })
    }
}
