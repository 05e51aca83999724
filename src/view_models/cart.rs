//! Cart screen state with optimistic quantity edits
//!
//! A quantity edit is applied to the local cart immediately, then the full
//! line-item list is written through to the server. The server's cart
//! replaces the local one on success. On failure the last cart the server
//! confirmed is restored and the error is exposed, so chained edits that all
//! fail never leave an unconfirmed quantity behind.
//!
//! Every request takes a ticket from a generation counter. A response whose
//! ticket is no longer current is dropped, so the latest issued request wins
//! and nothing is written after [`CartViewModel::detach`].

use parking_lot::Mutex;
use tracing::{debug, error, warn};

use crate::models::Cart;
use crate::use_cases::CartUseCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPhase {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Snapshot of what the cart screen shows.
///
/// `cart` and `error` are independent: a stale cart stays visible next to
/// an error message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub cart: Option<Cart>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl CartState {
    pub const fn phase(&self) -> CartPhase {
        if self.is_loading {
            CartPhase::Loading
        } else if self.error.is_some() {
            CartPhase::Error
        } else if self.cart.is_some() {
            CartPhase::Loaded
        } else {
            CartPhase::Idle
        }
    }
}

#[derive(Default)]
struct Inner {
    state: CartState,
    generation: u64,
    pending_fetch: Option<u64>,
    /// Last cart returned by a successful fetch or write
    confirmed: Option<Cart>,
}

impl Inner {
    fn next_ticket(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

pub struct CartViewModel {
    use_case: CartUseCase,
    inner: Mutex<Inner>,
}

impl CartViewModel {
    pub fn new(use_case: CartUseCase) -> Self {
        Self {
            use_case,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn state(&self) -> CartState {
        self.inner.lock().state.clone()
    }

    /// Stop applying responses of requests that are still in flight
    pub fn detach(&self) {
        let mut inner = self.inner.lock();
        inner.next_ticket();
        inner.pending_fetch = None;
        inner.state.is_loading = false;
    }

    pub async fn fetch_cart(&self) {
        let ticket = {
            let mut inner = self.inner.lock();
            let ticket = inner.next_ticket();
            inner.pending_fetch = Some(ticket);
            inner.state.is_loading = true;
            inner.state.error = None;
            ticket
        };

        let result = self.use_case.fetch_cart().await;

        let mut inner = self.inner.lock();
        if inner.pending_fetch == Some(ticket) {
            inner.pending_fetch = None;
            inner.state.is_loading = false;
        }
        if inner.generation != ticket {
            debug!("Dropping stale cart fetch response");
            return;
        }

        match result {
            Ok(cart) => {
                inner.confirmed = Some(cart.clone());
                inner.state.cart = Some(cart);
            }
            Err(e) => {
                error!("Failed to fetch cart: {}", e);
                inner.state.error = Some(e.to_string());
            }
        }
    }

    /// Set a line item's quantity; zero or less removes it.
    ///
    /// Does nothing until a cart has been loaded.
    pub async fn update_product_quantity(&self, product_id: u64, new_quantity: i64) {
        let (ticket, edited) = {
            let mut inner = self.inner.lock();
            let Some(mut edited) = inner.state.cart.clone() else {
                return;
            };

            edited.set_quantity(product_id, new_quantity);
            inner.state.cart = Some(edited.clone());
            (inner.next_ticket(), edited)
        };

        let result = self.use_case.update_cart(&edited.products).await;

        let mut inner = self.inner.lock();
        if inner.generation != ticket {
            debug!("Dropping stale cart update response for product {}", product_id);
            return;
        }

        match result {
            Ok(cart) => {
                inner.confirmed = Some(cart.clone());
                inner.state.cart = Some(cart);
                inner.state.error = None;
            }
            Err(e) => {
                warn!("Cart update failed, restoring last confirmed cart: {}", e);
                inner.state.cart = inner.confirmed.clone();
                inner.state.error = Some(e.to_string());
            }
        }
    }

    pub async fn remove_product(&self, product_id: u64) {
        self.update_product_quantity(product_id, 0).await;
    }
}
