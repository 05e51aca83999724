//! Product detail screen state

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::models::ProductDetail;
use crate::use_cases::ProductUseCase;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetailState {
    pub detail: Option<ProductDetail>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Default)]
struct Inner {
    state: ProductDetailState,
    generation: u64,
}

pub struct ProductDetailViewModel {
    use_case: ProductUseCase,
    inner: Mutex<Inner>,
}

impl ProductDetailViewModel {
    pub fn new(use_case: ProductUseCase) -> Self {
        Self {
            use_case,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn state(&self) -> ProductDetailState {
        self.inner.lock().state.clone()
    }

    pub fn detach(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.state.is_loading = false;
    }

    pub async fn fetch_product_detail(&self, id: u64) {
        let ticket = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.state.is_loading = true;
            inner.state.error = None;
            inner.generation
        };

        let result = self.use_case.fetch_product_detail(id).await;

        let mut inner = self.inner.lock();
        if inner.generation != ticket {
            debug!("Dropping stale detail for product {}", id);
            return;
        }

        match result {
            Ok(detail) => inner.state.detail = Some(detail),
            Err(e) => {
                error!("Failed to fetch product {}: {}", id, e);
                inner.state.error = Some(e.to_string());
            }
        }
        inner.state.is_loading = false;
    }
}
