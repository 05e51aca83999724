//! Product list state: incremental paging and search

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::models::Product;
use crate::use_cases::ProductUseCase;

/// Number of products requested per page
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListState {
    pub products: Vec<Product>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub search_query: String,
    /// Catalog size reported with the last page
    pub total_available: Option<u32>,
}

#[derive(Default)]
struct Inner {
    state: ProductListState,
    /// Zero-based index of the next page to load
    current_page: u32,
    generation: u64,
}

pub struct ProductViewModel {
    use_case: ProductUseCase,
    inner: Mutex<Inner>,
}

impl ProductViewModel {
    pub fn new(use_case: ProductUseCase) -> Self {
        Self {
            use_case,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn state(&self) -> ProductListState {
        self.inner.lock().state.clone()
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.inner.lock().state.search_query = query.into();
    }

    /// Stop applying responses of requests that are still in flight
    pub fn detach(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.state.is_loading = false;
    }

    /// Append the next page. Dropped while another load is in flight.
    pub async fn fetch_products(&self) {
        let (ticket, skip) = {
            let mut inner = self.inner.lock();
            if inner.state.is_loading {
                debug!("Product load already in flight, skipping");
                return;
            }
            inner.state.is_loading = true;
            inner.state.error = None;
            (inner.generation, inner.current_page * PAGE_SIZE)
        };

        let result = self.use_case.fetch_product_page(skip, PAGE_SIZE).await;

        let mut inner = self.inner.lock();
        if inner.generation != ticket {
            debug!("Dropping stale product page at skip {}", skip);
            return;
        }

        match result {
            Ok(page) => {
                inner.state.products.extend(page.products);
                inner.state.total_available = Some(page.total);
                inner.current_page += 1;
            }
            Err(e) => {
                error!("Failed to fetch products: {}", e);
                inner.state.error = Some(e.to_string());
            }
        }
        inner.state.is_loading = false;
    }

    /// Replace the list with search results, or reload page one when the
    /// query is empty
    pub async fn search(&self) {
        let query = self.inner.lock().state.search_query.clone();
        if query.is_empty() {
            self.refresh().await;
            return;
        }

        let ticket = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.state.is_loading = true;
            inner.state.error = None;
            inner.generation
        };

        let result = self.use_case.search_products(&query).await;

        let mut inner = self.inner.lock();
        if inner.generation != ticket {
            debug!("Dropping stale search results for {:?}", query);
            return;
        }

        match result {
            Ok(products) => inner.state.products = products,
            Err(e) => {
                error!("Search for {:?} failed: {}", query, e);
                inner.state.error = Some(e.to_string());
            }
        }
        inner.state.is_loading = false;
    }

    /// Start over from an empty list and the first page
    pub async fn refresh(&self) {
        {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.current_page = 0;
            inner.state.products.clear();
            inner.state.total_available = None;
            inner.state.is_loading = false;
        }

        self.fetch_products().await;
    }
}
