use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::traits::ApiService;

/// Base URL of the public demo API
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// JSON client for the storefront API.
///
/// Every request is `base_url + path`. There are no retries and no timeout
/// beyond reqwest's defaults.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    async fn send<T>(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.url(path)?;
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        decode_response(status, &bytes)
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(body).map_err(ApiError::Encoding)
}

/// Classifies a finished exchange: non-2xx is `InvalidResponse`, a body that
/// does not match `T` is `Decoding`.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    if !status.is_success() {
        let message = String::from_utf8_lossy(body).into_owned();
        error!("Error response ({}): {}", status, message);
        return Err(ApiError::InvalidResponse {
            status: Some(status.as_u16()),
            message,
        });
    }

    serde_json::from_slice(body).map_err(|e| {
        error!("Decoding error: {}", e);
        ApiError::Decoding(e)
    })
}

#[async_trait]
impl ApiService for ApiClient {
    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        self.send(Method::GET, path, None).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body = encode_body(body)?;
        self.send(Method::POST, path, Some(body)).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body = encode_body(body)?;
        self.send(Method::PUT, path, Some(body)).await
    }
}
