//! Backend API
//!
//! REST bindings to the Split backend, organized by domain.

mod auth;
mod item;
mod receipt;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{ItemUpdate, Receipt, ReceiptUpdate, Session};

pub use auth::RegisterRequest;

/// Operations the client needs from the backend.
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait SplitApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<Session>;

    async fn register(&self, request: &RegisterRequest<'_>) -> ApiResult<Session>;

    /// All receipts the user owns or participates in
    async fn user_receipts(&self, token: &str) -> ApiResult<Vec<Receipt>>;

    async fn claim_items(&self, token: &str, item_ids: &[u32]) -> ApiResult<()>;

    async fn unclaim_items(&self, token: &str, item_ids: &[u32]) -> ApiResult<()>;

    async fn update_receipt(&self, token: &str, receipt_id: u32, update: &ReceiptUpdate) -> ApiResult<()>;

    async fn update_item(&self, token: &str, item_id: u32, update: &ItemUpdate) -> ApiResult<()>;

    async fn delete_item(&self, token: &str, item_id: u32) -> ApiResult<()>;
}

/// `SplitApi` over HTTP
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(token)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    fn put(&self, path: &str, token: &str) -> RequestBuilder {
        self.client.put(self.url(path)).bearer_auth(token)
    }

    fn delete(&self, path: &str, token: &str) -> RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(token)
    }
}

/// Client built from the loaded config
pub fn client() -> HttpApi {
    HttpApi::new(AppConfig::load())
}

/// Send a request and map non-success statuses to `ApiError`
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    log::warn!("request failed with {}: {}", status.as_u16(), message);
    Err(ApiError::from_status(status.as_u16(), message))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = send(request).await?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl SplitApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        self.login_user(email, password).await
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> ApiResult<Session> {
        self.register_user(request).await
    }

    async fn user_receipts(&self, token: &str) -> ApiResult<Vec<Receipt>> {
        self.fetch_user_receipts(token).await
    }

    async fn claim_items(&self, token: &str, item_ids: &[u32]) -> ApiResult<()> {
        self.set_claim(token, item::ClaimEndpoint::Claim, item_ids).await
    }

    async fn unclaim_items(&self, token: &str, item_ids: &[u32]) -> ApiResult<()> {
        self.set_claim(token, item::ClaimEndpoint::Unclaim, item_ids).await
    }

    async fn update_receipt(&self, token: &str, receipt_id: u32, update: &ReceiptUpdate) -> ApiResult<()> {
        self.put_receipt(token, receipt_id, update).await
    }

    async fn update_item(&self, token: &str, item_id: u32, update: &ItemUpdate) -> ApiResult<()> {
        self.put_item(token, item_id, update).await
    }

    async fn delete_item(&self, token: &str, item_id: u32) -> ApiResult<()> {
        self.remove_item(token, item_id).await
    }
}
