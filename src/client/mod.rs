//! Outbound client for the GoHighLevel REST API.
//!
//! Tool groups only see the [`ApiClient`] trait: hand it an [`ApiRequest`],
//! get back the decoded JSON body or an [`ApiError`]. [`GhlClient`] is the
//! production implementation on top of `reqwest`; tests substitute fakes.

mod error;
mod ghl;

pub use error::{ApiError, ApiResult};
pub use ghl::GhlClient;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// One call against the GHL API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path with all placeholders already substituted, e.g. `/contacts/abc`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// The narrow contract between tool groups and the GHL API.
///
/// Implementations hold read-only configuration and are shared by every
/// group and every concurrent invocation.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Default location (sub-account) used when a call does not name one.
    fn location_id(&self) -> Option<&str>;

    /// Send a request and decode the JSON response.
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}
