//! `reqwest` implementation of [`ApiClient`] for the GHL v2 API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{ApiClient, ApiError, ApiRequest, ApiResult};
use crate::core::config::GhlConfig;

/// Client for `services.leadconnectorhq.com`.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GhlClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    api_version: String,
    location_id: Option<String>,
}

impl std::fmt::Debug for GhlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhlClient")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_version", &self.api_version)
            .field("location_id", &self.location_id)
            .finish()
    }
}

impl GhlClient {
    /// Build a client from the GHL section of the configuration.
    pub fn new(config: &GhlConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.api_key.clone().filter(|k| !k.is_empty()),
            api_version: config.api_version.clone(),
            location_id: config.location_id.clone().filter(|l| !l.is_empty()),
        })
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl ApiClient for GhlClient {
    fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(ApiError::MissingCredentials)?;

        let mut builder = self
            .http
            .request(request.method.clone(), self.url(&request.path))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header("Version", &self.api_version);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("GHL API responded {} ({} bytes)", status, text.len());

        if !status.is_success() {
            let message = error_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            warn!("GHL API call failed with {}: {}", status, message);
            return Err(ApiError::status(status.as_u16(), message));
        }

        decode_body(&text)
    }
}

/// Decode a success body; empty bodies (204, some DELETEs) become `{"success": true}`.
fn decode_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(serde_json::json!({ "success": true }));
    }
    Ok(serde_json::from_str(text)?)
}

/// Pull a human-readable message out of a GHL error body.
///
/// GHL answers `{"statusCode": 400, "message": "..."}`, where `message` is
/// sometimes an array of validation messages.
fn error_message(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_string());
    };

    match value.get("message").or_else(|| value.get("error")) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join("; "),
        ),
        _ => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GhlConfig {
        GhlConfig {
            api_key: None,
            base_url: "https://example.test/".to_string(),
            api_version: "2021-07-28".to_string(),
            location_id: Some("loc_1".to_string()),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_url_joins_base_without_double_slash() {
        let client = GhlClient::new(&config()).unwrap();
        assert_eq!(client.url("/contacts/"), "https://example.test/contacts/");
        assert_eq!(client.url("contacts/"), "https://example.test/contacts/");
    }

    #[test]
    fn test_empty_location_is_treated_as_missing() {
        let mut cfg = config();
        cfg.location_id = Some(String::new());
        let client = GhlClient::new(&cfg).unwrap();
        assert_eq!(client.location_id(), None);
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut cfg = config();
        cfg.api_key = Some("pit-secret".to_string());
        let client = GhlClient::new(&cfg).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("pit-secret"));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_without_network() {
        let client = GhlClient::new(&config()).unwrap();
        let err = client
            .send(ApiRequest::new(reqwest::Method::GET, "/contacts/"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingCredentials));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"statusCode":404,"message":"Contact not found"}"#).as_deref(),
            Some("Contact not found")
        );
        assert_eq!(
            error_message(r#"{"message":["email must be an email","phone is invalid"]}"#)
                .as_deref(),
            Some("email must be an email; phone is invalid")
        );
        assert_eq!(error_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_message("  "), None);
    }

    #[test]
    fn test_decode_empty_body() {
        assert_eq!(
            decode_body("").unwrap(),
            serde_json::json!({ "success": true })
        );
        assert!(decode_body("not json").is_err());
    }
}
