//! Tool groups: the unit the registry routes to.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::{debug, instrument};

use super::endpoint::Endpoint;
use super::error::ToolError;
use crate::client::ApiClient;

/// A cohesive bundle of tools for one functional area.
///
/// Every group answers to the same contract, so the registry never needs
/// per-group special cases.
#[async_trait]
pub trait ToolGroup: Send + Sync {
    /// Stable identifier used in logs and registry errors.
    fn group_id(&self) -> &str;

    /// Descriptors for every tool in this group, in a stable order.
    fn descriptors(&self) -> Vec<Tool>;

    /// Whether this group handles `name`. Exact match only.
    fn owns(&self, name: &str) -> bool;

    /// Run one tool. `args` is always an object, possibly empty.
    async fn execute(&self, name: &str, args: JsonObject) -> Result<Value, ToolError>;
}

/// A [`ToolGroup`] backed by a table of GHL endpoints.
pub struct EndpointGroup {
    id: &'static str,
    endpoints: Vec<Endpoint>,
    index: HashMap<&'static str, usize>,
    client: Arc<dyn ApiClient>,
}

impl EndpointGroup {
    pub fn new(id: &'static str, endpoints: Vec<Endpoint>, client: Arc<dyn ApiClient>) -> Self {
        let index = endpoints
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name, i))
            .collect();
        Self {
            id,
            endpoints,
            index,
            client,
        }
    }
}

#[async_trait]
impl ToolGroup for EndpointGroup {
    fn group_id(&self) -> &str {
        self.id
    }

    fn descriptors(&self) -> Vec<Tool> {
        self.endpoints.iter().map(Endpoint::to_tool).collect()
    }

    fn owns(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[instrument(skip(self, args), fields(group = self.id))]
    async fn execute(&self, name: &str, args: JsonObject) -> Result<Value, ToolError> {
        let endpoint = self
            .index
            .get(name)
            .map(|&i| &self.endpoints[i])
            .ok_or_else(|| ToolError::not_found(name))?;

        let request = endpoint.build_request(&args, self.client.location_id())?;
        debug!("{} {} -> {}", request.method, request.path, name);

        Ok(self.client.send(request).await?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Test doubles shared by the tools domain tests.

    use std::sync::Mutex;

    use super::*;
    use crate::client::{ApiError, ApiRequest, ApiResult};

    /// Records requests and echoes them back as JSON.
    #[derive(Default)]
    pub struct RecordingClient {
        pub location: Option<String>,
        pub requests: Mutex<Vec<ApiRequest>>,
        pub fail_with: Option<u16>,
    }

    impl RecordingClient {
        pub fn with_location(location: &str) -> Self {
            Self {
                location: Some(location.to_string()),
                ..Default::default()
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ApiClient for RecordingClient {
        fn location_id(&self) -> Option<&str> {
            self.location.as_deref()
        }

        async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(status) = self.fail_with {
                return Err(ApiError::status(status, "upstream said no"));
            }
            Ok(serde_json::json!({
                "method": request.method.as_str(),
                "path": request.path,
                "query": request.query,
                "body": request.body,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingClient;
    use super::*;
    use crate::domains::tools::endpoint::ParamKind;
    use serde_json::json;

    fn group(client: Arc<RecordingClient>) -> EndpointGroup {
        EndpointGroup::new(
            "contacts",
            vec![
                Endpoint::get("get_contact", "Get contact", "/contacts/{contactId}")
                    .path_param("contactId", "Contact ID"),
                Endpoint::post("create_contact", "Create contact", "/contacts/")
                    .body("firstName", ParamKind::String, "First name")
                    .location_body(),
            ],
            client,
        )
    }

    #[test]
    fn test_membership_is_exact() {
        let group = group(Arc::new(RecordingClient::default()));
        assert!(group.owns("get_contact"));
        assert!(!group.owns("get_contact "));
        assert!(!group.owns("get_"));
        assert_eq!(group.descriptors().len(), 2);
        assert_eq!(group.group_id(), "contacts");
    }

    #[tokio::test]
    async fn test_execute_sends_built_request() {
        let client = Arc::new(RecordingClient::with_location("loc_9"));
        let group = group(client.clone());

        let args = json!({"firstName": "Ada"}).as_object().cloned().unwrap();
        let result = group.execute("create_contact", args).await.unwrap();

        assert_eq!(result["path"], "/contacts/");
        assert_eq!(result["body"], json!({"firstName": "Ada", "locationId": "loc_9"}));
        assert_eq!(client.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_reach_the_api() {
        let client = Arc::new(RecordingClient::default());
        let group = group(client.clone());

        let err = group.execute("get_contact", JsonObject::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(client.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_name_is_not_found() {
        let group = group(Arc::new(RecordingClient::default()));
        let err = group.execute("send_sms", JsonObject::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_api_failure_propagates() {
        let group = group(Arc::new(RecordingClient::failing(404)));
        let args = json!({"contactId": "missing"}).as_object().cloned().unwrap();
        let err = group.execute("get_contact", args).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
