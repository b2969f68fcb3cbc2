//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The single aggregate tool listing used by every transport
//! - A name -> group routing table, checked for collisions at registration
//! - Dispatch with uniform error classification

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::error::{DispatchError, RegistryError};
use super::group::ToolGroup;

/// Outcome of one dispatch: a JSON value or a classified failure.
pub type DispatchResult = Result<Value, DispatchError>;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns every tool group for the life of the process.
///
/// Built once at startup and read-only afterwards, so concurrent dispatches
/// share it without locking.
#[derive(Default)]
pub struct ToolRegistry {
    groups: Vec<Arc<dyn ToolGroup>>,
    tools: Vec<Tool>,
    routes: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group's tools.
    ///
    /// Rejects the whole group if any of its tool names is already taken or
    /// if the group does not claim its own tools; nothing is recorded then.
    pub fn register(&mut self, group: Arc<dyn ToolGroup>) -> Result<(), RegistryError> {
        let descriptors = group.descriptors();
        let index = self.groups.len();
        let mut new_routes = HashMap::with_capacity(descriptors.len());

        for tool in &descriptors {
            let name = tool.name.to_string();

            if !group.owns(&name) {
                return Err(RegistryError::MembershipMismatch {
                    group: group.group_id().to_string(),
                    name,
                });
            }

            let taken_by = self
                .routes
                .get(&name)
                .map(|&i| self.groups[i].group_id().to_string())
                .or_else(|| new_routes.contains_key(&name).then(|| group.group_id().to_string()));

            if let Some(existing_group) = taken_by {
                return Err(RegistryError::DuplicateTool {
                    name,
                    existing_group,
                    new_group: group.group_id().to_string(),
                });
            }

            new_routes.insert(name, index);
        }

        info!(
            "Registered tool group '{}' ({} tools)",
            group.group_id(),
            descriptors.len()
        );

        self.routes.extend(new_routes);
        self.tools.extend(descriptors);
        self.groups.push(group);
        Ok(())
    }

    /// Register several groups in order, stopping at the first defect.
    pub fn with_groups(
        groups: impl IntoIterator<Item = Arc<dyn ToolGroup>>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for group in groups {
            registry.register(group)?;
        }
        Ok(registry)
    }

    /// All tool descriptors, in registration order.
    ///
    /// This is the single source of truth for listing and counting tools.
    pub fn list_all(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Identifiers of the registered groups, in registration order.
    pub fn group_ids(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.group_id()).collect()
    }

    /// The group owning `name`, if any.
    pub fn owner_of(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(|&i| self.groups[i].group_id())
    }

    /// Route a call to its owning group and classify the outcome.
    #[instrument(skip(self, args))]
    pub async fn dispatch(&self, name: &str, args: JsonObject) -> DispatchResult {
        let Some(&index) = self.routes.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(DispatchError::UnknownTool(name.to_string()));
        };

        let group = self.groups.get(index).ok_or_else(|| {
            DispatchError::Internal(format!("Routing table points at missing group for '{}'", name))
        })?;

        if !group.owns(name) {
            return Err(DispatchError::Internal(format!(
                "Group '{}' no longer claims tool '{}'",
                group.group_id(),
                name
            )));
        }

        match group.execute(name, args).await {
            Ok(value) => {
                info!("Tool {} executed successfully", name);
                Ok(value)
            }
            Err(e) => {
                let err = DispatchError::from_tool_error(e);
                warn!("Tool {} failed ({:?}): {}", name, err.kind(), err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::error::{ErrorKind, ToolError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Minimal group with a fixed name set; echoes its id and arguments.
    struct FakeGroup {
        id: &'static str,
        names: Vec<&'static str>,
        failure: Option<&'static str>,
        disowns: AtomicBool,
    }

    impl FakeGroup {
        fn new(id: &'static str, names: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                id,
                names: names.to_vec(),
                failure: None,
                disowns: AtomicBool::new(false),
            })
        }

        fn failing(id: &'static str, names: &[&'static str], message: &'static str) -> Arc<Self> {
            Arc::new(Self {
                id,
                names: names.to_vec(),
                failure: Some(message),
                disowns: AtomicBool::new(false),
            })
        }
    }

    #[async_trait]
    impl ToolGroup for FakeGroup {
        fn group_id(&self) -> &str {
            self.id
        }

        fn descriptors(&self) -> Vec<Tool> {
            self.names
                .iter()
                .map(|n| {
                    Tool::new(
                        *n,
                        format!("{} tool", n),
                        Arc::new(json!({"type": "object"}).as_object().cloned().unwrap()),
                    )
                })
                .collect()
        }

        fn owns(&self, name: &str) -> bool {
            !self.disowns.load(Ordering::SeqCst) && self.names.iter().any(|n| *n == name)
        }

        async fn execute(&self, name: &str, args: JsonObject) -> Result<Value, ToolError> {
            if let Some(message) = self.failure {
                return Err(ToolError::execution_failed(message));
            }
            tokio::task::yield_now().await;
            Ok(json!({ "group": self.id, "tool": name, "args": args }))
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::with_groups([
            FakeGroup::new("contacts", &["get_contact", "create_contact"]) as Arc<dyn ToolGroup>,
            FakeGroup::new("calendars", &["get_calendars"]) as Arc<dyn ToolGroup>,
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut registry = ToolRegistry::new();
        registry
            .register(FakeGroup::new("contacts", &["get_contact", "send_sms"]))
            .unwrap();
        let err = registry
            .register(FakeGroup::new("conversations", &["send_sms", "get_message"]))
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateTool {
                name: "send_sms".to_string(),
                existing_group: "contacts".to_string(),
                new_group: "conversations".to_string(),
            }
        );
        // The rejected group left nothing behind.
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.owner_of("get_message"), None);
        assert_eq!(registry.group_ids(), vec!["contacts"]);
    }

    #[test]
    fn test_duplicate_within_one_group_rejected() {
        let err = ToolRegistry::with_groups([
            FakeGroup::new("blogs", &["get_blog_posts", "get_blog_posts"]) as Arc<dyn ToolGroup>,
        ])
        .err()
        .unwrap();
        assert!(matches!(err, RegistryError::DuplicateTool { .. }));
    }

    #[test]
    fn test_list_all_concatenates_in_order() {
        let registry = registry();
        let names: Vec<_> = registry
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, vec!["get_contact", "create_contact", "get_calendars"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.owner_of("get_calendars"), Some("calendars"));
    }

    #[test]
    fn test_empty_registry_lists_nothing() {
        let registry = ToolRegistry::new();
        assert!(registry.list_all().is_empty());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_owner() {
        let registry = registry();
        let value = registry
            .dispatch("get_calendars", JsonObject::new())
            .await
            .unwrap();
        assert_eq!(value["group"], "calendars");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = registry()
            .dispatch("totally_unknown_tool", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownTool);
    }

    #[tokio::test]
    async fn test_failure_classification_by_marker() {
        let registry = ToolRegistry::with_groups([
            FakeGroup::failing("a", &["missing_thing"], "request failed: 404 not found")
                as Arc<dyn ToolGroup>,
            FakeGroup::failing("b", &["flaky_thing"], "connection reset") as Arc<dyn ToolGroup>,
        ])
        .unwrap();

        let err = registry
            .dispatch("missing_thing", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.to_string().contains("request failed: 404 not found"));

        let err = registry
            .dispatch("flaky_thing", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_group_disowning_a_routed_name_is_internal() {
        let group = FakeGroup::new("contacts", &["get_contact"]);
        let registry = ToolRegistry::with_groups([group.clone() as Arc<dyn ToolGroup>]).unwrap();
        group.disowns.store(true, Ordering::SeqCst);

        let err = registry
            .dispatch("get_contact", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalError);
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_do_not_interfere() {
        let ids = ["g0", "g1", "g2", "g3", "g4"];
        let names = ["tool_0", "tool_1", "tool_2", "tool_3", "tool_4"];
        let groups: Vec<Arc<dyn ToolGroup>> = ids
            .iter()
            .zip(names.iter())
            .map(|(id, name)| FakeGroup::new(*id, &[*name]) as Arc<dyn ToolGroup>)
            .collect();
        let registry = Arc::new(ToolRegistry::with_groups(groups).unwrap());

        let calls = (0..50).map(|i| {
            let registry = registry.clone();
            async move {
                let name = names[i % 5];
                let args = json!({ "call": i }).as_object().cloned().unwrap();
                (i, registry.dispatch(name, args).await)
            }
        });
        let results = futures::future::join_all(calls).await;

        assert_eq!(results.len(), 50);
        for (i, result) in results {
            let value = result.unwrap();
            assert_eq!(value["group"], ids[i % 5]);
            assert_eq!(value["tool"], names[i % 5]);
            assert_eq!(value["args"]["call"], i);
        }
    }
}
