//! Tool definitions module.
//!
//! One file per GHL functional area. Each exposes a `GROUP_ID` and an
//! endpoint table; [`build_groups`] turns them into [`ToolGroup`]s in the
//! order tools are listed to clients.

pub mod associations;
pub mod blogs;
pub mod calendars;
pub mod contacts;
pub mod conversations;
pub mod custom_fields_v2;
pub mod email;
pub mod email_isv;
pub mod invoices;
pub mod locations;
pub mod media;
pub mod objects;
pub mod opportunities;
pub mod payments;
pub mod products;
pub mod social_media;
pub mod store;
pub mod surveys;
pub mod workflows;

use std::sync::Arc;

use super::endpoint::Endpoint;
use super::error::RegistryError;
use super::group::{EndpointGroup, ToolGroup};
use super::registry::ToolRegistry;
use crate::client::ApiClient;

type EndpointTable = fn() -> Vec<Endpoint>;

/// Every group, in listing order.
const GROUPS: [(&str, EndpointTable); 19] = [
    (contacts::GROUP_ID, contacts::endpoints),
    (conversations::GROUP_ID, conversations::endpoints),
    (blogs::GROUP_ID, blogs::endpoints),
    (opportunities::GROUP_ID, opportunities::endpoints),
    (calendars::GROUP_ID, calendars::endpoints),
    (email::GROUP_ID, email::endpoints),
    (locations::GROUP_ID, locations::endpoints),
    (email_isv::GROUP_ID, email_isv::endpoints),
    (social_media::GROUP_ID, social_media::endpoints),
    (media::GROUP_ID, media::endpoints),
    (objects::GROUP_ID, objects::endpoints),
    (associations::GROUP_ID, associations::endpoints),
    (custom_fields_v2::GROUP_ID, custom_fields_v2::endpoints),
    (workflows::GROUP_ID, workflows::endpoints),
    (surveys::GROUP_ID, surveys::endpoints),
    (store::GROUP_ID, store::endpoints),
    (products::GROUP_ID, products::endpoints),
    (invoices::GROUP_ID, invoices::endpoints),
    (payments::GROUP_ID, payments::endpoints),
];

/// Instantiate every tool group against a shared API client.
pub fn build_groups(client: Arc<dyn ApiClient>) -> Vec<Arc<dyn ToolGroup>> {
    GROUPS
        .iter()
        .map(|&(id, endpoints)| {
            Arc::new(EndpointGroup::new(id, endpoints(), client.clone())) as Arc<dyn ToolGroup>
        })
        .collect()
}

/// Build the production registry. Fails on any tool-name collision.
pub fn build_registry(client: Arc<dyn ApiClient>) -> Result<ToolRegistry, RegistryError> {
    ToolRegistry::with_groups(build_groups(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::endpoint::ParamLocation;
    use crate::domains::tools::error::ErrorKind;
    use crate::domains::tools::group::testing::RecordingClient;
    use rmcp::model::JsonObject;
    use serde_json::json;
    use std::collections::HashSet;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn registry(client: RecordingClient) -> ToolRegistry {
        build_registry(Arc::new(client)).unwrap()
    }

    #[test]
    fn test_production_groups_register_without_collisions() {
        let registry = registry(RecordingClient::default());
        let expected: usize = GROUPS.iter().map(|(_, table)| table().len()).sum();

        assert_eq!(registry.len(), expected);
        assert_eq!(registry.len(), 249);
        assert_eq!(registry.list_all().len(), registry.len());
    }

    #[test]
    fn test_group_sizes() {
        let sizes: Vec<(&str, usize)> = GROUPS.iter().map(|(id, t)| (*id, t().len())).collect();
        assert_eq!(
            sizes,
            vec![
                ("contacts", 31),
                ("conversations", 20),
                ("blogs", 7),
                ("opportunities", 10),
                ("calendars", 14),
                ("email", 5),
                ("locations", 24),
                ("email_isv", 1),
                ("social_media", 17),
                ("media", 3),
                ("objects", 9),
                ("associations", 10),
                ("custom_fields_v2", 8),
                ("workflows", 1),
                ("surveys", 2),
                ("store", 18),
                ("products", 10),
                ("invoices", 39),
                ("payments", 20),
            ]
        );
    }

    #[test]
    fn test_group_order_is_listing_order() {
        let registry = registry(RecordingClient::default());
        let ids = registry.group_ids();
        assert_eq!(ids.first(), Some(&"contacts"));
        assert_eq!(ids.last(), Some(&"payments"));
        let invoices = ids.iter().position(|id| *id == "invoices").unwrap();
        let payments = ids.iter().position(|id| *id == "payments").unwrap();
        assert!(invoices < payments);

        let first = registry.list_all().into_iter().next().unwrap();
        assert_eq!(first.name, "create_contact");
    }

    #[test]
    fn test_every_placeholder_is_a_declared_path_param() {
        for (id, table) in GROUPS {
            for endpoint in table() {
                for placeholder in endpoint.placeholders() {
                    assert!(
                        endpoint
                            .params
                            .iter()
                            .any(|p| p.name == placeholder && p.location == ParamLocation::Path),
                        "{}/{}: '{{{}}}' is not declared",
                        id,
                        endpoint.name,
                        placeholder
                    );
                }
            }
        }
    }

    #[test]
    fn test_param_names_are_unique_per_tool() {
        for (_, table) in GROUPS {
            for endpoint in table() {
                let mut seen = HashSet::new();
                for param in &endpoint.params {
                    assert!(
                        seen.insert(param.name),
                        "{} declares '{}' twice",
                        endpoint.name,
                        param.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_schema_is_an_object() {
        for tool in registry(RecordingClient::default()).list_all() {
            assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_owners_follow_exact_names() {
        let registry = registry(RecordingClient::default());
        assert_eq!(registry.owner_of("send_sms"), Some("conversations"));
        assert_eq!(registry.owner_of("list_orders"), Some("payments"));
        assert_eq!(registry.owner_of("list_invoices"), Some("invoices"));
        assert_eq!(registry.owner_of("verify_email"), Some("email_isv"));
        assert_eq!(registry.owner_of("ghl_get_workflows"), Some("workflows"));
        assert_eq!(registry.owner_of("get_email_campaigns"), Some("email"));
        assert_eq!(registry.owner_of("get_contacts"), None);
    }

    #[tokio::test]
    async fn test_send_sms_sets_message_type() {
        let registry = registry(RecordingClient::default());
        let value = registry
            .dispatch("send_sms", args(json!({"contactId": "c1", "message": "hi"})))
            .await
            .unwrap();

        assert_eq!(value["method"], "POST");
        assert_eq!(value["path"], "/conversations/messages");
        assert_eq!(
            value["body"],
            json!({"contactId": "c1", "message": "hi", "type": "SMS"})
        );
    }

    #[tokio::test]
    async fn test_search_opportunities_uses_snake_case_location() {
        let registry = registry(RecordingClient::with_location("loc_1"));
        let value = registry
            .dispatch("search_opportunities", args(json!({"status": "open"})))
            .await
            .unwrap();

        let query = value["query"].as_array().unwrap();
        assert!(query.contains(&json!(["location_id", "loc_1"])));
        assert!(query.contains(&json!(["status", "open"])));
    }

    #[tokio::test]
    async fn test_alt_location_pair_on_store_tools() {
        let registry = registry(RecordingClient::with_location("loc_1"));
        let value = registry
            .dispatch("ghl_list_shipping_zones", JsonObject::new())
            .await
            .unwrap();

        let query = value["query"].as_array().unwrap();
        assert!(query.contains(&json!(["altId", "loc_1"])));
        assert!(query.contains(&json!(["altType", "location"])));
    }

    #[tokio::test]
    async fn test_location_path_defaults_to_configured_location() {
        let registry = registry(RecordingClient::with_location("loc_1"));
        let value = registry
            .dispatch("get_location_tags", JsonObject::new())
            .await
            .unwrap();
        assert_eq!(value["path"], "/locations/loc_1/tags");
    }

    #[tokio::test]
    async fn test_destructive_tool_cannot_escape_its_path() {
        let registry = registry(RecordingClient::default());
        let value = registry
            .dispatch(
                "delete_contact",
                args(json!({"contactId": "../locations/LOC_OTHER"})),
            )
            .await
            .unwrap();

        assert_eq!(value["method"], "DELETE");
        assert_eq!(value["path"], "/contacts/..%2Flocations%2FLOC_OTHER");
    }

    #[tokio::test]
    async fn test_missing_required_argument_is_invalid_request() {
        let registry = registry(RecordingClient::default());
        let err = registry
            .dispatch("get_contact", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[tokio::test]
    async fn test_upstream_404_is_invalid_request() {
        let registry = registry(RecordingClient::failing(404));
        let err = registry
            .dispatch("get_contact", args(json!({"contactId": "gone"})))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);

        let registry = ToolRegistry::with_groups(build_groups(Arc::new(RecordingClient::failing(
            502,
        ))))
        .unwrap();
        let err = registry
            .dispatch("get_contact", args(json!({"contactId": "c1"})))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
    }
}
