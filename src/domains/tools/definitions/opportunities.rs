//! Opportunity and pipeline tools.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "opportunities";

fn opportunity_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("name", Kind::String, "Opportunity name")
        .body("pipelineId", Kind::String, "Pipeline ID")
        .body("pipelineStageId", Kind::String, "Pipeline stage ID")
        .body("status", Kind::String, "open, won, lost or abandoned")
        .body("monetaryValue", Kind::Number, "Deal value")
        .body("assignedTo", Kind::String, "Owner user ID")
        .body("customFields", Kind::Array, "Custom field values")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "search_opportunities",
            "Search opportunities in the location",
            "/opportunities/search",
        )
        .location_query_as("location_id")
        .query("q", Kind::String, "Search text")
        .query("pipeline_id", Kind::String, "Filter by pipeline")
        .query("pipeline_stage_id", Kind::String, "Filter by stage")
        .query("contact_id", Kind::String, "Filter by contact")
        .query("status", Kind::String, "open, won, lost, abandoned or all")
        .query("assigned_to", Kind::String, "Filter by owner")
        .query("limit", Kind::Integer, "Maximum results")
        .query("page", Kind::Integer, "Page number"),
        Endpoint::get(
            "get_pipelines",
            "List the sales pipelines",
            "/opportunities/pipelines",
        )
        .location_query(),
        Endpoint::get(
            "get_opportunity",
            "Get an opportunity by ID",
            "/opportunities/{opportunityId}",
        )
        .path_param("opportunityId", "Opportunity ID"),
        opportunity_fields(Endpoint::post(
            "create_opportunity",
            "Create an opportunity",
            "/opportunities/",
        ))
        .body_required("contactId", Kind::String, "Contact ID")
        .location_body(),
        Endpoint::put(
            "update_opportunity_status",
            "Change the status of an opportunity",
            "/opportunities/{opportunityId}/status",
        )
        .path_param("opportunityId", "Opportunity ID")
        .body_required("status", Kind::String, "open, won, lost or abandoned")
        .body("lostReasonId", Kind::String, "Lost reason ID"),
        Endpoint::delete(
            "delete_opportunity",
            "Delete an opportunity",
            "/opportunities/{opportunityId}",
        )
        .path_param("opportunityId", "Opportunity ID"),
        opportunity_fields(Endpoint::put(
            "update_opportunity",
            "Update an opportunity",
            "/opportunities/{opportunityId}",
        ))
        .path_param("opportunityId", "Opportunity ID"),
        opportunity_fields(Endpoint::post(
            "upsert_opportunity",
            "Create an opportunity or update the matching one",
            "/opportunities/upsert",
        ))
        .body_required("contactId", Kind::String, "Contact ID")
        .location_body(),
        Endpoint::post(
            "add_opportunity_followers",
            "Add followers to an opportunity",
            "/opportunities/{opportunityId}/followers",
        )
        .path_param("opportunityId", "Opportunity ID")
        .body_required("followers", Kind::Array, "User IDs"),
        Endpoint::delete(
            "remove_opportunity_followers",
            "Remove followers from an opportunity",
            "/opportunities/{opportunityId}/followers",
        )
        .path_param("opportunityId", "Opportunity ID")
        .body_required("followers", Kind::Array, "User IDs"),
    ]
}
