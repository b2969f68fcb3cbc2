//! Associations between objects and the relations between their records.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "associations";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "ghl_get_all_associations",
            "List all associations of the location",
            "/associations/",
        )
        .location_query()
        .query("skip", Kind::Integer, "Results to skip")
        .query("limit", Kind::Integer, "Maximum results"),
        Endpoint::post(
            "ghl_create_association",
            "Create an association between two object types",
            "/associations/",
        )
        .body_required("key", Kind::String, "Association key")
        .body_required("firstObjectLabel", Kind::String, "Label seen from the first object")
        .body_required("firstObjectKey", Kind::String, "First object key")
        .body_required("secondObjectLabel", Kind::String, "Label seen from the second object")
        .body_required("secondObjectKey", Kind::String, "Second object key")
        .location_body(),
        Endpoint::get(
            "ghl_get_association_by_id",
            "Get an association by ID",
            "/associations/{associationId}",
        )
        .path_param("associationId", "Association ID"),
        Endpoint::put(
            "ghl_update_association",
            "Update the labels of an association",
            "/associations/{associationId}",
        )
        .path_param("associationId", "Association ID")
        .body_required("firstObjectLabel", Kind::String, "Label seen from the first object")
        .body_required("secondObjectLabel", Kind::String, "Label seen from the second object"),
        Endpoint::delete(
            "ghl_delete_association",
            "Delete an association and its relations",
            "/associations/{associationId}",
        )
        .path_param("associationId", "Association ID"),
        Endpoint::get(
            "ghl_get_association_by_key",
            "Get an association by key",
            "/associations/key/{keyName}",
        )
        .path_param("keyName", "Association key")
        .location_query(),
        Endpoint::get(
            "ghl_get_association_by_object_key",
            "List the associations of an object",
            "/associations/objectKey/{objectKey}",
        )
        .path_param("objectKey", "Object key")
        .location_query(),
        Endpoint::post(
            "ghl_create_relation",
            "Relate two records through an association",
            "/associations/relations",
        )
        .body_required("associationId", Kind::String, "Association ID")
        .body_required("firstRecordId", Kind::String, "First record ID")
        .body_required("secondRecordId", Kind::String, "Second record ID")
        .location_body(),
        Endpoint::get(
            "ghl_get_relations_by_record",
            "List the relations of a record",
            "/associations/relations/{recordId}",
        )
        .path_param("recordId", "Record ID")
        .location_query()
        .query("skip", Kind::Integer, "Results to skip")
        .query("limit", Kind::Integer, "Maximum results")
        .query("associationIds", Kind::Array, "Filter by associations"),
        Endpoint::delete(
            "ghl_delete_relation",
            "Delete a relation between two records",
            "/associations/relations/{relationId}",
        )
        .path_param("relationId", "Relation ID")
        .location_query(),
    ]
}
