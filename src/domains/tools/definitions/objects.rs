//! Custom object schemas and records.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "objects";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_all_objects", "List all object schemas", "/objects/")
            .location_query(),
        Endpoint::post(
            "create_object_schema",
            "Create a custom object schema",
            "/objects/",
        )
        .body_required("labels", Kind::Object, "Singular and plural labels")
        .body_required("key", Kind::String, "Object key, e.g. custom_objects.pets")
        .body_required("primaryDisplayPropertyDetails", Kind::Object, "Primary display property")
        .body("description", Kind::String, "Object description")
        .location_body(),
        Endpoint::get(
            "get_object_schema",
            "Get an object schema and its fields",
            "/objects/{key}",
        )
        .path_param("key", "Object key")
        .location_query()
        .query("fetchProperties", Kind::Boolean, "Include field definitions"),
        Endpoint::patch(
            "update_object_schema",
            "Update an object schema",
            "/objects/{key}",
        )
        .path_param("key", "Object key")
        .body("labels", Kind::Object, "Singular and plural labels")
        .body("description", Kind::String, "Object description")
        .body("searchableProperties", Kind::Array, "Searchable field keys")
        .location_body(),
        Endpoint::post(
            "create_object_record",
            "Create a record of an object",
            "/objects/{schemaKey}/records",
        )
        .path_param("schemaKey", "Object key")
        .body_required("properties", Kind::Object, "Field values")
        .body("owner", Kind::Array, "Owner user IDs")
        .body("followers", Kind::Array, "Follower user IDs")
        .location_body(),
        Endpoint::get(
            "get_object_record",
            "Get a record of an object",
            "/objects/{schemaKey}/records/{recordId}",
        )
        .path_param("schemaKey", "Object key")
        .path_param("recordId", "Record ID"),
        Endpoint::put(
            "update_object_record",
            "Update a record of an object",
            "/objects/{schemaKey}/records/{recordId}",
        )
        .path_param("schemaKey", "Object key")
        .path_param("recordId", "Record ID")
        .body("properties", Kind::Object, "Field values")
        .body("owner", Kind::Array, "Owner user IDs")
        .body("followers", Kind::Array, "Follower user IDs")
        .location_query(),
        Endpoint::delete(
            "delete_object_record",
            "Delete a record of an object",
            "/objects/{schemaKey}/records/{recordId}",
        )
        .path_param("schemaKey", "Object key")
        .path_param("recordId", "Record ID"),
        Endpoint::post(
            "search_object_records",
            "Search the records of an object",
            "/objects/{schemaKey}/records/search",
        )
        .path_param("schemaKey", "Object key")
        .body_required("query", Kind::String, "Search text")
        .body("page", Kind::Integer, "Page number")
        .body("pageLimit", Kind::Integer, "Results per page")
        .body("searchAfter", Kind::Array, "Pagination cursor")
        .location_body(),
    ]
}
