//! Location (sub-account) tools: profile, tags, tasks, custom fields,
//! custom values and templates.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "locations";

fn location_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("phone", Kind::String, "Phone number")
        .body("address", Kind::String, "Street address")
        .body("city", Kind::String, "City")
        .body("state", Kind::String, "State")
        .body("country", Kind::String, "Country code")
        .body("postalCode", Kind::String, "Postal code")
        .body("website", Kind::String, "Website")
        .body("timezone", Kind::String, "Timezone")
        .body("prospectInfo", Kind::Object, "Prospect first name, last name and email")
        .body("settings", Kind::Object, "Location settings")
        .body("social", Kind::Object, "Social profile URLs")
        .body("snapshotId", Kind::String, "Snapshot to load")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "search_locations",
            "Search the locations of the agency",
            "/locations/search",
        )
        .query("companyId", Kind::String, "Agency (company) ID")
        .query("email", Kind::String, "Filter by email")
        .query("limit", Kind::Integer, "Maximum results")
        .query("skip", Kind::Integer, "Results to skip")
        .query("order", Kind::String, "asc or desc"),
        Endpoint::get("get_location", "Get a location by ID", "/locations/{locationId}")
            .path_param("locationId", "Location ID"),
        location_fields(Endpoint::post(
            "create_location",
            "Create a location (agency plan required)",
            "/locations/",
        ))
        .body_required("name", Kind::String, "Location name")
        .body_required("companyId", Kind::String, "Agency (company) ID"),
        location_fields(Endpoint::put(
            "update_location",
            "Update a location",
            "/locations/{locationId}",
        ))
        .path_param("locationId", "Location ID")
        .body("name", Kind::String, "Location name")
        .body_required("companyId", Kind::String, "Agency (company) ID"),
        Endpoint::delete(
            "delete_location",
            "Delete a location",
            "/locations/{locationId}",
        )
        .path_param("locationId", "Location ID")
        .query("deleteTwilioAccount", Kind::Boolean, "Also delete the Twilio account"),
        // Tags
        Endpoint::get(
            "get_location_tags",
            "List the tags of a location",
            "/locations/{locationId}/tags",
        )
        .path_param("locationId", "Location ID"),
        Endpoint::post(
            "create_location_tag",
            "Create a location tag",
            "/locations/{locationId}/tags",
        )
        .path_param("locationId", "Location ID")
        .body_required("name", Kind::String, "Tag name"),
        Endpoint::get(
            "get_location_tag",
            "Get a location tag by ID",
            "/locations/{locationId}/tags/{tagId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("tagId", "Tag ID"),
        Endpoint::put(
            "update_location_tag",
            "Rename a location tag",
            "/locations/{locationId}/tags/{tagId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("tagId", "Tag ID")
        .body_required("name", Kind::String, "Tag name"),
        Endpoint::delete(
            "delete_location_tag",
            "Delete a location tag",
            "/locations/{locationId}/tags/{tagId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("tagId", "Tag ID"),
        // Tasks
        Endpoint::post(
            "search_location_tasks",
            "Search the tasks of a location",
            "/locations/{locationId}/tasks/search",
        )
        .path_param("locationId", "Location ID")
        .body("contactId", Kind::Array, "Filter by contacts")
        .body("completed", Kind::Boolean, "Filter by completion")
        .body("assignedTo", Kind::Array, "Filter by assignees")
        .body("query", Kind::String, "Search text")
        .body("limit", Kind::Integer, "Maximum results")
        .body("skip", Kind::Integer, "Results to skip"),
        // Custom fields
        Endpoint::get(
            "get_location_custom_fields",
            "List the custom fields of a location",
            "/locations/{locationId}/customFields",
        )
        .path_param("locationId", "Location ID")
        .query("model", Kind::String, "contact, opportunity or all"),
        Endpoint::post(
            "create_location_custom_field",
            "Create a custom field",
            "/locations/{locationId}/customFields",
        )
        .path_param("locationId", "Location ID")
        .body_required("name", Kind::String, "Field name")
        .body_required("dataType", Kind::String, "Field data type")
        .body("placeholder", Kind::String, "Placeholder text")
        .body("options", Kind::Array, "Options for choice fields")
        .body("position", Kind::Integer, "Display position")
        .body("model", Kind::String, "contact or opportunity"),
        Endpoint::get(
            "get_location_custom_field",
            "Get a custom field by ID",
            "/locations/{locationId}/customFields/{customFieldId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("customFieldId", "Custom field ID"),
        Endpoint::put(
            "update_location_custom_field",
            "Update a custom field",
            "/locations/{locationId}/customFields/{customFieldId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("customFieldId", "Custom field ID")
        .body_required("name", Kind::String, "Field name")
        .body("placeholder", Kind::String, "Placeholder text")
        .body("options", Kind::Array, "Options for choice fields")
        .body("position", Kind::Integer, "Display position"),
        Endpoint::delete(
            "delete_location_custom_field",
            "Delete a custom field",
            "/locations/{locationId}/customFields/{customFieldId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("customFieldId", "Custom field ID"),
        // Custom values
        Endpoint::get(
            "get_location_custom_values",
            "List the custom values of a location",
            "/locations/{locationId}/customValues",
        )
        .path_param("locationId", "Location ID"),
        Endpoint::post(
            "create_location_custom_value",
            "Create a custom value",
            "/locations/{locationId}/customValues",
        )
        .path_param("locationId", "Location ID")
        .body_required("name", Kind::String, "Value name")
        .body_required("value", Kind::String, "Value"),
        Endpoint::get(
            "get_location_custom_value",
            "Get a custom value by ID",
            "/locations/{locationId}/customValues/{customValueId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("customValueId", "Custom value ID"),
        Endpoint::put(
            "update_location_custom_value",
            "Update a custom value",
            "/locations/{locationId}/customValues/{customValueId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("customValueId", "Custom value ID")
        .body_required("name", Kind::String, "Value name")
        .body_required("value", Kind::String, "Value"),
        Endpoint::delete(
            "delete_location_custom_value",
            "Delete a custom value",
            "/locations/{locationId}/customValues/{customValueId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("customValueId", "Custom value ID"),
        // Templates
        Endpoint::get(
            "get_location_templates",
            "List SMS and email templates of a location",
            "/locations/{locationId}/templates",
        )
        .path_param("locationId", "Location ID")
        .query_required("originId", Kind::String, "Origin (agency) ID")
        .query("type", Kind::String, "sms or email")
        .query("limit", Kind::Integer, "Maximum results")
        .query("skip", Kind::Integer, "Results to skip"),
        Endpoint::delete(
            "delete_location_template",
            "Delete a location template",
            "/locations/{locationId}/templates/{templateId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("templateId", "Template ID"),
        Endpoint::get(
            "get_timezones",
            "List the timezones available to a location",
            "/locations/{locationId}/timezones",
        )
        .path_param("locationId", "Location ID"),
    ]
}
