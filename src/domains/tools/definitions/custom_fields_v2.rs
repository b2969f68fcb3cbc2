//! Custom fields and folders for custom objects.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "custom_fields_v2";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "ghl_get_custom_field_by_id",
            "Get a custom field or folder by ID",
            "/custom-fields/{id}",
        )
        .path_param("id", "Custom field or folder ID"),
        Endpoint::post(
            "ghl_create_custom_field",
            "Create a custom field on an object",
            "/custom-fields/",
        )
        .body_required("name", Kind::String, "Field name")
        .body_required("dataType", Kind::String, "Field data type")
        .body_required("fieldKey", Kind::String, "Field key, e.g. custom_object.pet.breed")
        .body_required("objectKey", Kind::String, "Object key")
        .body_required("parentId", Kind::String, "Folder ID")
        .body("description", Kind::String, "Field description")
        .body("placeholder", Kind::String, "Placeholder text")
        .body("showInForms", Kind::Boolean, "Show in forms")
        .body("options", Kind::Array, "Options for choice fields")
        .body("acceptedFormats", Kind::String, "Accepted file formats")
        .body("isMultipleFile", Kind::Boolean, "Allow several files")
        .body("maxFileLimit", Kind::Integer, "Maximum number of files")
        .location_body(),
        Endpoint::put(
            "ghl_update_custom_field",
            "Update a custom field",
            "/custom-fields/{id}",
        )
        .path_param("id", "Custom field ID")
        .body("name", Kind::String, "Field name")
        .body("description", Kind::String, "Field description")
        .body("placeholder", Kind::String, "Placeholder text")
        .body("showInForms", Kind::Boolean, "Show in forms")
        .body("options", Kind::Array, "Options for choice fields")
        .body("acceptedFormats", Kind::String, "Accepted file formats")
        .body("isMultipleFile", Kind::Boolean, "Allow several files")
        .body("maxFileLimit", Kind::Integer, "Maximum number of files")
        .location_body(),
        Endpoint::delete(
            "ghl_delete_custom_field",
            "Delete a custom field",
            "/custom-fields/{id}",
        )
        .path_param("id", "Custom field ID"),
        Endpoint::get(
            "ghl_get_custom_fields_by_object_key",
            "List the custom fields and folders of an object",
            "/custom-fields/object-key/{objectKey}",
        )
        .path_param("objectKey", "Object key")
        .location_query(),
        Endpoint::post(
            "ghl_create_custom_field_folder",
            "Create a custom field folder",
            "/custom-fields/folder",
        )
        .body_required("objectKey", Kind::String, "Object key")
        .body_required("name", Kind::String, "Folder name")
        .location_body(),
        Endpoint::put(
            "ghl_update_custom_field_folder",
            "Rename a custom field folder",
            "/custom-fields/folder/{id}",
        )
        .path_param("id", "Folder ID")
        .body_required("name", Kind::String, "Folder name")
        .location_body(),
        Endpoint::delete(
            "ghl_delete_custom_field_folder",
            "Delete a custom field folder",
            "/custom-fields/folder/{id}",
        )
        .path_param("id", "Folder ID")
        .location_query(),
    ]
}
