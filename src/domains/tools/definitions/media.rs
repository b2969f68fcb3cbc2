//! Media library tools.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "media";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_media_files", "List files in the media library", "/medias/files")
            .alt_location_query()
            .query("sortBy", Kind::String, "Sort field")
            .query("sortOrder", Kind::String, "asc or desc")
            .query("type", Kind::String, "file or folder")
            .query("query", Kind::String, "Search text")
            .query("parentId", Kind::String, "Folder ID")
            .query("limit", Kind::Integer, "Maximum results")
            .query("offset", Kind::Integer, "Results to skip"),
        Endpoint::post(
            "upload_media_file",
            "Add a hosted file to the media library",
            "/medias/upload-file",
        )
        .body_required("fileUrl", Kind::String, "URL of the hosted file")
        .body("name", Kind::String, "File name")
        .body("parentId", Kind::String, "Destination folder ID")
        .fixed_body("hosted", serde_json::Value::Bool(true))
        .alt_location_body(),
        Endpoint::delete(
            "delete_media_file",
            "Delete a file or folder from the media library",
            "/medias/{id}",
        )
        .path_param("id", "File or folder ID")
        .alt_location_query(),
    ]
}
