//! Social media planner tools: posts, accounts, CSV imports, categories,
//! tags and OAuth.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "social_media";

fn post_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("accountIds", Kind::Array, "Social account IDs to publish to")
        .body("summary", Kind::String, "Post text")
        .body("media", Kind::Array, "Media items: [{url, type}]")
        .body("status", Kind::String, "draft, scheduled, published, failed or in_review")
        .body("scheduleDate", Kind::String, "Publish time (ISO 8601)")
        .body("followUpComment", Kind::String, "Comment added after publishing")
        .body("type", Kind::String, "post, story or reel")
        .body("tags", Kind::Array, "Tag IDs")
        .body("categoryId", Kind::String, "Category ID")
        .body("userId", Kind::String, "Author user ID")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::post(
            "search_social_posts",
            "Search scheduled and published social posts",
            "/social-media-posting/{locationId}/posts/list",
        )
        .path_param("locationId", "Location ID")
        .body("type", Kind::String, "recent, all, scheduled, draft, failed, in_review or published")
        .body("accounts", Kind::String, "Comma-separated account IDs")
        .body("skip", Kind::String, "Results to skip")
        .body("limit", Kind::String, "Maximum results")
        .body("fromDate", Kind::String, "Range start (ISO 8601)")
        .body("toDate", Kind::String, "Range end (ISO 8601)")
        .body("includeUsers", Kind::String, "'true' to include user details")
        .body("postType", Kind::String, "post, story or reel"),
        post_fields(Endpoint::post(
            "create_social_post",
            "Create or schedule a social post",
            "/social-media-posting/{locationId}/posts",
        ))
        .path_param("locationId", "Location ID"),
        Endpoint::get(
            "get_social_post",
            "Get a social post by ID",
            "/social-media-posting/{locationId}/posts/{postId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("postId", "Post ID"),
        post_fields(Endpoint::put(
            "update_social_post",
            "Update a social post",
            "/social-media-posting/{locationId}/posts/{postId}",
        ))
        .path_param("locationId", "Location ID")
        .path_param("postId", "Post ID"),
        Endpoint::delete(
            "delete_social_post",
            "Delete a social post",
            "/social-media-posting/{locationId}/posts/{postId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("postId", "Post ID"),
        Endpoint::post(
            "bulk_delete_social_posts",
            "Delete up to 50 social posts at once",
            "/social-media-posting/{locationId}/posts/bulk-delete",
        )
        .path_param("locationId", "Location ID")
        .body_required("postIds", Kind::Array, "Post IDs"),
        Endpoint::get(
            "get_social_accounts",
            "List connected social accounts and groups",
            "/social-media-posting/{locationId}/accounts",
        )
        .path_param("locationId", "Location ID"),
        Endpoint::delete(
            "delete_social_account",
            "Disconnect a social account",
            "/social-media-posting/{locationId}/accounts/{accountId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("accountId", "Account ID")
        .query("companyId", Kind::String, "Agency (company) ID")
        .query("userId", Kind::String, "User ID"),
        Endpoint::post(
            "upload_social_csv",
            "Import social posts from a CSV file",
            "/social-media-posting/{locationId}/csv",
        )
        .path_param("locationId", "Location ID")
        .body_required("file", Kind::String, "CSV file URL or content"),
        Endpoint::get(
            "get_csv_upload_status",
            "List CSV imports and their status",
            "/social-media-posting/{locationId}/csv",
        )
        .path_param("locationId", "Location ID")
        .query("skip", Kind::String, "Results to skip")
        .query("limit", Kind::String, "Maximum results")
        .query("includeUsers", Kind::String, "'true' to include user details")
        .query("userId", Kind::String, "Filter by user"),
        Endpoint::post(
            "set_csv_accounts",
            "Assign social accounts to an imported CSV",
            "/social-media-posting/{locationId}/set-accounts",
        )
        .path_param("locationId", "Location ID")
        .body_required("accountIds", Kind::Array, "Account IDs")
        .body_required("filePath", Kind::String, "Imported file path")
        .body_required("rowsCount", Kind::Integer, "Number of rows")
        .body_required("fileName", Kind::String, "File name")
        .body("approver", Kind::String, "Approver user ID")
        .body("userId", Kind::String, "User ID"),
        Endpoint::get(
            "get_social_categories",
            "List social post categories",
            "/social-media-posting/{locationId}/categories",
        )
        .path_param("locationId", "Location ID")
        .query("searchText", Kind::String, "Search text")
        .query("limit", Kind::String, "Maximum results")
        .query("skip", Kind::String, "Results to skip"),
        Endpoint::get(
            "get_social_category",
            "Get a social post category by ID",
            "/social-media-posting/{locationId}/categories/{id}",
        )
        .path_param("locationId", "Location ID")
        .path_param("id", "Category ID"),
        Endpoint::get(
            "get_social_tags",
            "List social post tags",
            "/social-media-posting/{locationId}/tags",
        )
        .path_param("locationId", "Location ID")
        .query("searchText", Kind::String, "Search text")
        .query("limit", Kind::String, "Maximum results")
        .query("skip", Kind::String, "Results to skip"),
        Endpoint::post(
            "get_social_tags_by_ids",
            "Get social post tags by ID",
            "/social-media-posting/{locationId}/tags/details",
        )
        .path_param("locationId", "Location ID")
        .body_required("tagIds", Kind::Array, "Tag IDs"),
        Endpoint::get(
            "start_social_oauth",
            "Start the OAuth flow for a social platform",
            "/social-media-posting/oauth/{platform}/start",
        )
        .path_param("platform", "google, facebook, instagram, linkedin, twitter or tiktok")
        .location_query()
        .query_required("userId", Kind::String, "User ID")
        .query("page", Kind::String, "Page to return to")
        .query("reconnect", Kind::String, "'true' to reconnect an account"),
        Endpoint::get(
            "get_platform_accounts",
            "List the accounts of a platform for a finished OAuth flow",
            "/social-media-posting/oauth/{locationId}/{platform}/accounts/{accountId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("platform", "google, facebook, instagram, linkedin, twitter or tiktok")
        .path_param("accountId", "OAuth account ID"),
    ]
}
