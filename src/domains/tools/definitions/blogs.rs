//! Blog tools.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "blogs";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::post("create_blog_post", "Create a blog post", "/blogs/posts")
            .body_required("title", Kind::String, "Post title")
            .body_required("blogId", Kind::String, "Blog site ID")
            .body_required("rawHTML", Kind::String, "Post content (HTML)")
            .body_required("description", Kind::String, "Meta description")
            .body_required("imageUrl", Kind::String, "Featured image URL")
            .body_required("imageAltText", Kind::String, "Featured image alt text")
            .body_required("urlSlug", Kind::String, "URL slug")
            .body_required("author", Kind::String, "Author ID")
            .body_required("categories", Kind::Array, "Category IDs")
            .body("tags", Kind::Array, "Tags")
            .body("status", Kind::String, "DRAFT, PUBLISHED, SCHEDULED or ARCHIVED")
            .body("canonicalLink", Kind::String, "Canonical URL")
            .body("publishedAt", Kind::String, "Publish date (ISO 8601)")
            .location_body(),
        Endpoint::put(
            "update_blog_post",
            "Update a blog post",
            "/blogs/posts/{postId}",
        )
        .path_param("postId", "Blog post ID")
        .body_required("blogId", Kind::String, "Blog site ID")
        .body("title", Kind::String, "Post title")
        .body("rawHTML", Kind::String, "Post content (HTML)")
        .body("description", Kind::String, "Meta description")
        .body("imageUrl", Kind::String, "Featured image URL")
        .body("imageAltText", Kind::String, "Featured image alt text")
        .body("urlSlug", Kind::String, "URL slug")
        .body("author", Kind::String, "Author ID")
        .body("categories", Kind::Array, "Category IDs")
        .body("tags", Kind::Array, "Tags")
        .body("status", Kind::String, "DRAFT, PUBLISHED, SCHEDULED or ARCHIVED")
        .body("publishedAt", Kind::String, "Publish date (ISO 8601)")
        .location_body(),
        Endpoint::get(
            "get_blog_posts",
            "List the posts of a blog",
            "/blogs/posts/all",
        )
        .query_required("blogId", Kind::String, "Blog site ID")
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip")
        .query("searchTerm", Kind::String, "Search text")
        .query("status", Kind::String, "Status filter")
        .location_query(),
        Endpoint::get("get_blog_sites", "List the blog sites", "/blogs/site/all")
            .query("limit", Kind::Integer, "Maximum results")
            .query("skip", Kind::Integer, "Results to skip")
            .query("searchTerm", Kind::String, "Search text")
            .location_query(),
        Endpoint::get("get_blog_authors", "List blog authors", "/blogs/authors")
            .query("limit", Kind::Integer, "Maximum results")
            .query("offset", Kind::Integer, "Results to skip")
            .location_query(),
        Endpoint::get(
            "get_blog_categories",
            "List blog categories",
            "/blogs/categories",
        )
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip")
        .location_query(),
        Endpoint::get(
            "check_url_slug",
            "Check whether a blog post URL slug is available",
            "/blogs/posts/url-slug-exists",
        )
        .query_required("urlSlug", Kind::String, "Slug to check")
        .query("postId", Kind::String, "Post to exclude from the check")
        .location_query(),
    ]
}
