//! Email marketing tools: campaigns and templates.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "email";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_email_campaigns",
            "List email campaigns",
            "/emails/schedule",
        )
        .location_query()
        .query("status", Kind::String, "Campaign status filter")
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip"),
        Endpoint::post(
            "create_email_template",
            "Create an email template",
            "/emails/builder",
        )
        .body_required("title", Kind::String, "Template title")
        .body_required("html", Kind::String, "Template HTML")
        .body("isPlainText", Kind::Boolean, "Plain-text template")
        .location_body(),
        Endpoint::get(
            "get_email_templates",
            "List email templates",
            "/emails/builder",
        )
        .location_query()
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip"),
        Endpoint::post(
            "update_email_template",
            "Update the content of an email template",
            "/emails/builder/data",
        )
        .body_required("templateId", Kind::String, "Template ID")
        .body_required("html", Kind::String, "Template HTML")
        .body("previewText", Kind::String, "Inbox preview text")
        .location_body(),
        Endpoint::delete(
            "delete_email_template",
            "Delete an email template",
            "/emails/builder/{locationId}/{templateId}",
        )
        .path_param("locationId", "Location ID")
        .path_param("templateId", "Template ID"),
    ]
}
