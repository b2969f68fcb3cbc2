//! Survey and submission tools.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "surveys";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("ghl_get_surveys", "List surveys", "/surveys/")
            .location_query()
            .query("skip", Kind::Integer, "Results to skip")
            .query("limit", Kind::Integer, "Maximum results")
            .query("type", Kind::String, "Survey type filter"),
        Endpoint::get(
            "ghl_get_survey_submissions",
            "List survey submissions",
            "/surveys/submissions",
        )
        .location_query()
        .query("page", Kind::Integer, "Page number")
        .query("limit", Kind::Integer, "Maximum results")
        .query("surveyId", Kind::String, "Filter by survey")
        .query("q", Kind::String, "Search by contact name, email or phone")
        .query("startAt", Kind::String, "Range start (YYYY-MM-DD)")
        .query("endAt", Kind::String, "Range end (YYYY-MM-DD)"),
    ]
}
