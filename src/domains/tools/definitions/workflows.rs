//! Workflow listing.

use crate::domains::tools::endpoint::Endpoint;

pub const GROUP_ID: &str = "workflows";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("ghl_get_workflows", "List the workflows of the location", "/workflows/")
            .location_query(),
    ]
}
