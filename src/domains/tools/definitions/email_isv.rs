//! Email verification.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "email_isv";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::post(
            "verify_email",
            "Check the deliverability of an email address or a contact's email",
            "/email/verify",
        )
        .body_required("type", Kind::String, "'email' or 'contact'")
        .body_required("verify", Kind::String, "Email address or contact ID")
        .location_query(),
    ]
}
