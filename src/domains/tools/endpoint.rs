//! Declarative GHL endpoint descriptions.
//!
//! Every tool is backed by one REST call. An [`Endpoint`] records the tool
//! name and description, the HTTP method, a path template such as
//! `/contacts/{contactId}/notes`, and the parameters the tool accepts. From
//! that one description we derive both the advertised input schema and the
//! concrete [`ApiRequest`] for a call.

use std::sync::Arc;

use reqwest::Method;
use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

use super::error::ToolError;
use crate::client::ApiRequest;

/// Argument name filled from the configured default location when absent.
pub const LOCATION_ID: &str = "locationId";

/// Where an argument goes in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// JSON type accepted for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether `value` is acceptable for this kind.
    ///
    /// Numbers sent as strings are tolerated, as MCP clients often do that.
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => {
                value.is_number() || value.as_str().is_some_and(|s| s.parse::<f64>().is_ok())
            }
            Self::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_str().is_some_and(|s| s.parse::<i64>().is_ok())
            }
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

/// One tool argument.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
    /// Filled from the configured default location when the caller omits it.
    pub defaults_to_location: bool,
}

/// A constant sent with every call, not exposed as an argument.
#[derive(Debug, Clone)]
pub struct FixedField {
    pub name: &'static str,
    pub location: ParamLocation,
    pub value: Value,
}

/// A single GHL REST operation exposed as a tool.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub params: Vec<Param>,
    pub fixed: Vec<FixedField>,
}

impl Endpoint {
    pub fn new(
        method: Method,
        name: &'static str,
        description: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            method,
            path,
            params: Vec::new(),
            fixed: Vec::new(),
        }
    }

    pub fn get(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::GET, name, description, path)
    }

    pub fn post(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::POST, name, description, path)
    }

    pub fn put(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::PUT, name, description, path)
    }

    pub fn patch(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::PATCH, name, description, path)
    }

    pub fn delete(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::DELETE, name, description, path)
    }

    fn param(
        mut self,
        name: &'static str,
        location: ParamLocation,
        kind: ParamKind,
        required: bool,
        description: &'static str,
    ) -> Self {
        self.params.push(Param {
            name,
            location,
            kind,
            required,
            description,
            defaults_to_location: false,
        });
        self
    }

    fn location_param(mut self, name: &'static str, location: ParamLocation) -> Self {
        self.params.push(Param {
            name,
            location,
            kind: ParamKind::String,
            required: false,
            description: "Location ID (defaults to the configured location)",
            defaults_to_location: true,
        });
        self
    }

    /// Path placeholder. `locationId` is optional and defaults to the configured location.
    pub fn path_param(self, name: &'static str, description: &'static str) -> Self {
        if name == LOCATION_ID {
            return self.location_param(name, ParamLocation::Path);
        }
        self.param(name, ParamLocation::Path, ParamKind::String, true, description)
    }

    /// Optional query parameter.
    pub fn query(self, name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        self.param(name, ParamLocation::Query, kind, false, description)
    }

    /// Required query parameter.
    pub fn query_required(
        self,
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        self.param(name, ParamLocation::Query, kind, true, description)
    }

    /// `locationId` query parameter, defaulting to the configured location.
    pub fn location_query(self) -> Self {
        self.location_param(LOCATION_ID, ParamLocation::Query)
    }

    /// Location query parameter under another name, e.g. `location_id`.
    pub fn location_query_as(self, name: &'static str) -> Self {
        self.location_param(name, ParamLocation::Query)
    }

    /// `altId`/`altType=location` query pair used by the store, product,
    /// invoice and payment APIs.
    pub fn alt_location_query(self) -> Self {
        self.location_param("altId", ParamLocation::Query)
            .fixed_query("altType", "location")
    }

    /// Optional body field.
    pub fn body(self, name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        self.param(name, ParamLocation::Body, kind, false, description)
    }

    /// Required body field.
    pub fn body_required(
        self,
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        self.param(name, ParamLocation::Body, kind, true, description)
    }

    /// `locationId` body field, defaulting to the configured location.
    pub fn location_body(self) -> Self {
        self.location_param(LOCATION_ID, ParamLocation::Body)
    }

    /// `altId`/`altType=location` pair in the request body.
    pub fn alt_location_body(self) -> Self {
        self.location_param("altId", ParamLocation::Body)
            .fixed_body("altType", Value::from("location"))
    }

    /// Constant query parameter.
    pub fn fixed_query(mut self, name: &'static str, value: &'static str) -> Self {
        self.fixed.push(FixedField {
            name,
            location: ParamLocation::Query,
            value: Value::from(value),
        });
        self
    }

    /// Constant body field; wins over a caller-supplied value of the same name.
    pub fn fixed_body(mut self, name: &'static str, value: Value) -> Self {
        self.fixed.push(FixedField {
            name,
            location: ParamLocation::Body,
            value,
        });
        self
    }

    /// Placeholder names appearing in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// JSON schema describing this tool's arguments.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &self.params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// Tool descriptor advertised to clients.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    fn has_body(&self) -> bool {
        self.method == Method::POST || self.method == Method::PUT || self.method == Method::PATCH
    }

    /// Validate `args` and turn them into a concrete API request.
    ///
    /// Declared parameters are routed to path, query or body. For methods with
    /// a body, undeclared arguments are forwarded as body fields so callers
    /// can pass any field the API accepts.
    pub fn build_request(
        &self,
        args: &JsonObject,
        default_location: Option<&str>,
    ) -> Result<ApiRequest, ToolError> {
        let mut path = self.path.to_string();
        let mut request = ApiRequest::new(self.method.clone(), String::new());
        let mut body = serde_json::Map::new();

        for param in &self.params {
            let value = match args.get(param.name).filter(|v| !v.is_null()) {
                Some(v) => {
                    if !param.kind.accepts(v) {
                        return Err(ToolError::invalid_arguments(format!(
                            "Parameter '{}' must be of type {}",
                            param.name,
                            param.kind.schema_type()
                        )));
                    }
                    Some(v.clone())
                }
                None if param.defaults_to_location => default_location.map(|l| json!(l)),
                None => None,
            };

            let Some(value) = value else {
                if param.required || param.location == ParamLocation::Path {
                    return Err(missing(param));
                }
                continue;
            };

            match param.location {
                ParamLocation::Path => {
                    let text = scalar_text(&value);
                    if text.is_empty() {
                        return Err(missing(param));
                    }
                    let segment = path_segment(param, &text)?;
                    path = path.replace(&format!("{{{}}}", param.name), &segment);
                }
                ParamLocation::Query => match &value {
                    Value::Array(items) => {
                        for item in items {
                            request.query.push((param.name.to_string(), scalar_text(item)));
                        }
                    }
                    other => request.query.push((param.name.to_string(), scalar_text(other))),
                },
                ParamLocation::Body => {
                    body.insert(param.name.to_string(), value);
                }
            }
        }

        if self.has_body() {
            for (key, value) in args {
                if !self.params.iter().any(|p| p.name == key) && !body.contains_key(key) {
                    body.insert(key.clone(), value.clone());
                }
            }
        }

        for field in &self.fixed {
            match field.location {
                ParamLocation::Query => request
                    .query
                    .push((field.name.to_string(), scalar_text(&field.value))),
                _ => {
                    body.insert(field.name.to_string(), field.value.clone());
                }
            }
        }

        if self.has_body() || !body.is_empty() {
            request.body = Some(Value::Object(body));
        }

        request.path = path;
        Ok(request)
    }
}

fn missing(param: &Param) -> ToolError {
    if param.defaults_to_location {
        ToolError::invalid_arguments(format!(
            "Missing '{}': pass it explicitly or set GHL_LOCATION_ID",
            param.name
        ))
    } else {
        ToolError::invalid_arguments(format!("Missing required parameter '{}'", param.name))
    }
}

/// Encode a path argument as exactly one URL path segment.
///
/// `/`, `?`, `#` and `%` are percent-encoded; dot segments are rejected since
/// URL resolution would collapse them into a different resource path.
fn path_segment(param: &Param, text: &str) -> Result<String, ToolError> {
    if text == "." || text == ".." {
        return Err(ToolError::invalid_arguments(format!(
            "Parameter '{}' is not a valid ID: '{}'",
            param.name, text
        )));
    }
    Ok(urlencoding::encode(text).into_owned())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
