//! Typed fragments accumulated while walking the collection tree.
//!
//! Each request contributes one `ShapeFragment` and one `FunctionFragment`.
//! Fragments carry derived identifiers and structural facts as data, so
//! document assembly (imports in particular) never has to re-parse rendered
//! text.

// Internal imports (std, crate)
use crate::collection::Request;
use crate::naming;

// External imports (alphabetized)
use serde_json::Value as JsonValue;

/// Body shape derived from a raw payload. Parsing is best-effort and never
/// fails a run: unparsable text degrades to `Opaque`.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    /// Payload parsed as JSON; echoed literally into the shape declaration.
    Json(JsonValue),
    /// Payload that is not valid JSON; rendered as an open, untyped marker.
    Opaque,
}

impl BodyShape {
    /// Classify a raw body payload.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Opaque,
        }
    }
}

/// The data-shape declaration for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFragment {
    /// Declared identifier, e.g. `HttpsApiExampleComUsersRequest`.
    pub identifier: String,
    /// Query keys in document order. Duplicates are kept as-is.
    pub query_fields: Vec<String>,
    pub body: Option<BodyShape>,
}

impl ShapeFragment {
    pub fn from_request(request: &Request) -> Self {
        Self {
            identifier: shape_identifier(&request.url.raw),
            query_fields: request.url.query.iter().map(|q| q.key.clone()).collect(),
            body: request.raw_body().map(BodyShape::parse),
        }
    }
}

/// The callable wrapper for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionFragment {
    /// Sanitized lower_snake name derived from the owning item's name.
    pub name: String,
    /// Identifier of the paired shape declaration.
    pub shape_identifier: String,
    /// HTTP method, passed through verbatim.
    pub method: String,
    /// Raw URL literal, substituted into generated code unescaped.
    pub url_raw: String,
    /// Header key/value pairs in document order.
    pub headers: Vec<(String, String)>,
    /// Whether the function takes a `params` argument (any query entries).
    pub has_params: bool,
    /// Whether the function takes a `body` argument (usable raw body).
    pub has_body: bool,
}

impl FunctionFragment {
    pub fn from_request(request: &Request, item_name: &str) -> Self {
        Self {
            name: naming::function_name(item_name),
            shape_identifier: shape_identifier(&request.url.raw),
            method: request.method.clone(),
            url_raw: request.url.raw.clone(),
            headers: request
                .header
                .iter()
                .map(|h| (h.key.clone(), h.value.clone()))
                .collect(),
            has_params: !request.url.query.is_empty(),
            has_body: request.raw_body().is_some(),
        }
    }
}

/// Shape identifier for a request URL: the UpperCamel stem of the raw URL
/// plus a fixed `Request` suffix.
pub fn shape_identifier(url_raw: &str) -> String {
    format!("{}Request", naming::type_name(url_raw))
}
