//! Postman collection parsing.
//!
//! This module provides the typed model for a Postman collection export and
//! the loader that parses one from disk. Parsing is deliberately lenient:
//! only malformed JSON aborts a load. Structural fields that a well-formed
//! collection would carry (method, url.raw, item names) default to empty
//! values when absent, and surface downstream as irregular identifiers in
//! the generated output rather than as load failures.
//!
//! # Examples
//!
//! ```no_run
//! use postchi_core::collection::Collection;
//! use postchi_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let collection = Collection::from_file("collection.json").await?;
//! if let Some(name) = collection.display_name() {
//!     println!("Collection: {}", name);
//! }
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::Error;

// External imports (alphabetized)
use serde::Deserialize;
use tokio::fs;

/// Root of a Postman collection export.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub info: Option<Info>,
    /// Top-level items, in document order.
    #[serde(default)]
    pub item: Vec<Item>,
}

/// Collection metadata block.
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
}

/// A node in the collection tree: a folder (children), a request leaf, or
/// both. Nodes with neither produce no generated output.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    /// Child items; empty for a leaf.
    #[serde(default)]
    pub item: Vec<Item>,
    #[serde(default)]
    pub request: Option<Request>,
}

/// One HTTP request description.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Passed through to generated code verbatim, casing included.
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub header: Vec<Header>,
    #[serde(default)]
    pub url: Url,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A declared request header. Values are literal strings, substituted into
/// generated code without templating or escaping.
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "type")]
    pub header_type: Option<String>,
}

/// Request URL descriptor. The `raw` form is authoritative for both
/// identifier derivation and emitted URL construction; the broken-down
/// fields are informational.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Url {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub host: Vec<String>,
    #[serde(default)]
    pub path: Vec<String>,
    /// Query entries in document order; duplicate keys are preserved.
    #[serde(default)]
    pub query: Vec<Query>,
}

/// One query-string entry. Values are always treated as strings in the
/// generated shape, whatever their literal content.
#[derive(Debug, Clone, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Request body descriptor. Only `raw` mode contributes to generation.
#[derive(Debug, Clone, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub raw: Option<String>,
}

impl Collection {
    /// Parse a collection from JSON text.
    pub fn parse(content: &str) -> crate::Result<Self> {
        let collection = serde_json::from_str(content)?;
        Ok(collection)
    }

    /// Load a collection from a JSON file on disk.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse(&content).map_err(|e| {
            Error::collection(format!(
                "Failed to parse collection at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// The collection's display name, when the export carries one.
    pub fn display_name(&self) -> Option<&str> {
        self.info.as_ref()?.name.as_deref()
    }
}

impl Request {
    /// The raw body payload, when this request has a usable one: mode must
    /// be `raw` and the payload non-empty. Other modes and empty payloads
    /// behave as no body at all.
    pub fn raw_body(&self) -> Option<&str> {
        let body = self.body.as_ref()?;
        if body.mode != "raw" {
            return None;
        }
        body.raw.as_deref().filter(|raw| !raw.is_empty())
    }
}
