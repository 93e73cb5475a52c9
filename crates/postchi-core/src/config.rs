//! Configuration management for Postchi code generation.
//!
//! This module defines the resolved `Config` struct consumed by the
//! generator, the closed enums for its three axes (language, request
//! handler, file strategy), and the `ConfigOverlay` layer used to merge
//! defaults, a `postchi.toml` file, and command-line flags. Resolution
//! validates once at the boundary: unknown axis values and a missing input
//! path fail here, before any generation work starts.
//!
//! # Examples
//!
//! ```
//! use postchi_core::config::{Config, ConfigOverlay};
//!
//! let overlay = ConfigOverlay {
//!     input: Some("collection.json".to_string()),
//!     ..Default::default()
//! };
//! let config = Config::resolve(&[overlay]).unwrap();
//! assert_eq!(config.output, "./src/api");
//! assert_eq!(config.language.extension(), "ts");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Error;

// External imports (alphabetized)
use serde::Deserialize;
use tokio::fs;

/// Default output directory for generated files
pub const DEFAULT_OUTPUT_DIR: &str = "./src/api";

/// Configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "postchi.toml";

/// Output language for generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript: interfaces and typed signatures
    #[default]
    TypeScript,
    /// JavaScript: JSDoc typedefs and untyped signatures
    JavaScript,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" => Ok(Language::TypeScript),
            "javascript" => Ok(Language::JavaScript),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

impl Language {
    /// Returns the language identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
        }
    }

    /// File extension for generated output
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
        }
    }

    /// Returns an iterator over all supported languages
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::TypeScript, Self::JavaScript].iter().copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transport used by generated request functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestHandler {
    /// Direct platform fetch call
    #[default]
    Fetch,
    /// Single axios invocation with an options object
    Axios,
}

impl FromStr for RequestHandler {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fetch" => Ok(RequestHandler::Fetch),
            "axios" => Ok(RequestHandler::Axios),
            _ => Err(format!("Unknown request handler: {}", s)),
        }
    }
}

impl RequestHandler {
    /// Returns the handler identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Axios => "axios",
        }
    }

    /// Returns an iterator over all supported request handlers
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Fetch, Self::Axios].iter().copied()
    }
}

impl fmt::Display for RequestHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How generated fragments are distributed across output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One combined `api-client` file
    #[default]
    SingleFile,
    /// Separate `api-types` and `api-functions` files
    MultiFile,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-file" => Ok(Strategy::SingleFile),
            "multi-file" => Ok(Strategy::MultiFile),
            _ => Err(format!("Unknown file strategy: {}", s)),
        }
    }
}

impl Strategy {
    /// Returns the strategy identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleFile => "single-file",
            Self::MultiFile => "multi-file",
        }
    }

    /// Returns an iterator over all supported strategies
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::SingleFile, Self::MultiFile].iter().copied()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fully-resolved configuration for one generation run. Every field is
/// mandatory; construction goes through `Config::resolve`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the collection JSON file
    pub input: String,

    /// Output directory for generated files
    pub output: String,

    /// Output language
    pub language: Language,

    /// Transport used by generated functions
    pub request_handler: RequestHandler,

    /// Output file strategy
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: DEFAULT_OUTPUT_DIR.to_string(),
            language: Language::default(),
            request_handler: RequestHandler::default(),
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Merge overlays over the defaults, in order, later overlays winning
    /// per field, then validate the result. The input path is the one
    /// field with no default; resolution fails when no overlay supplies
    /// it.
    pub fn resolve(overlays: &[ConfigOverlay]) -> crate::Result<Self> {
        let mut config = Self::default();
        for overlay in overlays {
            if let Some(input) = &overlay.input {
                config.input = input.clone();
            }
            if let Some(output) = &overlay.output {
                config.output = output.clone();
            }
            if let Some(language) = overlay.language {
                config.language = language;
            }
            if let Some(request_handler) = overlay.request_handler {
                config.request_handler = request_handler;
            }
            if let Some(strategy) = overlay.strategy {
                config.strategy = strategy;
            }
        }

        if config.input.is_empty() {
            return Err(Error::config(
                "Input file path is required. Specify it via CLI argument or configuration file.",
            ));
        }

        Ok(config)
    }
}

/// Partial configuration: any subset of the `Config` fields, as supplied
/// by a `postchi.toml` file or command-line flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverlay {
    pub input: Option<String>,
    pub output: Option<String>,
    pub language: Option<Language>,
    pub request_handler: Option<RequestHandler>,
    pub strategy: Option<Strategy>,
}

impl ConfigOverlay {
    /// Load a partial configuration from a TOML file. Unknown keys and
    /// unknown axis values are rejected here, not deferred to generation.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Invalid configuration in {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Look for `postchi.toml` in the given directory.
pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
    candidate.exists().then_some(candidate)
}
