//! Postchi Core Library
//!
//! This library provides the core functionality for generating TypeScript
//! and JavaScript API client code from Postman collection exports.

pub mod collection;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod naming;

pub use crate::{
    collection::Collection,
    config::{find_config_file, Config, ConfigOverlay, Language, RequestHandler, Strategy},
    emitter::{emit, GeneratedFile, GeneratedOutput},
    error::{Error, Result},
    generate::{generate, GenerationSummary},
};
