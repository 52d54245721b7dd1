//! Configuration handling for Stencil.
//! This module provides functionality for loading, validating and defaulting
//! the configuration document that drives project generation.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Required configuration fields, checked in this order
pub const REQUIRED_FIELDS: [&str; 3] = ["project_name", "author", "email"];

/// The enriched configuration mapping.
///
/// Keys map to arbitrary JSON values (strings, booleans, nested mappings,
/// sequences). Key order follows the configuration document, which makes
/// placeholder substitution order deterministic.
#[derive(Debug, Clone)]
pub struct Config(IndexMap<String, Value>);

impl Config {
    /// Loads the configuration document from disk.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration document
    ///
    /// # Returns
    /// * `Result<Config>` - The validated, enriched configuration
    ///
    /// # Errors
    /// * `Error::NotFoundError` if the document does not exist
    /// * `Error::ParseError` if the document is not valid JSON
    /// * `Error::ValidationError` if a required field is missing or blank
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() || !path.is_file() {
            return Err(Error::NotFoundError { path: path.display().to_string() });
        }

        debug!("Loading configuration from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let fields: IndexMap<String, Value> = serde_json::from_str(&raw)?;
        Self::from_fields(fields)
    }

    /// Validates required fields and applies defaults for absent keys.
    ///
    /// Required fields must be present and non-empty strings after trimming;
    /// the first missing or blank one (in `REQUIRED_FIELDS` order) fails the
    /// whole load. Defaults are inserted only when the key is completely
    /// absent, so present-but-falsy values survive untouched.
    pub fn from_fields(mut fields: IndexMap<String, Value>) -> Result<Self> {
        for field in REQUIRED_FIELDS {
            let value = fields.get(field).and_then(Value::as_str).unwrap_or_default();
            if value.trim().is_empty() {
                return Err(Error::ValidationError { field: field.to_string() });
            }
        }

        // Validation above guarantees these are non-empty strings
        let author =
            fields.get("author").and_then(Value::as_str).unwrap_or_default().to_string();
        let project_name = fields
            .get("project_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        fields
            .entry("version".to_string())
            .or_insert_with(|| Value::String("0.1.0".to_string()));
        fields
            .entry("license".to_string())
            .or_insert_with(|| Value::String("MIT".to_string()));
        fields.entry("github_repo".to_string()).or_insert_with(|| {
            Value::String(format!("https://github.com/{author}/{project_name}"))
        });
        fields
            .entry("optional_modules".to_string())
            .or_insert_with(|| serde_json::json!({ "logging": false, "cli": false }));
        fields
            .entry("custom_directories".to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        fields
            .entry("custom_files".to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));

        Ok(Self(fields))
    }

    /// Returns the configured value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterates over (key, value) pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The validated project name.
    pub fn project_name(&self) -> &str {
        self.0.get("project_name").and_then(Value::as_str).unwrap_or_default()
    }

    /// Feature flags from `optional_modules`. Non-boolean values count as off.
    pub fn optional_modules(&self) -> IndexMap<String, bool> {
        match self.0.get("optional_modules").and_then(Value::as_object) {
            Some(flags) => flags
                .iter()
                .map(|(name, value)| (name.clone(), value.as_bool().unwrap_or(false)))
                .collect(),
            None => IndexMap::new(),
        }
    }

    /// Additional directories to create, in document order.
    pub fn custom_directories(&self) -> Vec<String> {
        match self.0.get("custom_directories").and_then(Value::as_array) {
            Some(dirs) => dirs
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Additional relative file paths with their content, in document order.
    pub fn custom_files(&self) -> IndexMap<String, String> {
        match self.0.get("custom_files").and_then(Value::as_object) {
            Some(files) => files
                .iter()
                .filter_map(|(path, content)| {
                    content.as_str().map(|c| (path.clone(), c.to_string()))
                })
                .collect(),
            None => IndexMap::new(),
        }
    }
}
