//! Template store for Stencil.
//! Loads the two external description documents: the project structure
//! (directory to file-list mapping) and the file contents (file name to
//! template text mapping). Both are input data, not generated logic.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Directory-path template to ordered file-name list
pub type ProjectStructure = IndexMap<String, Vec<String>>;

/// File name (or relative path) to raw template text
pub type FileContents = IndexMap<String, String>;

#[derive(Debug, Deserialize)]
struct StructureDocument {
    structure: ProjectStructure,
}

fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() || !path.is_file() {
        return Err(Error::NotFoundError { path: path.display().to_string() });
    }

    debug!("Loading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

/// Loads the project structure document (`{"structure": {dir: [file, ...]}}`).
///
/// # Errors
/// * `Error::NotFoundError` if the document does not exist
/// * `Error::ParseError` if the document is not valid JSON
pub fn load_structure<P: AsRef<Path>>(path: P) -> Result<ProjectStructure> {
    let raw = read_document(path)?;
    let document: StructureDocument = serde_json::from_str(&raw)?;
    Ok(document.structure)
}

/// Loads the file contents document (`{fileName: templateText, ...}`).
///
/// # Errors
/// * `Error::NotFoundError` if the document does not exist
/// * `Error::ParseError` if the document is not valid JSON
pub fn load_contents<P: AsRef<Path>>(path: P) -> Result<FileContents> {
    let raw = read_document(path)?;
    Ok(serde_json::from_str(&raw)?)
}
