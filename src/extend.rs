//! Structure extension for Stencil.
//! Merges user-supplied custom directories and files from the configuration
//! into the loaded project structure and file contents.

use crate::store::{FileContents, ProjectStructure};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Extends the project structure with custom directories and files.
///
/// Directories not already present are inserted with an empty file list.
/// Each custom file path is split into (parent directory, file name); the
/// parent is inserted if absent and the file name appended to its list.
/// Insertion follows input order and nothing is deduplicated, so a file
/// supplied twice is written twice downstream.
pub fn extend_structure(
    structure: &mut ProjectStructure,
    custom_directories: &[String],
    custom_files: &IndexMap<String, String>,
) {
    for dir_name in custom_directories {
        if !structure.contains_key(dir_name) {
            debug!("Adding custom directory '{}'", dir_name);
            structure.insert(dir_name.clone(), Vec::new());
        }
    }

    for file_path in custom_files.keys() {
        let (dir_name, file_name) = split_file_path(file_path);
        debug!("Adding custom file '{}' under '{}'", file_name, dir_name);
        structure.entry(dir_name).or_default().push(file_name);
    }
}

/// Records each custom file's content under its full relative path, so the
/// materializer resolves it instead of falling back to empty content.
pub fn record_custom_contents(
    contents: &mut FileContents,
    custom_files: &IndexMap<String, String>,
) {
    for (file_path, content) in custom_files {
        contents.insert(file_path.clone(), content.clone());
    }
}

/// Splits a relative file path into (parent directory, file name).
/// A bare file name yields an empty parent, placing it at the output root.
fn split_file_path(file_path: &str) -> (String, String) {
    let path = Path::new(file_path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path)
        .to_string();
    let dir_name = path
        .parent()
        .and_then(|parent| parent.to_str())
        .unwrap_or_default()
        .to_string();
    (dir_name, file_name)
}
