//! Project materialization for Stencil.
//! Walks the final project structure and writes each resolved file to disk,
//! creating parent directories as needed.

use crate::config::Config;
use crate::error::Result;
use crate::render::render;
use crate::store::{FileContents, ProjectStructure};
use log::debug;
use std::fs;
use std::path::Path;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::write(path, content)?)
}

/// Looks up a file's template content, preferring the full relative path
/// (how injected and custom entries are keyed) over the bare file name.
/// Absent lookups yield empty content, not an error.
fn resolve_content<'a>(
    contents: &'a FileContents,
    relative_path: &str,
    file_name: &str,
) -> &'a str {
    contents
        .get(relative_path)
        .or_else(|| contents.get(file_name))
        .map(String::as_str)
        .unwrap_or_default()
}

/// Creates the project tree under `output_root`.
///
/// Directories and files are visited in structure insertion order, then each
/// directory's file-list order. Each directory path is itself rendered
/// against the configuration before use, so `{{ project_name }}/src` lands
/// at `<name>/src`. Pre-existing files are overwritten unconditionally.
///
/// # Errors
/// * `Error::IoError` on any filesystem failure; generation aborts, leaving
///   whatever partial tree was already written
pub fn create_project(
    structure: &ProjectStructure,
    contents: &FileContents,
    config: &Config,
    output_root: &Path,
) -> Result<()> {
    for (directory, files) in structure {
        let resolved_directory = render(directory, config);
        let directory_path = output_root.join(&resolved_directory);
        fs::create_dir_all(&directory_path)?;

        for file_name in files {
            let relative_path = if resolved_directory.is_empty() {
                file_name.clone()
            } else {
                format!("{resolved_directory}/{file_name}")
            };
            let template = resolve_content(contents, &relative_path, file_name);
            let rendered = render(template, config);

            let file_path = directory_path.join(file_name);
            debug!("Writing file: {}", file_path.display());
            write_file(&file_path, &rendered)?;
        }
    }

    Ok(())
}
