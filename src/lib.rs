//! Stencil is a configurable project scaffolding generator.
//! Given a JSON configuration describing a project name, author and optional
//! feature flags, it materializes a directory tree and a set of template
//! files on disk, substituting `{{ key }}` placeholder tokens with
//! configuration values.

/// Command-line interface module for the Stencil application
pub mod cli;

/// Configuration loading, validation and defaulting
pub mod config;

/// Common constants: input document names and optional module snippets
pub mod constants;

/// Error types and handling for the Stencil application
pub mod error;

/// Structure extension with user-supplied directories and files
pub mod extend;

/// Project materialization: walks the structure and writes files to disk
pub mod generator;

/// Logger configuration
pub mod logger;

/// Optional module injection (logging and cli snippets)
pub mod modules;

/// Literal `{{ key }}` placeholder substitution
pub mod render;

/// Template store: the project structure and file contents documents
pub mod store;
