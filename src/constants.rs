//! Common constants used throughout the Stencil application.

/// Configuration document name, resolved inside the template directory
pub const CONFIG_FILE: &str = "config.json";

/// Project structure document name
pub const STRUCTURE_FILE: &str = "project_structure.json";

/// File contents document name
pub const CONTENTS_FILE: &str = "file_contents.json";

/// Seed body for the utils entry when the template supplies none
pub const UTILS_SEED: &str = "\"\"\"Utility Functions\"\"\"\n";

/// Seed body for the main entry when the template supplies none
pub const MAIN_SEED: &str = "\"\"\"Main entry point\"\"\"\n";

/// Snippet appended to the utils entry when `optional_modules.logging` is set
pub const LOGGING_SNIPPET: &str = r#"
import logging

def setup_logging():
    logging.basicConfig(level=logging.INFO)
    return logging.getLogger(__name__)
"#;

/// Snippet appended to the main entry when `optional_modules.cli` is set.
/// Carries a `{{ project_name }}` token resolved during materialization.
pub const CLI_SNIPPET: &str = r#"
import argparse

def parse_args():
    parser = argparse.ArgumentParser(description='{{ project_name }} CLI')
    parser.add_argument('--example', type=str, help='Example argument')
    return parser.parse_args()

if __name__ == "__main__":
    args = parse_args()
    print(f"Example argument: {args.example}")
"#;
