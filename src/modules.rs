//! Optional module injection for Stencil.
//! Appends feature-specific code snippets to the two conventional file
//! contents entries when the corresponding `optional_modules` flags are set.

use crate::constants::{CLI_SNIPPET, LOGGING_SNIPPET, MAIN_SEED, UTILS_SEED};
use crate::store::FileContents;
use indexmap::IndexMap;
use log::debug;

/// Ensures the conventional entry exists, carrying over a template-supplied
/// body keyed by the bare file name, or seeding a minimal default.
fn seed_entry(contents: &mut FileContents, key: String, bare_name: &str, seed: &str) {
    if !contents.contains_key(&key) {
        let body = contents
            .get(bare_name)
            .cloned()
            .unwrap_or_else(|| seed.to_string());
        contents.insert(key, body);
    }
}

/// Injects optional module snippets into the file contents mapping.
///
/// Seeds `<project_name>/src/utils.py` and `<project_name>/src/main.py` with
/// minimal default bodies when the template supplies neither. The `logging`
/// flag appends a logging-setup snippet to the utils entry; the `cli` flag
/// appends an argument-parsing snippet to the main entry. Unknown flags are
/// ignored.
pub fn inject_optional_modules(
    contents: &mut FileContents,
    project_name: &str,
    flags: &IndexMap<String, bool>,
) {
    let utils_key = format!("{project_name}/src/utils.py");
    seed_entry(contents, utils_key.clone(), "utils.py", UTILS_SEED);

    if flags.get("logging").copied().unwrap_or(false) {
        debug!("Enabling optional module 'logging'");
        if let Some(body) = contents.get_mut(&utils_key) {
            body.push_str(LOGGING_SNIPPET);
        }
    }

    let main_key = format!("{project_name}/src/main.py");
    seed_entry(contents, main_key.clone(), "main.py", MAIN_SEED);

    if flags.get("cli").copied().unwrap_or(false) {
        debug!("Enabling optional module 'cli'");
        if let Some(body) = contents.get_mut(&main_key) {
            body.push_str(CLI_SNIPPET);
        }
    }

    for name in flags.keys() {
        if name != "logging" && name != "cli" {
            debug!("Ignoring unknown optional module '{}'", name);
        }
    }
}
