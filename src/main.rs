//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates the generation
//! pipeline: load, extend, inject, materialize.

use stencil::{
    cli::{get_args, Args},
    config::Config,
    constants::{CONFIG_FILE, CONTENTS_FILE, STRUCTURE_FILE},
    error::{default_error_handler, Result},
    extend::{extend_structure, record_custom_contents},
    generator::create_project,
    logger::init_logger,
    modules::inject_optional_modules,
    store::{load_contents, load_structure},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads and validates the configuration document
/// 2. Loads the project structure and file contents documents
/// 3. Extends the structure with custom directories and files
/// 4. Injects optional module snippets
/// 5. Materializes the project tree under the output directory
///
/// Any load failure aborts before a single file is written.
fn run(args: Args) -> Result<()> {
    let config_path =
        args.config.unwrap_or_else(|| args.template_dir.join(CONFIG_FILE));
    let config = Config::load(config_path)?;

    let mut structure = load_structure(args.template_dir.join(STRUCTURE_FILE))?;
    let mut contents = load_contents(args.template_dir.join(CONTENTS_FILE))?;

    let custom_directories = config.custom_directories();
    let custom_files = config.custom_files();
    extend_structure(&mut structure, &custom_directories, &custom_files);
    record_custom_contents(&mut contents, &custom_files);

    inject_optional_modules(
        &mut contents,
        config.project_name(),
        &config.optional_modules(),
    );

    create_project(&structure, &contents, &config, &args.output_dir)?;

    println!(
        "Project '{}' has been created successfully in {}.",
        config.project_name(),
        args.output_dir.display()
    );
    Ok(())
}
