//! Pystamp's main application entry point.
//! Handles command-line argument parsing, configuration resolution and
//! project generation.

use pystamp::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    project,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    let config = Config::from_args(args)?;
    project::generate(&config, &renderer, &prompt)?;

    println!("Created package '{}' in {}.", config.title, config.output_dir.display());
    Ok(())
}
