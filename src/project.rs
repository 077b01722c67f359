//! Project generation orchestration.
//!
//! Prepares the output directory, writes boilerplate and metadata files,
//! initializes version control and hands the starter layout to the tree
//! materializer.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::git;
use crate::metadata;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::templates;
use crate::tree::{self, BuildContext};

/// Generates the whole project described by `config`.
///
/// # Flow
/// 1. Ensures a fresh output directory (replacing an existing one after
///    confirmation)
/// 2. Initializes the git repository and .gitignore
/// 3. Writes LICENSE, README.md and the chosen metadata files
/// 4. Materializes the starter source layout
pub fn generate(
    config: &Config,
    renderer: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
) -> Result<()> {
    prepare_output_dir(&config.output_dir, config.force, prompt)?;

    let context = config.context()?;

    if config.git {
        git::init_repository(&config.output_dir, &config.github, &config.title)?;
        write_file(&config.output_dir.join(".gitignore"), templates::GITIGNORE)?;
    }

    if config.license_file {
        write_file(
            &config.output_dir.join("LICENSE"),
            &templates::license(renderer, &context)?,
        )?;
    }

    if config.readme {
        write_file(
            &config.output_dir.join("README.md"),
            &templates::readme(renderer, &context)?,
        )?;
    }

    for (name, contents) in metadata::render_metadata(config.meta, renderer, &context)? {
        write_file(&config.output_dir.join(name), &contents)?;
    }

    let ctx = BuildContext {
        project_title: config.title.clone(),
        base_output_path: config.output_dir.clone(),
    };
    tree::materialize(config.layout.tree(config), &ctx)
}

/// Ensures a fresh output directory, replacing an existing one only after
/// confirmation (or unconditionally with `force`).
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and the
///   user declines to replace it
pub fn prepare_output_dir(output_dir: &Path, force: bool, prompt: &dyn Prompter) -> Result<()> {
    if output_dir.exists() {
        let response = prompt.confirm(
            force,
            format!("Directory '{}' already exists. Replace it?", output_dir.display()),
        )?;
        if !response {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: output_dir.display().to_string(),
            });
        }
        debug!("Removing existing directory {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(|source| Error::FsError {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir(output_dir).map_err(|source| Error::FsError {
        path: output_dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, contents).map_err(|source| Error::FsError {
        path: path.to_path_buf(),
        source,
    })
}
