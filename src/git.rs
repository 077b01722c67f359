//! Git repository initialization for generated projects.

use std::path::Path;

use git2::Repository;
use log::debug;

use crate::error::Result;

/// Initializes an empty repository in `output_dir` and points an `origin`
/// remote at the user's GitHub when a username is configured.
pub fn init_repository(output_dir: &Path, github_user: &str, title: &str) -> Result<()> {
    debug!("Initializing git repository in {}", output_dir.display());
    let repo = Repository::init(output_dir)?;

    if !github_user.is_empty() {
        let remote_url = format!("git@github.com:{}/{}.git", github_user, title);
        debug!("Adding origin remote '{}'", remote_url);
        repo.remote("origin", &remote_url)?;
    }

    Ok(())
}
