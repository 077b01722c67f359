//! Configuration resolution for pystamp.
//! Turns raw command-line arguments into the fully-resolved, immutable
//! configuration value that every other component consumes. Nothing here is
//! global; the value is passed down explicitly.

use std::path::PathBuf;

use chrono::Datelike;
use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::cli::Args;
use crate::constants::{AUDIENCE, DEFAULT_PYTHON_VERSION, LICENSE, PACKAGE_VERSION, TOPIC};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::metadata::MetaFormat;

/// Fully-resolved project configuration.
///
/// The serializable fields double as the base of the template context; the
/// skipped ones only steer generation.
#[derive(Debug, Serialize)]
pub struct Config {
    /// Package name, also the output directory name
    pub title: String,
    /// Short alias suggested for `import <title> as <abbrev>`
    pub abbrev: String,
    /// Author display name
    pub author: String,
    /// GitHub username, empty when not configured
    pub github: String,
    /// PyPI username, empty when not configured
    pub pypi: String,
    /// Author email address
    pub email: String,
    /// Short package description
    pub description: String,
    /// Minimum Python version required by the generated package
    pub python_version: String,
    /// Required package names
    pub requires: Vec<String>,
    /// Package keywords
    pub keywords: Vec<String>,
    /// License identifier
    pub license: String,
    #[serde(skip)]
    pub meta: MetaFormat,
    #[serde(skip)]
    pub layout: Layout,
    #[serde(skip)]
    pub output_dir: PathBuf,
    #[serde(skip)]
    pub force: bool,
    #[serde(skip)]
    pub git: bool,
    #[serde(skip)]
    pub license_file: bool,
    #[serde(skip)]
    pub readme: bool,
}

impl Config {
    /// Resolves the configuration from parsed command-line arguments.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the package name is not a valid
    ///   identifier-like name
    pub fn from_args(args: Args) -> Result<Self> {
        validate_title(&args.title)?;

        let abbrev = match args.abbrev {
            Some(abbrev) => abbrev,
            None => args.title.chars().take(2).collect(),
        };

        let requires = split_requires(args.requires.as_deref().unwrap_or_default())?;
        let keywords = split_keywords(args.keywords.as_deref().unwrap_or_default())?;

        debug!("Resolved package '{}' with abbreviation '{}'", args.title, abbrev);

        Ok(Self {
            output_dir: PathBuf::from(&args.title),
            title: args.title,
            abbrev,
            author: args.name.unwrap_or_default(),
            github: args.github.unwrap_or_default(),
            pypi: args.pypi.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            description: args.desc.unwrap_or_default(),
            python_version: args
                .python_version
                .unwrap_or_else(|| DEFAULT_PYTHON_VERSION.to_string()),
            requires,
            keywords,
            license: LICENSE.to_string(),
            meta: args.meta,
            layout: args.layout,
            force: args.force,
            git: !args.no_git,
            license_file: !args.no_license,
            readme: !args.no_readme,
        })
    }

    /// URL of the package's GitHub repository.
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}/{}", self.github, self.title)
    }

    /// Classifier strings for the generated package metadata.
    pub fn classifiers(&self) -> Vec<String> {
        vec![
            format!("License :: OSI Approved :: {} License", self.license),
            format!("Programming Language :: Python :: {}", self.python_version),
            "Environment :: Console".to_string(),
            "Operating System :: OS Independent".to_string(),
            format!("Intended Audience :: {}", AUDIENCE),
            format!("Topic :: {}", TOPIC),
        ]
    }

    /// Named project URLs for the generated package metadata.
    pub fn project_urls(&self) -> Vec<(String, String)> {
        vec![
            ("Homepage".to_string(), format!("https://{}.com", self.title)),
            ("Documentation".to_string(), self.github_url()),
            ("Source Code".to_string(), self.github_url()),
        ]
    }

    /// Builds the template context shared by every rendered file: the
    /// serializable configuration fields plus the derived values.
    pub fn context(&self) -> Result<serde_json::Value> {
        let mut context =
            serde_json::to_value(self).map_err(|e| Error::ConfigError(e.to_string()))?;

        let urls = serde_json::to_value(self.project_urls())
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        if let Some(map) = context.as_object_mut() {
            map.insert("year".to_string(), chrono::Utc::now().year().into());
            map.insert("package_version".to_string(), PACKAGE_VERSION.into());
            map.insert("github_url".to_string(), self.github_url().into());
            map.insert(
                "pypi_url".to_string(),
                format!("https://pypi.org/project/{}/", self.title).into(),
            );
            map.insert(
                "shield_url".to_string(),
                format!("https://img.shields.io/pypi/v/{}.svg", self.title).into(),
            );
            map.insert("classifiers".to_string(), self.classifiers().into());
            map.insert("urls".to_string(), urls);
        }

        Ok(context)
    }
}

/// Package names must start with a letter and stick to letters, digits,
/// underscores and dashes; anything else breaks imports or the filesystem.
fn validate_title(title: &str) -> Result<()> {
    let name_re = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$")
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    if !name_re.is_match(title) {
        return Err(Error::ValidationError(format!(
            "invalid package name '{}': must start with a letter and contain only letters, digits, '_' or '-'",
            title
        )));
    }
    Ok(())
}

/// Splits the required-packages option on runs of non-word characters.
fn split_requires(raw: &str) -> Result<Vec<String>> {
    let sep = Regex::new(r"\W+").map_err(|e| Error::ConfigError(e.to_string()))?;
    Ok(sep
        .split(raw)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect())
}

/// Splits the keywords option on commas with optional trailing whitespace.
fn split_keywords(raw: &str) -> Result<Vec<String>> {
    let sep = Regex::new(r",\s*").map_err(|e| Error::ConfigError(e.to_string()))?;
    Ok(sep
        .split(raw)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect())
}
