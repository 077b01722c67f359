//! Pystamp scaffolds a new Python package from a single command invocation:
//! metadata files, license, readme, a git repository and a starter source
//! layout with auto-generated re-export aggregation files.

/// Command-line interface module for the pystamp application
pub mod cli;

/// Resolution of command-line arguments into an immutable configuration
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the pystamp application
pub mod error;

/// Git repository initialization for generated projects
pub mod git;

/// Starter source layouts
pub mod layout;

/// Build-metadata file rendering
/// Supports pyproject.toml and setup.py/setup.cfg
pub mod metadata;

/// Project generation orchestration
/// Combines all components to produce the final package
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Constant templates for generated boilerplate files
pub mod templates;

/// Declarative directory-tree materialization
pub mod tree;
