//! Common constants used throughout the pystamp application.

/// Minimum Python version written into generated metadata when none is given
pub const DEFAULT_PYTHON_VERSION: &str = "3.12";

/// Version stamped into freshly generated package metadata
pub const PACKAGE_VERSION: &str = "0.0.0";

/// License identifier used in classifiers and the LICENSE file
pub const LICENSE: &str = "MIT";

/// Intended-audience classifier segment
pub const AUDIENCE: &str = "Science/Research";

/// Topic classifier segment
pub const TOPIC: &str = "Scientific/Engineering";
