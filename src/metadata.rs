//! Build-metadata file rendering.
//!
//! Two alternative formats are supported: a modern pyproject.toml with the
//! hatchling backend, and the legacy setup.py + setup.cfg pair.

use clap::ValueEnum;

use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::templates;

/// Metadata file formats selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaFormat {
    /// pyproject.toml with the hatchling build backend
    Pyproject,
    /// setup.py and setup.cfg with setuptools
    Setup,
}

/// Renders the metadata files for the chosen format as (name, contents)
/// pairs, in the order they should be written.
pub fn render_metadata(
    format: MetaFormat,
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<Vec<(&'static str, String)>> {
    match format {
        MetaFormat::Pyproject => {
            Ok(vec![("pyproject.toml", templates::pyproject(renderer, context)?)])
        }
        MetaFormat::Setup => Ok(vec![
            ("setup.cfg", templates::SETUP_CFG.to_string()),
            ("setup.py", templates::setup_py(renderer, context)?),
        ]),
    }
}
