//! Starter source layouts.
//!
//! Each layout maps to a declarative [`TreeNode`] value derived from the
//! resolved configuration; the materializer turns it into files on disk.

use clap::ValueEnum;

use crate::config::Config;
use crate::tree::TreeNode;

/// File structure formats selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// A single module named after the package, next to the metadata files
    Single,
    /// A src/ tree holding the package, a util sub-package and a scratch
    /// test module
    SrcUtil,
}

impl Layout {
    /// Builds the declarative tree for this layout.
    pub fn tree(&self, config: &Config) -> TreeNode {
        match self {
            Layout::Single => {
                TreeNode::dir([(format!("{}.py", config.title), TreeNode::file(""))])
            }
            Layout::SrcUtil => TreeNode::dir([(
                "src".to_string(),
                TreeNode::dir([
                    (
                        "test.py".to_string(),
                        TreeNode::file(format!(
                            "import {} as {}",
                            config.title, config.abbrev
                        )),
                    ),
                    ("test.ipynb".to_string(), TreeNode::auto()),
                    (
                        config.title.clone(),
                        TreeNode::dir([
                            ("main.py".to_string(), TreeNode::auto()),
                            (
                                "util".to_string(),
                                TreeNode::dir([("util.py".to_string(), TreeNode::auto())]),
                            ),
                        ]),
                    ),
                ]),
            )]),
        }
    }
}
