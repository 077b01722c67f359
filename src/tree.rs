//! Declarative directory-tree materialization.
//!
//! A starter layout is described as a nested [`TreeNode`] value and turned
//! into real directories and files in a single depth-first pass. Inside the
//! project root (the directory named after the package), every level receives
//! an auto-generated `__init__.py` re-exporting its immediate children, so
//! importing the top-level package transitively exposes every nested symbol.
//! This trades namespace hygiene for early-development convenience.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};

/// File name suffix that marks a child as a plain Python module.
pub const SOURCE_SUFFIX: &str = ".py";

/// Name of the generated aggregation file.
pub const AGGREGATE_FILE: &str = "__init__.py";

/// A node in the declarative tree description.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A file leaf. `None` requests auto-generated contents from sibling
    /// context; `Some("")` is an explicitly empty file.
    File(Option<String>),
    /// A sub-directory with ordered children. Declaration order is
    /// significant: generated re-export text follows it.
    Directory(IndexMap<String, TreeNode>),
}

impl TreeNode {
    /// File leaf with verbatim contents.
    pub fn file(contents: impl Into<String>) -> Self {
        TreeNode::File(Some(contents.into()))
    }

    /// File leaf whose contents are derived from sibling sub-packages.
    pub fn auto() -> Self {
        TreeNode::File(None)
    }

    /// Directory node built from (name, node) pairs, preserving order.
    pub fn dir<I>(children: I) -> Self
    where
        I: IntoIterator<Item = (String, TreeNode)>,
    {
        TreeNode::Directory(children.into_iter().collect())
    }
}

/// Read-only context for a materialization run.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Top-level package name; a directory with this exact name marks the
    /// point where generated import paths start accumulating.
    pub project_title: String,
    /// Directory under which the whole tree is created. Must already exist,
    /// and none of the described paths may exist yet.
    pub base_output_path: PathBuf,
}

/// Creates every directory and file described by `root` under the context's
/// base path.
///
/// The first failing filesystem operation aborts the walk; nothing already
/// written is cleaned up or retried.
pub fn materialize(root: TreeNode, ctx: &BuildContext) -> Result<()> {
    let TreeNode::Directory(children) = root else {
        return Err(Error::ValidationError("tree root must be a directory".to_string()));
    };
    for (name, node) in children {
        write_node(&name, node, &ctx.base_output_path, "", false, ctx)?;
    }
    Ok(())
}

fn write_node(
    name: &str,
    node: TreeNode,
    dir: &Path,
    import_path: &str,
    in_root: bool,
    ctx: &BuildContext,
) -> Result<()> {
    let target = dir.join(name);
    match node {
        TreeNode::File(contents) => {
            write_new_file(&target, contents.as_deref().unwrap_or_default())
        }
        TreeNode::Directory(children) => {
            write_directory(name, children, &target, import_path, in_root, ctx)
        }
    }
}

fn write_directory(
    name: &str,
    mut children: IndexMap<String, TreeNode>,
    target: &Path,
    import_path: &str,
    in_root: bool,
    ctx: &BuildContext,
) -> Result<()> {
    // Root status is a one-way, per-branch flag: once entered it is inherited
    // by every descendant of this directory, while sibling branches keep
    // testing for entry independently.
    let in_root = in_root || name == ctx.project_title;
    let import_path = if in_root {
        format!("{}{}.", import_path, name)
    } else {
        import_path.to_string()
    };

    let subpackages = subpackage_names(&children);
    let modules = module_names(&children);

    // Modules that asked for auto-generated contents eagerly surface every
    // sibling sub-package. Without sub-packages they stay empty.
    if !subpackages.is_empty() {
        let text = reexport_block(&import_path, &subpackages);
        for module in &modules {
            let file_name = format!("{}{}", module, SOURCE_SUFFIX);
            match children.get_mut(&file_name) {
                Some(TreeNode::File(contents)) if contents.is_none() => {
                    *contents = Some(text.clone());
                }
                _ => {}
            }
        }
    }

    // Every level inside the root gets an aggregation file covering its
    // immediate children; a declared one is overwritten.
    if in_root {
        let mut exported = subpackages;
        exported.extend(modules);
        children.insert(
            AGGREGATE_FILE.to_string(),
            TreeNode::File(Some(reexport_block(&import_path, &exported))),
        );
    }

    debug!("Creating directory {}", target.display());
    fs::create_dir(target).map_err(|source| Error::FsError {
        path: target.to_path_buf(),
        source,
    })?;

    for (child_name, child) in children {
        write_node(&child_name, child, target, &import_path, in_root, ctx)?;
    }

    Ok(())
}

/// Names of immediate children that are themselves directories.
fn subpackage_names(children: &IndexMap<String, TreeNode>) -> Vec<String> {
    children
        .iter()
        .filter(|(_, node)| matches!(node, TreeNode::Directory(_)))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Stems of immediate file children with the source suffix, aggregation file
/// excluded so it can never import itself.
fn module_names(children: &IndexMap<String, TreeNode>) -> Vec<String> {
    children
        .iter()
        .filter(|(name, node)| {
            matches!(node, TreeNode::File(_)) && name.as_str() != AGGREGATE_FILE
        })
        .filter_map(|(name, _)| name.strip_suffix(SOURCE_SUFFIX))
        .map(str::to_string)
        .collect()
}

/// One star-import line per child, in the given order.
fn reexport_block(import_path: &str, names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("from {}{} import *", import_path, name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_new_file(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing file {}", path.display());
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| Error::FsError { path: path.to_path_buf(), source })?;
    file.write_all(contents.as_bytes())
        .map_err(|source| Error::FsError { path: path.to_path_buf(), source })
}
