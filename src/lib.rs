//! This crate provides a library to render a graphical representation of a filesystem in a tree
//! like fashion.
//!
//! One directory level is read, filtered and sorted at a time before a single line is emitted
//! for it, so the rendered output is deterministic for an unchanged directory tree. The walk is
//! depth-first and synchronous; the first filesystem error aborts the whole run and nothing is
//! rendered in that case.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fs;
use std::fs::DirEntry;
use std::path::Path;

pub mod errors;
mod options;
mod tree_elements;

use errors::TreeError;
pub use options::Options;
use tree_elements::{compare_names, TreeChild, TreeEntry, TreeEntryKind, TreeLevel};

/// Indentation below an entry that was the last of its siblings
const INDENT_SIGN: &str = "\t";

/// Bar below an entry that has further siblings
const TREE_SIGN: &str = "│\t";

/// In front of a file or dir if it is not the last
const INNER_BRANCH: &str = "├───";

/// In front of a file or dir if it is the last
const FINAL_BRANCH: &str = "└───";

/// Read the directory for the given Path and sort the entries by character value.
///
/// Collect all entries in the given directory, drop everything that is not a directory unless
/// files were requested and sort the remaining entries name by name, character by character.
///
/// # Errors
///
/// Will return an error in the following situations, but not limited to:
/// * The provided `path` doesn't exist.
/// * The process lacks permissions to view the contents.
/// * The `path` points at a non-directory file.
fn read_dir(path: &impl AsRef<Path>, options: &Options) -> Result<Vec<DirEntry>, TreeError> {
    let listing = fs::read_dir(path)
        .map_err(|err| TreeError::ReadDir(path.as_ref().to_path_buf(), err))?;

    let mut entries = Vec::new();
    for entry in listing {
        let entry = entry.map_err(|err| TreeError::ReadDir(path.as_ref().to_path_buf(), err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| TreeError::Metadata(entry.path(), err))?;

        if options.files || file_type.is_dir() {
            entries.push(entry);
        }
    }

    entries.sort_by(|left, right| {
        let left_name = left.file_name();
        let right_name = right.file_name();
        compare_names(&left_name.to_string_lossy(), &right_name.to_string_lossy())
    });

    Ok(entries)
}

/// Render the given TreeEntry into its single line of text.
///
/// The accumulated levels are drawn first, ending in the branch sign of the entry itself,
/// followed by the entry name. Regular files carry a size annotation, either the exact number
/// of bytes or `(empty)` for a zero length file. The line is newline terminated.
fn render_tree_level(entry: &TreeEntry) -> String {
    let mut rendered_entry = String::new();

    for level in &entry.levels {
        let current_level = match level {
            TreeLevel::Indent => INDENT_SIGN,
            TreeLevel::TreeBar => TREE_SIGN,
            TreeLevel::TreeBranch => INNER_BRANCH,
            TreeLevel::TreeFinalBranch => FINAL_BRANCH,
        };
        rendered_entry += current_level;
    }

    rendered_entry += entry.name.as_str();

    if let Some(size) = entry.size {
        rendered_entry += render_size(size).as_str();
    }
    rendered_entry += "\n";

    rendered_entry
}

/// Format the byte count of a regular file as its size annotation.
fn render_size(size: u64) -> String {
    match size {
        0 => " (empty)".to_string(),
        bytes => format!(" ({}b)", bytes),
    }
}

/// Generate a string representation of the nested TreeEntry data structure.
///
/// Walk the graph of the filesystem that has previously been generated and render it into an
/// actual String representation of a filesystem tree, one line per entry.
fn render_tree(tree_entry: &TreeEntry) -> String {
    let mut current_level = render_tree_level(tree_entry);

    if let TreeChild::Children(children) = &tree_entry.children {
        for child in children {
            current_level += render_tree(child).as_str();
        }
    }

    current_level
}

/// Actually do the work of computing the tree.
///
/// Every entry of the filtered and sorted directory level receives its own branch sign, the
/// last one of the level the closing variant. Subdirectories are entered with the indentation
/// extended by a bar while further siblings follow below, or by plain indentation for the last
/// one. Any error encountered while descending is propagated unchanged.
fn recurse_paths(
    path: &impl AsRef<Path>,
    indent_level: &[TreeLevel],
    options: &Options,
) -> Result<Vec<TreeEntry>, TreeError> {
    let entries = read_dir(path, options)?;
    let entries_len = entries.len();

    let mut output = Vec::with_capacity(entries_len);
    for (i, entry) in entries.into_iter().enumerate() {
        let mut current_indent: Vec<TreeLevel> = indent_level.to_vec();
        let mut recursive_indent: Vec<TreeLevel> = indent_level.to_vec();

        if i == entries_len - 1 {
            current_indent.push(TreeLevel::TreeFinalBranch);
            recursive_indent.push(TreeLevel::Indent);
        } else {
            current_indent.push(TreeLevel::TreeBranch);
            recursive_indent.push(TreeLevel::TreeBar);
        };

        let file_type = entry
            .file_type()
            .map_err(|err| TreeError::Metadata(entry.path(), err))?;

        let size = if file_type.is_dir() {
            None
        } else {
            let meta = entry
                .metadata()
                .map_err(|err| TreeError::Metadata(entry.path(), err))?;
            Some(meta.len())
        };

        let mut tree_entry = TreeEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            kind: if file_type.is_dir() {
                TreeEntryKind::Directory
            } else {
                TreeEntryKind::File
            },
            size,
            levels: current_indent,
            children: TreeChild::None,
        };

        if let TreeEntryKind::Directory = tree_entry.kind {
            let sub_tree = recurse_paths(&entry.path(), &recursive_indent, options)?;
            tree_entry.children = TreeChild::Children(sub_tree);
        }

        output.push(tree_entry);
    }

    Ok(output)
}

/// Generate a tree representation of the filesystem.
///
/// Walk the filesystem starting from the given directory and visit all child directories
/// recursively, including the regular files if requested in the options. Render all entries
/// into a tree like string representation with one newline terminated line per entry. The root
/// directory itself is not part of the output, so an empty directory renders as an empty
/// string.
///
/// # Errors
///
/// Returns a [`TreeError`] as soon as a directory cannot be listed or an entry cannot be
/// examined. No partial tree is returned in that case.
pub fn tree(path: &impl AsRef<Path>, options: &Options) -> Result<String, TreeError> {
    let indent_level: Vec<TreeLevel> = Vec::new();

    let mut rendered = String::new();
    for entry in recurse_paths(path, &indent_level, options)? {
        rendered += render_tree(&entry).as_str();
    }

    Ok(rendered)
}
