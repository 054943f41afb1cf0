//! Collect all structs that represent parts of the file tree.

use std::cmp::Ordering;

/// Represent the different possible indentation components of a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TreeLevel {
    /// Indentation below an entry that was the last of its siblings
    Indent,
    /// Bar below an entry that has further siblings
    TreeBar,
    /// In front of a file or dir if it is not the last
    TreeBranch,
    /// In front of a file or dir if it is the last
    TreeFinalBranch,
}

/// Represent a file with all necessary accompanying metadata.
#[derive(Clone, Debug)]
pub struct TreeEntry {
    /// Name of the current file or directory
    pub name: String,

    /// Save kind of entry to display it differently
    pub kind: TreeEntryKind,

    /// Size in bytes, tracked for regular files only
    pub size: Option<u64>,

    /// List of different levels of parent directories up to the root
    pub levels: Vec<TreeLevel>,

    /// List of child entries to enable a recursive data structure
    pub children: TreeChild,
}

/// Represent the possible states of a subdirectory.
#[derive(Clone, Debug)]
pub enum TreeChild {
    /// No children exist or have been read yet
    None,
    /// The expected child entries
    Children(Vec<TreeEntry>),
}

/// Represent which kind of file a TreeEntry is.
#[derive(Clone, Debug)]
pub enum TreeEntryKind {
    /// TreeEntry is a regular file
    File,
    /// TreeEntry is a Directory
    Directory,
}

/// Compare two entry names character by character by their numeric codepoint value.
///
/// The first differing character decides the order. If one name is a strict prefix of the
/// other, the shorter name sorts first. No case folding and no locale collation takes place,
/// so all uppercase ASCII names sort in front of the lowercase ones.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    for (l, r) in left.chars().zip(right.chars()) {
        match (l as u32).cmp(&(r as u32)) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    left.chars().count().cmp(&right.chars().count())
}
