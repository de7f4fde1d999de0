//! Core node types for the markdown tree

use derive_more::Display;
use std::collections::BTreeMap;

/// Children of a directory, keyed by on-disk name
///
/// Ordered by key so that rendering is deterministic.
pub type Children = BTreeMap<String, Node>;

/// The type/kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    /// A directory - rendered as a heading followed by its children
    #[display(fmt = "Directory")]
    Directory,
    /// A leaf - rendered as a list item
    #[display(fmt = "File")]
    File,
}

/// A single node in the tree
///
/// A `File` holds its display label; the on-disk name is the key it is
/// stored under in the parent's [`Children`]. Directories flattened by the
/// depth cap or the example rule are also `File`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Children),
    File(String),
}

impl Node {
    /// Create an empty directory node
    pub fn directory() -> Self {
        Node::Directory(Children::new())
    }

    /// Create a leaf node with the given label
    pub fn file(label: impl Into<String>) -> Self {
        Node::File(label.into())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory(_) => NodeKind::Directory,
            Node::File(_) => NodeKind::File,
        }
    }

    /// Returns true if this is a directory node
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Returns true if this is a leaf node
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// The display label of a leaf, `None` for directories
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::File(label) => Some(label),
            Node::Directory(_) => None,
        }
    }

    /// Children of a directory, `None` for leaves
    pub fn children(&self) -> Option<&Children> {
        match self {
            Node::Directory(children) => Some(children),
            Node::File(_) => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Node::Directory(children) => Some(children),
            Node::File(_) => None,
        }
    }

    /// Count this node and everything below it
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|children| children.values().map(Node::node_count).sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind() {
        assert_eq!(Node::directory().kind(), NodeKind::Directory);
        assert_eq!(Node::file("a").kind(), NodeKind::File);
        assert_eq!(NodeKind::Directory.to_string(), "Directory");
        assert_eq!(NodeKind::File.to_string(), "File");
    }

    #[test]
    fn test_node() {
        let dir = Node::directory();
        assert!(dir.is_directory());
        assert!(!dir.is_file());
        assert_eq!(dir.label(), None);
        assert_eq!(dir.children().map(|c| c.len()), Some(0));

        let leaf = Node::file("readme");
        assert!(leaf.is_file());
        assert!(!leaf.is_directory());
        assert_eq!(leaf.label(), Some("readme"));
        assert!(leaf.children().is_none());
    }

    #[test]
    fn test_node_count() {
        let mut inner = Children::new();
        inner.insert("x.png".to_string(), Node::file("x"));
        let mut outer = Children::new();
        outer.insert("img".to_string(), Node::Directory(inner));
        outer.insert("a.go".to_string(), Node::file("a"));

        assert_eq!(Node::Directory(outer).node_count(), 4);
        assert_eq!(Node::file("a").node_count(), 1);
    }
}
