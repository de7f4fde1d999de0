//! Incremental construction of the markdown tree from path insertions

use crate::config::Config;
use crate::names::{is_example_name, strip_extension, MAX_LEVEL};
use crate::tree::{Children, Node};
use log::trace;

/// Level of the root's direct children; level 1 is the root heading
const FIRST_LEVEL: usize = 2;

/// A directory hierarchy ready to be rendered as a markdown outline
///
/// The tree is filled by [`insert`](MarkdownTree::insert) calls, one per
/// walked entry, and rendered with
/// [`generate`](MarkdownTree::generate) once the walk is complete.
///
/// # Example
///
/// ```
/// use mdtree::{Config, MarkdownTree};
///
/// let mut tree = MarkdownTree::new("proj", Config::new());
/// assert!(tree.insert("src/main.rs", false));
/// assert!(!tree.insert("README.md", false));
///
/// assert_eq!(tree.to_markdown().unwrap(), "# proj\n## src\n- main\n");
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownTree {
    /// Label of the top-level heading
    root: String,
    /// Rendering options
    config: Config,
    /// Children of the root
    nodes: Children,
}

impl MarkdownTree {
    /// Create an empty tree under the given root label
    pub fn new(root: impl Into<String>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
            nodes: Children::new(),
        }
    }

    /// The root label
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Children of the root
    pub fn children(&self) -> &Children {
        &self.nodes
    }

    /// Returns true if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Count all nodes below the root
    pub fn node_count(&self) -> usize {
        self.nodes.values().map(Node::node_count).sum()
    }

    /// Look up a node by its root-relative, `/`-separated key path
    ///
    /// Keys are on-disk names, so `find("src/main.rs")` finds the leaf
    /// labelled `main`.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let mut parts = path.split('/');
        let mut current = self.nodes.get(parts.next()?)?;
        for part in parts {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    /// Insert one walked entry
    ///
    /// `path` is relative to the root and uses `/` separators. Returns false
    /// without touching the tree when the entry is a direct child of the
    /// root, lies under a `-example` directory, or would descend through an
    /// entry already stored as a leaf.
    pub fn insert(&mut self, path: &str, is_dir: bool) -> bool {
        let parts: Vec<&str> = path.split('/').collect();

        // Root-level entries only show up through their descendants
        if parts.len() < 2 {
            trace!("Skipping root-level entry: {:?}", path);
            return false;
        }

        if parts[..parts.len() - 1]
            .iter()
            .any(|part| is_example_name(part))
        {
            trace!("Skipping entry under example directory: {:?}", path);
            return false;
        }

        let inserted = insert_node(FIRST_LEVEL, &parts, is_dir, &mut self.nodes);
        if !inserted {
            trace!("Skipping entry below a leaf: {:?}", path);
        }
        inserted
    }
}

/// Descend one segment per level until two segments remain or the cap is hit
fn insert_node(level: usize, parts: &[&str], is_dir: bool, nodes: &mut Children) -> bool {
    let capped = level >= MAX_LEVEL;

    if parts.len() == 2 || capped {
        let parent = nodes
            .entry(parts[0].to_string())
            .or_insert_with(Node::directory);
        let Some(children) = parent.children_mut() else {
            return false;
        };

        let name = parts[1];
        let node = if !is_dir || is_example_name(name) || capped {
            Node::file(strip_extension(name))
        } else {
            Node::directory()
        };
        children.insert(name.to_string(), node);
        return true;
    }

    match nodes
        .entry(parts[0].to_string())
        .or_insert_with(Node::directory)
    {
        Node::Directory(children) => insert_node(level + 1, &parts[1..], is_dir, children),
        Node::File(_) => false,
    }
}
