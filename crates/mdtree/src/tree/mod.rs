//! In-memory directory hierarchy built from walked paths
//!
//! Directories are mappings from on-disk names to child nodes; files are
//! leaves carrying their display label.

mod builder;
mod node;

pub use builder::MarkdownTree;
pub use node::{Children, Node, NodeKind};
