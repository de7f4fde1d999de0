//! Markdown Tree Library
//!
//! Turns a directory hierarchy into a nested markdown outline: directories
//! become headings, files become list items, and link mode renders each
//! file as a link below a base URL.
//!
//! # Core Concepts
//!
//! - **MarkdownTree**: the hierarchy, filled one walked path at a time
//! - **Node**: a directory mapping or a file leaf
//! - **Walker**: depth-first filesystem traversal producing relative paths
//!
//! # Example
//!
//! ```no_run
//! use mdtree::{Config, MarkdownTree};
//!
//! let config = Config::new().with_link("https://github.com/acme/proj/blob/main");
//! let tree = MarkdownTree::from_dir("./proj", config).expect("Failed to walk directory");
//! tree.generate("TREE.md").expect("Failed to write markdown");
//! ```

mod config;
mod error;
mod link;
pub mod names;
mod render;
pub mod tree;
mod walk;

pub use config::Config;
pub use error::{Error, Result};
pub use link::LinkBuilder;
pub use tree::{Children, MarkdownTree, Node, NodeKind};
pub use walk::{WalkEntry, Walker, DEFAULT_SKIP_DIRS};
