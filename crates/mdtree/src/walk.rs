//! Filesystem traversal that feeds a [`MarkdownTree`]
//!
//! Paths are reported relative to the walk root, so nothing here depends on
//! or changes the process working directory.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::tree::MarkdownTree;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names skipped by default
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git"];

/// One walked entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the walk root, `/`-separated
    pub path: String,
    /// Whether the entry is a directory (symlinks are not followed)
    pub is_dir: bool,
}

impl WalkEntry {
    fn new(path: impl Into<String>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }
}

/// Depth-first walker over a directory
///
/// Entries come out in pre-order with siblings sorted by name. Directories
/// named in the skip list are left out together with their contents.
///
/// # Example
///
/// ```no_run
/// use mdtree::{Config, MarkdownTree, Walker};
///
/// let walker = Walker::new("./docs").expect("not a directory");
/// let mut tree = MarkdownTree::new(walker.root_name(), Config::new());
/// for entry in walker.walk().expect("unreadable directory") {
///     tree.insert(&entry.path, entry.is_dir);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Walker {
    /// Directory the walk starts from
    root: PathBuf,
    /// Directory names that are never entered
    skip_dirs: Vec<String>,
}

impl Walker {
    /// Create a walker rooted at the given directory
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the path is not a directory and
    /// [`Error::Io`] if it cannot be inspected.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;

        if !metadata.is_dir() {
            return Err(Error::invalid_input(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        Ok(Self {
            root: path.to_path_buf(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Also skip directories with this name
    pub fn skip_dir(mut self, name: impl Into<String>) -> Self {
        self.skip_dirs.push(name.into());
        self
    }

    /// Label for the document root: the base name of the cleaned root path
    ///
    /// `./proj/` gives `proj`. Paths without a final component such as `.`
    /// or `/` are used as written after cleaning.
    pub fn root_name(&self) -> String {
        let cleaned = path_clean::clean(&self.root);
        cleaned
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| cleaned.to_string_lossy().into_owned())
    }

    /// Walk the whole directory
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if any directory cannot be read.
    pub fn walk(&self) -> Result<Vec<WalkEntry>> {
        let walk = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir() && self.is_skipped(entry))
            });

        let mut entries = Vec::new();
        for entry in walk {
            let entry = entry.map_err(|err| Error::Io(err.into()))?;
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };

            let path = relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            entries.push(WalkEntry::new(path, entry.file_type().is_dir()));
        }

        debug!(
            "Walked {} entries under {}",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        let skipped = self
            .skip_dirs
            .iter()
            .any(|skip| entry.file_name() == skip.as_str());
        if skipped {
            debug!("Skipping directory {}", entry.path().display());
        }
        skipped
    }
}

impl MarkdownTree {
    /// Walk a directory and insert every entry into a new tree
    ///
    /// The root label is [`Walker::root_name`].
    pub fn from_dir(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let walker = Walker::new(path)?;
        let mut tree = MarkdownTree::new(walker.root_name(), config);

        let mut inserted = 0;
        for entry in walker.walk()? {
            if tree.insert(&entry.path, entry.is_dir) {
                inserted += 1;
            }
        }
        debug!("Inserted {} entries into tree {}", inserted, tree.root());

        Ok(tree)
    }
}
