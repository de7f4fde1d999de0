//! Rendering options for a markdown tree

use crate::error::{Error, Result};

/// Options that change how file entries are rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Render file entries as `[label](url)` links
    pub with_link: bool,
    /// Base URL that file paths are appended to in link mode
    pub base_url: Option<String>,
}

impl Config {
    /// Plain rendering: file entries are bare labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable link mode against the given base URL
    pub fn with_link(mut self, base_url: impl Into<String>) -> Self {
        self.with_link = true;
        self.base_url = Some(base_url.into());
        self
    }

    /// Check that link mode has what it needs
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when link mode is on without a
    /// non-empty base URL.
    pub fn validate(&self) -> Result<()> {
        if self.with_link && self.link_base().is_none() {
            return Err(Error::invalid_input("missing base URL for link mode"));
        }
        Ok(())
    }

    /// The base URL when link mode is on and one is set
    pub(crate) fn link_base(&self) -> Option<&str> {
        if !self.with_link {
            return None;
        }
        self.base_url.as_deref().filter(|base| !base.is_empty())
    }
}
