//! File link composition for link mode

use crate::error::{Error, Result};
use url::Url;

/// Composes file URLs by appending root-relative path segments to a base URL
///
/// Each segment is percent-encoded on its own, so names containing spaces,
/// `#` or `?` stay inside the path. A trailing slash on the base is dropped
/// before appending, and the base's query and fragment are kept.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: Url,
}

impl LinkBuilder {
    /// Parse the base URL
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the base does not parse or cannot carry a
    /// path (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|err| Error::url(base_url, err))?;
        if base.cannot_be_a_base() {
            return Err(Error::url(base_url, "URL cannot carry a path"));
        }
        Ok(Self { base })
    }

    /// The URL of the file reached by the given segments below the root
    pub fn file_url<'s, I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::url(self.base.as_str(), "URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
