//! Markdown serialization of a [`MarkdownTree`]
//!
//! Output is a heading for the root, then for every directory its files as
//! list items followed by its subdirectories as deeper headings. Siblings
//! come out in key order, so repeated renders are byte-identical.

use crate::error::Result;
use crate::link::LinkBuilder;
use crate::names::heading_marker;
use crate::tree::{Children, MarkdownTree, Node};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one tree as markdown
struct Renderer<'a> {
    tree: &'a MarkdownTree,
    links: Option<LinkBuilder>,
}

impl<'a> Renderer<'a> {
    /// Validate the tree's config and prepare link composition
    fn new(tree: &'a MarkdownTree) -> Result<Self> {
        let config = tree.config();
        config.validate()?;

        let links = config.link_base().map(LinkBuilder::new).transpose()?;
        Ok(Self { tree, links })
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{} {}", heading_marker(1), self.tree.root())?;
        self.write_children(w, 2, &mut Vec::new(), self.tree.children())
    }

    /// Files first, then each subdirectory as a heading at `level`
    fn write_children<W: Write>(
        &self,
        w: &mut W,
        level: usize,
        path: &mut Vec<&'a str>,
        children: &'a Children,
    ) -> Result<()> {
        for (name, node) in children {
            if let Node::File(label) = node {
                self.write_file(w, path, name, label)?;
            }
        }

        for (name, node) in children {
            if let Node::Directory(grandchildren) = node {
                writeln!(w, "{} {}", heading_marker(level), name)?;
                path.push(name);
                self.write_children(w, level + 1, path, grandchildren)?;
                path.pop();
            }
        }

        Ok(())
    }

    fn write_file<W: Write>(
        &self,
        w: &mut W,
        path: &[&str],
        name: &str,
        label: &str,
    ) -> Result<()> {
        match &self.links {
            Some(links) => {
                let url = links.file_url(path.iter().copied().chain(std::iter::once(name)))?;
                writeln!(w, "- [{}]({})", label, url)?;
            }
            None => writeln!(w, "- {}", label)?,
        }
        Ok(())
    }
}

impl MarkdownTree {
    /// Render the tree into a file, creating or truncating it
    ///
    /// The config is validated and the base URL parsed before the file is
    /// touched. Output is buffered and flushed once at the end; a failed
    /// write leaves whatever was already flushed in place.
    ///
    /// Names and labels are written verbatim with no markdown escaping. A
    /// name containing a newline or markdown syntax such as `#` or `[` ends
    /// up in the document as is and can change its structure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) or
    /// [`Error::Url`](crate::Error::Url) for bad configuration, and
    /// [`Error::Io`](crate::Error::Io) if the file cannot be created or
    /// written.
    pub fn generate(&self, output: impl AsRef<Path>) -> Result<()> {
        let output = output.as_ref();
        let renderer = Renderer::new(self)?;

        debug!("Writing markdown tree to {}", output.display());
        let mut w = BufWriter::new(File::create(output)?);
        renderer.write(&mut w)?;
        w.flush()?;
        Ok(())
    }

    /// Render the tree into any writer
    ///
    /// Same output as [`generate`](Self::generate), labels included verbatim.
    pub fn write_markdown<W: Write>(&self, w: &mut W) -> Result<()> {
        Renderer::new(self)?.write(w)
    }

    /// Render the tree into a string
    pub fn to_markdown(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_markdown(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, Error, MarkdownTree};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_tree_renders_root_only() {
        let tree = MarkdownTree::new("proj", Config::new());
        assert_eq!(tree.to_markdown().unwrap(), "# proj\n");
    }

    #[test]
    fn test_files_before_directories() {
        let mut tree = MarkdownTree::new("proj", Config::new());
        tree.insert("src/zeta", true);
        tree.insert("src/zeta/z.rs", false);
        tree.insert("src/alpha", true);
        tree.insert("src/main.rs", false);

        assert_eq!(
            tree.to_markdown().unwrap(),
            "# proj\n## src\n- main\n### alpha\n### zeta\n- z\n"
        );
    }

    #[test]
    fn test_link_mode_uses_raw_name() {
        let config = Config::new().with_link("https://example.com/docs");
        let mut tree = MarkdownTree::new("proj", config);
        tree.insert("guide/intro.md", false);

        assert_eq!(
            tree.to_markdown().unwrap(),
            "# proj\n## guide\n- [intro](https://example.com/docs/guide/intro.md)\n"
        );
    }

    #[test]
    fn test_labels_are_written_verbatim() {
        let mut tree = MarkdownTree::new("proj", Config::new());
        tree.insert("docs/evil\n# injected.md", false);
        tree.insert("docs/[draft] *notes*.txt", false);

        assert_eq!(
            tree.to_markdown().unwrap(),
            "# proj\n## docs\n- [draft] *notes*\n- evil\n# injected\n"
        );
    }

    #[test]
    fn test_bad_config_is_reported_before_output() {
        let config = Config {
            with_link: true,
            base_url: None,
        };
        let tree = MarkdownTree::new("proj", config);
        let mut buf = Vec::new();
        assert!(matches!(
            tree.write_markdown(&mut buf),
            Err(Error::InvalidInput(_))
        ));
        assert!(buf.is_empty());

        let tree = MarkdownTree::new("proj", Config::new().with_link("::"));
        assert!(matches!(
            tree.write_markdown(&mut buf),
            Err(Error::Url { .. })
        ));
        assert!(buf.is_empty());
    }
}
