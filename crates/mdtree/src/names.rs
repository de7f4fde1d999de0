//! Name helpers shared by the builder and the renderer

/// Directories whose name contains this marker are never expanded
pub const EXAMPLE_DIR_SUFFIX: &str = "-example";

/// Deepest insertion level; the root heading is level 1
pub const MAX_LEVEL: usize = 6;

/// Returns true if the name carries the example marker
pub fn is_example_name(name: &str) -> bool {
    name.contains(EXAMPLE_DIR_SUFFIX)
}

/// Remove the last `.ext` from a file name
///
/// A leading dot is part of the name, not an extension, so `.gitignore`
/// is returned unchanged.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}

/// The `#` run that opens a heading at the given level
pub fn heading_marker(level: usize) -> String {
    "#".repeat(level)
}
