//! Text measurement helpers shared by the column model and the grid renderer.
//!
//! All width math in this crate goes through [`display_width`], which counts
//! user-perceived characters (grapheme clusters). Emphasis markers are
//! stripped before measuring, so `**Bold**` and `Bold` occupy the same width.

use unicode_segmentation::UnicodeSegmentation;

/// The literal marker pair that delimits an emphasis run.
pub const EMPHASIS_MARKER: &str = "**";

/// Removes all emphasis markers from a string.
///
/// Only the markers are removed; the text between them survives untouched.
///
/// # Example
///
/// ```rust
/// use gridcast_render::strip_emphasis;
///
/// assert_eq!(strip_emphasis("**Bold** text"), "Bold text");
/// assert_eq!(strip_emphasis("plain"), "plain");
/// ```
pub fn strip_emphasis(s: &str) -> String {
    s.replace(EMPHASIS_MARKER, "")
}

/// Returns the display width of a string with emphasis markers stripped.
///
/// Width is measured in grapheme clusters, so multi-byte characters count as
/// one unit each:
///
/// ```rust
/// use gridcast_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("**Bold**"), 4);
/// assert_eq!(display_width("日本語"), 3);
/// assert_eq!(display_width("café"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    strip_emphasis(s).graphemes(true).count()
}
