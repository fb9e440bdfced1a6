//! Core input types for table rendering.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides).
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl Align {
    /// Parses an alignment hint, case-insensitively.
    ///
    /// `"centre"` is accepted as a synonym for `"center"`. Anything
    /// unrecognized resolves to [`Align::Left`].
    pub fn parse(hint: &str) -> Self {
        match hint.to_lowercase().as_str() {
            "center" | "centre" => Align::Center,
            "right" => Align::Right,
            _ => Align::Left,
        }
    }
}

/// The immutable description of one logical table.
///
/// Rows may have fewer or more cells than there are headers: cells beyond the
/// header count are ignored, missing cells are simply not rendered. Alignment
/// hints are positional and may be shorter than the header list; columns
/// without a hint align left.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Ordered column headers. An empty list yields an empty render.
    pub headers: Vec<String>,
    /// Ordered data rows, each an ordered list of cell strings.
    pub rows: Vec<Vec<String>>,
    /// Optional per-column alignment hints (`"left"`, `"center"`, `"right"`).
    #[serde(default)]
    pub alignment: Vec<String>,
    /// Name of the border style to render with.
    pub style: String,
}

impl TableSpec {
    /// Creates a spec with the given headers and rows, no alignment hints,
    /// and the named style.
    pub fn new<S: Into<String>>(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        style: S,
    ) -> Self {
        TableSpec {
            headers,
            rows,
            alignment: Vec::new(),
            style: style.into(),
        }
    }
}
