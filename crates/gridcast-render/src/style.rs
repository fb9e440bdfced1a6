//! Border styles and the style registry.
//!
//! A [`BorderStyle`] is pure data: the eleven box-drawing glyphs a grid is
//! assembled from. The [`StyleRegistry`] maps case-insensitive names to
//! styles. It starts out with the built-ins and can be extended at runtime;
//! renderers receive a style value looked up from the registry, never the
//! registry itself.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::RenderError;

/// The box-drawing character set for one border style.
///
/// Corners, junctions, the cross, and the two rulers. All structural output
/// of the grid renderer is drawn from these eleven glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub top_join: char,
    pub bottom_join: char,
    pub left_join: char,
    pub right_join: char,
    pub cross: char,
}

impl BorderStyle {
    /// Light single-line box drawing: `┌ ─ ┐ │ └ ┘`.
    pub const SINGLE: BorderStyle = BorderStyle {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        top_join: '┬',
        bottom_join: '┴',
        left_join: '├',
        right_join: '┤',
        cross: '┼',
    };

    /// Double-line box drawing: `╔ ═ ╗ ║ ╚ ╝`.
    pub const DOUBLE: BorderStyle = BorderStyle {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
        top_join: '╦',
        bottom_join: '╩',
        left_join: '╠',
        right_join: '╣',
        cross: '╬',
    };

    /// Heavy single-line box drawing: `┏ ━ ┓ ┃ ┗ ┛`.
    pub const HEAVY: BorderStyle = BorderStyle {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
        top_join: '┳',
        bottom_join: '┻',
        left_join: '┣',
        right_join: '┫',
        cross: '╋',
    };

    /// Light lines with rounded corners: `╭ ─ ╮ │ ╰ ╯`.
    pub const ROUNDED: BorderStyle = BorderStyle {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
        top_join: '┬',
        bottom_join: '┴',
        left_join: '├',
        right_join: '┤',
        cross: '┼',
    };

    /// The eleven glyphs as an array, in declaration order.
    pub fn glyphs(&self) -> [char; 11] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.horizontal,
            self.vertical,
            self.top_join,
            self.bottom_join,
            self.left_join,
            self.right_join,
            self.cross,
        ]
    }
}

/// Built-in style names and their glyph sets.
const BUILTIN_STYLES: &[(&str, BorderStyle)] = &[
    ("single-line-full", BorderStyle::SINGLE),
    ("double-line-full", BorderStyle::DOUBLE),
    ("heavy-line-full", BorderStyle::HEAVY),
    ("rounded-full", BorderStyle::ROUNDED),
];

/// Registry of named border styles.
///
/// Names are normalized to lowercase, so lookup and registration are
/// case-insensitive. Registration overwrites unconditionally (last write
/// wins). The registry is an owned value: construct it once at startup, pass
/// it by reference to whatever renders.
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    styles: BTreeMap<String, BorderStyle>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl StyleRegistry {
    /// Creates an empty registry with no styles at all.
    pub fn empty() -> Self {
        StyleRegistry {
            styles: BTreeMap::new(),
        }
    }

    /// Creates a registry pre-populated with the built-in styles.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (name, style) in BUILTIN_STYLES {
            registry.register(*name, *style);
        }
        registry
    }

    /// Registers a style under the given name, overwriting any existing
    /// entry with that name.
    pub fn register(&mut self, name: impl Into<String>, style: BorderStyle) {
        self.styles.insert(name.into().to_lowercase(), style);
    }

    /// Looks up a style by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownStyle`] carrying the requested name and
    /// the list of known names.
    pub fn lookup(&self, name: &str) -> Result<BorderStyle, RenderError> {
        self.styles
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| RenderError::UnknownStyle {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// Returns all registered style names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.styles.keys().cloned().collect()
    }

    /// Returns the union of structural glyphs across every registered style.
    ///
    /// This is the character set the segmenter classifies against. It spans
    /// all registered styles, not just the one being rendered, so lines mixing
    /// glyph sets still classify as structural.
    pub fn structural_glyphs(&self) -> BTreeSet<char> {
        self.styles
            .values()
            .flat_map(|style| style.glyphs())
            .collect()
    }

    /// Returns the number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
