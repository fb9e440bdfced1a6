//! Column width and alignment resolution.
//!
//! The [`ColumnModel`] is computed once per render and then frozen: every
//! cell in a column is formatted against the same width, which is what keeps
//! all rows of the grid the same shape.

use crate::spec::{Align, TableSpec};
use crate::util::display_width;

/// Per-column padding added on top of the widest content (one space each side).
const COLUMN_PADDING: usize = 2;

/// Resolved column widths and alignments for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnModel {
    widths: Vec<usize>,
    alignments: Vec<Align>,
}

impl ColumnModel {
    /// Computes widths and alignments from a table spec.
    ///
    /// Each column's width is the display length of its widest content
    /// (header or any cell, emphasis markers stripped) plus two padding
    /// units. Cells beyond the header count are silently ignored. A spec
    /// with no headers yields an empty model.
    pub fn from_spec(spec: &TableSpec) -> Self {
        if spec.headers.is_empty() {
            return ColumnModel {
                widths: Vec::new(),
                alignments: Vec::new(),
            };
        }

        let mut widths: Vec<usize> = spec
            .headers
            .iter()
            .map(|header| display_width(header))
            .collect();

        for row in &spec.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                let cell_len = display_width(cell);
                if cell_len > widths[i] {
                    widths[i] = cell_len;
                }
            }
        }

        for width in &mut widths {
            *width += COLUMN_PADDING;
        }

        let alignments = (0..widths.len())
            .map(|i| match spec.alignment.get(i) {
                Some(hint) => Align::parse(hint),
                None => Align::Left,
            })
            .collect();

        ColumnModel { widths, alignments }
    }

    /// One width per header column, in order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// The resolved alignment of a column. Out-of-range indices align left.
    pub fn alignment(&self, column: usize) -> Align {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// The number of columns (equal to the header count).
    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    /// True when the spec had no headers.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
