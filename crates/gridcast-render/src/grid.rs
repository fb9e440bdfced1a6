//! Grid assembly: the definitive plain-text rendering of a table.
//!
//! The renderer is data-driven: all styles share the same structural logic
//! and differ only in the [`BorderStyle`] glyphs handed to the renderer.
//!
//! Two outputs come from the same line builder: [`GridRenderer::render`]
//! yields the marker-free text artifact, and
//! [`GridRenderer::render_classified`] yields the same lines as tagged
//! segments for image layout. Emphasis is parsed exactly once, here; it
//! reaches the rasterizer as a segment tag, never as literal markers.

use std::collections::BTreeSet;

use crate::columns::ColumnModel;
use crate::segment::{segment_line, TextSegment};
use crate::spec::{Align, TableSpec};
use crate::style::BorderStyle;
use crate::util::{display_width, strip_emphasis};

/// Which corner/join glyphs a horizontal border line uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    Top,
    Separator,
    Bottom,
}

/// Renders a [`TableSpec`] into a bordered text grid.
#[derive(Clone, Copy, Debug)]
pub struct GridRenderer {
    style: BorderStyle,
}

impl GridRenderer {
    /// Creates a renderer drawing with the given border style.
    pub fn new(style: BorderStyle) -> Self {
        GridRenderer { style }
    }

    /// Renders the full grid, one `\n`-terminated line at a time.
    ///
    /// Sequencing: top border, header row, header separator, then each data
    /// row followed by an inter-row separator (except after the last row),
    /// and the bottom border. A spec with zero headers or zero rows yields
    /// an empty string: nothing to render, not a malformed fragment.
    ///
    /// Emphasis markers never appear in the output; only the marked text
    /// survives, at its stripped width.
    pub fn render(&self, spec: &TableSpec) -> String {
        let mut out = String::new();
        for line in self.build_lines(spec, false) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Renders the grid as classified segments, one `Vec` per line.
    ///
    /// Same lines, same order as [`render`](Self::render), but each line is
    /// partitioned into structural, emphasized, and plain runs against the
    /// given structural glyph set. Emphasized cell content keeps its tag all
    /// the way to the rasterizer; downstream stages never see or re-parse
    /// the markers.
    pub fn render_classified(
        &self,
        spec: &TableSpec,
        structural: &BTreeSet<char>,
    ) -> Vec<Vec<TextSegment>> {
        self.build_lines(spec, true)
            .iter()
            .map(|line| segment_line(line, structural))
            .collect()
    }

    /// Builds the grid's lines without terminators. With `keep_markers` the
    /// cell text retains its emphasis markers (padded to the stripped width)
    /// so that segmentation can classify the runs afterward.
    fn build_lines(&self, spec: &TableSpec, keep_markers: bool) -> Vec<String> {
        if spec.headers.is_empty() || spec.rows.is_empty() {
            return Vec::new();
        }

        let model = ColumnModel::from_spec(spec);
        let mut lines = Vec::new();

        lines.push(self.border_line(&model, LineKind::Top));
        lines.push(self.cell_row(&spec.headers, &model, keep_markers));
        lines.push(self.border_line(&model, LineKind::Separator));

        for (row_idx, row) in spec.rows.iter().enumerate() {
            lines.push(self.cell_row(row, &model, keep_markers));
            if row_idx < spec.rows.len() - 1 {
                lines.push(self.border_line(&model, LineKind::Separator));
            }
        }

        lines.push(self.border_line(&model, LineKind::Bottom));
        lines
    }

    /// Formats one cell to its column width, markers stripped.
    ///
    /// Emphasis markers never count toward width. Content wider than the
    /// column still gets one space of padding on each side; it is never
    /// truncated.
    fn format_cell(content: &str, width: usize, alignment: Align) -> String {
        Self::pad_cell(&strip_emphasis(content), display_width(content), width, alignment)
    }

    /// Pads `visible` (whose display width is `content_len`) to the column
    /// width under the given alignment.
    fn pad_cell(visible: &str, content_len: usize, width: usize, alignment: Align) -> String {
        let width = width.max(content_len + 2);
        let spaces = width - content_len;

        match alignment {
            Align::Left => format!(" {}{}", visible, " ".repeat(spaces - 1)),
            Align::Right => format!("{}{} ", " ".repeat(spaces - 1), visible),
            Align::Center => {
                let leading = spaces / 2;
                let trailing = spaces - leading;
                format!("{}{}{}", " ".repeat(leading), visible, " ".repeat(trailing))
            }
        }
    }

    fn cell_row(&self, cells: &[String], model: &ColumnModel, keep_markers: bool) -> String {
        let mut out = String::new();
        out.push(self.style.vertical);
        for (i, cell) in cells.iter().enumerate().take(model.num_columns()) {
            let formatted = if keep_markers {
                Self::pad_cell(cell, display_width(cell), model.widths()[i], model.alignment(i))
            } else {
                Self::format_cell(cell, model.widths()[i], model.alignment(i))
            };
            out.push_str(&formatted);
            out.push(self.style.vertical);
        }
        out
    }

    fn border_line(&self, model: &ColumnModel, kind: LineKind) -> String {
        let (left, join, right) = match kind {
            LineKind::Top => (
                self.style.top_left,
                self.style.top_join,
                self.style.top_right,
            ),
            LineKind::Separator => (
                self.style.left_join,
                self.style.cross,
                self.style.right_join,
            ),
            LineKind::Bottom => (
                self.style.bottom_left,
                self.style.bottom_join,
                self.style.bottom_right,
            ),
        };

        let mut out = String::new();
        out.push(left);
        for (i, &width) in model.widths().iter().enumerate() {
            if i > 0 {
                out.push(join);
            }
            for _ in 0..width {
                out.push(self.style.horizontal);
            }
        }
        out.push(right);
        out
    }
}
