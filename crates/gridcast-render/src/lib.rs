//! # gridcast-render — box-drawing table rendering
//!
//! This crate is the text half of gridcast: it turns a [`TableSpec`] into a
//! bordered grid of box-drawing characters, and classifies rendered lines
//! into typed segments for downstream image layout.
//!
//! Pipeline: `TableSpec` → [`ColumnModel`] → [`GridRenderer`], which yields
//! either the text grid ([`GridRenderer::render`]) or classified
//! [`TextSegment`] lines for image layout
//! ([`GridRenderer::render_classified`]).
//!
//! ## Quick start
//!
//! ```rust
//! use gridcast_render::{GridRenderer, StyleRegistry, TableSpec};
//!
//! let registry = StyleRegistry::with_builtins();
//! let spec = TableSpec::new(
//!     vec!["A".into(), "BB".into()],
//!     vec![vec!["x".into(), "yy".into()]],
//!     "single-line-full",
//! );
//!
//! let style = registry.lookup(&spec.style).unwrap();
//! let grid = GridRenderer::new(style).render(&spec);
//! assert!(grid.contains("│ A │ BB │"));
//! ```
//!
//! ## Emphasis
//!
//! Cell text may wrap a run in `**` markers. The markers never appear in the
//! rendered grid and never count toward column width; segmentation reports
//! the run as [`SegmentKind::Emphasized`] so the rasterizer can paint it in
//! a distinct weight.
//!
//! ## Degenerate inputs
//!
//! A spec with zero headers or zero rows renders to an empty string. That is
//! the documented "nothing to render" signal, not an error.

mod columns;
mod error;
mod grid;
mod segment;
mod spec;
mod style;
mod util;

pub use columns::ColumnModel;
pub use error::RenderError;
pub use grid::GridRenderer;
pub use segment::{segment_artifact, segment_line, SegmentKind, TextSegment};
pub use spec::{Align, TableSpec};
pub use style::{BorderStyle, StyleRegistry};
pub use util::{display_width, strip_emphasis, EMPHASIS_MARKER};
