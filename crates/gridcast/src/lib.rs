//! # gridcast — tables as text grids and PNG images
//!
//! gridcast renders a structured table description twice over: as a
//! box-drawing text grid, and optionally as a PNG image of that same grid,
//! drawn with a monospace face for structure, a proportional face for
//! content, and a bold face for `**emphasized**` runs.
//!
//! This crate is the facade: it re-exports the rendering crates and exposes
//! the two entry points plus the JSON document format the CLI consumes.
//!
//! ```rust
//! use gridcast::{render_text, StyleRegistry, TableSpec};
//!
//! let registry = StyleRegistry::with_builtins();
//! let spec = TableSpec::new(
//!     vec!["A".into(), "BB".into()],
//!     vec![vec!["x".into(), "yy".into()]],
//!     "single-line-full",
//! );
//!
//! let grid = render_text(&spec, &registry).unwrap();
//! assert_eq!(grid.lines().count(), 5);
//! ```

mod config;

pub use config::{FontConfig, PngConfig, TableDocument};

pub use gridcast_raster::{
    encode_png, write_png, Canvas, FontProvider, FontRequest, FontSelection, FontSet,
    RasterError, Rasterizer,
};
pub use gridcast_render::{
    display_width, segment_artifact, segment_line, strip_emphasis, Align, BorderStyle,
    ColumnModel, GridRenderer, RenderError, SegmentKind, StyleRegistry, TableSpec, TextSegment,
};

use thiserror::Error;

/// Unified error type for the two render entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Renders the table as a text grid.
///
/// Returns an empty string for a spec with zero headers or zero rows.
///
/// # Errors
///
/// Fails with [`RenderError::UnknownStyle`] when the spec names a style the
/// registry does not know.
pub fn render_text(spec: &TableSpec, registry: &StyleRegistry) -> Result<String, RenderError> {
    let style = registry.lookup(&spec.style)?;
    Ok(GridRenderer::new(style).render(spec))
}

/// Renders the table as a pixel canvas, ready for PNG encoding.
///
/// The grid is rendered as classified lines (structural, emphasized, plain
/// runs, tagged against the registry's full structural glyph set), then laid
/// out and painted with the three faces the provider resolves from
/// `selection`. Emphasized cell content reaches the rasterizer as a tag, so
/// it is painted with the emphasized face.
pub fn render_image(
    spec: &TableSpec,
    registry: &StyleRegistry,
    provider: &FontProvider,
    selection: &FontSelection,
) -> Result<Canvas, Error> {
    let style = registry.lookup(&spec.style)?;
    let lines = GridRenderer::new(style).render_classified(spec, &registry.structural_glyphs());
    let fonts = provider.resolve_set(selection)?;
    let canvas = Rasterizer::new(&fonts).render(&lines)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_text_unknown_style_fails() {
        let registry = StyleRegistry::with_builtins();
        let spec = TableSpec::new(vec!["A".into()], vec![vec!["x".into()]], "dotted");
        let err = render_text(&spec, &registry).unwrap_err();
        assert!(matches!(err, RenderError::UnknownStyle { .. }));
    }

    #[test]
    fn render_text_empty_rows_is_empty_not_error() {
        let registry = StyleRegistry::with_builtins();
        let spec = TableSpec::new(vec!["A".into()], vec![], "single-line-full");
        assert_eq!(render_text(&spec, &registry).unwrap(), "");
    }

    #[test]
    fn render_image_surfaces_unknown_style() {
        let registry = StyleRegistry::with_builtins();
        let spec = TableSpec::new(vec!["A".into()], vec![vec!["x".into()]], "dotted");
        let provider = FontProvider::with_directories(vec![]);
        let err = render_image(&spec, &registry, &provider, &FontSelection::default());
        assert!(matches!(err, Err(Error::Render(_))));
    }

    #[test]
    fn render_image_surfaces_font_resolution_failure() {
        let registry = StyleRegistry::with_builtins();
        let spec = TableSpec::new(vec!["A".into()], vec![vec!["x".into()]], "single-line-full");
        // A provider with no directories can never resolve a face.
        let provider = FontProvider::with_directories(vec![]);
        let err = render_image(&spec, &registry, &provider, &FontSelection::default());
        assert!(matches!(
            err,
            Err(Error::Raster(RasterError::FontResolution { .. }))
        ));
    }
}
