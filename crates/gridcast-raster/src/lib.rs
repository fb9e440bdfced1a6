//! # gridcast-raster — fonts and pixels for gridcast
//!
//! The image half of gridcast: resolve the three font faces a render needs
//! (structural monospace, plain content, emphasized content), lay the
//! classified lines out against the monospace metrics, paint the glyphs onto
//! a transparent canvas, and encode the result as PNG.
//!
//! ```rust,no_run
//! use gridcast_raster::{FontProvider, FontSelection, Rasterizer, write_png};
//! use gridcast_render::{segment_artifact, StyleRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = StyleRegistry::with_builtins();
//! let grid = "┌───┐\n│ x │\n└───┘\n";
//! let lines = segment_artifact(grid, &registry.structural_glyphs());
//!
//! let fonts = FontProvider::new().resolve_set(&FontSelection::default())?;
//! let canvas = Rasterizer::new(&fonts).render(&lines)?;
//! write_png(&canvas, "table.png".as_ref())?;
//! # Ok(())
//! # }
//! ```
//!
//! Font resolution is the one effectful part of a render: it reads the
//! filesystem. Everything after it is a pure function of the inputs.

mod encode;
mod error;
mod fonts;
mod layout;

pub use encode::{encode_png, write_png};
pub use error::RasterError;
pub use fonts::{FontFace, FontProvider, FontRequest, FontRole, FontSelection, FontSet};
pub use layout::{Canvas, Rasterizer};
