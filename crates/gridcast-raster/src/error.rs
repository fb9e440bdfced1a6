//! Error types for font resolution and rasterization.

use thiserror::Error;

/// Error type for image rendering operations.
///
/// Font and layout failures are fatal to the render: the rasterizer never
/// substitutes a missing face or skips an unpaintable segment, because doing
/// so would silently change output semantics.
#[derive(Debug, Error)]
pub enum RasterError {
    /// No usable font file could be resolved for the requested name or path.
    #[error("failed to resolve font '{name}' at size {size}: {reason}")]
    FontResolution {
        name: String,
        size: f32,
        reason: String,
    },

    /// A glyph run could not be laid out. Carries the offending segment text.
    #[error("failed to lay out segment '{segment}': {reason}")]
    Layout { segment: String, reason: String },

    /// Filesystem error while reading font data or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_resolution_display_carries_name_and_size() {
        let err = RasterError::FontResolution {
            name: "DejaVu Sans".to_string(),
            size: 16.0,
            reason: "not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DejaVu Sans"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn layout_display_carries_segment() {
        let err = RasterError::Layout {
            segment: "│ x │".to_string(),
            reason: "no glyph".to_string(),
        };
        assert!(err.to_string().contains("│ x │"));
    }
}
