//! Metrics-based layout and glyph painting.
//!
//! The canvas is sized from the structural (monospace) font's metrics: every
//! character advances the pen by its monospace advance, regardless of which
//! face actually paints it. That keeps the pixel grid aligned with the text
//! grid even though content is drawn in a proportional face.

use ab_glyph::{point, Font, ScaleFont};
use image::{Rgba, RgbaImage};

use gridcast_render::{SegmentKind, TextSegment};

use crate::error::RasterError;
use crate::fonts::{FontFace, FontSet};

/// Fixed margin, in pixels, on every side of the canvas.
const MARGIN: u32 = 50;

/// Glyph paint color: opaque black. Coverage becomes the alpha channel, so
/// the background stays fully transparent.
const INK: [u8; 3] = [0, 0, 0];

/// A pixel buffer holding one rendered table.
///
/// Owned by the rasterizer while painting, then handed off read-only to the
/// encoder.
#[derive(Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        // RgbaImage zero-initializes, which is fully transparent.
        Canvas {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read-only view of the pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the canvas, yielding the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Paints classified lines onto a transparent canvas.
pub struct Rasterizer<'a> {
    fonts: &'a FontSet,
}

impl<'a> Rasterizer<'a> {
    pub fn new(fonts: &'a FontSet) -> Self {
        Rasterizer { fonts }
    }

    /// Lays out and paints the given lines.
    ///
    /// Canvas width is the widest line under monospace metrics plus margins;
    /// height is line count times the monospace line height plus margins.
    /// Painting walks lines top to bottom, the baseline advancing one line
    /// height per line; within a line each segment is drawn with the face
    /// matching its classification.
    pub fn render(&self, lines: &[Vec<TextSegment>]) -> Result<Canvas, RasterError> {
        let mono = self.fonts.structural.scaled();
        let line_height = (mono.ascent() - mono.descent()).ceil() as u32;

        let max_width = lines
            .iter()
            .map(|line| self.line_advance(line).ceil() as u32)
            .max()
            .unwrap_or(0);

        let width = max_width + 2 * MARGIN;
        let height = lines.len() as u32 * line_height + 2 * MARGIN;
        let mut canvas = Canvas::new(width, height);

        let mut baseline = MARGIN as f32 + mono.ascent();
        for line in lines {
            let mut x = MARGIN as f32;
            for segment in line {
                x = self.paint_segment(&mut canvas, segment, x, baseline)?;
            }
            baseline += line_height as f32;
        }

        Ok(canvas)
    }

    /// Total monospace advance of a line's reconstructed text.
    fn line_advance(&self, line: &[TextSegment]) -> f32 {
        let mono = self.fonts.structural.scaled();
        line.iter()
            .flat_map(|segment| segment.text.chars())
            .map(|ch| mono.h_advance(mono.font().glyph_id(ch)))
            .sum()
    }

    /// Paints one segment starting at `x`, returning the advanced pen
    /// position. Advance always uses monospace metrics; outlines come from
    /// the segment's own face.
    fn paint_segment(
        &self,
        canvas: &mut Canvas,
        segment: &TextSegment,
        mut x: f32,
        baseline: f32,
    ) -> Result<f32, RasterError> {
        let face = self.face_for(segment.kind);
        let mono = self.fonts.structural.scaled();

        for ch in segment.text.chars() {
            if !ch.is_whitespace() {
                let glyph_id = face.font().glyph_id(ch);
                if glyph_id.0 == 0 {
                    return Err(RasterError::Layout {
                        segment: segment.text.clone(),
                        reason: format!(
                            "font '{}' has no glyph for '{}'",
                            face.path().display(),
                            ch
                        ),
                    });
                }

                let glyph = glyph_id.with_scale_and_position(face.scale(), point(x, baseline));
                if let Some(outlined) = face.font().outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|gx, gy, coverage| {
                        let px = gx as i64 + bounds.min.x as i64;
                        let py = gy as i64 + bounds.min.y as i64;
                        if px >= 0
                            && py >= 0
                            && (px as u32) < canvas.image.width()
                            && (py as u32) < canvas.image.height()
                        {
                            let alpha = (coverage * 255.0) as u8;
                            let pixel = canvas.image.get_pixel_mut(px as u32, py as u32);
                            if alpha > pixel[3] {
                                *pixel = Rgba([INK[0], INK[1], INK[2], alpha]);
                            }
                        }
                    });
                }
            }

            x += mono.h_advance(mono.font().glyph_id(ch));
        }

        Ok(x)
    }

    fn face_for(&self, kind: SegmentKind) -> &FontFace {
        match kind {
            SegmentKind::Structural => &self.fonts.structural,
            SegmentKind::Plain => &self.fonts.plain,
            SegmentKind::Emphasized => &self.fonts.emphasized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_reports_dimensions() {
        let canvas = Canvas::new(120, 80);
        assert_eq!(canvas.width(), 120);
        assert_eq!(canvas.height(), 80);
    }

    #[test]
    fn new_canvas_is_fully_transparent() {
        let canvas = Canvas::new(4, 4);
        assert!(canvas.image().pixels().all(|p| p[3] == 0));
    }
}
