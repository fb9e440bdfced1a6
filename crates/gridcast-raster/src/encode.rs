//! PNG encoding of a finished canvas.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::RasterError;
use crate::layout::Canvas;

/// Encodes the canvas as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, RasterError> {
    let mut bytes = Vec::new();
    canvas
        .image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encodes the canvas as PNG and writes it to a file.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), RasterError> {
    let bytes = encode_png(canvas)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
