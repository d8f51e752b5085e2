//! Pointer readouts
//!
//! Pointer and touch positions routinely land outside the rendered image
//! (negative offsets, past the right edge while dragging). Those simply
//! produce no reading.

use chroma_color::Rgb;
use chroma_core::{ColorModel, PixelBuffer};

use crate::format;

/// The RGB color under (x, y), if the point lies on the image
pub fn sample(image: &PixelBuffer, x: i64, y: i64) -> Option<Rgb> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    image.rgb_at(x, y).map(Rgb::from)
}

/// Formatted readout of the color under (x, y) in `model`
pub fn probe(image: &PixelBuffer, x: i64, y: i64, model: ColorModel) -> Option<String> {
    sample(image, x, y).map(|rgb| format(rgb, model))
}
