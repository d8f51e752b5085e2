//! Buffer transformer
//!
//! Applies the active model's adjustment and visualization to every pixel of
//! an RGBA buffer. Pixels are independent of each other, so rows are handed
//! to rayon when the image is large enough; the output is the same either way.
//! Alpha bytes are copied through untouched.

use chroma_color::Rgb;
use chroma_core::{ColorModel, PixelBuffer, BYTES_PER_PIXEL};
use log::{debug, trace};
use rayon::prelude::*;

use crate::{visualize, Adjustment, TransformOptions};

/// Pixels per work unit when no row structure is known
const FLAT_CHUNK_PIXELS: usize = 1024;

/// Adjust (when `adjustment` belongs to `model`) and then visualize one color
pub fn transform_pixel(rgb: Rgb, model: ColorModel, adjustment: Option<&Adjustment>) -> Rgb {
    let rgb = match adjustment {
        Some(adjustment) if adjustment.model() == model => adjustment.apply(rgb),
        _ => rgb,
    };
    visualize(rgb, model)
}

/// Transform a flat RGBA byte buffer into a newly allocated one.
///
/// The result always has the same length as `src`. A trailing partial pixel
/// is copied through unchanged.
pub fn transform_pixels(
    src: &[u8],
    model: ColorModel,
    adjustment: Option<&Adjustment>,
    options: &TransformOptions,
) -> Vec<u8> {
    let mut dst = src.to_vec();
    let chunk_len = FLAT_CHUNK_PIXELS * BYTES_PER_PIXEL;
    transform_in_place(&mut dst, chunk_len, model, adjustment, options);
    dst
}

/// Transform an image, returning a new image of the same dimensions
pub fn transform(
    image: &PixelBuffer,
    model: ColorModel,
    adjustment: Option<&Adjustment>,
    options: &TransformOptions,
) -> PixelBuffer {
    let mut out = image.clone();
    transform_in_place(out.as_bytes_mut(), image.stride(), model, adjustment, options);
    out
}

fn transform_in_place(
    dst: &mut [u8],
    chunk_len: usize,
    model: ColorModel,
    adjustment: Option<&Adjustment>,
    options: &TransformOptions,
) {
    let adjustment = match adjustment {
        Some(adjustment) if adjustment.model() != model => {
            debug!(
                "ignoring {} adjustment while rendering {model}",
                adjustment.model()
            );
            None
        }
        Some(adjustment) if adjustment.is_zero() => None,
        other => other,
    };

    let pixel_count = dst.len() / BYTES_PER_PIXEL;
    let chunk_len = chunk_len.max(BYTES_PER_PIXEL);

    if options.use_parallel(pixel_count) {
        trace!("transforming {pixel_count} pixels as {model} in parallel");
        dst.par_chunks_mut(chunk_len)
            .for_each(|chunk| transform_chunk(chunk, model, adjustment));
    } else {
        trace!("transforming {pixel_count} pixels as {model}");
        dst.chunks_mut(chunk_len)
            .for_each(|chunk| transform_chunk(chunk, model, adjustment));
    }
}

fn transform_chunk(chunk: &mut [u8], model: ColorModel, adjustment: Option<&Adjustment>) {
    for px in chunk.chunks_exact_mut(BYTES_PER_PIXEL) {
        let rgb = transform_pixel(Rgb::new(px[0], px[1], px[2]), model, adjustment);
        px[0] = rgb.r;
        px[1] = rgb.g;
        px[2] = rgb.b;
    }
}
