//! # Chroma - color model engine
//!
//! Reads pixels in one of five color models (RGB, HSV, CMYK, CIE L*a*b*,
//! YUV), applies per-channel adjustments inside that model, and renders the
//! result back to displayable RGBA.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chroma::{render, Adjustment, AdjustmentSet, ColorModel, HsvDelta, TransformOptions};
//!
//! let image = chroma::load_image("input.png")?;
//!
//! let mut adjustments = AdjustmentSet::new();
//! adjustments.set(Adjustment::Hsv(HsvDelta { h: 30, ..Default::default() }));
//!
//! let out = render(&image, ColorModel::Hsv, &adjustments, &TransformOptions::default());
//! chroma::save_image(&out, "output.png")?;
//!
//! println!("{:?}", chroma::probe(&out, 10, 10, ColorModel::Hsv));
//! # Ok::<(), chroma::ChromaError>(())
//! ```
//!
//! ## Architecture
//!
//! - `chroma-core`: pixel buffers, the model tag, errors and constants
//! - `chroma-color`: the RGB <-> model converters
//! - `chroma-transform`: adjustments, visualization remaps, the buffer pass
//! - this crate: formatting, pointer probes and image file I/O

mod format;
mod loader;
mod probe;

// Re-export core types
pub use chroma_core::{
    consts, ChromaError, ChromaResult, ColorModel, Dimensions, PixelBuffer, BYTES_PER_PIXEL,
};

// Re-export converters
pub use chroma_color::{
    cmyk_to_rgb, hsv_to_rgb, lab_to_rgb, rgb_to_cmyk, rgb_to_hsv, rgb_to_lab, rgb_to_yuv,
    yuv_to_rgb, Cmyk, ColorSpace, Hsv, Lab, Rgb, Yuv,
};

// Re-export transforms
pub use chroma_transform::{
    apply_adjustment, transform, transform_pixel, transform_pixels, visualize, Adjustment,
    AdjustmentSet, CmykDelta, HsvDelta, LabDelta, RgbDelta, TransformOptions, YuvDelta,
};

pub use format::{format, format_named};
pub use loader::{decode_image, encode_png, load_image, save_image};
pub use probe::{probe, sample};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transform `image` for display in `model`, using the stored delta for that
/// model only
pub fn render(
    image: &PixelBuffer,
    model: ColorModel,
    adjustments: &AdjustmentSet,
    options: &TransformOptions,
) -> PixelBuffer {
    let active = adjustments.active(model);
    transform(image, model, active.as_ref(), options)
}
