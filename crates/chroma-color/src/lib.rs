//! Color model conversions for the chroma engine
//!
//! This crate implements the conversions between display RGB and the four
//! alternate color models:
//! - RGB <-> HSV (hexcone model)
//! - RGB <-> CMYK (naive subtractive model)
//! - RGB <-> CIE L*a*b* (through XYZ, D65 white)
//! - RGB <-> YUV (BT.601 weights, offset chroma)
//!
//! Every model value is stored in integer display units. Converting out of RGB
//! rounds each channel, so `Model -> RGB` is not an exact inverse. CMYK and
//! YUV drift by at most 2 units per channel and HSV by at most 3. Integer
//! L*a*b* is coarse near black, where dark saturated colors can drift much
//! further.

pub mod cmyk;
pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod srgb;
pub mod yuv;
mod xyz;

pub use cmyk::*;
pub use hsv::*;
pub use lab::*;
pub use rgb::*;
pub use srgb::*;
pub use yuv::*;

use chroma_core::ColorModel;
use std::fmt;

/// A color model with a lossy round trip through display RGB
pub trait ColorSpace: Copy + fmt::Display {
    /// Tag of this model
    const MODEL: ColorModel;

    /// Read an RGB color in this model
    fn from_rgb(rgb: Rgb) -> Self;

    /// Project back into display RGB, clamping out-of-gamut results
    fn to_rgb(self) -> Rgb;

    /// Bring every channel back into its valid range.
    ///
    /// Angular channels wrap, the rest clamp.
    fn in_range(self) -> Self;
}

impl ColorSpace for Rgb {
    const MODEL: ColorModel = ColorModel::Rgb;

    fn from_rgb(rgb: Rgb) -> Self {
        rgb
    }

    fn to_rgb(self) -> Rgb {
        self
    }

    fn in_range(self) -> Self {
        self
    }
}
