//! sRGB transfer function

use chroma_core::consts::{
    CHANNEL_MAX, SRGB_COMPRESS_THRESHOLD, SRGB_EXPAND_THRESHOLD, SRGB_GAMMA, SRGB_LINEAR_SLOPE,
};
use chroma_core::round_clamp;
use num_traits::Float;

fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert sRGB to linear RGB (gamma expansion)
pub fn srgb_to_linear<T: Float>(srgb: T) -> T {
    if srgb <= constant(SRGB_EXPAND_THRESHOLD) {
        srgb / constant(SRGB_LINEAR_SLOPE)
    } else {
        ((srgb + constant(0.055)) / constant(1.055)).powf(constant(SRGB_GAMMA))
    }
}

/// Convert linear RGB to sRGB (gamma compression)
pub fn linear_to_srgb<T: Float>(linear: T) -> T {
    if linear <= constant(SRGB_COMPRESS_THRESHOLD) {
        linear * constant(SRGB_LINEAR_SLOPE)
    } else {
        constant::<T>(1.055) * linear.powf(T::one() / constant(SRGB_GAMMA)) - constant(0.055)
    }
}

/// Convert an 8-bit sRGB channel to linear light
pub fn srgb_u8_to_linear(srgb: u8) -> f64 {
    srgb_to_linear(srgb as f64 / CHANNEL_MAX)
}

/// Convert linear light to an 8-bit sRGB channel
pub fn linear_to_srgb_u8(linear: f64) -> u8 {
    round_clamp(linear_to_srgb(linear) * CHANNEL_MAX, 0.0, CHANNEL_MAX)
}
