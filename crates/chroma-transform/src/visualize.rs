//! Visualization remaps
//!
//! Each model gets a stylized RGB rendering so an image can be "viewed in"
//! that model. These are presentation heuristics, not color science: apart
//! from RGB none of them reproduces the original color, and none is invertible.

use chroma_color::{rgb_to_cmyk, rgb_to_hsv, rgb_to_lab, rgb_to_yuv, Rgb};
use chroma_core::ColorModel;

/// Percent to byte scale used by the CMYK and LAB renderings
const PERCENT_TO_BYTE: f64 = 2.55;

/// Render `rgb` the way the `model` view displays it
pub fn visualize(rgb: Rgb, model: ColorModel) -> Rgb {
    match model {
        ColorModel::Rgb => rgb,
        ColorModel::Hsv => boost_saturation_value(rgb),
        ColorModel::Cmyk => ink_coverage(rgb),
        ColorModel::Lab => lab_planes(rgb),
        ColorModel::Yuv => yuv_planes(rgb),
    }
}

/// Red and blue scale with saturation, green with value
fn boost_saturation_value(rgb: Rgb) -> Rgb {
    let hsv = rgb_to_hsv(rgb);
    let saturation_boost = 1.0 + hsv.s as f64 / 200.0;
    let value_boost = 1.0 + hsv.v as f64 / 200.0;

    Rgb::from_f64([
        rgb.r as f64 * saturation_boost,
        rgb.g as f64 * value_boost,
        rgb.b as f64 * saturation_boost,
    ])
}

/// Each channel darkens by its own ink plus the key ink
fn ink_coverage(rgb: Rgb) -> Rgb {
    let cmyk = rgb_to_cmyk(rgb);
    let key = cmyk.k as f64 * PERCENT_TO_BYTE;
    let channel = |ink: i32| 255.0 - (ink as f64 * PERCENT_TO_BYTE + key);

    Rgb::from_f64([channel(cmyk.c), channel(cmyk.m), channel(cmyk.y)])
}

/// L in red, a* (re-centered) in green, raw b* in blue
fn lab_planes(rgb: Rgb) -> Rgb {
    let lab = rgb_to_lab(rgb);
    Rgb::from_f64([
        lab.l as f64 * PERCENT_TO_BYTE,
        lab.a as f64 + 128.0,
        lab.b as f64,
    ])
}

fn yuv_planes(rgb: Rgb) -> Rgb {
    let yuv = rgb_to_yuv(rgb);
    Rgb::from_f64([yuv.y as f64, yuv.u as f64, yuv.v as f64])
}
