//! YUV with BT.601 luma weights and offset chroma

use std::fmt;

use chroma_core::consts::range::BYTE_MAX;
use chroma_core::consts::{CHANNEL_MAX, CHROMA_OFFSET, RGB_TO_YUV, YUV_TO_RGB};
use chroma_core::ColorModel;

use crate::{ColorSpace, Rgb};

/// Luma and two chroma channels in byte units.
///
/// Chroma is signed around zero before storage; neutral colors sit at 128.
/// Valid range is [0, 255] per channel, although the most saturated reds,
/// blues and cyans read a few units outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yuv {
    pub y: i32,
    pub u: i32,
    pub v: i32,
}

impl Yuv {
    pub const fn new(y: i32, u: i32, v: i32) -> Self {
        Self { y, u, v }
    }
}

/// Convert display RGB to YUV
pub fn rgb_to_yuv(rgb: Rgb) -> Yuv {
    let c = rgb.normalized();
    let dot = |w: [f64; 3]| w[0] * c[0] + w[1] * c[1] + w[2] * c[2];

    let y = dot(RGB_TO_YUV[0]);
    let u = dot(RGB_TO_YUV[1]);
    let v = dot(RGB_TO_YUV[2]);

    // Saturated colors push chroma slightly past a byte; keep it so the
    // inverse stays exact, ranges are enforced when a delta is applied.
    Yuv {
        y: (y * CHANNEL_MAX).round() as i32,
        u: ((u + CHROMA_OFFSET) * CHANNEL_MAX).round() as i32,
        v: ((v + CHROMA_OFFSET) * CHANNEL_MAX).round() as i32,
    }
}

/// Convert YUV to display RGB
pub fn yuv_to_rgb(yuv: Yuv) -> Rgb {
    let y = yuv.y as f64 / CHANNEL_MAX;
    let u = yuv.u as f64 / CHANNEL_MAX - CHROMA_OFFSET;
    let v = yuv.v as f64 / CHANNEL_MAX - CHROMA_OFFSET;

    let [vr, ug, vg, ub] = YUV_TO_RGB;
    Rgb::from_normalized([y + vr * v, y + ug * u + vg * v, y + ub * u])
}

impl ColorSpace for Yuv {
    const MODEL: ColorModel = ColorModel::Yuv;

    fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_yuv(rgb)
    }

    fn to_rgb(self) -> Rgb {
        yuv_to_rgb(self)
    }

    fn in_range(self) -> Self {
        Self {
            y: self.y.clamp(0, BYTE_MAX),
            u: self.u.clamp(0, BYTE_MAX),
            v: self.v.clamp(0, BYTE_MAX),
        }
    }
}

impl From<Rgb> for Yuv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_yuv(rgb)
    }
}

impl From<Yuv> for Rgb {
    fn from(yuv: Yuv) -> Self {
        yuv_to_rgb(yuv)
    }
}

impl fmt::Display for Yuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YUV({}, {}, {})", self.y, self.u, self.v)
    }
}
