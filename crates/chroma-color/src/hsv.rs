//! HSV (hue, saturation, value) hexcone model

use std::fmt;

use chroma_core::consts::range::{HUE_DEGREES, PERCENT_MAX};
use chroma_core::{round_clamp, ColorModel};

use crate::{ColorSpace, Rgb};

/// Hue in degrees [0, 360), saturation and value in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

impl Hsv {
    pub const fn new(h: i32, s: i32, v: i32) -> Self {
        Self { h, s, v }
    }
}

/// Convert display RGB to HSV
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0 * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        // 359.5 and above rounds onto the wrap point
        h: round_clamp::<i32>(hue, 0.0, 360.0) % HUE_DEGREES,
        s: round_clamp(saturation * 100.0, 0.0, 100.0),
        v: round_clamp(max * 100.0, 0.0, 100.0),
    }
}

/// Convert HSV to display RGB
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h.rem_euclid(HUE_DEGREES) as f64 / 60.0;
    let s = hsv.s as f64 / 100.0;
    let v = hsv.v as f64 / 100.0;

    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::from_normalized([r + m, g + m, b + m])
}

impl ColorSpace for Hsv {
    const MODEL: ColorModel = ColorModel::Hsv;

    fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }

    fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }

    fn in_range(self) -> Self {
        Self {
            h: self.h.rem_euclid(HUE_DEGREES),
            s: self.s.clamp(0, PERCENT_MAX),
            v: self.v.clamp(0, PERCENT_MAX),
        }
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV({}°, {}%, {}%)", self.h, self.s, self.v)
    }
}
