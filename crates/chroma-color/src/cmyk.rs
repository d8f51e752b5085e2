//! CMYK subtractive model

use std::fmt;

use chroma_core::consts::range::PERCENT_MAX;
use chroma_core::{round_clamp, ColorModel};

use crate::{ColorSpace, Rgb};

/// Cyan, magenta, yellow and key (black) ink coverage in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    pub c: i32,
    pub m: i32,
    pub y: i32,
    pub k: i32,
}

impl Cmyk {
    pub const fn new(c: i32, m: i32, y: i32, k: i32) -> Self {
        Self { c, m, y, k }
    }
}

/// Convert display RGB to CMYK
///
/// Pure black reports no colored ink (`k = 100`, `c = m = y = 0`).
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [r, g, b] = rgb.normalized();
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return Cmyk::new(0, 0, 0, PERCENT_MAX);
    }

    let ink = |channel: f64| {
        round_clamp::<i32>((1.0 - channel - k) / (1.0 - k) * 100.0, 0.0, 100.0)
    };

    Cmyk {
        c: ink(r),
        m: ink(g),
        y: ink(b),
        k: round_clamp(k * 100.0, 0.0, 100.0),
    }
}

/// Convert CMYK to display RGB
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let key = 1.0 - cmyk.k as f64 / 100.0;
    let channel = |ink: i32| (1.0 - ink as f64 / 100.0) * key;

    Rgb::from_normalized([channel(cmyk.c), channel(cmyk.m), channel(cmyk.y)])
}

impl ColorSpace for Cmyk {
    const MODEL: ColorModel = ColorModel::Cmyk;

    fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_cmyk(rgb)
    }

    fn to_rgb(self) -> Rgb {
        cmyk_to_rgb(self)
    }

    fn in_range(self) -> Self {
        Self {
            c: self.c.clamp(0, PERCENT_MAX),
            m: self.m.clamp(0, PERCENT_MAX),
            y: self.y.clamp(0, PERCENT_MAX),
            k: self.k.clamp(0, PERCENT_MAX),
        }
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        rgb_to_cmyk(rgb)
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        cmyk_to_rgb(cmyk)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CMYK({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}
