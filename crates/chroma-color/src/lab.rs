//! CIE L*a*b* under the D65 reference white

use std::fmt;

use chroma_core::consts::range::{LAB_AB_MAX, LAB_AB_MIN, LAB_L_MAX};
use chroma_core::consts::{cie, d65};
use chroma_core::{round_clamp, ColorModel};

use crate::xyz::Xyz;
use crate::{linear_to_srgb_u8, srgb_u8_to_linear, ColorSpace, Rgb};

/// Lightness [0, 100] and the signed opponent axes a*, b* [-128, 127]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    pub l: i32,
    pub a: i32,
    pub b: i32,
}

impl Lab {
    pub const fn new(l: i32, a: i32, b: i32) -> Self {
        Self { l, a, b }
    }
}

fn lab_f(t: f64) -> f64 {
    if t > cie::EPSILON {
        t.cbrt()
    } else {
        cie::KAPPA_SLOPE * t + cie::OFFSET
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > cie::EPSILON {
        cube
    } else {
        (t - cie::OFFSET) / cie::KAPPA_SLOPE
    }
}

/// Convert display RGB to L*a*b*
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let linear = [
        srgb_u8_to_linear(rgb.r),
        srgb_u8_to_linear(rgb.g),
        srgb_u8_to_linear(rgb.b),
    ];
    let xyz = Xyz::from_linear_rgb(linear);

    let fx = lab_f(xyz.x / d65::XN);
    let fy = lab_f(xyz.y / d65::YN);
    let fz = lab_f(xyz.z / d65::ZN);

    Lab {
        l: round_clamp(116.0 * fy - 16.0, 0.0, LAB_L_MAX as f64),
        a: round_clamp(500.0 * (fx - fy), LAB_AB_MIN as f64, LAB_AB_MAX as f64),
        b: round_clamp(200.0 * (fy - fz), LAB_AB_MIN as f64, LAB_AB_MAX as f64),
    }
}

/// Convert L*a*b* to display RGB, clamping colors outside the sRGB gamut
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l as f64 + 16.0) / 116.0;
    let fx = lab.a as f64 / 500.0 + fy;
    let fz = fy - lab.b as f64 / 200.0;

    let xyz = Xyz {
        x: lab_f_inv(fx) * d65::XN,
        y: lab_f_inv(fy) * d65::YN,
        z: lab_f_inv(fz) * d65::ZN,
    };
    let [r, g, b] = xyz.to_linear_rgb();

    Rgb::new(linear_to_srgb_u8(r), linear_to_srgb_u8(g), linear_to_srgb_u8(b))
}

impl ColorSpace for Lab {
    const MODEL: ColorModel = ColorModel::Lab;

    fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_lab(rgb)
    }

    fn to_rgb(self) -> Rgb {
        lab_to_rgb(self)
    }

    fn in_range(self) -> Self {
        Self {
            l: self.l.clamp(0, LAB_L_MAX),
            a: self.a.clamp(LAB_AB_MIN, LAB_AB_MAX),
            b: self.b.clamp(LAB_AB_MIN, LAB_AB_MAX),
        }
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        rgb_to_lab(rgb)
    }
}

impl From<Lab> for Rgb {
    fn from(lab: Lab) -> Self {
        lab_to_rgb(lab)
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LAB({}, {}, {})", self.l, self.a, self.b)
    }
}
