//! CIE XYZ tristimulus values, the private bridge between sRGB and L*a*b*

use chroma_core::consts::{SRGB_TO_XYZ, XYZ_TO_SRGB};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

fn mul(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |i: usize| matrix[i][0] * v[0] + matrix[i][1] * v[1] + matrix[i][2] * v[2];
    [row(0), row(1), row(2)]
}

impl Xyz {
    pub fn from_linear_rgb(rgb: [f64; 3]) -> Self {
        let [x, y, z] = mul(&SRGB_TO_XYZ, rgb);
        Self { x, y, z }
    }

    pub fn to_linear_rgb(self) -> [f64; 3] {
        mul(&XYZ_TO_SRGB, [self.x, self.y, self.z])
    }
}
