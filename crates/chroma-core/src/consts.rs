//! Constants used throughout the color engine

/// Largest value of an 8-bit channel
pub const CHANNEL_MAX: f64 = 255.0;

/// sRGB gamma expansion threshold (encoded domain)
pub const SRGB_EXPAND_THRESHOLD: f64 = 0.04045;

/// sRGB gamma compression threshold (linear domain)
pub const SRGB_COMPRESS_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear segment of the sRGB transfer curve
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// Exponent of the sRGB transfer curve
pub const SRGB_GAMMA: f64 = 2.4;

/// D65 reference white in XYZ
pub mod d65 {
    pub const XN: f64 = 0.95047;
    pub const YN: f64 = 1.0;
    pub const ZN: f64 = 1.08883;
}

/// CIE L*a*b* nonlinearity
pub mod cie {
    /// Below this ratio the cube root is replaced with a linear segment
    pub const EPSILON: f64 = 0.008856;
    /// Slope of the linear segment
    pub const KAPPA_SLOPE: f64 = 7.787;
    /// Offset of the linear segment
    pub const OFFSET: f64 = 16.0 / 116.0;
}

/// Linear sRGB to XYZ (D65)
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// XYZ (D65) to linear sRGB
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// BT.601 luma and analog chroma weights, rows are Y, U, V
pub const RGB_TO_YUV: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.14713, -0.28886, 0.436],
    [0.615, -0.51499, -0.10001],
];

/// Inverse chroma coefficients: (V->R, U->G, V->G, U->B)
pub const YUV_TO_RGB: [f64; 4] = [1.13983, -0.39465, -0.58060, 2.03211];

/// Offset applied to signed chroma before scaling to a byte
pub const CHROMA_OFFSET: f64 = 0.5;

/// Valid channel ranges of each model
pub mod range {
    pub const HUE_DEGREES: i32 = 360;
    pub const PERCENT_MAX: i32 = 100;
    pub const LAB_L_MAX: i32 = 100;
    pub const LAB_AB_MIN: i32 = -128;
    pub const LAB_AB_MAX: i32 = 127;
    pub const BYTE_MAX: i32 = 255;
}

/// Default pixel count at which buffer transforms switch to parallel rows
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 64;
