//! Core types for the color engine

use std::fmt;
use std::str::FromStr;

use num_traits::NumCast;

use crate::ChromaError;

/// Color model a pixel can be read, adjusted and visualized in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorModel {
    /// Red, green, blue (display representation)
    #[default]
    Rgb,
    /// Hue, saturation, value
    Hsv,
    /// Cyan, magenta, yellow, key
    Cmyk,
    /// CIE L*a*b* under D65
    Lab,
    /// BT.601 luma plus two chroma channels
    Yuv,
}

impl ColorModel {
    /// Every supported model, in display order
    pub const ALL: [ColorModel; 5] = [
        ColorModel::Rgb,
        ColorModel::Hsv,
        ColorModel::Cmyk,
        ColorModel::Lab,
        ColorModel::Yuv,
    ];

    /// Upper-case model name as used in formatted readouts
    pub fn name(&self) -> &'static str {
        match self {
            ColorModel::Rgb => "RGB",
            ColorModel::Hsv => "HSV",
            ColorModel::Cmyk => "CMYK",
            ColorModel::Lab => "LAB",
            ColorModel::Yuv => "YUV",
        }
    }

    /// Short channel names, in storage order
    pub fn channels(&self) -> &'static [&'static str] {
        match self {
            ColorModel::Rgb => &["r", "g", "b"],
            ColorModel::Hsv => &["h", "s", "v"],
            ColorModel::Cmyk => &["c", "m", "y", "k"],
            ColorModel::Lab => &["l", "a", "b"],
            ColorModel::Yuv => &["y", "u", "v"],
        }
    }

    /// Largest magnitude accepted for a user delta on each channel
    pub fn delta_limits(&self) -> &'static [i32] {
        match self {
            ColorModel::Rgb => &[255, 255, 255],
            ColorModel::Hsv => &[180, 100, 100],
            ColorModel::Cmyk => &[100, 100, 100, 100],
            ColorModel::Lab => &[100, 128, 128],
            ColorModel::Yuv => &[255, 255, 255],
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channels().len()
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChromaError::UnknownModel(s.to_string()))
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the coordinate lies on the image
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

/// Round a computed channel value and clamp it into `[min, max]`.
///
/// NaN maps to the type's default value.
pub fn round_clamp<T: NumCast + Default>(value: f64, min: f64, max: f64) -> T {
    if value.is_nan() {
        return T::default();
    }
    T::from(value.round().clamp(min, max)).unwrap_or_default()
}
