//! Display RGB, the canonical representation every model reduces to

use std::fmt;

use chroma_core::consts::CHANNEL_MAX;
use chroma_core::{round_clamp, ChromaError, ChromaResult};

/// An 8-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to [0, 1]
    pub fn normalized(&self) -> [f64; 3] {
        [
            self.r as f64 / CHANNEL_MAX,
            self.g as f64 / CHANNEL_MAX,
            self.b as f64 / CHANNEL_MAX,
        ]
    }

    /// Build from [0, 1] channels, rounding and clamping each
    pub fn from_normalized([r, g, b]: [f64; 3]) -> Self {
        Self::from_f64([r * CHANNEL_MAX, g * CHANNEL_MAX, b * CHANNEL_MAX])
    }

    /// Build from [0, 255] channels, rounding and clamping each
    pub fn from_f64([r, g, b]: [f64; 3]) -> Self {
        Self {
            r: round_clamp(r, 0.0, CHANNEL_MAX),
            g: round_clamp(g, 0.0, CHANNEL_MAX),
            b: round_clamp(b, 0.0, CHANNEL_MAX),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lower-case `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> ChromaResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChromaError::InvalidParameter(format!(
                "expected #rrggbb, got {hex:?}"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ChromaError::InvalidParameter(format!("{hex:?}: {e}")))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}
