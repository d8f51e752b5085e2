//! RGBA pixel buffers

use crate::{ChromaError, ChromaResult, Dimensions, BYTES_PER_PIXEL};

/// An 8-bit RGBA image stored as interleaved R, G, B, A bytes, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a fully transparent black buffer
    pub fn new(dimensions: Dimensions) -> ChromaResult<Self> {
        check_dimensions(dimensions)?;
        Ok(Self {
            dimensions,
            data: vec![0; dimensions.pixel_count() * BYTES_PER_PIXEL],
        })
    }

    /// Wrap raw RGBA bytes, verifying the length matches the dimensions
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ChromaResult<Self> {
        let dimensions = Dimensions::new(width, height);
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count() * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(ChromaError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { dimensions, data })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel
    pub fn from_fn(
        dimensions: Dimensions,
        mut f: impl FnMut(u32, u32) -> [u8; 4],
    ) -> ChromaResult<Self> {
        let mut buffer = Self::new(dimensions)?;
        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                let idx = buffer.offset(x, y);
                buffer.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&f(x, y));
            }
        }
        Ok(buffer)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.dimensions.width as usize * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the pixel bytes; the length is fixed
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA of the pixel at (x, y), or `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if !self.dimensions.contains(x, y) {
            return None;
        }
        let idx = self.offset(x, y);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[idx..idx + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// RGB of the pixel at (x, y), or `None` outside the image
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.pixel(x, y).map(|[r, g, b, _]| [r, g, b])
    }

    /// Overwrite the pixel at (x, y). Returns `false` outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        if !self.dimensions.contains(x, y) {
            return false;
        }
        let idx = self.offset(x, y);
        self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        true
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.dimensions.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

fn check_dimensions(dimensions: Dimensions) -> ChromaResult<()> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(ChromaError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}
