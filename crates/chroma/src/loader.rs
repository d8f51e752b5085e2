//! Decoding and encoding images through the `image` crate

use std::io::Cursor;
use std::path::Path;

use chroma_core::{ChromaError, ChromaResult, PixelBuffer};
use image::{ImageError, ImageFormat, RgbaImage};
use log::debug;

/// Decode an image file of any format the `image` crate recognizes
pub fn load_image<P: AsRef<Path>>(path: P) -> ChromaResult<PixelBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_image(&bytes)
}

/// Decode an in-memory image, converting it to 8-bit RGBA
pub fn decode_image(bytes: &[u8]) -> ChromaResult<PixelBuffer> {
    let decoded = image::load_from_memory(bytes).map_err(unreadable)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!("decoded {width}x{height} image");

    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

/// Write `image` to `path`, picking the format from the file extension
pub fn save_image<P: AsRef<Path>>(image: &PixelBuffer, path: P) -> ChromaResult<()> {
    let path = path.as_ref();
    to_rgba_image(image)?.save(path).map_err(encoding)?;
    debug!("wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Encode `image` as PNG
pub fn encode_png(image: &PixelBuffer) -> ChromaResult<Vec<u8>> {
    let mut bytes = Vec::new();
    to_rgba_image(image)?
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(encoding)?;
    Ok(bytes)
}

fn to_rgba_image(image: &PixelBuffer) -> ChromaResult<RgbaImage> {
    RgbaImage::from_raw(image.width(), image.height(), image.as_bytes().to_vec()).ok_or(
        ChromaError::BufferSizeMismatch {
            expected: image.pixel_count() * chroma_core::BYTES_PER_PIXEL,
            actual: image.as_bytes().len(),
        },
    )
}

fn unreadable(err: ImageError) -> ChromaError {
    ChromaError::UnreadableImage(err.to_string())
}

fn encoding(err: ImageError) -> ChromaError {
    match err {
        ImageError::IoError(io) => ChromaError::IoError(io),
        other => ChromaError::EncodingError(other.to_string()),
    }
}
