//! Per-pixel transforms for the chroma engine
//!
//! This crate implements the image-level half of the engine:
//! - Channel adjustment: shift a color inside one model, then return to RGB
//! - Visualization remaps that render each model as a displayable image
//! - The buffer transformer that applies both to every RGBA pixel

pub mod adjust;
pub mod buffer;
pub mod options;
pub mod visualize;

pub use adjust::*;
pub use buffer::*;
pub use options::*;
pub use visualize::*;
