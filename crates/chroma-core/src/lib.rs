//! Core types and utilities for the chroma color engine
//!
//! This crate provides the fundamental data structures shared by the rest of the
//! workspace: the color model tag, RGBA pixel buffers, numeric constants, and
//! the error type.

pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use error::{ChromaError, ChromaResult};
pub use image::*;
pub use types::*;

/// Number of interleaved bytes per pixel (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;
