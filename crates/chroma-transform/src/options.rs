//! Buffer transform options

use chroma_core::consts::DEFAULT_PARALLEL_THRESHOLD;

/// Options controlling how a buffer transform is executed.
///
/// None of these change the output, only how the work is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformOptions {
    /// Split rows across the rayon thread pool
    pub parallel: bool,
    /// Minimum pixel count before rows are split across threads
    pub parallel_threshold: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that always run on the calling thread
    pub fn sequential() -> Self {
        Self::default().parallel(false)
    }

    /// Set whether large images are processed in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the pixel count at which parallel processing kicks in
    pub fn parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }

    /// Whether an image of `pixel_count` pixels should be split across threads
    pub fn use_parallel(&self, pixel_count: usize) -> bool {
        self.parallel && pixel_count >= self.parallel_threshold
    }
}
