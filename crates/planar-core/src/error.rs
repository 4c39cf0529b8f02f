//! Error types for planar-core operations.
//!
//! Every failure in this workspace is a caller-supplied precondition
//! violation; there are no transient failure modes and no recovery paths.
//! Out-of-range pixel coordinates are deliberately *not* errors: reads
//! clamp to the nearest edge and writes are silently dropped (see
//! [`crate::image`]).
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or transforming images.
#[derive(Debug, Error)]
pub enum Error {
    /// Operation requires a specific channel count.
    ///
    /// Returned by transforms that only make sense for a fixed shape,
    /// e.g. grayscale reduction and both HSV conversion directions
    /// require a 3-channel image.
    #[error("invalid shape: operation requires {expected} channels, image has {got}")]
    InvalidShape {
        /// Channel count the operation requires
        expected: usize,
        /// Channel count the image actually has
        got: usize,
    },

    /// Buffer length does not match the declared dimensions.
    ///
    /// Returned when constructing an [`crate::Image`] from existing data
    /// whose length is not `width * height * channels`.
    #[error("invalid dimensions: {width}x{height}x{channels} ({reason})")]
    InvalidDimensions {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Declared channel count
        channels: usize,
        /// Reason why the dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(expected: usize, got: usize) -> Self {
        Self::InvalidShape { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        width: usize,
        height: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a shape (channel count) error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::InvalidShape { .. })
    }
}
