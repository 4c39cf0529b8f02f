//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Operation requires a specific channel count.
    #[error("invalid shape: operation requires {expected} channels, image has {got}")]
    InvalidShape {
        /// Channel count the operation requires.
        expected: usize,
        /// Channel count the image actually has.
        got: usize,
    },
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Checks that `im` is a 3-channel image.
///
/// The grayscale reduction and both HSV conversion directions only make
/// sense for RGB-shaped buffers.
#[inline]
pub(crate) fn ensure_rgb(im: &planar_core::Image) -> OpsResult<()> {
    if im.channels() != 3 {
        return Err(OpsError::InvalidShape {
            expected: 3,
            got: im.channels(),
        });
    }
    Ok(())
}
