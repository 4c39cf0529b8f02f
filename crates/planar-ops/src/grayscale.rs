//! Luminance-weighted grayscale reduction.
//!
//! Collapses a 3-channel RGB image into a new single-channel image using
//! the ITU-R BT.601 luma weights (`0.299*R + 0.587*G + 0.114*B`).
//!
//! # Example
//!
//! ```rust
//! use planar_core::Image;
//! use planar_ops::grayscale::grayscale;
//!
//! let img = Image::filled(8, 8, 3, 0.5);
//! let gray = grayscale(&img).unwrap();
//! assert_eq!(gray.channels(), 1);
//! ```

use crate::error::{ensure_rgb, OpsResult};
use planar_core::{luminance_bt601, Image};
use tracing::debug;

/// Reduces a 3-channel RGB image to a new single-channel luma image.
///
/// Each output sample is the BT.601 weighted sum of the corresponding
/// RGB pixel. The source image is not modified.
///
/// # Errors
///
/// Returns [`OpsError::InvalidShape`](crate::OpsError::InvalidShape) if
/// the image does not have exactly 3 channels.
pub fn grayscale(im: &Image) -> OpsResult<Image> {
    ensure_rgb(im)?;
    debug!(width = im.width(), height = im.height(), "grayscale");

    let mut gray = Image::new(im.width(), im.height(), 1);
    for y in 0..im.height() as i32 {
        for x in 0..im.width() as i32 {
            gray.set(x, y, 0, luminance_bt601(im.pixel3(x, y)));
        }
    }
    Ok(gray)
}
