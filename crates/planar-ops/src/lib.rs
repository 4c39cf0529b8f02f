//! # planar-ops
//!
//! Pixel-level transforms over [`planar_core::Image`] buffers.
//!
//! # Modules
//!
//! - [`grayscale`] - BT.601 luminance-weighted 3-to-1 channel reduction
//! - [`adjust`] - Per-channel additive shift and unit-interval clamp
//! - [`hsv`] - In-place RGB/HSV colorspace conversion (the algorithmic
//!   core of the workspace)
//!
//! # Example
//!
//! ```rust
//! use planar_core::Image;
//! use planar_ops::{adjust, hsv};
//!
//! let mut img = Image::filled(16, 16, 3, 0.5);
//!
//! // Brighten the red channel, then bring everything back into [0, 1]
//! adjust::shift(&mut img, 0, 0.7);
//! adjust::clamp(&mut img);
//!
//! // Round-trip through HSV
//! hsv::rgb_to_hsv(&mut img).unwrap();
//! hsv::hsv_to_rgb(&mut img).unwrap();
//! ```
//!
//! # Traversal Model
//!
//! Every operation is a plain nested loop over `(x, y[, c])` through the
//! core accessor; single-threaded, no suspension points, no internal
//! synchronization. In-place transforms take `&mut Image` and have no
//! partial-completion rollback: an early return leaves the buffer in a
//! partially-converted state.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod grayscale;
pub mod hsv;

pub use error::{OpsError, OpsResult};
pub use grayscale::grayscale;
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
