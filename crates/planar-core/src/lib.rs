//! # planar-core
//!
//! Core types for planar float image processing.
//!
//! This crate provides the foundational container used throughout the
//! planar-rs workspace:
//!
//! - [`Image`] - Owned planar `f32` image buffer
//! - [`Error`], [`Result`] - Error types for shape and dimension violations
//! - BT.601 luma constants ([`BT601_LUMA`], [`luminance_bt601`])
//!
//! ## Memory Layout
//!
//! Unlike interleaved RGB buffers, samples are stored **planar**
//! (channel-major, then row-major): the whole red plane first, then the
//! whole green plane, then blue.
//!
//! ```text
//! Memory: [R R R ... R]  <- channel 0, rows top to bottom
//!         [G G G ... G]  <- channel 1
//!         [B B B ... B]  <- channel 2
//! ```
//!
//! Sample `(x, y, c)` lives at linear offset `height*width*c + width*y + x`.
//!
//! ## Boundary Policies
//!
//! Pixel access carries two deliberately distinct boundary policies:
//!
//! - [`Image::get`] clamps out-of-range coordinates to the nearest edge
//!   pixel (extend-border reads never fail).
//! - [`Image::set`] silently drops out-of-range writes (no error, no
//!   side effect).
//!
//! See the [`image`] module docs for the full policy description.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of planar-rs and has no internal
//! dependencies. `planar-ops` builds its transforms on top of it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod luma;

// Re-exports for convenience
pub use error::*;
pub use image::*;
pub use luma::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use planar_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::luma::{luminance_bt601, BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R};
}
