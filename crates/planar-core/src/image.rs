//! Planar image buffer with boundary-policy pixel access.
//!
//! This module provides [`Image`], an owned `f32` sample buffer with a
//! fixed `(width, height, channels)` shape.
//!
//! # Memory Layout
//!
//! Samples are stored **planar** (channel-major, then row-major):
//!
//! ```text
//! offset(x, y, c) = height*width*c + width*y + x
//! ```
//!
//! The buffer length is always exactly `width * height * channels`.
//!
//! # Boundary Policies
//!
//! Reads and writes deliberately use two different out-of-range policies,
//! preserved from the reference behavior this crate reimplements:
//!
//! - **Clamp-on-read**: [`Image::get`] maps out-of-range `x`/`y` to the
//!   nearest edge pixel (extend-border). Reads never fail.
//! - **Reject-on-write**: [`Image::set`] silently drops any out-of-range
//!   write. No error, no side effect.
//!
//! The asymmetry is intentional and documented rather than unified;
//! callers must not rely on `get` to validate coordinates.
//!
//! # Ownership
//!
//! Images never share their sample buffer. [`Image::deep_copy`] (and
//! `Clone`) always duplicate every sample; mutating a copy can never
//! affect the original. In-place transforms require exclusive access via
//! `&mut` and have no partial-completion rollback.
//!
//! # Usage
//!
//! ```rust
//! use planar_core::Image;
//!
//! let mut img = Image::new(64, 48, 3);
//! img.set(10, 10, 0, 0.75);
//! assert_eq!(img.get(10, 10, 0), 0.75);
//!
//! // Out-of-range reads clamp to the nearest edge pixel
//! assert_eq!(img.get(-5, -5, 0), img.get(0, 0, 0));
//!
//! // Out-of-range writes are dropped
//! img.set(64, 0, 0, 1.0);
//! ```
//!
//! # Used By
//!
//! - `planar-ops` - grayscale, shift, clamp and HSV transforms

use crate::{Error, Result};

/// Owned planar `f32` image buffer.
///
/// The shape `(width, height, channels)` is fixed at construction; the
/// sample buffer is contiguous and exactly `width * height * channels`
/// long.
///
/// # Example
///
/// ```rust
/// use planar_core::Image;
///
/// let img = Image::filled(8, 8, 3, 0.5);
/// assert_eq!(img.width(), 8);
/// assert_eq!(img.channels(), 3);
/// assert_eq!(img.get(0, 0, 2), 0.5);
/// ```
#[derive(Clone)]
pub struct Image {
    /// Sample buffer, planar layout
    data: Vec<f32>,
    /// Image width in pixels
    width: usize,
    /// Image height in pixels
    height: usize,
    /// Number of channels
    channels: usize,
}

impl Image {
    /// Creates a new image filled with zeros.
    ///
    /// This is the only allocation primitive the transforms depend on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planar_core::Image;
    ///
    /// let img = Image::new(640, 480, 3);
    /// assert_eq!(img.sample_count(), 640 * 480 * 3);
    /// ```
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: vec![0.0; width * height * channels],
            width,
            height,
            channels,
        }
    }

    /// Creates an image from existing sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * channels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planar_core::Image;
    ///
    /// let samples = vec![0.0f32; 10 * 10 * 3];
    /// let img = Image::from_data(10, 10, 3, samples).unwrap();
    /// ```
    pub fn from_data(width: usize, height: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                channels,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Creates an image with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: f32) -> Self {
        Self {
            data: vec![value; width * height * channels],
            width,
            height,
            channels,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of channels.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the shape as (width, height, channels).
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    /// Returns the total number of samples in the buffer.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area or zero channels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the raw sample buffer.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the raw sample buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns the linear offset of sample (x, y, c).
    ///
    /// Planar layout: channel-major, then row-major.
    #[inline]
    fn sample_offset(&self, x: usize, y: usize, c: usize) -> usize {
        self.height * self.width * c + self.width * y + x
    }

    /// Reads the sample at (x, y) in channel `c`, clamping coordinates
    /// to the nearest edge.
    ///
    /// Out-of-range `x`/`y` (including negative values) are mapped to
    /// the nearest valid pixel, so reads past the border return the edge
    /// pixel rather than failing. `c` is trusted and not bounds-checked.
    ///
    /// # Panics
    ///
    /// Panics if the image is empty or `c >= channels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planar_core::Image;
    ///
    /// let img = Image::filled(4, 4, 1, 0.25);
    /// assert_eq!(img.get(-100, 2, 0), 0.25);
    /// assert_eq!(img.get(100, 100, 0), 0.25);
    /// ```
    #[inline]
    pub fn get(&self, x: i32, y: i32, c: usize) -> f32 {
        let x = x.clamp(0, self.width as i32 - 1) as usize;
        let y = y.clamp(0, self.height as i32 - 1) as usize;
        self.data[self.sample_offset(x, y, c)]
    }

    /// Writes `value` to the sample at (x, y) in channel `c`, dropping
    /// the write if any coordinate is out of range.
    ///
    /// The write happens only when `0 <= x < width`, `0 <= y < height`
    /// and `c < channels` all hold; otherwise it is a silent no-op.
    /// Note the asymmetry with [`Image::get`], which clamps instead of
    /// rejecting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planar_core::Image;
    ///
    /// let mut img = Image::new(4, 4, 1);
    /// img.set(4, 0, 0, 1.0); // dropped, x == width
    /// assert!(img.data().iter().all(|&v| v == 0.0));
    /// ```
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, c: usize, value: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height || c >= self.channels {
            return;
        }
        let offset = self.sample_offset(x, y, c);
        self.data[offset] = value;
    }

    /// Reads the first three channels at (x, y) as one `[f32; 3]` pixel.
    ///
    /// Coordinates follow the same clamp-on-read policy as
    /// [`Image::get`]. Requires at least 3 channels.
    #[inline]
    pub fn pixel3(&self, x: i32, y: i32) -> [f32; 3] {
        [self.get(x, y, 0), self.get(x, y, 1), self.get(x, y, 2)]
    }

    /// Writes `pixel` to the first three channels at (x, y).
    ///
    /// Each channel write follows the same reject-on-write policy as
    /// [`Image::set`].
    #[inline]
    pub fn set_pixel3(&mut self, x: i32, y: i32, pixel: [f32; 3]) {
        self.set(x, y, 0, pixel[0]);
        self.set(x, y, 1, pixel[1]);
        self.set(x, y, 2, pixel[2]);
    }

    /// Returns a deep copy of this image.
    ///
    /// The copy shares no memory with the original; every sample is
    /// duplicated. `Clone` is equivalent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planar_core::Image;
    ///
    /// let img = Image::filled(4, 4, 3, 0.5);
    /// let mut copy = img.deep_copy();
    /// copy.set(0, 0, 0, 1.0);
    /// assert_eq!(img.get(0, 0, 0), 0.5);
    /// ```
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Sets every sample in the image to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}
