//! BT.601 luma constants for grayscale reduction.
//!
//! # Used By
//!
//! - `planar-ops::grayscale` - luminance-weighted channel reduction

// ============================================================================
// ITU-R BT.601 Luma Constants
// ============================================================================

/// BT.601 luma coefficient for the red channel.
///
/// Used in the standard luma formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const BT601_LUMA_R: f32 = 0.299;

/// BT.601 luma coefficient for the green channel.
pub const BT601_LUMA_G: f32 = 0.587;

/// BT.601 luma coefficient for the blue channel.
pub const BT601_LUMA_B: f32 = 0.114;

/// BT.601 luma coefficients as an array [R, G, B].
///
/// # Example
/// ```
/// use planar_core::luma::BT601_LUMA;
/// let rgb = [0.5, 0.3, 0.2];
/// let luma = rgb[0] * BT601_LUMA[0] + rgb[1] * BT601_LUMA[1] + rgb[2] * BT601_LUMA[2];
/// ```
pub const BT601_LUMA: [f32; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Calculate BT.601 luma from RGB values.
///
/// `Y = 0.299*R + 0.587*G + 0.114*B`
///
/// # Example
/// ```
/// use planar_core::luma::luminance_bt601;
/// let luma = luminance_bt601([1.0, 0.0, 0.0]);
/// assert!((luma - 0.299).abs() < 1e-6);
/// ```
#[inline]
pub fn luminance_bt601(rgb: [f32; 3]) -> f32 {
    rgb[0] * BT601_LUMA_R + rgb[1] * BT601_LUMA_G + rgb[2] * BT601_LUMA_B
}
