//! In-place RGB <-> HSV colorspace conversion.
//!
//! Both directions reinterpret the three channels of a planar buffer:
//! channels 0/1/2 are R/G/B on input and H/S/V on output of
//! [`rgb_to_hsv`], and the reverse for [`hsv_to_rgb`]. No new buffer is
//! allocated; each pixel's source channels are read into a local triple
//! before any channel is written back, so the transform never corrupts
//! its own input mid-pixel.
//!
//! # Hue Encoding
//!
//! Hue is stored as a fraction of the full turn in `[0, 1)` (so 1/3 is
//! green, 2/3 is blue). Hue 0 doubles as a sentinel for "no chroma":
//! an achromatic pixel (R == G == B) converts to hue 0, which makes it
//! indistinguishable from a genuinely red pixel in the hue channel
//! alone. Downstream consumers must use the saturation channel to tell
//! the two apart; this ambiguity is deliberate and is not resolved here.
//!
//! # Degeneracies
//!
//! Division by zero is guarded by explicit branches rather than left to
//! float semantics: zero chroma yields hue 0, and the all-black pixel
//! yields saturation 0 instead of 0/0.
//!
//! # Example
//!
//! ```rust
//! use planar_core::Image;
//! use planar_ops::hsv::{hsv_to_rgb, rgb_to_hsv};
//!
//! let mut img = Image::new(1, 1, 3);
//! img.set_pixel3(0, 0, [1.0, 0.0, 0.0]); // pure red
//!
//! rgb_to_hsv(&mut img).unwrap();
//! assert_eq!(img.pixel3(0, 0), [0.0, 1.0, 1.0]); // H=0, S=1, V=1
//!
//! hsv_to_rgb(&mut img).unwrap();
//! assert_eq!(img.pixel3(0, 0), [1.0, 0.0, 0.0]);
//! ```

use crate::error::{ensure_rgb, OpsResult};
use planar_core::Image;
use tracing::debug;

// ============================================================================
// Per-pixel conversions
// ============================================================================

/// Converts one RGB pixel to HSV.
///
/// - `V` is the largest channel, chroma `C` the max/min spread.
/// - `S = C / V`, except the all-black pixel which maps to `S = 0`.
/// - Zero chroma maps to the sentinel hue 0. Otherwise the hue sector is
///   picked by which channel attains the maximum, tie-broken in R, G, B
///   order, and folded into `[0, 1)`.
#[inline]
pub fn rgb_to_hsv_pixel(rgb: [f32; 3]) -> [f32; 3] {
    let [red, grn, blu] = rgb;

    let value = red.max(grn).max(blu);
    let chroma = value - red.min(grn).min(blu);

    // All-black guard: C/V would be 0/0 here
    let sat = if red == 0.0 && grn == 0.0 && blu == 0.0 {
        0.0
    } else {
        chroma / value
    };

    let hue = if chroma > 0.0 {
        let sector = if value == red {
            (grn - blu) / chroma
        } else if value == grn {
            (blu - red) / chroma + 2.0
        } else {
            (red - grn) / chroma + 4.0
        };
        // Two-step fold into [0, 1): the first step handles the common
        // [-1, 0) sector range, the second catches anything below -6.
        let mut hue = if sector < 0.0 {
            sector / 6.0 + 1.0
        } else {
            sector / 6.0
        };
        if hue < 0.0 {
            hue += 1.0;
        }
        hue
    } else {
        0.0
    };

    [hue, sat, value]
}

/// Converts one HSV pixel to RGB. Inverse of [`rgb_to_hsv_pixel`].
///
/// Reconstructs chroma `C = S*V` and the sector position `H' = H*6`,
/// derives the second-largest channel magnitude
/// `X = C * (1 - |H' mod 2 - 1|)`, picks the channel ordering by
/// sextant, and lifts all three channels by `m = V - C`.
#[inline]
pub fn hsv_to_rgb_pixel(hsv: [f32; 3]) -> [f32; 3] {
    let [hue, sat, value] = hsv;

    let chroma = sat * value;
    let sector = hue * 6.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    // Sextant table; sector 0 lands in the first arm with X == 0, which
    // also covers the achromatic case (C == 0 makes all arms equal).
    let (r1, g1, b1) = if sector <= 1.0 {
        (chroma, x, 0.0)
    } else if sector <= 2.0 {
        (x, chroma, 0.0)
    } else if sector <= 3.0 {
        (0.0, chroma, x)
    } else if sector <= 4.0 {
        (0.0, x, chroma)
    } else if sector <= 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let m = value - chroma;
    [r1 + m, g1 + m, b1 + m]
}

// ============================================================================
// Buffer-level transforms
// ============================================================================

/// Converts a 3-channel RGB image to HSV, in place.
///
/// After the call, channel 0 holds hue in `[0, 1)`, channel 1 saturation
/// and channel 2 value.
///
/// # Errors
///
/// Returns [`OpsError::InvalidShape`](crate::OpsError::InvalidShape) if
/// the image does not have exactly 3 channels. The buffer is untouched
/// in that case.
pub fn rgb_to_hsv(im: &mut Image) -> OpsResult<()> {
    ensure_rgb(im)?;
    debug!(width = im.width(), height = im.height(), "rgb_to_hsv");

    for y in 0..im.height() as i32 {
        for x in 0..im.width() as i32 {
            // Read all three source channels before the first write
            let rgb = im.pixel3(x, y);
            im.set_pixel3(x, y, rgb_to_hsv_pixel(rgb));
        }
    }
    Ok(())
}

/// Converts a 3-channel HSV image to RGB, in place.
///
/// Exact inverse of [`rgb_to_hsv`] for in-gamut pixels, up to float
/// tolerance.
///
/// # Errors
///
/// Returns [`OpsError::InvalidShape`](crate::OpsError::InvalidShape) if
/// the image does not have exactly 3 channels. The buffer is untouched
/// in that case.
pub fn hsv_to_rgb(im: &mut Image) -> OpsResult<()> {
    ensure_rgb(im)?;
    debug!(width = im.width(), height = im.height(), "hsv_to_rgb");

    for y in 0..im.height() as i32 {
        for x in 0..im.width() as i32 {
            let hsv = im.pixel3(x, y);
            im.set_pixel3(x, y, hsv_to_rgb_pixel(hsv));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f32 = 1e-5;

    fn assert_pixel_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = EPS);
        }
    }

    // ------------------------------------------------------------------
    // Per-pixel fixtures
    // ------------------------------------------------------------------

    #[test]
    fn test_pure_red() {
        assert_pixel_eq(rgb_to_hsv_pixel([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_pixel_eq(hsv_to_rgb_pixel([0.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pure_white() {
        assert_pixel_eq(rgb_to_hsv_pixel([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_pixel_eq(hsv_to_rgb_pixel([0.0, 0.0, 1.0]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_pure_black() {
        assert_pixel_eq(rgb_to_hsv_pixel([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_pixel_eq(hsv_to_rgb_pixel([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        // Green sits a third of the way around the hue circle, blue two
        // thirds; the secondaries land on the odd sextant boundaries.
        assert_pixel_eq(rgb_to_hsv_pixel([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 1.0]);
        assert_pixel_eq(rgb_to_hsv_pixel([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 1.0]);
        assert_pixel_eq(rgb_to_hsv_pixel([1.0, 1.0, 0.0]), [1.0 / 6.0, 1.0, 1.0]);
        assert_pixel_eq(rgb_to_hsv_pixel([0.0, 1.0, 1.0]), [0.5, 1.0, 1.0]);
        assert_pixel_eq(rgb_to_hsv_pixel([1.0, 0.0, 1.0]), [5.0 / 6.0, 1.0, 1.0]);
    }

    #[test]
    fn test_achromatic_gray_keeps_value() {
        let hsv = rgb_to_hsv_pixel([0.5, 0.5, 0.5]);
        assert_pixel_eq(hsv, [0.0, 0.0, 0.5]);
        assert_pixel_eq(hsv_to_rgb_pixel(hsv), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_negative_sector_folds_into_upper_hue_range() {
        // Max is red with B > G, so the raw sector is negative and must
        // fold into [5/6, 1).
        let hsv = rgb_to_hsv_pixel([1.0, 0.0, 0.5]);
        assert!(hsv[0] >= 5.0 / 6.0 && hsv[0] < 1.0, "hue = {}", hsv[0]);
        assert_pixel_eq(hsv_to_rgb_pixel(hsv), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_max_tie_breaks_red_first() {
        // R and G tie for the maximum; the red branch must win, giving a
        // non-negative sector instead of green's sector 2 offset.
        let hsv = rgb_to_hsv_pixel([0.8, 0.8, 0.2]);
        assert_abs_diff_eq!(hsv[0], 1.0 / 6.0, epsilon = EPS);
    }

    #[test]
    fn test_hue_one_wraps_to_red() {
        // H = 1.0 is out of the canonical [0, 1) range but must still
        // land on red (sector 6, X = 0).
        assert_pixel_eq(hsv_to_rgb_pixel([1.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_round_trip_rgb_cube() {
        // 9x9x9 in-gamut cube, forward then back within 1e-5.
        let n = 9;
        for r in 0..n {
            for g in 0..n {
                for b in 0..n {
                    let rgb = [
                        r as f32 / (n - 1) as f32,
                        g as f32 / (n - 1) as f32,
                        b as f32 / (n - 1) as f32,
                    ];
                    let back = hsv_to_rgb_pixel(rgb_to_hsv_pixel(rgb));
                    assert_pixel_eq(back, rgb);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Buffer-level behavior
    // ------------------------------------------------------------------

    #[test]
    fn test_rgb_to_hsv_rejects_single_channel() {
        let mut im = Image::new(2, 2, 1);
        let before = im.data().to_vec();
        assert!(rgb_to_hsv(&mut im).is_err());
        assert_eq!(im.data(), &before[..]);
    }

    #[test]
    fn test_hsv_to_rgb_rejects_single_channel() {
        let mut im = Image::new(2, 2, 1);
        assert!(hsv_to_rgb(&mut im).is_err());
    }

    #[test]
    fn test_in_place_conversion_does_not_corrupt_neighbors() {
        let mut im = Image::new(2, 1, 3);
        im.set_pixel3(0, 0, [1.0, 0.0, 0.0]);
        im.set_pixel3(1, 0, [0.0, 0.0, 1.0]);

        rgb_to_hsv(&mut im).unwrap();
        assert_pixel_eq(im.pixel3(0, 0), [0.0, 1.0, 1.0]);
        assert_pixel_eq(im.pixel3(1, 0), [2.0 / 3.0, 1.0, 1.0]);

        hsv_to_rgb(&mut im).unwrap();
        assert_pixel_eq(im.pixel3(0, 0), [1.0, 0.0, 0.0]);
        assert_pixel_eq(im.pixel3(1, 0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_buffer_round_trip() {
        let mut im = Image::new(4, 4, 3);
        for y in 0..4 {
            for x in 0..4 {
                im.set_pixel3(
                    x,
                    y,
                    [x as f32 / 3.0, y as f32 / 3.0, (x + y) as f32 / 6.0],
                );
            }
        }
        let original = im.deep_copy();

        rgb_to_hsv(&mut im).unwrap();
        hsv_to_rgb(&mut im).unwrap();

        for (got, want) in im.data().iter().zip(original.data().iter()) {
            assert_abs_diff_eq!(got, want, epsilon = EPS);
        }
    }
}
