//! Per-channel shift and unit-interval clamp.
//!
//! Supporting utilities for the colorspace transforms: [`shift`] offsets
//! one channel by a constant (no clamping, values may leave `[0, 1]`),
//! and [`clamp`] saturates every sample back into the unit interval.

use planar_core::Image;
use tracing::debug;

/// Adds `delta` to every sample of channel `c`, in place.
///
/// No clamping is performed; shifted values may leave `[0, 1]`. Apply
/// [`clamp`] afterwards to re-normalize.
///
/// `c` is trusted the same way the read accessor trusts it: passing
/// `c >= channels` panics.
pub fn shift(im: &mut Image, c: usize, delta: f32) {
    debug!(width = im.width(), height = im.height(), channel = c, delta, "shift");
    for y in 0..im.height() as i32 {
        for x in 0..im.width() as i32 {
            let v = im.get(x, y, c);
            im.set(x, y, c, v + delta);
        }
    }
}

/// Saturating clamp of every sample to `[0, 1]`, in place.
///
/// Maps `v -> 0` when `v < 0`, `v -> 1` when `v > 1`, and leaves
/// in-range samples untouched. Idempotent.
pub fn clamp(im: &mut Image) {
    debug!(width = im.width(), height = im.height(), channels = im.channels(), "clamp");
    for c in 0..im.channels() {
        for y in 0..im.height() as i32 {
            for x in 0..im.width() as i32 {
                let v = im.get(x, y, c);
                im.set(x, y, c, v.clamp(0.0, 1.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_shift_offsets_one_channel() {
        let mut im = Image::filled(3, 3, 3, 0.25);
        shift(&mut im, 1, 0.5);
        assert_abs_diff_eq!(im.get(1, 1, 1), 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_shift_leaves_other_channels_untouched() {
        let mut im = Image::filled(3, 3, 3, 0.25);
        shift(&mut im, 1, 0.5);
        assert_eq!(im.get(0, 0, 0), 0.25);
        assert_eq!(im.get(0, 0, 2), 0.25);
    }

    #[test]
    fn test_shift_does_not_clamp() {
        let mut im = Image::filled(2, 2, 3, 0.9);
        shift(&mut im, 0, 0.5);
        assert_abs_diff_eq!(im.get(0, 0, 0), 1.4, epsilon = 1e-6);

        shift(&mut im, 2, -1.0);
        assert_abs_diff_eq!(im.get(0, 0, 2), -0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_saturates_to_unit_interval() {
        let mut im = Image::from_data(2, 1, 2, vec![-0.5, 1.5, 0.25, 2.0]).unwrap();
        clamp(&mut im);
        assert_eq!(im.data(), &[0.0, 1.0, 0.25, 1.0]);
    }

    #[test]
    fn test_clamp_idempotent() {
        let mut im = Image::from_data(2, 1, 1, vec![-3.0, 7.0]).unwrap();
        clamp(&mut im);
        let once = im.data().to_vec();
        clamp(&mut im);
        assert_eq!(im.data(), &once[..]);
    }
}
