//! Millimeter-to-pixel conversion at a fixed print resolution.

use crate::MM_PER_INCH;

/// Convert a physical distance to a pixel count at the given resolution.
///
/// Fractional results are truncated toward zero, never rounded. Every page
/// cut from the same composite must agree on each converted distance, so
/// all callers go through this one truncating conversion.
pub fn mm_to_px(mm: f64, dpi: f64) -> u32 {
    (mm / MM_PER_INCH * dpi) as u32
}

/// Convert a distance, then apply a layer scale factor to the pixel result.
///
/// The scale multiplies the already-truncated pixel count and the product
/// is truncated again. The two-step order matters: scaling the millimeter
/// value first would shift some targets by one pixel.
pub fn mm_to_px_scaled(mm: f64, dpi: f64, scale: f64) -> u32 {
    (f64::from(mm_to_px(mm, dpi)) * scale) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_print_sizes_at_300_dpi() {
        // 185 / 25.4 * 300 = 2185.03..., 215 -> 2539.37..., 35 -> 413.38...
        assert_eq!(mm_to_px(185.0, 300.0), 2185);
        assert_eq!(mm_to_px(215.0, 300.0), 2539);
        assert_eq!(mm_to_px(35.0, 300.0), 413);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 25.4 mm at 150 dpi is exactly 150 px; 25.5 mm is 150.59... px and
        // must stay 150, not round up to 151.
        assert_eq!(mm_to_px(25.4, 150.0), 150);
        assert_eq!(mm_to_px(25.5, 150.0), 150);
    }

    #[test]
    fn test_zero_distance_is_zero_pixels() {
        assert_eq!(mm_to_px(0.0, 300.0), 0);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let mut last = 0;
        for tenths in 0..2000 {
            let px = mm_to_px(f64::from(tenths) * 0.1, 300.0);
            assert!(px >= last, "not monotonic at {tenths} tenths of a mm");
            last = px;
        }
    }

    #[test]
    fn test_linear_in_dpi_within_truncation_error() {
        for mm in [3.0, 15.0, 35.0, 185.0, 215.0] {
            let single = mm_to_px(mm, 300.0);
            let double = mm_to_px(mm, 600.0);
            assert!(
                double >= 2 * single && double <= 2 * single + 1,
                "doubling dpi for {mm} mm gave {double} px from {single} px"
            );
        }
    }

    #[test]
    fn test_scaled_truncates_after_scaling() {
        // 2185 * 1.125 = 2458.125 -> 2458
        assert_eq!(mm_to_px_scaled(185.0, 300.0, 1.125), 2458);
        // Scale 1.0 is the identity
        assert_eq!(mm_to_px_scaled(215.0, 300.0, 1.0), mm_to_px(215.0, 300.0));
    }
}
