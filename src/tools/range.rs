// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Linear interpolation between numeric intervals.
//!
//! No clamping is applied: values outside `[in_min, in_max]` extrapolate along the same line.

/// Horizontal half field of view reported by the target tracker, in degrees.
pub const TX_RANGE_DEG: f32 = 31.0;

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// `in_min` and `in_max` must differ. Callers own that precondition; nothing is checked here.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Map a tracker horizontal offset (±31°) onto a normalized motor command (±1).
#[inline]
pub fn map_tx(tx_deg: f32) -> f32 {
    map_range(tx_deg, -TX_RANGE_DEG, TX_RANGE_DEG, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn maps_endpoints_and_midpoint() {
        assert!((map_range(-31.0, -31.0, 31.0, -1.0, 1.0) + 1.0).abs() < EPS);
        assert!((map_range(31.0, -31.0, 31.0, -1.0, 1.0) - 1.0).abs() < EPS);
        assert!(map_range(0.0, -31.0, 31.0, -1.0, 1.0).abs() < EPS);
    }

    #[test]
    fn extrapolates_outside_input_interval() {
        // No clamp: twice the input span lands at twice the output span.
        assert!((map_range(20.0, 0.0, 10.0, 0.0, 1.0) - 2.0).abs() < EPS);
    }

    #[test]
    fn handles_inverted_output_interval() {
        assert!((map_range(2.5, 0.0, 10.0, 1.0, -1.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn tx_mapping_is_symmetric() {
        assert!((map_tx(15.5) - 0.5).abs() < EPS);
        assert!((map_tx(-15.5) + 0.5).abs() < EPS);
    }
}
