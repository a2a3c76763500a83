// File: crates/gauge-core/src/geometry.rs
// Summary: Lightweight angle/pixel helpers shared by the gauge components and the renderer.

use std::f64::consts::PI;

/// Convert a gauge angle to Skia's convention (degrees, clockwise from three o'clock).
#[inline]
pub fn to_skia_degrees(angle: f64) -> f32 {
    (angle * 180.0 / PI - 90.0) as f32
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn skia_degrees_offset() {
        assert_eq!(to_skia_degrees(0.0), -90.0);
        assert!((to_skia_degrees(PI) - 90.0).abs() < 1e-4);
    }
}
