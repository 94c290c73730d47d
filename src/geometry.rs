//! Planar joint angles.

use crate::constants::EPSILON;

/// Angle at `p2` between rays `p2→p1` and `p2→p3`, in degrees within [0, 180].
///
/// Takes the difference of the two rays' polar angles and folds it into the
/// closed half-turn. Coincident points give a meaningless result; use
/// [`joint_angle`] when the input is not already known to be well formed.
#[must_use]
pub fn calculate_angle(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> f64 {
    let radians = (p3.1 - p2.1).atan2(p3.0 - p2.0) - (p1.1 - p2.1).atan2(p1.0 - p2.0);
    let angle = radians.to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Checked variant of [`calculate_angle`].
///
/// Returns `None` when any coordinate is non-finite or when either ray is
/// shorter than [`EPSILON`].
#[must_use]
pub fn joint_angle(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> Option<f64> {
    let finite = [p1.0, p1.1, p2.0, p2.1, p3.0, p3.1].iter().all(|v| v.is_finite());
    if !finite {
        return None;
    }

    let ray_len = |p: (f64, f64)| (p.0 - p2.0).hypot(p.1 - p2.1);
    if ray_len(p1) < EPSILON || ray_len(p3) < EPSILON {
        return None;
    }

    let angle = calculate_angle(p1, p2, p3);
    angle.is_finite().then_some(angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_straight_line_is_180() {
        let angle = calculate_angle((0.0, 0.0), (0.5, 0.0), (1.0, 0.0));
        assert!((angle - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_right_angle() {
        let angle = calculate_angle((0.0, 0.0), (0.5, 0.0), (0.5, 0.5));
        assert!((angle - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_same_direction_is_zero() {
        let angle = calculate_angle((1.0, 1.0), (0.0, 0.0), (2.0, 2.0));
        assert!(angle.abs() < TOLERANCE);
    }

    #[test]
    fn test_reflex_difference_folds() {
        // Polar angles 170° and -170° differ by 340°, folded to 20°
        let a = (170f64.to_radians().cos(), 170f64.to_radians().sin());
        let c = ((-170f64).to_radians().cos(), (-170f64).to_radians().sin());
        let angle = calculate_angle(a, (0.0, 0.0), c);
        assert!((angle - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_joint_angle_rejects_coincident_points() {
        assert_eq!(joint_angle((0.5, 0.5), (0.5, 0.5), (1.0, 0.0)), None);
        assert_eq!(joint_angle((0.0, 0.0), (0.5, 0.5), (0.5, 0.5)), None);
    }

    #[test]
    fn test_joint_angle_rejects_non_finite() {
        assert_eq!(joint_angle((f64::NAN, 0.0), (0.5, 0.5), (1.0, 0.0)), None);
        assert_eq!(joint_angle((0.0, 0.0), (0.5, f64::INFINITY), (1.0, 0.0)), None);
    }

    #[test]
    fn test_joint_angle_matches_unchecked() {
        let (a, b, c) = ((0.1, 0.9), (0.4, 0.5), (0.8, 0.7));
        assert_eq!(joint_angle(a, b, c), Some(calculate_angle(a, b, c)));
    }

    proptest! {
        #[test]
        fn prop_angle_within_half_turn(
            ax in -10.0..10.0f64, ay in -10.0..10.0f64,
            bx in -10.0..10.0f64, by in -10.0..10.0f64,
            cx in -10.0..10.0f64, cy in -10.0..10.0f64,
        ) {
            let angle = calculate_angle((ax, ay), (bx, by), (cx, cy));
            prop_assert!((0.0..=180.0).contains(&angle));
        }

        #[test]
        fn prop_angle_symmetric_in_outer_points(
            ax in -10.0..10.0f64, ay in -10.0..10.0f64,
            bx in -10.0..10.0f64, by in -10.0..10.0f64,
            cx in -10.0..10.0f64, cy in -10.0..10.0f64,
        ) {
            let forward = calculate_angle((ax, ay), (bx, by), (cx, cy));
            let backward = calculate_angle((cx, cy), (bx, by), (ax, ay));
            prop_assert!((forward - backward).abs() < 1e-9);
        }

        #[test]
        fn prop_vertex_between_collinear_points_is_180(
            ax in -10.0..10.0f64, ay in -10.0..10.0f64,
            dx in 0.01..5.0f64, dy in 0.01..5.0f64,
            t in 0.1..0.9f64,
        ) {
            let c = (ax + dx, ay + dy);
            let b = (ax + t * dx, ay + t * dy);
            let angle = calculate_angle((ax, ay), b, c);
            prop_assert!((angle - 180.0).abs() < 1e-6);
        }
    }
}
