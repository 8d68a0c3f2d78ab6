//! Geometric utility functions for distance calculations and movement.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};

/// Euclidean distance between two points.
pub fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Euclidean.distance(a, b)
}

/// Outcome of advancing a position towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Moved part of the way; the target is still ahead.
    Towards(Point<f64>),
    /// Close enough to land exactly on the target.
    Arrived(Point<f64>),
}

/// Advances `from` towards `to` by `stride`.
///
/// # Arguments
///
/// * `from` - Current position
/// * `to` - Target position
/// * `stride` - Distance covered by a regular step
/// * `snap_distance` - Remaining distance at or below which the step lands on `to`
///
/// # Returns
///
/// [`Step::Arrived`] with `to` when the remaining distance is at most
/// `snap_distance` or zero, otherwise [`Step::Towards`] with the advanced position.
/// The direction vector is never normalized by zero.
pub fn step_towards(from: Point<f64>, to: Point<f64>, stride: f64, snap_distance: f64) -> Step {
    let remaining = distance(from, to);

    if remaining > snap_distance && remaining > 0.0 {
        let alpha = stride / remaining;
        Step::Towards(from + (to - from) * alpha)
    } else {
        Step::Arrived(to)
    }
}

/// Clamps a point into the rectangle `[0, width] x [0, height]`.
///
/// # Arguments
///
/// * `p` - Point to clamp
/// * `width` - Width of the world
/// * `height` - Height of the world
pub fn clamp_to_bounds(p: Point<f64>, width: f64, height: f64) -> Point<f64> {
    Point::new(p.x().clamp(0.0, width), p.y().clamp(0.0, height))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn step_moves_by_stride_when_far() {
        let step = step_towards(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 5.0, 6.25);
        match step {
            Step::Towards(p) => {
                assert!((p.x() - 5.0).abs() < 1e-12);
                assert_eq!(p.y(), 0.0);
            }
            Step::Arrived(_) => panic!("should not arrive yet"),
        }
    }

    #[test]
    fn step_snaps_when_close() {
        let step = step_towards(Point::new(5.0, 0.0), Point::new(10.0, 0.0), 5.0, 6.25);
        assert_eq!(step, Step::Arrived(Point::new(10.0, 0.0)));
    }

    #[test]
    fn zero_distance_arrives_without_nan() {
        let p = Point::new(3.0, 3.0);
        assert_eq!(step_towards(p, p, 0.0, 0.0), Step::Arrived(p));
    }

    #[test]
    fn clamp_keeps_points_inside() {
        let p = clamp_to_bounds(Point::new(-1.0, 12.0), 10.0, 10.0);
        assert_eq!(p, Point::new(0.0, 10.0));
    }
}
