//! Centroid bounding sphere ("virtual sphere")
//!
//! Center is the arithmetic mean of the points, radius the largest distance
//! from that center. This is an upper bound on the minimum enclosing sphere,
//! not the minimum itself: for skewed point sets it can be noticeably
//! larger than a Welzl fit. Callers planning against a tight bound must
//! account for that.

use nalgebra::{Point3, Vector3};

use crate::error::EmptyInputError;

/// Sphere enclosing a point set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Point3<f32>,
    /// Never negative
    pub radius: f32,
}

impl BoundingSphere {
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    /// True when `point` lies within `radius + eps` of the center
    pub fn contains(&self, point: &Point3<f32>, eps: f32) -> bool {
        nalgebra::distance(&self.center, point) <= self.radius + eps
    }
}

/// Fit the centroid sphere over `points`
///
/// Two passes: mean, then max distance. A single point yields radius 0.
/// A NaN coordinate makes both center and radius NaN.
pub fn fit(points: &[Point3<f32>]) -> Result<BoundingSphere, EmptyInputError> {
    if points.is_empty() {
        return Err(EmptyInputError);
    }

    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<f32>, p| acc + p.coords);
    let center = Point3::from(sum / points.len() as f32);

    let radius = points
        .iter()
        .map(|p| nalgebra::distance(&center, p))
        .fold(0.0f32, |acc, d| if d.is_nan() || d > acc { d } else { acc });

    Ok(BoundingSphere { center, radius })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_point() {
        let sphere = fit(&[Point3::new(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(sphere.center, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.radius, 0.0);
    }

    #[test]
    fn test_axis_points() {
        let points = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let sphere = fit(&points).unwrap();
        assert_relative_eq!(sphere.center, Point3::origin());
        assert_relative_eq!(sphere.radius, 1.0);
        assert_relative_eq!(sphere.diameter(), 2.0);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(fit(&[]), Err(EmptyInputError));
    }

    #[test]
    fn test_every_point_enclosed() {
        let points = [
            Point3::new(0.3, -1.2, 4.0),
            Point3::new(2.5, 0.0, -0.7),
            Point3::new(-1.1, 0.9, 0.2),
            Point3::new(0.0, 0.0, 9.0),
            Point3::new(0.01, 0.02, 0.03),
        ];
        let sphere = fit(&points).unwrap();
        assert!(points.iter().all(|p| sphere.contains(p, 1e-5)));

        // radius is attained by some point, so it is tight for this center
        let farthest = points
            .iter()
            .map(|p| nalgebra::distance(&sphere.center, p))
            .fold(0.0f32, f32::max);
        assert_eq!(farthest, sphere.radius);
    }

    #[test]
    fn test_nan_point_poisons_radius() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(f32::NAN, 1.0, 1.0)];
        let sphere = fit(&points).unwrap();
        assert!(sphere.center.x.is_nan());
        assert!(sphere.radius.is_nan());

        // NaN first must not be overwritten by later finite distances
        let points = [Point3::new(f32::NAN, 0.0, 0.0), Point3::new(5.0, 5.0, 5.0)];
        assert!(fit(&points).unwrap().radius.is_nan());
    }

    #[test]
    fn test_skewed_set_exceeds_minimum() {
        // minimal sphere over {0, 2} x-axis has radius 1 at x=1;
        // the cluster drags the centroid toward 0
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let sphere = fit(&points).unwrap();
        assert_relative_eq!(sphere.center.x, 0.5);
        assert_relative_eq!(sphere.radius, 1.5);
        assert!(!sphere.contains(&Point3::new(3.0, 0.0, 0.0), 1e-6));
    }
}
