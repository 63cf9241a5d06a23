pub mod polygon_2d;
pub mod units;

/// 2D point type, used for plan (UV) locations.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Applied per coordinate, as an absolute difference.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if every coordinate of `a` and `b` differs by at most [`TOLERANCE`].
#[must_use]
pub fn almost_equal_points(a: &Point3, b: &Point3) -> bool {
    almost_equal_vectors(&a.coords, &b.coords)
}

/// Returns `true` if every component of `a` and `b` differs by at most [`TOLERANCE`].
#[must_use]
pub fn almost_equal_vectors(a: &Vector3, b: &Vector3) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= TOLERANCE)
}

/// Returns `true` if two unit directions are equal or exactly opposite.
#[must_use]
pub fn is_parallel(a: &Vector3, b: &Vector3) -> bool {
    almost_equal_vectors(a, b) || almost_equal_vectors(a, &-b)
}

/// The downward unit vector, normal of the bottom face of an upward extrusion.
#[must_use]
pub fn down() -> Vector3 {
    -Vector3::z()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn almost_equal_is_symmetric() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 0.5e-9, 2.0 - 0.5e-9, 3.0);
        assert!(almost_equal_points(&a, &b));
        assert!(almost_equal_points(&b, &a));

        let c = Point3::new(1.0 + 1e-6, 2.0, 3.0);
        assert!(!almost_equal_points(&a, &c));
        assert!(!almost_equal_points(&c, &a));
    }

    #[test]
    fn negated_direction_is_parallel() {
        let d = Vector3::new(0.6, 0.8, 0.0);
        assert!(is_parallel(&d, &-d));
        assert!(is_parallel(&-d, &d));
        assert!(is_parallel(&d, &d));
        assert!(!is_parallel(&d, &Vector3::new(0.8, 0.6, 0.0)));
    }

    #[test]
    fn down_is_negative_z() {
        assert!(almost_equal_vectors(&down(), &Vector3::new(0.0, 0.0, -1.0)));
    }
}
