//! Math type aliases and helper functions.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Midpoint of two points on the unit sphere, re-projected onto the sphere.
///
/// Both inputs must be unit length; the result is unit length. This is the
/// operation that governs how well a subdivided mesh approximates the
/// curvature of the sphere.
pub fn unit_midpoint(a: &Vec3, b: &Vec3) -> Vec3 {
    (a + b).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_midpoint_is_normalized() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let m = unit_midpoint(&a, &b);
        assert!((m.norm() - 1.0).abs() < 1e-6);
        // Lies halfway between the endpoints.
        assert!((m.x - m.y).abs() < 1e-6);
        assert!(m.z.abs() < 1e-6);
    }
}
