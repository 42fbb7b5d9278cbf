//! Ray intersection in the camera/projector plane.

use glam::Vec3;

/// 2D cross product in the XZ plane.
fn cross_xz(a: Vec3, b: Vec3) -> f32 {
    a.x * b.z - b.x * a.z
}

/// Intersect the camera ray `origin + u * dir` with the projector ray
/// running from the projector-space origin through `projector_dir`.
///
/// Both rays are treated as 2D lines in the XZ plane (stripes encode only
/// the horizontal coordinate). Returns None for near-parallel rays.
pub fn intersect(origin: Vec3, dir: Vec3, projector_dir: Vec3) -> Option<Vec3> {
    let denom = cross_xz(projector_dir, dir);
    if denom.abs() < 1e-10 {
        return None;
    }

    let u = cross_xz(origin, projector_dir) / denom;
    Some(origin + dir * u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_intersection() {
        // Projector ray down the -Z axis, camera ray from (1, 0, 0)
        // heading diagonally toward it.
        let point = intersect(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
        )
        .unwrap();

        assert!((point - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_parallel_rays_rejected() {
        let result = intersect(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_intersection_preserves_camera_y() {
        // The Y coordinate rides along the camera ray: u solved in XZ.
        let point = intersect(
            Vec3::new(1.0, 0.5, 0.0),
            Vec3::new(-1.0, 0.2, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
        )
        .unwrap();

        assert!((point.x).abs() < 1e-6);
        assert!((point.y - 0.7).abs() < 1e-6);
    }
}
