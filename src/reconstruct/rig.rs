//! Camera/projector rig geometry.

use glam::{Mat4, Vec3, Vec4};

use crate::config::RigSettings;

/// Camera and projector geometry for triangulation.
///
/// Both devices share one perspective projection. The projector pose
/// relative to the camera is a translation along X composed with a yaw
/// about Y; the rig stores the inverse transform, taking camera space
/// into projector space.
pub struct ScanRig {
    width: f32,
    height: f32,
    inverse_projection: Mat4,
    inverse_pose: Mat4,
}

impl ScanRig {
    pub fn new(settings: &RigSettings, width: u32, height: u32) -> Self {
        let aspect = width as f32 / height as f32;
        let projection = Mat4::perspective_rh_gl(
            settings.fov_y_degrees.to_radians(),
            aspect,
            settings.near,
            settings.far,
        );

        let translation = Mat4::from_translation(Vec3::new(settings.projector_offset_x, 0.0, 0.0));
        let rotation = Mat4::from_rotation_y(settings.projector_yaw_degrees.to_radians());

        Self {
            width: width as f32,
            height: height as f32,
            inverse_projection: projection.inverse(),
            inverse_pose: translation.inverse() * rotation.inverse(),
        }
    }

    /// Unproject an NDC point through the shared projection, including
    /// the perspective divide.
    fn unproject(&self, ndc: Vec4) -> Vec4 {
        let p = self.inverse_projection * ndc;
        p / p.w
    }

    /// Ray through a camera pixel, expressed in projector space.
    ///
    /// Unprojects the pixel at two NDC depths and returns (origin,
    /// direction).
    pub fn camera_ray(&self, x: u32, y: u32) -> (Vec3, Vec3) {
        let nx = 2.0 * x as f32 / self.width - 1.0;
        let ny = 2.0 * (1.0 - y as f32 / self.height) - 1.0;

        let near = self.inverse_pose * self.unproject(Vec4::new(nx, ny, 0.1, 1.0));
        let far = self.inverse_pose * self.unproject(Vec4::new(nx, ny, 0.7, 1.0));

        (near.truncate(), (far - near).truncate())
    }

    /// A point on the ray of a normalized projector column, in projector
    /// space. The projector itself sits at the origin of that space.
    pub fn projector_ray(&self, column: f32) -> Vec3 {
        self.unproject(Vec4::new(column, 0.0, 0.7, 1.0)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_pose_settings() -> RigSettings {
        RigSettings {
            fov_y_degrees: 50.0,
            near: 0.1,
            far: 100.0,
            projector_offset_x: 0.0,
            projector_yaw_degrees: 0.0,
        }
    }

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        let rig = ScanRig::new(&identity_pose_settings(), 600, 600);
        let (origin, dir) = rig.camera_ray(300, 300);

        assert!(origin.x.abs() < 1e-5);
        assert!(origin.y.abs() < 1e-5);
        assert!(dir.x.abs() < 1e-5);
        assert!(dir.y.abs() < 1e-5);
        assert!(dir.z < 0.0);
    }

    #[test]
    fn test_center_column_ray_is_axial() {
        let rig = ScanRig::new(&identity_pose_settings(), 600, 600);
        let target = rig.projector_ray(0.0);

        assert!(target.x.abs() < 1e-5);
        assert!(target.y.abs() < 1e-5);
        assert!(target.z < 0.0);
    }

    #[test]
    fn test_projector_offset_shifts_camera_origin() {
        let settings = RigSettings {
            projector_offset_x: -0.2,
            ..identity_pose_settings()
        };
        let rig = ScanRig::new(&settings, 600, 600);
        let (origin, _) = rig.camera_ray(300, 300);

        // Camera origin sits at +0.2 along X when seen from the projector.
        assert!((origin.x - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_column_sign_matches_direction() {
        let rig = ScanRig::new(&identity_pose_settings(), 600, 600);
        assert!(rig.projector_ray(-0.5).x < 0.0);
        assert!(rig.projector_ray(0.5).x > 0.0);
    }
}
