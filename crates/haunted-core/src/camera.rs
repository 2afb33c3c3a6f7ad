//! Perspective camera shared by the web and native frontends.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at `target`.
///
/// `aspect` is kept in `f64` so it is exactly `width / height` of the
/// viewport; the projection matrix is cached and only rebuilt by
/// [`PerspectiveCamera::update_projection_matrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f64,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f64, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// The diorama's starting camera: 75° FOV, placed at (4, 2, 5) looking at the origin.
    pub fn haunted_default(aspect: f64) -> Self {
        let mut camera = Self::new(CAMERA_FOV_DEGREES, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.position = Vec3::from(CAMERA_POSITION);
        camera
    }

    pub fn fov_y_radians(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_y_radians(), self.aspect as f32, self.near, self.far);
    }

    /// Projection as of the last [`update_projection_matrix`](Self::update_projection_matrix).
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Camera-space X and Y axes expressed in world space.
    pub fn right_and_up(&self) -> (Vec3, Vec3) {
        let world = self.view_matrix().inverse();
        (world.x_axis.truncate(), world.y_axis.truncate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_cached_until_updated() {
        let mut cam = PerspectiveCamera::haunted_default(1.0);
        let before = cam.projection_matrix();
        cam.aspect = 2.0;
        assert_eq!(cam.projection_matrix(), before);
        cam.update_projection_matrix();
        assert_ne!(cam.projection_matrix(), before);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = PerspectiveCamera::haunted_default(16.0 / 9.0);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
