//! Orbit camera controls with damping.
//!
//! Pointer input accumulates rotate/pan/dolly deltas; [`OrbitControls::update`]
//! applies them to the camera once per frame. With damping enabled only a
//! fraction of the pending delta is applied per update and the rest decays,
//! which gives the camera its inertial glide after the pointer is released.

use crate::camera::PerspectiveCamera;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DragMode {
    #[default]
    None,
    Rotate,
    Dolly,
    Pan,
}

/// Spherical coordinates around the target: polar `phi` from +Y, azimuth `theta` from +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Spherical {
    radius: f32,
    phi: f32,
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,

    delta: Spherical,
    scale: f32,
    pan_offset: Vec3,
    drag: DragMode,
    last_pointer: [f32; 2],
    last_position: Vec3,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            delta: Spherical::default(),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            drag: DragMode::None,
            last_pointer: [0.0, 0.0],
            last_position: Vec3::ZERO,
        }
    }
}

impl OrbitControls {
    /// Controls orbiting the origin with damping switched on.
    pub fn damped() -> Self {
        Self {
            enable_damping: true,
            ..Self::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragMode::None
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.zoom_speed)
    }

    pub fn dolly_in(&mut self, factor: f32) {
        self.scale *= factor;
    }

    pub fn dolly_out(&mut self, factor: f32) {
        self.scale /= factor;
    }

    /// Shift the target in the camera plane by screen-space pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32, camera: &PerspectiveCamera) {
        let height = viewport_height.max(1.0);
        let offset = camera.position - self.target;
        let target_distance = offset.length() * (camera.fov_y_radians() * 0.5).tan();
        let (right, up) = camera.right_and_up();
        self.pan_offset += right * (-2.0 * dx * target_distance / height);
        self.pan_offset += up * (2.0 * dy * target_distance / height);
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        self.drag = match button {
            PointerButton::Primary => DragMode::Rotate,
            PointerButton::Middle => DragMode::Dolly,
            PointerButton::Secondary => DragMode::Pan,
        };
        self.last_pointer = [x, y];
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, viewport_height: f32, camera: &PerspectiveCamera) {
        let dx = x - self.last_pointer[0];
        let dy = y - self.last_pointer[1];
        self.last_pointer = [x, y];
        let height = viewport_height.max(1.0);
        match self.drag {
            DragMode::None => {}
            DragMode::Rotate => {
                self.rotate_left(TAU * dx / height * self.rotate_speed);
                self.rotate_up(TAU * dy / height * self.rotate_speed);
            }
            DragMode::Dolly => {
                if dy > 0.0 {
                    self.dolly_out(self.zoom_scale());
                } else if dy < 0.0 {
                    self.dolly_in(self.zoom_scale());
                }
            }
            DragMode::Pan => self.pan(
                dx * self.pan_speed,
                dy * self.pan_speed,
                height,
                camera,
            ),
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = DragMode::None;
    }

    /// Mouse wheel; negative `delta_y` (scrolling up) moves closer.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.dolly_in(self.zoom_scale());
        } else if delta_y > 0.0 {
            self.dolly_out(self.zoom_scale());
        }
    }

    /// Apply pending input to `camera`. Returns true when the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let mut spherical = Spherical::from_offset(camera.position - self.target);

        if self.enable_damping {
            spherical.theta += self.delta.theta * self.damping_factor;
            spherical.phi += self.delta.phi * self.damping_factor;
        } else {
            spherical.theta += self.delta.theta;
            spherical.phi += self.delta.phi;
        }

        spherical.phi = spherical
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(EPS, PI - EPS);
        spherical.radius =
            (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        if self.enable_damping {
            self.target += self.pan_offset * self.damping_factor;
        } else {
            self.target += self.pan_offset;
        }

        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            let keep = 1.0 - self.damping_factor;
            self.delta.theta *= keep;
            self.delta.phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.delta = Spherical::default();
            self.pan_offset = Vec3::ZERO;
        }
        let zoomed = self.scale != 1.0;
        self.scale = 1.0;

        let moved = zoomed || self.last_position.distance_squared(camera.position) > EPS;
        self.last_position = camera.position;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherical_round_trips_offset() {
        let v = Vec3::new(4.0, 2.0, 5.0);
        let back = Spherical::from_offset(v).to_offset();
        assert!((back - v).length() < 1e-5);
    }
}
