//! Drag-to-rotate camera around the origin. Zoom and pan are not offered.

use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

const POLAR_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub rotate_speed: f32,
    pub damping: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub fov_degrees: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            rotate_speed: 0.8,
            damping: 0.05,
            min_polar: 0.0,
            max_polar: PI,
            fov_degrees: 85.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    radius: f32,
    /// Azimuth around the Y axis.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    params: OrbitParams,
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, params: OrbitParams) -> Self {
        let radius = eye.length().max(POLAR_EPSILON);
        Self {
            radius,
            theta: eye.x.atan2(eye.z),
            phi: (eye.y / radius).clamp(-1.0, 1.0).acos(),
            delta_theta: 0.0,
            delta_phi: 0.0,
            params,
        }
    }

    /// Queues a rotation for a pointer drag of `dx`/`dy` pixels on a surface
    /// `height` pixels tall.
    pub fn drag(&mut self, dx: f32, dy: f32, height: f32) {
        if height <= 0.0 {
            return;
        }
        self.delta_theta -= TAU * dx / height * self.params.rotate_speed;
        self.delta_phi -= TAU * dy / height * self.params.rotate_speed;
    }

    /// Applies a damped share of the pending rotation. Called once per frame.
    pub fn update(&mut self) {
        let factor = self.params.damping;
        self.theta += self.delta_theta * factor;
        self.phi += self.delta_phi * factor;
        self.phi = self.phi.clamp(
            self.params.min_polar.max(POLAR_EPSILON),
            self.params.max_polar.min(PI - POLAR_EPSILON),
        );
        self.delta_theta *= 1.0 - factor;
        self.delta_phi *= 1.0 - factor;
    }

    #[cfg(test)]
    fn is_settled(&self) -> bool {
        self.delta_theta.abs() < 1e-5 && self.delta_phi.abs() < 1e-5
    }

    #[cfg(test)]
    fn polar(&self) -> f32 {
        self.phi
    }

    #[cfg(test)]
    fn azimuth(&self) -> f32 {
        self.theta
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.params.fov_degrees.to_radians(),
            aspect.max(1e-3),
            0.01,
            100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::looking_from(Vec3::new(0.0, 0.5, 1.6), OrbitParams::default())
    }

    #[test]
    fn initial_eye_round_trips() {
        let eye = camera().eye();
        assert!((eye - Vec3::new(0.0, 0.5, 1.6)).length() < 1e-5);
    }

    #[test]
    fn drag_rotates_with_inertia() {
        let mut cam = camera();
        let start = cam.azimuth();
        cam.drag(100.0, 0.0, 600.0);

        cam.update();
        let first_step = (cam.azimuth() - start).abs();
        cam.update();
        let second_step = (cam.azimuth() - start).abs() - first_step;

        assert!(first_step > 0.0);
        assert!(second_step > 0.0 && second_step < first_step);

        for _ in 0..1000 {
            cam.update();
        }
        assert!(cam.is_settled());
        let total = TAU * 100.0 / 600.0 * 0.8;
        assert!(((start - cam.azimuth()) - total).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut cam = camera();
        cam.drag(0.0, -10_000.0, 100.0);
        for _ in 0..500 {
            cam.update();
        }
        assert!(cam.polar() <= PI);
        assert!(cam.polar() > PI - 1e-3);

        cam.drag(0.0, 10_000.0, 100.0);
        for _ in 0..500 {
            cam.update();
        }
        assert!(cam.polar() >= 0.0);
        assert!(cam.polar() < 1e-3);
    }

    #[test]
    fn radius_never_changes() {
        let mut cam = camera();
        let radius = cam.eye().length();
        cam.drag(250.0, 80.0, 400.0);
        for _ in 0..50 {
            cam.update();
        }
        assert!((cam.eye().length() - radius).abs() < 1e-4);
    }

    #[test]
    fn zero_height_drag_is_ignored() {
        let mut cam = camera();
        cam.drag(50.0, 50.0, 0.0);
        assert!(cam.is_settled());
    }
}
