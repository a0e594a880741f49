//! Per-frame pose of the floating model.
//!
//! Every frame is a pure function of the animation clock and the previous
//! pose, so any render loop can drive it.

use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub float_amplitude: f32,
    pub float_speed: f32,
    /// Yaw added every frame, in radians.
    pub spin_per_frame: f32,
    pub tilt_amplitude: f32,
    pub tilt_speed: f32,
    /// Fraction of the remaining distance covered each frame.
    pub smoothing: f32,
    pub hover_scale: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            float_amplitude: 0.1,
            float_speed: 2.0,
            spin_per_frame: 0.01,
            tilt_amplitude: 0.15,
            tilt_speed: 3.0,
            smoothing: 0.1,
            hover_scale: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPose {
    /// Vertical offset from the float wave.
    pub lift: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub scale: f32,
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl ModelPose {
    pub fn resting(base_scale: f32) -> Self {
        Self {
            lift: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            scale: base_scale,
        }
    }

    /// Re-applies the initial scale after the base scale changed, keeping
    /// the spin where it is.
    pub fn rescaled(self, base_scale: f32) -> Self {
        Self {
            scale: base_scale,
            ..self
        }
    }

    pub fn target_pitch(elapsed: f32, hover: bool, params: &MotionParams) -> f32 {
        if hover {
            (elapsed * params.tilt_speed).sin() * params.tilt_amplitude
        } else {
            0.0
        }
    }

    pub fn target_scale(base_scale: f32, hover: bool, params: &MotionParams) -> f32 {
        if hover {
            base_scale * params.hover_scale
        } else {
            base_scale
        }
    }

    pub fn advance(self, elapsed: f32, hover: bool, base_scale: f32, params: &MotionParams) -> Self {
        let target_pitch = Self::target_pitch(elapsed, hover, params);
        let target_scale = Self::target_scale(base_scale, hover, params);
        Self {
            lift: (elapsed * params.float_speed).sin() * params.float_amplitude,
            yaw: self.yaw + params.spin_per_frame,
            pitch: lerp(self.pitch, target_pitch, params.smoothing),
            scale: lerp(self.scale, target_scale, params.smoothing),
        }
    }

    /// Model matrix for this pose. `centering` moves the mesh's bounding box
    /// centre to the origin before scaling and rotation.
    pub fn matrix(&self, centering: Mat4) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.lift, 0.0))
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_scale(Vec3::splat(self.scale))
            * centering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(mut pose: ModelPose, frames: usize, start: f32, hover: bool, base: f32) -> Vec<ModelPose> {
        let params = MotionParams::default();
        let mut out = Vec::with_capacity(frames);
        for i in 0..frames {
            pose = pose.advance(start + i as f32 * FRAME, hover, base, &params);
            out.push(pose);
        }
        out
    }

    #[test]
    fn float_follows_the_clock() {
        let params = MotionParams::default();
        let pose = ModelPose::resting(16.0).advance(0.25, false, 16.0, &params);
        assert!((pose.lift - (0.5f32).sin() * 0.1).abs() < 1e-6);
        assert!(pose.lift.abs() <= 0.1);
    }

    #[test]
    fn spin_is_constant_per_frame() {
        let poses = run(ModelPose::resting(16.0), 100, 0.0, false, 16.0);
        assert!((poses[99].yaw - 1.0).abs() < 1e-4);
    }

    #[test]
    fn hover_scale_grows_monotonically_toward_target() {
        let poses = run(ModelPose::resting(16.0), 120, 0.0, true, 16.0);
        let mut last = 16.0;
        for pose in &poses {
            assert!(pose.scale >= last);
            assert!(pose.scale <= 24.0);
            last = pose.scale;
        }
        assert!((24.0 - last) < 0.01);
    }

    #[test]
    fn leaving_hover_shrinks_and_levels_out() {
        let hovered = run(ModelPose::resting(16.0), 60, 0.0, true, 16.0);
        let start = *hovered.last().unwrap();
        assert!(start.pitch.abs() > 0.0);

        let settled = run(start, 120, 1.0, false, 16.0);
        let mut scale = start.scale;
        let mut pitch = start.pitch.abs();
        for pose in &settled {
            assert!(pose.scale <= scale);
            assert!(pose.scale >= 16.0);
            assert!(pose.pitch.abs() <= pitch);
            scale = pose.scale;
            pitch = pose.pitch.abs();
        }
        assert!(pitch < 1e-4);
        assert!((scale - 16.0) < 0.01);
    }

    #[test]
    fn hover_pitch_stays_within_amplitude() {
        let poses = run(ModelPose::resting(16.0), 600, 0.0, true, 16.0);
        assert!(poses.iter().all(|p| p.pitch.abs() <= 0.15 + 1e-6));
    }

    #[test]
    fn centred_mesh_floats_about_the_origin() {
        let centering = Mat4::from_translation(Vec3::new(-11.0, -1.0, -1.5));
        let pose = ModelPose {
            lift: 0.05,
            yaw: 1.2,
            pitch: 0.1,
            scale: 18.0,
        };
        let centre = pose.matrix(centering).transform_point3(Vec3::new(11.0, 1.0, 1.5));
        assert!((centre - Vec3::new(0.0, 0.05, 0.0)).length() < 1e-4);
    }

    #[test]
    fn rescale_resets_to_new_base() {
        let pose = run(ModelPose::resting(16.0), 30, 0.0, true, 16.0)[29];
        let rescaled = pose.rescaled(20.0);
        assert_eq!(rescaled.scale, 20.0);
        assert_eq!(rescaled.yaw, pose.yaw);
    }
}
