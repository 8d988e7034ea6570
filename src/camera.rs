//! Third-person follow camera.
//!
//! Host-side collaborator: the throw mechanic only ever sees a
//! [`CameraPose`] snapshot, taken at the instant of the throw.

use crate::constants::*;
use glam::{EulerRot, Quat, Vec3};

/// Snapshot of the camera transform at a single instant
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vec3,
    pub forward: Vec3,
    pub rotation: Quat,
}

/// Boom camera orbiting a pivot above the character
pub struct FollowCamera {
    pivot: Vec3,
    yaw: f32,
    pitch: f32,
    arm_length: f32,
    tracking_target: Option<Vec3>,
}

impl FollowCamera {
    pub fn new() -> Self {
        Self {
            pivot: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            arm_length: CAMERA_ARM_LENGTH,
            tracking_target: None,
        }
    }

    /// Follow the character: pivot eases toward this point each update
    pub fn set_tracking_target(&mut self, target: Vec3) {
        self.tracking_target = Some(target + Vec3::new(0.0, CAMERA_PIVOT_HEIGHT, 0.0));
    }

    /// Apply look input (radians), clamping pitch short of the poles
    pub fn add_look_input(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(target) = self.tracking_target {
            // Smooth interpolation to target position
            let t = 1.0 - CAMERA_TRACKING_SMOOTHING.powf(dt * 60.0);
            self.pivot += (target - self.pivot) * t;
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Camera eye sits one boom length behind the pivot
    pub fn eye_position(&self) -> Vec3 {
        self.pivot - self.forward() * self.arm_length
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.eye_position(),
            forward: self.forward(),
            rotation: self.rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_is_unit_length() {
        let mut camera = FollowCamera::new();
        camera.add_look_input(0.7, -0.3);
        assert!((camera.forward().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_eye_sits_behind_pivot() {
        let camera = FollowCamera::new();
        let pose = camera.pose();
        // Default orientation looks down -Z, so the eye is arm_length toward +Z
        assert!((pose.position.z - CAMERA_ARM_LENGTH).abs() < 1e-4);
        assert!((pose.forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = FollowCamera::new();
        camera.add_look_input(0.0, 10.0);
        camera.add_look_input(0.0, 10.0);
        let pose = camera.pose();
        assert!(pose.forward.is_finite());
        assert!(camera.forward().y.abs() < 1.0);
    }
}
