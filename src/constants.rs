//! Game constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

use glam::Vec3;

// =============================================================================
// THROW MECHANIC
// =============================================================================

/// Distance in front of the camera at which the thrown weapon spawns
pub const THROW_SPAWN_FORWARD_OFFSET: f32 = 150.0;
/// Angular rate applied to the weapon while returning, degrees/second
/// (pitch, yaw, roll) - end-over-end tumble
pub const RETURN_SPIN_RATE: Vec3 = Vec3::new(-720.0, 0.0, 0.0);
/// In-hand rest point, relative to the character's position
pub const WEAPON_REST_OFFSET: Vec3 = Vec3::new(35.0, 90.0, 0.0);
/// Path-control anchor, relative to the character's position.
/// Offset to the side so the return arcs instead of flying straight.
pub const WEAPON_CONTROL_OFFSET: Vec3 = Vec3::new(220.0, 140.0, -60.0);

// =============================================================================
// CAMERA
// =============================================================================

/// Boom length - the camera follows this far behind the pivot
pub const CAMERA_ARM_LENGTH: f32 = 400.0;
/// Pivot height above the character's position
pub const CAMERA_PIVOT_HEIGHT: f32 = 80.0;
/// Smoothing factor for pivot tracking (lower = smoother)
pub const CAMERA_TRACKING_SMOOTHING: f32 = 0.85;
/// Pitch clamp in radians (just short of straight up/down)
pub const CAMERA_PITCH_LIMIT: f32 = 1.4;

// =============================================================================
// DEMO
// =============================================================================

/// Fixed timestep for the headless demo loop (60 Hz)
pub const DEMO_TIMESTEP: f32 = 1.0 / 60.0;
/// Forward flight speed of the thrown weapon, units/second.
/// Host-side stand-in for the out-of-scope projectile physics.
pub const DEMO_FLIGHT_SPEED: f32 = 900.0;
/// Demo frame on which the scripted throw fires
pub const DEMO_THROW_FRAME: u64 = 30;
/// Demo frame on which the scripted recall fires
pub const DEMO_RETURN_FRAME: u64 = 120;
/// Hard cap on demo frames in case the script never completes
pub const DEMO_MAX_FRAMES: u64 = 600;
