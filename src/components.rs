use glam::{Quat, Vec3};

use crate::throw::WeaponDef;

/// Position component - world-space location
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub point: Vec3,
}

impl Position {
    pub fn new(point: Vec3) -> Self {
        Self { point }
    }
}

/// Orientation component - world-space rotation
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub rotation: Quat,
}

impl Orientation {
    pub fn new(rotation: Quat) -> Self {
        Self { rotation }
    }

    /// Forward axis of this orientation (-Z convention)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Spin component - Euler angular rates in degrees per second (pitch, yaw, roll)
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    pub rate: Vec3,
}

impl Spin {
    pub fn new(rate: Vec3) -> Self {
        Self { rate }
    }

    pub fn none() -> Self {
        Self { rate: Vec3::ZERO }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Marker for an in-flight thrown weapon entity
#[derive(Debug, Clone, Copy)]
pub struct ProjectileMarker;

/// Actor component - gates whether the entity may start a new action
/// (set `action_locked` while airborne, staggered, mid-montage, ...)
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub action_locked: bool,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            action_locked: false,
        }
    }

    pub fn can_act(&self) -> bool {
        !self.action_locked
    }
}

/// In-hand weapon visual on the character. Hidden while the thrown
/// instance is live, shown again on catch.
#[derive(Debug, Clone, Copy)]
pub struct HeldWeapon {
    pub visible: bool,
}

impl HeldWeapon {
    pub fn new() -> Self {
        Self { visible: true }
    }
}

/// Attachment offsets for the return curve, relative to the character's
/// position. They move with the character, so the curve always ends
/// wherever the character is at catch time.
#[derive(Debug, Clone, Copy)]
pub struct WeaponAnchors {
    /// Offset to the in-hand rest point (the curve's end)
    pub rest_offset: Vec3,
    /// Offset to the path-control anchor (the curve's middle point)
    pub control_offset: Vec3,
}

impl WeaponAnchors {
    pub fn from_def(def: &WeaponDef) -> Self {
        Self {
            rest_offset: Vec3::from_array(def.rest_offset),
            control_offset: Vec3::from_array(def.control_offset),
        }
    }

    /// Resolve the rest point in world space
    pub fn rest_point(&self, base: Vec3) -> Vec3 {
        base + self.rest_offset
    }

    /// Resolve the control anchor in world space
    pub fn control_point(&self, base: Vec3) -> Vec3 {
        base + self.control_offset
    }
}
