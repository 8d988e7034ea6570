//! Throwable-weapon lifecycle state machine.
//!
//! A weapon starts in the character's hand, is thrown as a spawned
//! projectile entity, and on request flies back along a quadratic Bézier
//! arc. The state machine owns the projectile handle and the return
//! progress; flight while `Thrown` belongs to the host (physics is out of
//! scope here).
//!
//! Progress advances by raw frame delta, so a full return always takes
//! exactly one time unit regardless of how far the weapon travelled. That
//! constant-duration recall is intended behavior, not a normalization bug.

use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::components::{
    Actor, HeldWeapon, Orientation, Position, ProjectileMarker, Spin, WeaponAnchors,
};
use crate::constants::*;
use crate::events::{Cue, EventQueue, GameEvent};
use crate::path::quadratic_bezier;

/// Lifecycle phase of the throwable weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InHand,
    Thrown,
    Returning,
}

/// Definition of a throwable weapon - all the tuning needed to throw one.
/// Arrays instead of Vec3 so a JSON tuning file can override the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDef {
    /// Distance in front of the camera at which the projectile spawns
    pub spawn_forward_offset: f32,
    /// Angular rate while returning, degrees/second (pitch, yaw, roll)
    pub spin_rate: [f32; 3],
    /// In-hand rest point, relative to the character
    pub rest_offset: [f32; 3],
    /// Path-control anchor, relative to the character
    pub control_offset: [f32; 3],
}

impl WeaponDef {
    /// The classic returning axe
    pub fn axe() -> Self {
        Self {
            spawn_forward_offset: THROW_SPAWN_FORWARD_OFFSET,
            spin_rate: RETURN_SPIN_RATE.to_array(),
            rest_offset: WEAPON_REST_OFFSET.to_array(),
            control_offset: WEAPON_CONTROL_OFFSET.to_array(),
        }
    }

    pub fn spin_rate_vec(&self) -> Vec3 {
        Vec3::from_array(self.spin_rate)
    }
}

impl Default for WeaponDef {
    fn default() -> Self {
        Self::axe()
    }
}

/// State machine for one character's throwable weapon.
///
/// Owned by the character and driven explicitly: the host calls
/// [`ThrowState::advance`] exactly once per frame, and the two request
/// methods from its input handling, all on the same logical tick. The
/// projectile entity is exclusively owned here once spawned; only the
/// catch transition despawns it.
pub struct ThrowState {
    phase: Phase,
    /// Normalized elapsed return time; meaningful only while `Returning`
    progress: f32,
    /// Projectile position captured when the recall began (curve start)
    origin: Vec3,
    projectile: Option<Entity>,
    def: WeaponDef,
}

impl ThrowState {
    pub fn new(def: WeaponDef) -> Self {
        Self {
            phase: Phase::InHand,
            progress: 0.0,
            origin: Vec3::ZERO,
            projectile: None,
            def,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn projectile(&self) -> Option<Entity> {
        self.projectile
    }

    /// Throw the held weapon: hide the in-hand visual, spawn the projectile
    /// in front of the camera with the camera's rotation, and cue the throw
    /// montage.
    ///
    /// Rejected (returns `false`, emits [`GameEvent::ThrowRejected`]) when a
    /// weapon is already out, or when the owner cannot act right now.
    pub fn request_throw(
        &mut self,
        world: &mut World,
        owner: Entity,
        camera: &CameraPose,
        events: &mut EventQueue,
    ) -> bool {
        if self.phase != Phase::InHand {
            events.push(GameEvent::ThrowRejected { phase: self.phase });
            return false;
        }

        let can_act = world
            .get::<&Actor>(owner)
            .map(|a| a.can_act())
            .unwrap_or(false);
        if !can_act {
            events.push(GameEvent::ThrowRejected { phase: self.phase });
            return false;
        }

        if let Ok(mut held) = world.get::<&mut HeldWeapon>(owner) {
            held.visible = false;
        }

        let spawn_point = camera.position + camera.forward * self.def.spawn_forward_offset;
        let projectile = world.spawn((
            Position::new(spawn_point),
            Orientation::new(camera.rotation),
            Spin::none(),
            ProjectileMarker,
        ));

        self.projectile = Some(projectile);
        self.phase = Phase::Thrown;

        events.push(GameEvent::AnimationCue { cue: Cue::Throw });
        events.push(GameEvent::WeaponThrown {
            projectile,
            spawn_point,
        });
        true
    }

    /// Recall the thrown weapon: capture its current position as the curve
    /// start and begin the return flight.
    ///
    /// Rejected (returns `false`) while `InHand` or `Returning` - there is
    /// either no live projectile to recall or one is already inbound. A
    /// projectile that vanished out from under us also rejects, with
    /// [`GameEvent::ProjectileLost`].
    pub fn request_return(&mut self, world: &World, events: &mut EventQueue) -> bool {
        if self.phase != Phase::Thrown {
            events.push(GameEvent::ReturnRejected { phase: self.phase });
            return false;
        }

        let origin = self
            .projectile
            .and_then(|p| world.get::<&Position>(p).ok().map(|pos| pos.point));
        let Some(origin) = origin else {
            events.push(GameEvent::ProjectileLost);
            return false;
        };

        self.origin = origin;
        self.progress = 0.0;
        self.phase = Phase::Returning;
        events.push(GameEvent::ReturnStarted { origin });
        true
    }

    /// Per-frame update; the host calls this exactly once per frame.
    ///
    /// No-op outside `Returning`. While returning, advances progress by
    /// `dt`, places the projectile on the Bézier arc from the captured
    /// origin through the character-relative control anchor to the rest
    /// point, and applies the configured spin rate. The frame on which
    /// progress reaches 1 fires the catch: cue the montage, despawn the
    /// projectile, show the in-hand visual, and snap back to `InHand`.
    pub fn advance(&mut self, world: &mut World, owner: Entity, dt: f32, events: &mut EventQueue) {
        puffin::profile_function!();

        if self.phase != Phase::Returning {
            return;
        }

        // The projectile can be despawned externally (level unload, cheat
        // console). Skip the frame rather than touch a dead handle.
        let projectile = match self.projectile {
            Some(p) if world.contains(p) => p,
            _ => {
                events.push(GameEvent::ProjectileLost);
                return;
            }
        };

        // Anchors are resolved against the owner every frame so the curve
        // ends wherever the character is now, not where it was at recall.
        let anchors = match world.get::<&WeaponAnchors>(owner) {
            Ok(a) => *a,
            Err(_) => return,
        };
        let base = match world.get::<&Position>(owner) {
            Ok(p) => p.point,
            Err(_) => return,
        };
        let control = anchors.control_point(base);
        let rest = anchors.rest_point(base);

        self.progress += dt;

        if self.progress < 1.0 {
            if let Ok(mut pos) = world.get::<&mut Position>(projectile) {
                pos.point = quadratic_bezier(self.progress, self.origin, control, rest);
            }
            if let Ok(mut spin) = world.get::<&mut Spin>(projectile) {
                spin.rate = self.def.spin_rate_vec();
            }
        } else {
            events.push(GameEvent::AnimationCue { cue: Cue::Catch });
            events.push(GameEvent::WeaponCaught { projectile });

            let _ = world.despawn(projectile);
            self.projectile = None;

            if let Ok(mut held) = world.get::<&mut HeldWeapon>(owner) {
                held.visible = true;
            }

            self.phase = Phase::InHand;
            self.progress = 0.0;
        }
    }
}
