//! Game event system for decoupled communication between systems.
//!
//! The throw state machine emits events, other systems consume them.
//! This allows animation, audio, UI, etc. to react without tight coupling,
//! and gives tests a recorded list of everything that happened.

use glam::Vec3;
use hecs::Entity;

use crate::throw::Phase;

/// Fire-and-forget animation cues for the character's montage player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Throw,
    Catch,
}

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A weapon was thrown and its projectile entity spawned
    WeaponThrown {
        projectile: Entity,
        spawn_point: Vec3,
    },
    /// A recall began; `origin` is the projectile position at that instant
    ReturnStarted { origin: Vec3 },
    /// A returning weapon reached the character's hand
    WeaponCaught { projectile: Entity },
    /// Play an animation montage
    AnimationCue { cue: Cue },
    /// A throw was requested in a phase that does not allow it
    ThrowRejected { phase: Phase },
    /// A recall was requested in a phase that does not allow it
    ReturnRejected { phase: Phase },
    /// The projectile entity disappeared out from under the state machine
    ProjectileLost,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
