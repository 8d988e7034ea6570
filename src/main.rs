#![allow(dead_code)]

mod camera;
mod components;
mod constants;
mod events;
mod game;
mod path;
mod systems;
mod throw;

use camera::FollowCamera;
use components::{Orientation, Position};
use constants::*;
use events::EventQueue;
use throw::{Phase, ThrowState, WeaponDef};

use glam::Vec3;
use std::fs;

/// Headless demo: fixed-timestep loop that throws the axe, lets it fly,
/// recalls it, and prints every event the mechanic emits along the way.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let def = load_tuning("weapon_tuning.json")?;
    let (mut world, character) = game::init_world(&def);
    let mut throw_state = ThrowState::new(def);
    let mut camera = FollowCamera::new();
    let mut events = EventQueue::new();

    let dt = DEMO_TIMESTEP;

    for frame in 0..DEMO_MAX_FRAMES {
        puffin::GlobalProfiler::lock().new_frame();

        let character_pos = world
            .get::<&Position>(character)
            .map(|p| p.point)
            .unwrap_or(Vec3::ZERO);
        camera.set_tracking_target(character_pos);
        camera.update(dt);

        // Scripted input in place of a real input layer
        if frame == DEMO_THROW_FRAME {
            throw_state.request_throw(&mut world, character, &camera.pose(), &mut events);
        }
        if frame == DEMO_RETURN_FRAME {
            throw_state.request_return(&world, &mut events);
        }

        // Host-owned flight while Thrown - projectile physics is not part
        // of the mechanic, so the demo just drifts it forward
        if throw_state.phase() == Phase::Thrown {
            drift_projectile(&mut world, &throw_state, dt);
        }

        throw_state.advance(&mut world, character, dt, &mut events);
        systems::integrate_spin(&mut world, dt);

        for event in events.drain() {
            println!("[frame {frame:3}] {event:?}");
        }

        if frame > DEMO_RETURN_FRAME && throw_state.phase() == Phase::InHand {
            println!("[frame {frame:3}] weapon back in hand");
            break;
        }
    }

    Ok(())
}

/// Load tuning overrides if a tuning file sits next to the binary,
/// otherwise fall back to the built-in axe definition
fn load_tuning(path: &str) -> Result<WeaponDef, Box<dyn std::error::Error>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(_) => Ok(WeaponDef::axe()),
    }
}

/// Straight-line flight stand-in while the weapon is out
fn drift_projectile(world: &mut hecs::World, throw_state: &ThrowState, dt: f32) {
    let Some(projectile) = throw_state.projectile() else {
        return;
    };

    let forward = match world.get::<&Orientation>(projectile) {
        Ok(o) => o.forward(),
        Err(_) => return,
    };
    if let Ok(mut pos) = world.get::<&mut Position>(projectile) {
        pos.point += forward * DEMO_FLIGHT_SPEED * dt;
    }
}
