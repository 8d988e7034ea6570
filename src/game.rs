//! Core game initialization and state management.
//!
//! Handles world creation and character entity spawning. The weapon
//! definition is injected here once at construction - there is no
//! runtime discovery of the weapon by name.

use crate::components::{Actor, HeldWeapon, Orientation, Player, Position, WeaponAnchors};
use crate::throw::WeaponDef;
use glam::{Quat, Vec3};
use hecs::{Entity, World};

/// Initialize the game world with the player character.
/// Returns (world, character_entity).
pub fn init_world(def: &WeaponDef) -> (World, Entity) {
    let mut world = World::new();

    let character = world.spawn((
        Position::new(Vec3::ZERO),
        Orientation::new(Quat::IDENTITY),
        Player,
        Actor::new(),
        HeldWeapon::new(),
        WeaponAnchors::from_def(def),
    ));

    (world, character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_starts_with_visible_weapon() {
        let def = WeaponDef::axe();
        let (world, character) = init_world(&def);

        let held = world.get::<&HeldWeapon>(character).unwrap();
        assert!(held.visible);
        let actor = world.get::<&Actor>(character).unwrap();
        assert!(actor.can_act());
    }

    #[test]
    fn test_anchors_resolve_relative_to_character() {
        let def = WeaponDef::axe();
        let (world, character) = init_world(&def);

        let base = Vec3::new(100.0, 0.0, -50.0);
        let anchors = *world.get::<&WeaponAnchors>(character).unwrap();
        assert_eq!(
            anchors.rest_point(base),
            base + Vec3::from_array(def.rest_offset)
        );
        assert_eq!(
            anchors.control_point(base),
            base + Vec3::from_array(def.control_offset)
        );
    }
}
