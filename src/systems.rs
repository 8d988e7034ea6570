//! Per-frame world systems.

use crate::components::{Orientation, Spin};
use glam::{EulerRot, Quat, Vec3};
use hecs::World;

/// Integrate angular rates into orientations.
///
/// `Spin` holds Euler rates in degrees/second; the returning weapon's
/// tumble comes from here rather than from the path tangent.
pub fn integrate_spin(world: &mut World, dt: f32) {
    puffin::profile_function!();

    for (_id, (orientation, spin)) in world.query_mut::<(&mut Orientation, &Spin)>() {
        if spin.rate == Vec3::ZERO {
            continue;
        }

        let step = spin.rate * dt;
        let delta = Quat::from_euler(
            EulerRot::YXZ,
            step.y.to_radians(),
            step.x.to_radians(),
            step.z.to_radians(),
        );
        orientation.rotation = (delta * orientation.rotation).normalize();
    }
}
