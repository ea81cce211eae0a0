//! Permanent hyperspace clouds.
//!
//! Every system carries four clouds on one circular orbit around the root,
//! a quarter turn apart, just outside the outermost periapsis of the system.

use star_system::{rotate_x, rotate_y, Orbit, StarSystem};
use stellar::BodyType;
use units::{Fixed, AU, AU_SOL_RADIUS};

use crate::context::GenContext;

pub const PERMA_HYPERCLOUD_COUNT: u32 = 4;

/// Orbit radius for the clouds, AU: the largest periapsis of any body, or
/// four root radii for a system with nothing in orbit.
pub fn cloud_orbit_radius(system: &StarSystem) -> Fixed {
    let envelope = system
        .bodies()
        .map(|b| b.orb_min)
        .max()
        .unwrap_or(Fixed::ZERO);
    if envelope > Fixed::ZERO {
        return envelope;
    }
    system
        .root_body()
        .map(|root| root.radius * AU_SOL_RADIUS * 4)
        .unwrap_or(Fixed::ZERO)
}

/// Adds the clouds at the front of the root's children and records them in
/// the system's cloud list.
pub fn add_perma_hyperclouds(system: &mut StarSystem, ctx: &GenContext) {
    let Some(root) = system.root() else {
        return;
    };
    let mut rng = ctx.stream(&[system.seed, ctx.universe_seed()]);

    let radius = cloud_orbit_radius(system);
    let root_kg = system[root].mass_kg();

    let r1 = rng.fixed() * Fixed::PI * 2;
    let r2 = rng.n_fixed(5);
    let inclination = Fixed::PI * r2 / 2;
    let plane =
        rotate_y(r1.to_f64()) * rotate_x(-0.5 * std::f64::consts::PI + inclination.to_f64());

    for i in 0..PERMA_HYPERCLOUD_COUNT {
        let phase = Fixed::PI * i as i64 / 2;
        let cloud = system.new_body(BodyType::HyperspaceCloud);
        let body = &mut system[cloud];
        body.name = format!("Perma-hypercloud {}", i + 1);
        body.seed = rng.int32();
        body.rotation_period = Fixed::from_ratio(200, 24);
        body.mass = Fixed::ZERO;
        body.radius = Fixed::from_int(20_000);
        body.semi_major_axis = radius;
        body.eccentricity = Fixed::ZERO;
        body.orb_min = radius;
        body.orb_max = radius;
        body.inclination = inclination;
        body.orbital_offset = r1;
        body.orbital_phase_at_start = phase;
        body.orbit = Orbit::around_barycentre(radius.to_f64() * AU, root_kg, 0.0, 0.0)
            .with_plane(plane)
            .with_phase(phase.to_f64());
        system.attach_front(root, cloud);
        system.register_hyperspace_cloud(cloud);
    }
}
