//! Starports for populated bodies.

use star_system::{rotate_x, rotate_y, rotate_z, BodyId, Orbit, Random, StarSystem, SystemBody};
use stellar::BodyType;
use tracing::trace;
use units::{Fixed, AU, AU_EARTH_RADIUS};

use crate::context::GenContext;
use crate::naming::NameGenerator;

/// At most this many surface settlements per body.
const MAX_SURFACE_PORTS: usize = 6;

/// Bodies below this population (billions) get no starports.
fn min_port_population() -> Fixed {
    Fixed::from_ratio(1, 1000)
}

/// Adds orbital and surface starports to `id` and everything under it,
/// children first.
///
/// A body gets one orbital port in low orbit when there is room below a
/// quarter of its Hill radius and below half its first child's periapsis,
/// sometimes an antipodal twin, and up to six surface ports. Ports go to the
/// front of the body's children and into the system's station list.
pub fn populate_add_stations(system: &mut StarSystem, ctx: &GenContext, id: BodyId) {
    let children = system.children_of(id).to_vec();
    for child in children {
        populate_add_stations(system, ctx, child);
    }

    let seed = system[id].seed;
    let mut rng = ctx.stream(&[seed, ctx.universe_seed()]);
    let mut names = NameGenerator::new(ctx.stream(&[seed, ctx.universe_seed()]));

    let population = system[id].population;
    if population < min_port_population() {
        return;
    }

    let mut pop = population + rng.fixed();

    let mut orb_max = system.hill_radius(id) / 4;
    let orb_min = system[id].radius * AU_EARTH_RADIUS * 4;
    if let Some(first) = system.children_of(id).first() {
        orb_max = orb_max.min(system[*first].orb_min / 2);
    }

    // =========================================================================
    // Orbital
    // =========================================================================
    pop -= rng.fixed();
    if orb_min < orb_max && pop >= Fixed::ZERO {
        let port = system.new_body(BodyType::OrbitalStarport);
        {
            let parent_temp = system[id].average_temp;
            let parent_kg = system[id].mass_kg();
            let body = &mut system[port];
            body.seed = rng.int32();
            body.rotation_period = Fixed::from_ratio(1, 3600);
            body.average_temp = parent_temp;
            body.mass = Fixed::ZERO;
            body.semi_major_axis = orb_min;
            body.eccentricity = Fixed::ZERO;
            body.axial_tilt = Fixed::ZERO;
            body.inclination = Fixed::ZERO;
            body.orb_min = orb_min;
            body.orb_max = orb_min;
            body.orbit = Orbit::around_primary(orb_min.to_f64() * AU, parent_kg, 0.0);
        }
        system.attach_front(id, port);
        system.register_station(port);
        let name = names.unique_station_name(system, BodyType::OrbitalStarport);
        system[port].name = name;

        pop -= rng.fixed();
        if pop > Fixed::ZERO {
            let twin = system.new_body(BodyType::OrbitalStarport);
            let mut body = system[port].clone();
            body.orbit.set_plane(rotate_z(std::f64::consts::PI));
            body.name = names.unique_station_name(system, BodyType::OrbitalStarport);
            copy_port(system, twin, body);
            system.attach_front(id, twin);
            system.register_station(twin);
        }
    }

    // =========================================================================
    // Surface
    // =========================================================================
    let mut pop = population + rng.fixed();
    for _ in 0..MAX_SURFACE_PORTS {
        pop -= rng.fixed();
        if pop < Fixed::ZERO {
            break;
        }

        let port = system.new_body(BodyType::SurfaceStarport);
        let port_seed = rng.int32();
        let name = names.unique_station_name(system, BodyType::SurfaceStarport);
        let parent_temp = system[id].average_temp;
        let body = &mut system[port];
        body.seed = port_seed;
        body.average_temp = parent_temp;
        body.mass = Fixed::ZERO;
        body.name = name;
        position_settlement(body, &mut Random::new(&[port_seed]));
        system.attach_front(id, port);
        system.register_station(port);
    }

    trace!(body = %system[id].name, population = %population, "starports added");
}

/// Copies the generated attributes of a template port into `id`.
fn copy_port(system: &mut StarSystem, id: BodyId, template: SystemBody) {
    let body = &mut system[id];
    body.name = template.name;
    body.seed = template.seed;
    body.rotation_period = template.rotation_period;
    body.average_temp = template.average_temp;
    body.mass = template.mass;
    body.semi_major_axis = template.semi_major_axis;
    body.eccentricity = template.eccentricity;
    body.axial_tilt = template.axial_tilt;
    body.inclination = template.inclination;
    body.orb_min = template.orb_min;
    body.orb_max = template.orb_max;
    body.orbit = template.orbit;
}

/// Puts a surface port at a random latitude and longitude. The orbit
/// degenerates to a point on the surface; latitude and longitude are kept
/// as inclination and orbital offset.
pub fn position_settlement(body: &mut SystemBody, rng: &mut Random) {
    let latitude = (rng.fixed() - Fixed::from_ratio(1, 2)) * Fixed::PI;
    let longitude = rng.fixed() * Fixed::PI * 2;

    let plane = rotate_y(longitude.to_f64())
        * rotate_x(-0.5 * std::f64::consts::PI + latitude.to_f64());
    body.orbit = Orbit::default().with_plane(plane);
    body.semi_major_axis = Fixed::ZERO;
    body.eccentricity = Fixed::ZERO;
    body.orb_min = Fixed::ZERO;
    body.orb_max = Fixed::ZERO;
    body.inclination = latitude;
    body.orbital_offset = longitude;
}
