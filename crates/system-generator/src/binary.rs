//! Binary pair orbits.
//!
//! Both members of a pair circle their common barycentre on the same
//! ellipse shape, each scaled by the other's share of the total mass, in
//! planes half a turn apart.

use star_system::{rotate_x, rotate_y, BodyId, Orbit, Random, StarSystem};
use tracing::warn;
use units::{Fixed, AU};

/// Times the candidate semi-major axis may double before the last
/// candidate is accepted regardless of separation.
const MAX_SEPARATION_DOUBLINGS: u32 = 32;

/// Draws a semi-major axis (AU) from one of three magnitude bands.
fn separation_band(rng: &mut Random) -> Fixed {
    let hundredths = match rng.int32_below(3) {
        2 => rng.int32_range(100, 10_000),
        1 => rng.int32_range(10, 1_000),
        _ => rng.int32_range(1, 100),
    };
    Fixed::from_ratio(hundredths as i64, 100)
}

/// Places `a` and `b` on a shared orbit whose periapsis is at least
/// `min_dist` AU.
///
/// # Arguments
///
/// * `a`, `b` - stars or grav points; masses in solar masses
/// * `min_dist` - minimum periapsis of the relative orbit, AU
pub fn make_binary_pair(
    system: &mut StarSystem,
    a: BodyId,
    b: BodyId,
    min_dist: Fixed,
    rng: &mut Random,
) {
    let mass_a = system[a].mass;
    let mass_b = system[b].mass;
    let total = mass_a + mass_b;
    let share_a = mass_b / total;
    let share_b = mass_a / total;

    let eccentricity = rng.n_fixed(3);

    let mut semi_major_axis = Fixed::ZERO;
    let mut multiplier: i64 = 1;
    let mut separated = false;
    for _ in 0..MAX_SEPARATION_DOUBLINGS {
        semi_major_axis = separation_band(rng) * multiplier;
        multiplier *= 2;
        if semi_major_axis - eccentricity * semi_major_axis >= min_dist {
            separated = true;
            break;
        }
    }
    if !separated {
        warn!(
            a = %system[a].name,
            b = %system[b].name,
            min_dist = %min_dist,
            "binary separation budget exhausted"
        );
    }

    let total_kg = system[a].mass_kg() + system[b].mass_kg();
    let e = eccentricity.to_f64();
    let orbit_a = Orbit::around_barycentre(
        AU * (semi_major_axis * share_a).to_f64(),
        total_kg,
        system[a].mass_kg(),
        e,
    );
    let orbit_b = Orbit::around_barycentre(
        AU * (semi_major_axis * share_b).to_f64(),
        total_kg,
        system[b].mass_kg(),
        e,
    );

    let rotation = rng.fixed() * Fixed::PI;
    let inclination = rng.n_fixed(5) * Fixed::PI / 2;
    let tilt = rotate_x(-std::f64::consts::FRAC_PI_2 + inclination.to_f64());
    let plane_a = rotate_y(rotation.to_f64()) * tilt;
    let plane_b = rotate_y((rotation - Fixed::PI).to_f64()) * tilt;

    let orb_min = semi_major_axis - eccentricity * semi_major_axis;
    let orb_max = semi_major_axis * 2 - orb_min;

    for (id, orbit, plane, phase_shift) in [
        (a, orbit_a, plane_a, Fixed::ZERO),
        (b, orbit_b, plane_b, Fixed::PI),
    ] {
        let body = &mut system[id];
        body.orbit = orbit.with_plane(plane).with_phase(phase_shift.to_f64());
        body.eccentricity = eccentricity;
        body.semi_major_axis = semi_major_axis;
        body.inclination = inclination;
        body.orbital_offset = rotation;
        body.orb_min = orb_min;
        body.orb_max = orb_max;
        body.orbital_phase_at_start = phase_shift;
    }
}
