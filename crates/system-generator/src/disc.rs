//! Planet and moon placement from a protoplanetary disc.
//!
//! Each star, binary barycentre and planet gets a disc `[disc_min,
//! disc_max]` whose surface density falls off linearly to zero at the outer
//! edge. Bodies are placed by walking outwards: every candidate orbit sweeps
//! up the disc mass between its inner edge and 1.35 times its apoapsis, and
//! the next candidate starts where that sweep ended.
//!
//! # References
//!
//! - Weidenschilling (1977), "The distribution of mass in the planetary
//!   system and solar nebula", for the minimum-mass disc idea

use star_system::{rotate_x, rotate_y, BodyId, Orbit, Random, StarSystem};
use stellar::{BodySuperType, BodyType};
use tracing::{trace, warn};
use units::{Fixed, AU, AU_EARTH_RADIUS, AU_SOL_RADIUS};

use crate::context::GenContext;
use crate::planet::pick_planet_type;

/// Redraws of the starting jump allowed when a star's walk places nothing.
const DISC_REDRAW_ATTEMPTS: u32 = 16;

/// Circumbinary discs start this many times the pair's apoapsis out.
const SAFE_DIST_FROM_BINARY: i64 = 5;

/// Absolute cap on any disc, AU.
const MAX_DISC_AU: i64 = 5000;

/// Minimum spacing between neighbouring orbits.
fn orbit_spacing() -> Fixed {
    Fixed::from_ratio(135, 100)
}

/// Disc mass between radii `a` and `b` for a density `1 - r/max`, without
/// the constant factors: `(b² - 2b³/3max) - (a² - 2a³/3max)`. `b` is
/// clipped to `max`.
pub fn mass_from_disk_area(a: Fixed, b: Fixed, max: Fixed) -> Fixed {
    let b = b.min(max);
    let k = Fixed::from_int(2) / (max * 3);
    // k * r stays below 1, so multiplying from the left cannot overflow
    (b * b - k * b * b * b) - (a * a - k * a * a * a)
}

/// Density scale that makes the whole disc hold `fraction` of the primary's
/// mass in earth masses.
pub fn disc_density(primary_mass_earths: Fixed, disc_min: Fixed, disc_max: Fixed, fraction: Fixed) -> Fixed {
    let disc_max = disc_max.max(disc_min);
    let total = mass_from_disk_area(disc_min, disc_max, disc_max);
    primary_mass_earths * fraction / total
}

/// Planet naming: `a`..`z`, then `aa`, `ab` and so on.
pub(crate) fn planet_suffix(index: usize) -> String {
    let mut n = index;
    let mut letters = Vec::new();
    loop {
        letters.push((b'a' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Disc bounds and density scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub min: Fixed,
    pub max: Fixed,
    pub density: Fixed,
}

/// Sizes the disc around `primary`. Draws from `rng`.
pub fn disc_around(system: &StarSystem, primary: BodyId, rng: &mut Random) -> Disc {
    let body = &system[primary];

    if body.is_star_like() {
        let mut min = if body.body_type == BodyType::GravPoint {
            body.children()
                .first()
                .map(|c| system[*c].orb_max * SAFE_DIST_FROM_BINARY)
                .unwrap_or(Fixed::ZERO)
        } else {
            body.radius * AU_SOL_RADIUS * 4
        };

        let mut max = if body.body_type == BodyType::WhiteDwarf {
            // Remnant of a star up to about 8 solar masses
            min = body.radius * AU_SOL_RADIUS * 1000;
            let spread = rng.n_fixed(2) * 100;
            spread * (Fixed::from_ratio(1, 2) + Fixed::from_int(8) * rng.fixed()).sqrt()
        } else {
            rng.n_fixed(2) * 100 * body.mass.sqrt()
        };

        let density = rng.fixed()
            * disc_density(body.mass_in_earths(), min, max, Fixed::from_ratio(2, 100));

        // Keep clear of a binary companion
        if body.super_type() == BodySuperType::Star && body.parent().is_some() {
            max = max.min(body.orb_min * Fixed::from_ratio(1, 10));
        }
        // Keep clear of the other pair
        if system.num_stars >= 3 {
            if let Some(inner) = system.root().and_then(|r| system.children_of(r).first().copied()) {
                max = max.min(Fixed::from_ratio(5, 100) * system[inner].orb_min);
            }
        }
        Disc { min, max, density }
    } else {
        let min = body.radius * AU_EARTH_RADIUS * 4;
        let hill = system.hill_radius(primary);
        let max = Fixed::from_int(MAX_DISC_AU)
            .min(Fixed::from_ratio(1, 20) * hill * body.orb_min * Fixed::from_ratio(1, 10));
        let density = rng.fixed()
            * disc_density(body.mass_in_earths(), min, max, Fixed::from_ratio(1, 500));
        Disc { min, max, density }
    }
}

/// One outward walk through the disc. Returns how many bodies it placed.
fn walk_disc(system: &mut StarSystem, primary: BodyId, disc: &Disc, rng: &mut Random) -> usize {
    let initial_jump = rng.n_fixed(5);
    let mut pos = (Fixed::ONE - initial_jump) * disc.min + initial_jump * disc.max;
    let mut placed = 0;

    while pos < disc.max {
        let periapsis = pos + pos * Fixed::from_ratio(1, 2) * rng.n_fixed(2);
        let eccentricity = rng.n_fixed(3);
        let semi_major_axis = periapsis / (Fixed::ONE - eccentricity);
        let apoapsis = semi_major_axis * 2 - periapsis;
        if apoapsis > disc.max {
            break;
        }

        let swept = mass_from_disk_area(pos, orbit_spacing() * apoapsis, disc.max);
        let mass = (swept * (rng.fixed() * disc.density)).max(Fixed::ZERO);

        let planet = system.new_body(BodyType::Terrestrial);
        {
            let body = &mut system[planet];
            body.eccentricity = eccentricity;
            body.axial_tilt = Fixed::from_ratio(100, 157) * rng.n_fixed(2);
            body.semi_major_axis = semi_major_axis;
            body.seed = rng.int32();
            body.mass = mass;
            body.rotation_period = Fixed::from_ratio(rng.int32_range(1, 200) as i64, 24);
        }

        let sma_m = semi_major_axis.to_f64() * AU;
        let ecc = eccentricity.to_f64();
        let orbit = if system[primary].body_type == BodyType::GravPoint {
            Orbit::around_barycentre(sma_m, system[primary].mass_kg(), system[planet].mass_kg(), ecc)
        } else {
            Orbit::around_primary(sma_m, system[primary].mass_kg(), ecc)
        };

        let r1 = rng.fixed() * Fixed::PI * 2;
        let r2 = rng.n_fixed(5);
        let inclination = Fixed::PI * r2 / 2;
        let plane = rotate_y(r1.to_f64())
            * rotate_x(-0.5 * std::f64::consts::PI + inclination.to_f64());

        let body = &mut system[planet];
        body.orbit = orbit.with_plane(plane);
        body.inclination = inclination;
        body.orbital_offset = r1;
        body.orb_min = periapsis;
        body.orb_max = apoapsis;
        system.attach(primary, planet);
        placed += 1;

        pos = apoapsis * orbit_spacing();
    }
    placed
}

/// Places planets (or moons) around `primary`, then names and types each
/// new body and recurses into it when `primary` is a star or barycentre.
///
/// Every child gets its own stream keyed by the primary's and its own seed,
/// so one subtree never shifts the draws of another.
pub fn make_planets_around(system: &mut StarSystem, ctx: &GenContext, primary: BodyId, rng: &mut Random) {
    let disc = disc_around(system, primary, rng);
    let super_type = system[primary].super_type();

    let mut placed = walk_disc(system, primary, &disc, rng);
    if super_type == BodySuperType::Star {
        let mut attempts = 0;
        while placed == 0 && attempts < DISC_REDRAW_ATTEMPTS {
            placed = walk_disc(system, primary, &disc, rng);
            attempts += 1;
        }
        if placed == 0 {
            warn!(
                star = %system[primary].name,
                disc_min = %disc.min,
                disc_max = %disc.max,
                "no room for planets around star"
            );
        }
    }
    trace!(primary = %system[primary].name, placed, "disc walk done");

    let star_like = super_type <= BodySuperType::Star;
    let primary_name = system[primary].name.clone();
    let primary_seed = system[primary].seed;
    let children: Vec<BodyId> = system.children_of(primary).to_vec();

    let mut index = 0;
    for child in children {
        // Around a barycentre the stars themselves are children too
        if system[child].super_type() == BodySuperType::Star {
            continue;
        }
        system[child].name = if star_like {
            format!("{} {}", primary_name, planet_suffix(index))
        } else {
            format!("{} {}", primary_name, index + 1)
        };

        let mut child_rng = ctx.stream(&[ctx.universe_seed(), primary_seed, system[child].seed]);
        pick_planet_type(system, child, &mut child_rng);
        if star_like {
            make_planets_around(system, ctx, child, &mut child_rng);
        }
        index += 1;
    }
}
