//! Star bodies and the star topology of a system.
//!
//! One star is the root itself. Two stars orbit a grav point. Three or
//! four stars form a close A,B pair plus either a lone C or a C,D pair,
//! the two halves orbiting a root grav point.

use star_system::{BodyId, Random, SectorSystem, StarSystem};
use stellar::{star_type_info, BodyType};
use tracing::warn;
use units::{Fixed, AU_SOL_RADIUS};

use crate::binary::make_binary_pair;

/// Redraws allowed when a companion must be lighter than its primary.
const LIGHTER_THAN_ATTEMPTS: u32 = 16;

/// Re-placements allowed to bring an inner pair of a multiple system
/// within [`MAX_INNER_PAIR_SEPARATION_AU`].
const CLOSE_PAIR_ATTEMPTS: u32 = 16;

const MAX_INNER_PAIR_SEPARATION_AU: i64 = 100;

/// Floor for radii that the tables leave at zero (black holes).
fn min_star_radius() -> Fixed {
    Fixed::from_ratio(1, 10_000)
}

/// Turns `id` into a star of `body_type`, drawing its seed, radius, mass
/// and temperature from the per-type ranges.
pub fn make_star_of_type(system: &mut StarSystem, id: BodyId, body_type: BodyType, rng: &mut Random) {
    let Some(info) = star_type_info(body_type) else {
        return;
    };
    let body = &mut system[id];
    body.body_type = body_type;
    body.seed = rng.int32();
    body.radius = Fixed::from_ratio(rng.int32_range(info.radius[0], info.radius[1]) as i64, 100);

    if body_type.is_rapid_rotator() {
        let r = rng.fixed();
        body.aspect_ratio = Fixed::ONE + Fixed::from_ratio(8, 10) * r * r;
    }

    body.mass = Fixed::from_ratio(rng.int32_range(info.mass[0], info.mass[1]) as i64, 100);
    body.average_temp = rng.int32_range(info.temp_min, info.temp_max);
    body.radius = body.radius.max(min_star_radius());
}

/// Any star kind, uniformly.
pub fn random_star_type(rng: &mut Random) -> BodyType {
    let index = rng.int32_range(BodyType::STAR_MIN.index() as i32, BodyType::STAR_MAX.index() as i32);
    BodyType::from_index(index as usize).unwrap_or(BodyType::StarM)
}

/// Redraws the star until its mass is at most `max_mass`. Returns false
/// when the attempts ran out and the last draw was kept anyway.
pub fn make_star_lighter_than(
    system: &mut StarSystem,
    id: BodyId,
    body_type: BodyType,
    max_mass: Fixed,
    rng: &mut Random,
) -> bool {
    for _ in 0..LIGHTER_THAN_ATTEMPTS {
        make_star_of_type(system, id, body_type, rng);
        if system[id].mass <= max_mass {
            return true;
        }
    }
    warn!(
        star = %system[id].name,
        mass = %system[id].mass,
        max_mass = %max_mass,
        "companion star is heavier than its primary"
    );
    false
}

/// Minimum periapsis for a pair so planets of one star keep clear of the
/// other: 1.2 radii of each, in AU.
pub fn pair_separation(system: &StarSystem, a: BodyId, b: BodyId) -> Fixed {
    let factor = Fixed::from_ratio(12, 10);
    (factor * system[a].radius + factor * system[b].radius) * AU_SOL_RADIUS
}

/// Star kind `index` of the sector entry, or a random one when the entry
/// leaves it out.
fn star_type_at(sector: &SectorSystem, index: usize, rng: &mut Random) -> BodyType {
    match sector.star_types.get(index) {
        Some(body_type) if body_type.is_star() => *body_type,
        _ => random_star_type(rng),
    }
}

fn new_grav_point(system: &mut StarSystem, name: String, rng: &mut Random) -> BodyId {
    let id = system.new_body(BodyType::GravPoint);
    system[id].name = name;
    system[id].seed = rng.int32();
    id
}

fn new_star(system: &mut StarSystem, name: String) -> BodyId {
    let id = system.new_body(BodyType::StarM);
    system[id].name = name;
    id
}

/// Star topology built for a system.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub root: BodyId,
    /// Stars in letter order
    pub stars: Vec<BodyId>,
    /// Grav points that host circumbinary planets (A,B then C,D)
    pub binaries: Vec<BodyId>,
}

/// Builds the stars of a system with `num_stars` stars (1 to 4), sets the
/// root and registers the stars. The caller validates the star count.
pub fn make_star_topology(
    system: &mut StarSystem,
    sector: &SectorSystem,
    num_stars: usize,
    rng: &mut Random,
) -> Topology {
    let name = sector.name.clone();

    if num_stars <= 1 {
        let star = new_star(system, name);
        let body_type = star_type_at(sector, 0, rng);
        make_star_of_type(system, star, body_type, rng);
        system.set_root(star);
        system.register_star(star);
        system.num_stars = 1;
        return Topology {
            root: star,
            stars: vec![star],
            binaries: Vec::new(),
        };
    }

    // =========================================================================
    // A,B pair
    // =========================================================================
    let grav_ab = new_grav_point(system, format!("{} A,B", name), rng);
    system.set_root(grav_ab);

    let star_a = new_star(system, format!("{} A", name));
    let type_a = star_type_at(sector, 0, rng);
    make_star_of_type(system, star_a, type_a, rng);

    let star_b = new_star(system, format!("{} B", name));
    let type_b = star_type_at(sector, 1, rng);
    let mass_a = system[star_a].mass;
    make_star_lighter_than(system, star_b, type_b, mass_a, rng);

    system[grav_ab].mass = system[star_a].mass + system[star_b].mass;
    system.attach(grav_ab, star_a);
    system.attach(grav_ab, star_b);

    let min_dist_ab = pair_separation(system, star_a, star_b);
    make_binary_pair(system, star_a, star_b, min_dist_ab, rng);

    let mut stars = vec![star_a, star_b];
    let mut binaries = vec![grav_ab];

    if num_stars == 2 {
        system.num_stars = 2;
        for star in &stars {
            system.register_star(*star);
        }
        return Topology {
            root: grav_ab,
            stars,
            binaries,
        };
    }

    let max_separation = Fixed::from_int(MAX_INNER_PAIR_SEPARATION_AU);
    let mut attempts = 0;
    while system[star_a].orb_max > max_separation {
        if attempts == CLOSE_PAIR_ATTEMPTS {
            warn!(
                system = %name,
                apoapsis = %system[star_a].orb_max,
                "inner pair of multiple system left wider than 100 AU"
            );
            break;
        }
        make_binary_pair(system, star_a, star_b, min_dist_ab, rng);
        attempts += 1;
    }

    // =========================================================================
    // C, or C,D pair
    // =========================================================================
    let star_c = new_star(system, format!("{} C", name));
    let outer = if num_stars == 3 {
        let type_c = star_type_at(sector, 2, rng);
        make_star_lighter_than(system, star_c, type_c, mass_a, rng);
        stars.push(star_c);
        star_c
    } else {
        let grav_cd = new_grav_point(system, format!("{} C,D", name), rng);

        let type_c = star_type_at(sector, 2, rng);
        make_star_lighter_than(system, star_c, type_c, mass_a, rng);

        let star_d = new_star(system, format!("{} D", name));
        let type_d = star_type_at(sector, 3, rng);
        let mass_c = system[star_c].mass;
        make_star_lighter_than(system, star_d, type_d, mass_c, rng);

        system.attach(grav_cd, star_c);
        system.attach(grav_cd, star_d);
        let min_dist_cd = pair_separation(system, star_c, star_d);
        make_binary_pair(system, star_c, star_d, min_dist_cd, rng);
        system[grav_cd].mass = system[star_c].mass + system[star_d].mass;

        stars.push(star_c);
        stars.push(star_d);
        binaries.push(grav_cd);
        grav_cd
    };

    // =========================================================================
    // Root pair
    // =========================================================================
    let root = new_grav_point(system, name, rng);
    system.set_root(root);
    system[root].mass = system[grav_ab].mass + system[outer].mass;
    system.attach(root, grav_ab);
    system.attach(root, outer);

    let min_dist = (system[star_a].orb_max + system[star_c].orb_max) * 4;
    make_binary_pair(system, grav_ab, outer, min_dist, rng);

    system.num_stars = stars.len();
    for star in &stars {
        system.register_star(*star);
    }
    Topology {
        root,
        stars,
        binaries,
    }
}
