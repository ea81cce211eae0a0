//! System generation entry point.
//!
//! # Algorithm
//!
//! 1. Stars: one to four, paired under grav points where there is more
//!    than one
//! 2. Planets around every star and every close binary pair, moons around
//!    every planet, each typed as it is placed
//! 3. Population, trade, politics and starports
//! 4. Permanent hyperspace clouds
//! 5. Grav point masses recomputed from what ended up orbiting them
//!
//! A custom definition with a body tree replaces steps 1 and 2 and skips
//! starport placement.

use star_system::{BodyId, Random, SectorSystem, StarSystem, SysgenError, SystemPath};
use stellar::{star_metallicity, BodyType};
use tracing::debug;
use units::Fixed;

use crate::config::GeneratorConfig;
use crate::context::GenContext;
use crate::custom::generate_from_custom;
use crate::disc::make_planets_around;
use crate::hypercloud::add_perma_hyperclouds;
use crate::population::populate;
use crate::stars::make_star_topology;

pub const MAX_STARS: usize = 4;

/// Generates the system at `path` from its sector entry.
///
/// The result depends only on `path`, `sector` and the config's universe
/// seed.
///
/// # Errors
///
/// [`SysgenError::InvalidStarCount`] for procedural systems outside one to
/// four stars; [`SysgenError::OrbitTooClose`] and
/// [`SysgenError::StarCountMismatch`] for bad custom definitions.
///
/// # Examples
///
/// ```rust
/// use star_system::{SectorSystem, SystemPath};
/// use stellar::BodyType;
/// use system_generator::{generate, GeneratorConfig};
///
/// let sector = SectorSystem::new("Tau", 42, vec![BodyType::StarG]);
/// let system = generate(&SystemPath::new(0, 0, 0, 0), &sector, &GeneratorConfig::default()).unwrap();
/// assert_eq!(system.num_stars, 1);
/// assert_eq!(system.hyperspace_clouds().len(), 4);
/// ```
pub fn generate(
    path: &SystemPath,
    sector: &SectorSystem,
    config: &GeneratorConfig,
) -> Result<StarSystem, SysgenError> {
    let path = path.system_only();
    let mut ctx = GenContext::new(path, *config);
    ctx.is_home_system = sector.is_home_system;

    let mut system = StarSystem::new(path, sector.name.clone(), sector.seed);
    system.unexplored = !sector.explored;
    system.faction = sector.faction.clone();

    debug!(path = %path, name = %sector.name, stars = sector.num_stars, "generating system");

    let mut rng = ctx.stream(&[ctx.universe_seed(), sector.seed]);

    match sector.custom.as_deref() {
        Some(custom) => {
            system.is_custom = true;
            system.name = custom.name.clone();
            system.short_desc = custom.short_desc.clone();
            system.long_desc = custom.long_desc.clone();
            ctx.gov_type = custom.gov_type;

            match &custom.bodies {
                Some(root_def) => {
                    system.has_custom_bodies = true;
                    let root = generate_from_custom(&mut system, root_def, custom.num_stars, &mut rng)?;
                    system.metallicity = system_metallicity(&system, root);
                    populate(&mut system, &ctx, false);
                }
                None => generate_procedural(&mut system, &ctx, sector, custom.num_stars, &mut rng)?,
            }
        }
        None => generate_procedural(&mut system, &ctx, sector, sector.num_stars, &mut rng)?,
    }

    add_perma_hyperclouds(&mut system, &ctx);
    if let Some(root) = system.root() {
        finalize_grav_point_masses(&mut system, root);
    }

    debug!(
        path = %path,
        name = %system.name,
        bodies = system.body_count(),
        stations = system.space_stations().len(),
        "generated system"
    );
    Ok(system)
}

fn generate_procedural(
    system: &mut StarSystem,
    ctx: &GenContext,
    sector: &SectorSystem,
    num_stars: usize,
    rng: &mut Random,
) -> Result<(), SysgenError> {
    if !(1..=MAX_STARS).contains(&num_stars) {
        return Err(SysgenError::InvalidStarCount(num_stars));
    }

    let topology = make_star_topology(system, sector, num_stars, rng);

    // Planets of single stars, then circumbinary planets
    for primary in topology.stars.iter().chain(topology.binaries.iter()) {
        let parent_seed = system[*primary]
            .parent()
            .map(|p| system[p].seed)
            .unwrap_or(system.seed);
        let mut disc_rng = ctx.stream(&[ctx.universe_seed(), parent_seed, system[*primary].seed]);
        make_planets_around(system, ctx, *primary, &mut disc_rng);
    }

    system.metallicity = system_metallicity(system, topology.root);
    populate(system, ctx, true);
    Ok(())
}

fn system_metallicity(system: &StarSystem, root: BodyId) -> Fixed {
    star_metallicity(system[root].body_type).unwrap_or(Fixed::ONE)
}

/// Sets every grav point's mass to the sum of its children's, solar
/// masses, deepest first.
pub fn finalize_grav_point_masses(system: &mut StarSystem, id: BodyId) {
    let children = system.children_of(id).to_vec();
    for child in &children {
        finalize_grav_point_masses(system, *child);
    }
    if system[id].body_type == BodyType::GravPoint {
        let mass: Fixed = children.iter().map(|c| system[*c].mass_in_solar()).sum();
        system[id].mass = mass;
    }
}
