//! Building a system from a hand-authored body tree.

use star_system::{
    pick_atmosphere, pick_rings, rotate_x, rotate_y, BodyId, CustomSystemBody, Orbit, Random,
    RingRequest, RingStyle, StarSystem, SysgenError,
};
use stellar::{BodySuperType, BodyType};
use units::{Fixed, AU, SUN_MASS_TO_EARTH_MASS};

/// Builds the tree under `root_def` into `system` and registers its stars
/// and starports. Seeds and orbital offsets the definition leaves out are
/// drawn from `rng`.
///
/// Fails when a body orbits inside 1.2 radii of its primary or when the
/// tree holds a different number of stars than `num_stars`.
pub fn generate_from_custom(
    system: &mut StarSystem,
    root_def: &CustomSystemBody,
    num_stars: usize,
    rng: &mut Random,
) -> Result<BodyId, SysgenError> {
    let root = system.new_body(root_def.body_type);
    {
        let body = &mut system[root];
        body.seed = root_def.seed.unwrap_or_else(|| rng.int32());
        body.radius = root_def.radius;
        body.aspect_ratio = root_def.aspect_ratio;
        body.mass = root_def.mass;
        body.average_temp = root_def.average_temp;
        body.name = root_def.name.clone();
        body.is_custom_body = true;
        body.rotational_phase_at_start = root_def.rotational_phase_at_start;
        body.orbital_phase_at_start = root_def.orbital_phase_at_start;
    }
    system.set_root(root);

    custom_kids(system, root, &root_def.children, rng)?;

    let stars: Vec<BodyId> = system
        .bodies()
        .filter(|b| b.super_type() == BodySuperType::Star)
        .map(|b| b.id())
        .collect();
    if stars.len() != num_stars {
        return Err(SysgenError::StarCountMismatch {
            declared: num_stars,
            found: stars.len(),
        });
    }
    for star in stars {
        system.register_star(star);
    }
    system.num_stars = num_stars;
    Ok(root)
}

/// Mass of a barycentre from its children's definitions, solar masses.
fn grav_point_mass(defs: &[CustomSystemBody]) -> Fixed {
    defs.iter()
        .map(|def| {
            if def.body_type.is_star() {
                def.mass
            } else {
                def.mass / SUN_MASS_TO_EARTH_MASS
            }
        })
        .sum()
}

fn custom_kids(
    system: &mut StarSystem,
    parent: BodyId,
    defs: &[CustomSystemBody],
    rng: &mut Random,
) -> Result<(), SysgenError> {
    let parent_is_grav = system[parent].body_type == BodyType::GravPoint;
    if parent_is_grav {
        system[parent].mass = grav_point_mass(defs);
    }

    for def in defs {
        let kid = system.new_body(def.body_type);
        {
            let body = &mut system[kid];
            body.seed = def.seed.unwrap_or_else(|| rng.int32());
            body.radius = def.radius;
            body.aspect_ratio = def.aspect_ratio;
            body.average_temp = def.average_temp;
            body.name = def.name.clone();
            body.is_custom_body = true;

            body.mass = def.mass;
            if def.body_type == BodyType::Asteroid {
                body.mass = body.mass / 100_000;
            }

            body.metallicity = def.metallicity;
            // Multiple of Earth's surface density
            body.volatile_gas = def.volatile_gas * Fixed::from_ratio(1225, 1000);
            body.volatile_liquid = def.volatile_liquid;
            body.volatile_ices = def.volatile_ices;
            body.volcanicity = def.volcanicity;
            body.atmos_oxidizing = def.atmos_oxidizing;
            body.life = def.life;

            body.rotation_period = def.rotation_period;
            body.rotational_phase_at_start = def.rotational_phase_at_start;
            body.eccentricity = def.eccentricity;
            body.orbital_phase_at_start = def.orbital_phase_at_start;
            body.axial_tilt = def.axial_tilt;
            body.inclination = def.latitude;
            body.semi_major_axis = def.semi_major_axis;
        }

        let sma_m = def.semi_major_axis.to_f64() * AU;
        let ecc = def.eccentricity.to_f64();
        let parent_kg = system[parent].mass_kg();
        let orbit = if parent_is_grav {
            Orbit::around_barycentre(sma_m, parent_kg, system[kid].mass_kg(), ecc)
        } else {
            Orbit::around_primary(sma_m, parent_kg, ecc)
        };
        let mut orbit = orbit.with_phase(def.orbital_phase_at_start.to_f64());
        let tilt = rotate_x(-0.5 * std::f64::consts::PI + def.latitude.to_f64());

        if def.body_type == BodyType::SurfaceStarport {
            system[kid].orbital_offset = def.longitude;
            orbit.set_plane(rotate_y(def.longitude.to_f64()) * tilt);
        } else {
            if sma_m < 1.2 * system[parent].radius_m() {
                return Err(SysgenError::OrbitTooClose {
                    body: def.name.clone(),
                });
            }
            let offset = def
                .orbital_offset
                .unwrap_or_else(|| rng.fixed() * Fixed::PI * 2);
            system[kid].orbital_offset = offset;
            orbit.set_plane(rotate_y(offset.to_f64()) * tilt);
        }
        system[kid].orbit = orbit;

        if def.body_type.is_starport() {
            system.register_station(kid);
        }
        system.attach(parent, kid);

        let body = &mut system[kid];
        body.orb_min = def.semi_major_axis - def.eccentricity * def.semi_major_axis;
        body.orb_max = def.semi_major_axis * 2 - body.orb_min;

        pick_atmosphere(body);
        match def.rings {
            RingRequest::None => body.rings = None,
            RingRequest::Forced => pick_rings(body, true),
            RingRequest::Random => pick_rings(body, false),
            RingRequest::Custom {
                min_radius,
                max_radius,
                color,
            } => {
                body.rings = Some(RingStyle {
                    min_radius,
                    max_radius,
                    base_color: color,
                })
            }
        }

        custom_kids(system, kid, &def.children, rng)?;
    }
    Ok(())
}
