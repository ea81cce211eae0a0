//! Planet typing and physical modelling.
//!
//! A freshly placed body only has a mass and an orbit. Typing decides what
//! it is (brown dwarf, gas giant, terrestrial world or asteroid) and derives
//! temperature, radius, rotation, composition, volatiles and life, all in
//! fixed point.
//!
//! # References
//!
//! - Stefan-Boltzmann blackbody equilibrium temperature, rearranged so that
//!   the constant factors fold into [`ENERGY_SCALE`] and [`TEMPERATURE_SCALE`]
//! - Gladman et al. (1996), "Synchronous locking of tidally evolving
//!   satellites", for the `a^6 R / (m M^2)` lock time scaling

use star_system::{pick_atmosphere, pick_rings, BodyId, Random, StarSystem};
use stellar::{star_metallicity, star_type_info, BodySuperType, BodyType};
use units::{isqrt, Fixed, CELSIUS, SUN_MASS_TO_EARTH_MASS};

/// Flux scale, W/m² per `(T/10000)^4 R² / d²` with R in solar radii and
/// d in AU: 17446.65451.
const ENERGY_SCALE: Fixed = Fixed::from_ratio_const(1_744_665_451, 100_000);

/// `1 / (4σ)` scaled so that `T = (E · 4409673)^(1/4)`.
const TEMPERATURE_SCALE: u64 = 4_409_673;

/// Inverse lock time of the Moon in the units used below.
const MOON_TIDAL_LOCK: i64 = 6286;

/// Smallest radius a body may end up with, earth radii (about 10 km).
fn min_radius() -> Fixed {
    Fixed::from_ratio(1, 630)
}

/// Energy flux from a star at a distance, W/m².
///
/// # Arguments
///
/// * `star_radius` - solar radii
/// * `star_temp` - kelvin
/// * `distance` - AU
fn energy_per_unit_area(star_radius: Fixed, star_temp: i32, distance: Fixed) -> Fixed {
    let temp = Fixed::from_ratio(star_temp as i64, 10_000);
    let emission = temp * temp * temp * temp * star_radius * star_radius;
    ENERGY_SCALE * (emission / (distance * distance))
}

/// Equilibrium surface temperature (kelvin) of a body `distance` AU from
/// `star`. A grav point stands for the combined light of its stars.
pub fn surface_temperature(
    system: &StarSystem,
    star: BodyId,
    distance: Fixed,
    albedo: Fixed,
    greenhouse: Fixed,
) -> i32 {
    let primary = &system[star];
    let energy: Fixed = if primary.body_type == BodyType::GravPoint {
        system
            .children_of(star)
            .iter()
            .map(|c| &system[*c])
            .filter(|c| c.super_type() == BodySuperType::Star)
            .map(|c| energy_per_unit_area(c.radius, c.average_temp, distance))
            .sum()
    } else {
        energy_per_unit_area(primary.radius, primary.average_temp, distance)
    };

    let pow4 = energy * (Fixed::ONE - albedo) / (Fixed::ONE - greenhouse);
    let whole = pow4.to_i64().max(0) as u64;
    isqrt(isqrt(whole.saturating_mul(TEMPERATURE_SCALE))) as i32
}

/// Orbital period in days of a body `semi_major_axis` AU from a primary of
/// `primary_mass_earths`: `365.25 a sqrt(a / M)` with M in solar masses.
pub fn orbital_period_days(semi_major_axis: Fixed, primary_mass_earths: Fixed) -> Fixed {
    let year = Fixed::from_ratio(36_525, 100);
    let sun_to_earth = Fixed::from_int(SUN_MASS_TO_EARTH_MASS).sqrt();
    let root = (semi_major_axis / primary_mass_earths).sqrt() * sun_to_earth;
    year * semi_major_axis * root
}

/// `1 / t_lock` relative to the Moon. Above 10 a body is fully locked.
///
/// The evaluation order keeps every intermediate inside the fixed-point
/// range for the orbits the disc model produces.
fn inverse_tidal_lock_time(
    semi_major_axis: Fixed,
    mass: Fixed,
    radius: Fixed,
    primary_mass: Fixed,
    primary_is_star: bool,
) -> Fixed {
    let a2 = semi_major_axis * semi_major_axis;
    // Moon orbits are tiny in AU, so the first two factors are scaled up
    let scaled = if primary_is_star {
        a2
    } else {
        a2 * SUN_MASS_TO_EARTH_MASS
    };
    let mut inv = Fixed::ONE;
    inv /= scaled;
    inv *= mass;
    inv /= scaled;
    inv *= primary_mass * primary_mass;
    inv /= radius;
    inv /= a2 * MOON_TIDAL_LOCK;
    inv
}

/// Cube root of the mass, with extra precision for small bodies.
fn radius_from_mass(mass: Fixed) -> Fixed {
    let radius = if mass <= Fixed::ONE {
        mass.convert::<48>().cbrt().convert::<32>()
    } else {
        mass.cbrt()
    };
    radius.max(min_radius())
}

/// Volatile state split at temperature `temp` (kelvin): gas, liquid and
/// ice proportions summing to one.
fn volatile_proportions(temp: i32) -> (Fixed, Fixed, Fixed) {
    let t = Fixed::from_int(temp as i64);
    let gas = t / (t + 100);
    let liquid = (Fixed::ONE - gas) * (t / (t + 50));
    let ices = Fixed::ONE - (gas + liquid);
    (gas, liquid, ices)
}

/// Types body `id` from its mass and orbit and derives its physical
/// properties, atmosphere and rings.
///
/// The body must orbit something; its orbit and the orbits above it must
/// already be placed.
pub fn pick_planet_type(system: &mut StarSystem, id: BodyId, rng: &mut Random) {
    let Some((star, min_dist, max_dist)) = system.find_star_and_true_orbital_range(id) else {
        return;
    };
    let Some(parent) = system[id].parent() else {
        return;
    };

    let average_dist = (min_dist + max_dist) >> 1;
    let bbody_temp = surface_temperature(system, star, average_dist, Fixed::ZERO, Fixed::ZERO);

    let parent_type = system[parent].body_type;
    let parent_is_star = parent_type.is_star_or_grav_point();
    let parent_mass = system[parent].mass;
    let parent_mass_earths = system[parent].mass_in_earths();
    let metallicity_source = if parent_is_star {
        parent_type
    } else {
        system[parent]
            .parent()
            .map(|gp| system[gp].body_type)
            .unwrap_or(BodyType::GravPoint)
    };
    let star_type = system[star].body_type;

    let body = &mut system[id];
    body.average_temp = bbody_temp;
    body.radius = radius_from_mass(body.mass);

    // =========================================================================
    // Tidal locking
    // =========================================================================
    let inv_lock = inverse_tidal_lock_time(
        body.semi_major_axis,
        body.mass,
        body.radius,
        parent_mass,
        parent_is_star,
    );
    if inv_lock > Fixed::from_int(10) {
        body.rotation_period = orbital_period_days(body.semi_major_axis, parent_mass_earths);
        body.axial_tilt = body.inclination;
    } else if inv_lock > Fixed::from_ratio(1, 100) {
        let lambda = inv_lock / (Fixed::from_ratio(1, 20) + inv_lock);
        let period = orbital_period_days(body.semi_major_axis, parent_mass_earths);
        body.rotation_period = (Fixed::ONE - lambda) * body.rotation_period + lambda * period;
        body.axial_tilt = (Fixed::ONE - lambda) * body.axial_tilt + lambda * body.inclination;
    }

    // =========================================================================
    // Composition
    // =========================================================================
    body.metallicity = star_metallicity(metallicity_source).unwrap_or(Fixed::ONE) * rng.fixed();
    body.volcanicity = body.mass.min(Fixed::ONE) * rng.fixed();
    body.atmos_oxidizing = rng.fixed();
    body.life = Fixed::ZERO;
    body.volatile_gas = Fixed::ZERO;
    body.volatile_liquid = Fixed::ZERO;
    body.volatile_ices = Fixed::ZERO;

    if body.mass > Fixed::from_int(317 * 13) {
        // Heavy enough to fuse deuterium
        body.body_type = BodyType::BrownDwarf;
        if let Some(info) = star_type_info(BodyType::BrownDwarf) {
            body.average_temp += rng.int32_range(info.temp_min, info.temp_max);
            body.mass = body.mass.min(Fixed::from_int(317 * 65)) / SUN_MASS_TO_EARTH_MASS;
            body.radius =
                Fixed::from_ratio(rng.int32_range(info.radius[0], info.radius[1]) as i64, 100);
        }
    } else if body.mass > Fixed::from_int(6) {
        body.body_type = BodyType::GasGiant;
        body.average_temp += 334;
    } else if body.mass > Fixed::from_ratio(1, 15_000) {
        body.body_type = BodyType::Terrestrial;

        let mut volatiles = rng.fixed() * 2;
        if rng.int32_below(3) != 0 {
            volatiles *= body.mass;
        }
        // Total atmosphere loss
        if rng.fixed() > body.mass {
            volatiles = Fixed::ZERO;
        }

        let mut greenhouse = Fixed::ZERO;
        let mut albedo = Fixed::ZERO;
        // CO2 sublimation
        if body.average_temp > 195 {
            greenhouse += volatiles * Fixed::from_ratio(1, 3);
        } else {
            albedo += Fixed::from_ratio(2, 6);
        }
        // Liquid water
        if body.average_temp > 273 {
            greenhouse += volatiles * Fixed::from_ratio(1, 5);
        } else {
            albedo += Fixed::from_ratio(3, 6);
        }
        // Boiling water
        if body.average_temp > 373 {
            greenhouse += volatiles * Fixed::from_ratio(1, 3);
        }
        // 1/(1-g) keeps growing but g never reaches 1
        if greenhouse > Fixed::from_ratio(7, 10) {
            greenhouse *= greenhouse;
            greenhouse *= greenhouse;
            greenhouse = greenhouse / (greenhouse + Fixed::from_ratio(32, 311));
        }

        let temp = surface_temperature(system, star, average_dist, albedo, greenhouse);
        let (gas, liquid, ices) = volatile_proportions(temp);

        let habitable = liquid > Fixed::ZERO
            && volatiles > Fixed::ZERO
            && temp > CELSIUS - 60
            && temp < CELSIUS + 200
            && !matches!(
                star_type,
                BodyType::BrownDwarf | BodyType::WhiteDwarf | BodyType::StarO
            )
            && {
                let coldest = surface_temperature(system, star, max_dist, albedo, greenhouse);
                let hottest = surface_temperature(system, star, min_dist, albedo, greenhouse);
                let band = (CELSIUS - 10 + 1)..(CELSIUS + 90);
                band.contains(&coldest) && band.contains(&hottest)
            };

        let body = &mut system[id];
        body.average_temp = temp;
        body.volatile_gas = gas * volatiles;
        body.volatile_liquid = liquid * volatiles;
        body.volatile_ices = ices * volatiles;
        if habitable {
            body.life = rng.fixed();
        }
    } else {
        body.body_type = BodyType::Asteroid;
    }

    let body = &mut system[id];
    pick_atmosphere(body);
    pick_rings(body, false);
}
