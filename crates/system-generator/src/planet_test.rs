use approx::assert_relative_eq;
use star_system::{BodyId, Random, StarSystem, SystemPath};
use stellar::BodyType;
use units::{Fixed, CELSIUS, SUN_MASS_TO_EARTH_MASS};

use crate::planet::{orbital_period_days, pick_planet_type, surface_temperature};

fn sun_system() -> (StarSystem, BodyId) {
    let mut system = StarSystem::new(SystemPath::new(0, 0, 0, 0), "Sol", 1);
    let sun = system.new_body(BodyType::StarG);
    system[sun].name = "Sol".to_string();
    system[sun].mass = Fixed::ONE;
    system[sun].radius = Fixed::ONE;
    system[sun].average_temp = 5800;
    system.set_root(sun);
    system.register_star(sun);
    (system, sun)
}

/// A circular orbit of `distance` AU around `primary`.
fn add_planet(system: &mut StarSystem, primary: BodyId, mass: Fixed, distance: Fixed) -> BodyId {
    let planet = system.new_body(BodyType::Terrestrial);
    let body = &mut system[planet];
    body.mass = mass;
    body.semi_major_axis = distance;
    body.orb_min = distance;
    body.orb_max = distance;
    body.rotation_period = Fixed::ONE;
    system.attach(primary, planet);
    planet
}

// ============================================================================
// Temperature and period
// ============================================================================

#[test]
fn test_blackbody_temperature_at_one_au() {
    let (system, sun) = sun_system();
    let temp = surface_temperature(&system, sun, Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
    assert!((300..=310).contains(&temp), "got {}", temp);
}

#[test]
fn test_temperature_falls_with_square_root_of_distance() {
    let (system, sun) = sun_system();
    let near = surface_temperature(&system, sun, Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
    let far = surface_temperature(&system, sun, Fixed::from_int(4), Fixed::ZERO, Fixed::ZERO);
    assert!((near / 2 - far).abs() <= 2);
}

#[test]
fn test_albedo_cools_and_greenhouse_warms() {
    let (system, sun) = sun_system();
    let bare = surface_temperature(&system, sun, Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
    let bright = surface_temperature(&system, sun, Fixed::ONE, Fixed::from_ratio(3, 10), Fixed::ZERO);
    let warm = surface_temperature(&system, sun, Fixed::ONE, Fixed::ZERO, Fixed::from_ratio(3, 10));
    assert!(bright < bare);
    assert!(warm > bare);
}

#[test]
fn test_grav_point_sums_its_stars() {
    let mut system = StarSystem::new(SystemPath::new(0, 0, 0, 0), "Pair", 1);
    let grav = system.new_body(BodyType::GravPoint);
    system.set_root(grav);
    for _ in 0..2 {
        let star = system.new_body(BodyType::StarG);
        system[star].radius = Fixed::ONE;
        system[star].average_temp = 5800;
        system.attach(grav, star);
    }
    let (single, sun) = sun_system();

    let pair = surface_temperature(&system, grav, Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
    let one = surface_temperature(&single, sun, Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
    // Twice the flux is 2^(1/4) times the temperature
    assert_relative_eq!(pair as f64 / one as f64, 2f64.powf(0.25), epsilon = 0.01);
}

#[test]
fn test_earth_year() {
    let period = orbital_period_days(Fixed::ONE, Fixed::from_int(SUN_MASS_TO_EARTH_MASS));
    assert_relative_eq!(period.to_f64(), 365.25, epsilon = 0.1);
}

#[test]
fn test_period_grows_with_distance() {
    let mass = Fixed::from_int(SUN_MASS_TO_EARTH_MASS);
    let inner = orbital_period_days(Fixed::ONE, mass);
    let outer = orbital_period_days(Fixed::from_int(4), mass);
    // Kepler: 4^(3/2)
    assert_relative_eq!(outer.to_f64() / inner.to_f64(), 8.0, epsilon = 1e-3);
}

// ============================================================================
// Typing
// ============================================================================

#[test]
fn test_earth_mass_is_terrestrial() {
    let (mut system, sun) = sun_system();
    let planet = add_planet(&mut system, sun, Fixed::ONE, Fixed::ONE);
    pick_planet_type(&mut system, planet, &mut Random::new(&[1]));

    let body = &system[planet];
    assert_eq!(body.body_type, BodyType::Terrestrial);
    assert_relative_eq!(body.radius.to_f64(), 1.0, epsilon = 1e-4);
    let volatiles = body.volatile_gas + body.volatile_liquid + body.volatile_ices;
    assert!(volatiles <= Fixed::from_int(2));
}

#[test]
fn test_heavy_planet_is_gas_giant() {
    let (mut system, sun) = sun_system();
    let planet = add_planet(&mut system, sun, Fixed::from_int(100), Fixed::from_int(5));
    pick_planet_type(&mut system, planet, &mut Random::new(&[1]));

    let blackbody = surface_temperature(&system, sun, Fixed::from_int(5), Fixed::ZERO, Fixed::ZERO);
    let body = &system[planet];
    assert_eq!(body.body_type, BodyType::GasGiant);
    assert_eq!(body.average_temp, blackbody + 334);
    assert!(body.is_scoopable());
}

#[test]
fn test_very_heavy_planet_is_brown_dwarf() {
    let (mut system, sun) = sun_system();
    let planet = add_planet(&mut system, sun, Fixed::from_int(10_000), Fixed::from_int(5));
    pick_planet_type(&mut system, planet, &mut Random::new(&[1]));

    let blackbody = surface_temperature(&system, sun, Fixed::from_int(5), Fixed::ZERO, Fixed::ZERO);
    let body = &system[planet];
    assert_eq!(body.body_type, BodyType::BrownDwarf);
    // Mass is now solar
    assert_eq!(body.mass, Fixed::from_int(10_000) / SUN_MASS_TO_EARTH_MASS);
    assert!(body.radius >= Fixed::from_ratio(10, 100));
    assert!(body.radius <= Fixed::from_ratio(30, 100));
    assert!(body.average_temp >= blackbody + 1000);
    assert!(body.average_temp <= blackbody + 2000);
}

#[test]
fn test_tiny_body_is_asteroid() {
    let (mut system, sun) = sun_system();
    let planet = add_planet(&mut system, sun, Fixed::from_ratio(1, 100_000), Fixed::from_int(3));
    pick_planet_type(&mut system, planet, &mut Random::new(&[1]));

    let body = &system[planet];
    assert_eq!(body.body_type, BodyType::Asteroid);
    assert!(body.radius >= Fixed::from_ratio(1, 630));
    assert_eq!(body.life, Fixed::ZERO);
}

#[test]
fn test_life_only_in_temperate_band() {
    let mut living = 0;
    for seed in 0..50 {
        let (mut system, sun) = sun_system();
        let planet = add_planet(&mut system, sun, Fixed::ONE, Fixed::ONE);
        pick_planet_type(&mut system, planet, &mut Random::new(&[seed]));

        let body = &system[planet];
        if body.life > Fixed::ZERO {
            living += 1;
            assert!(body.average_temp > CELSIUS - 60);
            assert!(body.average_temp < CELSIUS + 200);
            assert!(body.volatile_liquid > Fixed::ZERO);
        }
    }
    // Earth's orbit is habitable for most volatile budgets
    assert!(living > 0);
}

#[test]
fn test_close_moon_spins_down_towards_lock() {
    let (mut system, sun) = sun_system();
    let planet = add_planet(&mut system, sun, Fixed::ONE, Fixed::ONE);
    // The Moon: 0.0123 earth masses at 0.00257 AU
    let moon = add_planet(
        &mut system,
        planet,
        Fixed::from_ratio(123, 10_000),
        Fixed::from_ratio(257, 100_000),
    );
    pick_planet_type(&mut system, moon, &mut Random::new(&[3]));

    let month = orbital_period_days(Fixed::from_ratio(257, 100_000), Fixed::ONE);
    assert_relative_eq!(month.to_f64(), 27.4, epsilon = 0.5);
    let spin = system[moon].rotation_period;
    assert!(spin > Fixed::ONE);
    assert!(spin < month);
}
