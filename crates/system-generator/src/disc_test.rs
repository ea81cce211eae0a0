use approx::assert_relative_eq;
use star_system::{BodyId, Random, StarSystem, SystemPath};
use stellar::{BodySuperType, BodyType};
use units::{Fixed, AU_SOL_RADIUS};

use crate::config::GeneratorConfig;
use crate::context::GenContext;
use crate::disc::{disc_around, disc_density, make_planets_around, mass_from_disk_area, planet_suffix};

fn sun_system() -> (StarSystem, BodyId) {
    let mut system = StarSystem::new(SystemPath::new(0, 0, 0, 0), "Sol", 1);
    let sun = system.new_body(BodyType::StarG);
    system[sun].name = "Sol".to_string();
    system[sun].seed = 1234;
    system[sun].mass = Fixed::ONE;
    system[sun].radius = Fixed::ONE;
    system[sun].average_temp = 5800;
    system.set_root(sun);
    system.register_star(sun);
    system.num_stars = 1;
    (system, sun)
}

fn context() -> GenContext {
    GenContext::new(SystemPath::new(0, 0, 0, 0), GeneratorConfig::default())
}

// ============================================================================
// Disc model
// ============================================================================

#[test]
fn test_whole_disc_area() {
    let max = Fixed::from_int(3);
    let area = mass_from_disk_area(Fixed::ZERO, max, max);
    assert_relative_eq!(area.to_f64(), 3.0, epsilon = 1e-6);
}

#[test]
fn test_disc_area_clips_outer_radius() {
    let max = Fixed::from_int(3);
    assert_eq!(
        mass_from_disk_area(Fixed::ONE, Fixed::from_int(10), max),
        mass_from_disk_area(Fixed::ONE, max, max)
    );
}

#[test]
fn test_disc_area_is_additive() {
    let max = Fixed::from_int(3);
    let inner = mass_from_disk_area(Fixed::ZERO, Fixed::ONE, max);
    let outer = mass_from_disk_area(Fixed::ONE, Fixed::from_int(2), max);
    let whole = mass_from_disk_area(Fixed::ZERO, Fixed::from_int(2), max);
    assert_relative_eq!((inner + outer).to_f64(), whole.to_f64(), epsilon = 1e-6);
}

#[test]
fn test_density_spreads_fraction_of_primary() {
    let (min, max) = (Fixed::from_ratio(1, 10), Fixed::from_int(40));
    let mass = Fixed::from_int(332_998);
    let fraction = Fixed::from_ratio(2, 100);
    let density = disc_density(mass, min, max, fraction);
    let total = density * mass_from_disk_area(min, max, max);
    assert_relative_eq!(total.to_f64(), 6659.96, max_relative = 1e-4);
}

#[test]
fn test_planet_suffixes() {
    assert_eq!(planet_suffix(0), "a");
    assert_eq!(planet_suffix(25), "z");
    assert_eq!(planet_suffix(26), "aa");
    assert_eq!(planet_suffix(27), "ab");
}

#[test]
fn test_star_disc_bounds() {
    let (system, sun) = sun_system();
    let disc = disc_around(&system, sun, &mut Random::new(&[9]));
    assert_eq!(disc.min, AU_SOL_RADIUS * 4);
    assert!(disc.max <= Fixed::from_int(100));
    assert!(disc.density >= Fixed::ZERO);
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_planets_respect_disc_and_spacing() {
    let ctx = context();
    let mut placed = 0;
    for seed in 0..20 {
        let (mut system, sun) = sun_system();
        make_planets_around(&mut system, &ctx, sun, &mut Random::new(&[seed]));

        let planets = system.children_of(sun).to_vec();
        placed += planets.len();
        for (i, planet) in planets.iter().enumerate() {
            let body = &system[*planet];
            assert_eq!(body.name, format!("Sol {}", planet_suffix(i)));
            assert!(body.orb_min >= AU_SOL_RADIUS * 4);
            assert!(body.orb_max <= Fixed::from_int(100));
            assert!(body.orb_min <= body.orb_max);
            assert!(body.mass >= Fixed::ZERO);
        }
        for pair in planets.windows(2) {
            let inner = &system[pair[0]];
            let outer = &system[pair[1]];
            assert!(inner.orb_max * Fixed::from_ratio(135, 100) <= outer.orb_min);
        }
    }
    assert!(placed > 0);
}

#[test]
fn test_moons_are_numbered_after_their_planet() {
    let ctx = context();
    for seed in 0..20 {
        let (mut system, sun) = sun_system();
        make_planets_around(&mut system, &ctx, sun, &mut Random::new(&[seed]));

        for planet in system.children_of(sun) {
            // Brown dwarfs get lettered planets of their own
            if system[*planet].super_type() == BodySuperType::Star {
                continue;
            }
            let planet_name = system[*planet].name.clone();
            for (i, moon) in system.children_of(*planet).iter().enumerate() {
                let moon = &system[*moon];
                assert_eq!(moon.name, format!("{} {}", planet_name, i + 1));
                assert!(moon.orb_max <= Fixed::from_int(5000));
                assert!(!moon.has_children());
            }
        }
    }
}

#[test]
fn test_placement_is_deterministic() {
    let ctx = context();
    let (mut first, sun) = sun_system();
    make_planets_around(&mut first, &ctx, sun, &mut Random::new(&[5]));
    let (mut second, sun) = sun_system();
    make_planets_around(&mut second, &ctx, sun, &mut Random::new(&[5]));
    assert_eq!(first, second);
}

#[test]
fn test_circumbinary_disc_starts_outside_pair() {
    let mut system = StarSystem::new(SystemPath::new(0, 0, 0, 0), "Pair", 1);
    let grav = system.new_body(BodyType::GravPoint);
    system.set_root(grav);
    for _ in 0..2 {
        let star = system.new_body(BodyType::StarM);
        system[star].mass = Fixed::from_ratio(1, 2);
        system[star].radius = Fixed::from_ratio(1, 2);
        system[star].orb_min = Fixed::from_ratio(1, 10);
        system[star].orb_max = Fixed::from_ratio(2, 10);
        system.attach(grav, star);
    }
    system[grav].mass = Fixed::ONE;

    let disc = disc_around(&system, grav, &mut Random::new(&[1]));
    assert_eq!(disc.min, Fixed::from_ratio(2, 10) * 5);
}
