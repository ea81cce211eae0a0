use approx::assert_relative_eq;
use star_system::{BodyId, Random, StarSystem, SystemPath};
use stellar::BodyType;
use units::Fixed;

use crate::binary::make_binary_pair;

fn pair() -> (StarSystem, BodyId, BodyId) {
    let mut system = StarSystem::new(SystemPath::new(0, 0, 0, 0), "Pair", 7);
    let a = system.new_body(BodyType::StarG);
    let b = system.new_body(BodyType::StarM);
    system[a].mass = Fixed::ONE;
    system[b].mass = Fixed::from_ratio(1, 2);
    (system, a, b)
}

#[test]
fn test_pair_shares_orbit_shape() {
    let (mut system, a, b) = pair();
    make_binary_pair(&mut system, a, b, Fixed::from_ratio(1, 10), &mut Random::new(&[1]));

    assert_eq!(system[a].semi_major_axis, system[b].semi_major_axis);
    assert_eq!(system[a].eccentricity, system[b].eccentricity);
    assert_eq!(system[a].orb_min, system[b].orb_min);
    assert_eq!(system[a].orb_max, system[b].orb_max);
    assert!(system[a].orb_min <= system[a].orb_max);
    assert!(system[a].orb_min >= Fixed::from_ratio(1, 10));
}

#[test]
fn test_heavier_member_orbits_closer_to_barycentre() {
    let (mut system, a, b) = pair();
    make_binary_pair(&mut system, a, b, Fixed::from_ratio(1, 10), &mut Random::new(&[2]));

    let ratio = system[a].orbit.semi_major_axis() / system[b].orbit.semi_major_axis();
    assert_relative_eq!(ratio, 0.5, epsilon = 1e-6);
    assert_relative_eq!(
        system[a].orbit.period(),
        system[b].orbit.period(),
        max_relative = 1e-6
    );
}

#[test]
fn test_pair_members_start_opposite() {
    let (mut system, a, b) = pair();
    let mut rng = Random::new(&[3]);
    make_binary_pair(&mut system, a, b, Fixed::from_ratio(1, 10), &mut rng);
    // Placing the pair again (as the close-pair retry does) keeps the phases
    make_binary_pair(&mut system, a, b, Fixed::from_ratio(1, 10), &mut rng);

    assert_eq!(system[a].orbital_phase_at_start, Fixed::ZERO);
    assert_eq!(system[b].orbital_phase_at_start, Fixed::PI);
    assert_eq!(system[a].orbital_offset, system[b].orbital_offset);
}

#[test]
fn test_wide_minimum_separation_is_met() {
    let (mut system, a, b) = pair();
    let min_dist = Fixed::from_int(500);
    make_binary_pair(&mut system, a, b, min_dist, &mut Random::new(&[4]));
    assert!(system[a].orb_min >= min_dist);
}
