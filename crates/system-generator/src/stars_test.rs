use star_system::{Random, SectorSystem, StarSystem, SystemPath};
use stellar::{star_type_info, BodySuperType, BodyType};
use units::{Fixed, AU_SOL_RADIUS};

use crate::stars::{
    make_star_lighter_than, make_star_of_type, make_star_topology, pair_separation,
    random_star_type,
};

fn empty_system() -> StarSystem {
    StarSystem::new(SystemPath::new(1, 2, 3, 4), "Test", 99)
}

fn sector(types: Vec<BodyType>) -> SectorSystem {
    SectorSystem::new("Test", 99, types)
}

#[test]
fn test_star_of_type_within_table_ranges() {
    let info = star_type_info(BodyType::StarG).unwrap();
    for seed in 0..50 {
        let mut system = empty_system();
        let id = system.new_body(BodyType::StarM);
        make_star_of_type(&mut system, id, BodyType::StarG, &mut Random::new(&[seed]));

        let star = &system[id];
        assert_eq!(star.body_type, BodyType::StarG);
        assert!(star.mass >= Fixed::from_ratio(info.mass[0] as i64, 100));
        assert!(star.mass <= Fixed::from_ratio(info.mass[1] as i64, 100));
        assert!(star.radius >= Fixed::from_ratio(info.radius[0] as i64, 100));
        assert!(star.radius <= Fixed::from_ratio(info.radius[1] as i64, 100));
        assert!((info.temp_min..=info.temp_max).contains(&star.average_temp));
        // G stars are not rapid rotators
        assert_eq!(star.aspect_ratio, Fixed::ONE);
    }
}

#[test]
fn test_rapid_rotators_bulge() {
    let mut system = empty_system();
    let id = system.new_body(BodyType::StarM);
    make_star_of_type(&mut system, id, BodyType::StarB, &mut Random::new(&[5]));
    let aspect = system[id].aspect_ratio;
    assert!(aspect >= Fixed::ONE);
    assert!(aspect <= Fixed::from_ratio(18, 10));
}

#[test]
fn test_black_holes_get_a_radius() {
    let mut system = empty_system();
    let id = system.new_body(BodyType::StarM);
    make_star_of_type(&mut system, id, BodyType::StarSBH, &mut Random::new(&[1]));
    assert!(system[id].radius > Fixed::ZERO);
}

#[test]
fn test_random_star_type_is_a_star() {
    let mut rng = Random::new(&[3]);
    for _ in 0..500 {
        assert!(random_star_type(&mut rng).is_star());
    }
}

#[test]
fn test_star_lighter_than() {
    let mut system = empty_system();
    let id = system.new_body(BodyType::StarM);
    let mut rng = Random::new(&[11]);

    assert!(make_star_lighter_than(&mut system, id, BodyType::StarM, Fixed::ONE, &mut rng));
    assert!(system[id].mass <= Fixed::ONE);

    // No M star is this light; the last draw is kept
    let limit = Fixed::from_ratio(1, 100);
    assert!(!make_star_lighter_than(&mut system, id, BodyType::StarM, limit, &mut rng));
    assert_eq!(system[id].body_type, BodyType::StarM);
}

#[test]
fn test_pair_separation() {
    let mut system = empty_system();
    let a = system.new_body(BodyType::StarG);
    let b = system.new_body(BodyType::StarK);
    system[a].radius = Fixed::ONE;
    system[b].radius = Fixed::from_int(2);
    let expected = Fixed::from_ratio(36, 10) * AU_SOL_RADIUS;
    let diff = (pair_separation(&system, a, b) - expected).abs();
    assert!(diff < Fixed::from_ratio(1, 1_000_000));
}

// ============================================================================
// Topology
// ============================================================================

#[test]
fn test_single_star_topology() {
    let mut system = empty_system();
    let topology = make_star_topology(&mut system, &sector(vec![BodyType::StarK]), 1, &mut Random::new(&[1]));

    assert_eq!(system.root(), Some(topology.root));
    assert_eq!(topology.stars, vec![topology.root]);
    assert!(topology.binaries.is_empty());
    assert_eq!(system[topology.root].body_type, BodyType::StarK);
    assert_eq!(system[topology.root].name, "Test");
    assert_eq!(system.stars(), &[topology.root]);
    assert_eq!(system.num_stars, 1);
}

#[test]
fn test_binary_topology() {
    let mut system = empty_system();
    let types = vec![BodyType::StarG, BodyType::StarM];
    let topology = make_star_topology(&mut system, &sector(types), 2, &mut Random::new(&[2]));

    let root = topology.root;
    assert_eq!(system[root].body_type, BodyType::GravPoint);
    assert_eq!(system[root].name, "Test A,B");
    assert_eq!(system.children_of(root), topology.stars.as_slice());

    let (a, b) = (topology.stars[0], topology.stars[1]);
    assert_eq!(system[a].body_type, BodyType::StarG);
    assert_eq!(system[b].body_type, BodyType::StarM);
    assert_eq!(system[a].name, "Test A");
    assert_eq!(system[b].name, "Test B");
    assert_eq!(system[root].mass, system[a].mass + system[b].mass);
    assert_eq!(system[a].orb_min, system[b].orb_min);
    assert!(system[a].orb_min >= pair_separation(&system, a, b));
    assert_eq!(topology.binaries, vec![root]);
    assert_eq!(system.num_stars, 2);
}

#[test]
fn test_triple_topology() {
    let mut system = empty_system();
    let topology = make_star_topology(&mut system, &sector(Vec::new()), 3, &mut Random::new(&[3]));

    let root = topology.root;
    let children = system.children_of(root).to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(system[children[0]].body_type, BodyType::GravPoint);
    assert_eq!(system[children[1]].super_type(), BodySuperType::Star);
    assert_eq!(system[children[1]].name, "Test C");
    assert_eq!(topology.stars.len(), 3);
    assert_eq!(topology.binaries, vec![children[0]]);
    assert_eq!(system.stars().len(), 3);

    // A lone C has no orbit of its own until the outer pair is placed
    let star_a = topology.stars[0];
    let min_dist = system[star_a].orb_max * 4;
    assert!(system[children[0]].orb_min >= min_dist);
}

#[test]
fn test_quadruple_topology() {
    let mut system = empty_system();
    let topology = make_star_topology(&mut system, &sector(Vec::new()), 4, &mut Random::new(&[4]));

    let root = topology.root;
    let pairs = system.children_of(root).to_vec();
    assert_eq!(pairs.len(), 2);
    for pair in &pairs {
        assert_eq!(system[*pair].body_type, BodyType::GravPoint);
        let stars = system.children_of(*pair);
        assert_eq!(stars.len(), 2);
        assert!(stars.iter().all(|s| system[*s].super_type() == BodySuperType::Star));
    }
    assert_eq!(topology.binaries, pairs);
    assert_eq!(system.num_stars, 4);
    assert_eq!(system[pairs[1]].name, "Test C,D");
}
