use crate::body_type::{BodySuperType, BodyType};

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_indices_round_trip() {
    for (i, t) in BodyType::ALL.iter().enumerate() {
        assert_eq!(t.index(), i);
        assert_eq!(BodyType::from_index(i), Some(*t));
    }
    assert_eq!(BodyType::from_index(43), None);
}

#[test]
fn test_star_range() {
    assert!(!BodyType::GravPoint.is_star());
    assert!(BodyType::GravPoint.is_star_or_grav_point());
    assert!(BodyType::BrownDwarf.is_star());
    assert!(BodyType::StarSMBH.is_star());
    assert!(!BodyType::GasGiant.is_star());
    assert!(!BodyType::GasGiant.is_star_or_grav_point());
}

#[test]
fn test_super_types() {
    assert_eq!(BodyType::GravPoint.super_type(), BodySuperType::None);
    assert_eq!(BodyType::WhiteDwarf.super_type(), BodySuperType::Star);
    assert_eq!(BodyType::StarIMBH.super_type(), BodySuperType::Star);
    assert_eq!(BodyType::Terrestrial.super_type(), BodySuperType::RockyPlanet);
    assert_eq!(BodyType::Asteroid.super_type(), BodySuperType::RockyPlanet);
    assert_eq!(BodyType::GasGiant.super_type(), BodySuperType::GasGiant);
    assert_eq!(BodyType::SurfaceStarport.super_type(), BodySuperType::Starport);
    assert_eq!(
        BodyType::HyperspaceCloud.super_type(),
        BodySuperType::HyperspaceCloud
    );
}

#[test]
fn test_super_type_ordering() {
    // "Star or below" checks rely on this ordering
    assert!(BodySuperType::None < BodySuperType::Star);
    assert!(BodySuperType::Star < BodySuperType::RockyPlanet);
    assert!(BodySuperType::RockyPlanet < BodySuperType::GasGiant);
}

#[test]
fn test_rapid_rotators() {
    assert!(BodyType::StarO.is_rapid_rotator());
    assert!(BodyType::StarBWf.is_rapid_rotator());
    assert!(!BodyType::StarG.is_rapid_rotator());
    assert!(!BodyType::StarMWf.is_rapid_rotator());
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display() {
    assert_eq!(format!("{}", BodyType::StarG), "G");
    assert_eq!(format!("{}", BodyType::StarKGiant), "K giant");
    assert_eq!(format!("{}", BodyType::HyperspaceCloud), "Hyperspace cloud");
    assert_eq!(format!("{}", BodySuperType::RockyPlanet), "Rocky planet");
}

#[test]
fn test_star_descriptions_cover_all_stars() {
    for t in BodyType::ALL {
        assert_eq!(
            t.star_description().is_some(),
            t.is_star(),
            "description presence for {}",
            t
        );
    }
}
