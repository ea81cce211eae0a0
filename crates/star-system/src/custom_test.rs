use stellar::BodyType;
use units::Fixed;

use crate::custom::{CustomSystem, CustomSystemBody, RingRequest};
use crate::polit::GovType;

const SOL_JSON: &str = r#"{
    "name": "Sol",
    "numStars": 1,
    "shortDesc": "The historical home of humanity",
    "govType": "Democracy",
    "bodies": {
        "name": "Sol",
        "bodyType": "StarG",
        "seed": 1,
        "radius": 1,
        "mass": 1,
        "averageTemp": 5700,
        "orbitalOffset": 0,
        "children": [
            {
                "name": "Saturn",
                "bodyType": "GasGiant",
                "seed": 6,
                "radius": 9.45,
                "mass": 95.152,
                "semiMajorAxis": [9537, 1000],
                "orbitalOffset": 0,
                "rings": { "kind": "custom", "minRadius": 1.2, "maxRadius": 2.3,
                           "color": { "r": 200, "g": 190, "b": 160, "a": 255 } }
            }
        ]
    }
}"#;

#[test]
fn test_parse_custom_system() {
    let sol: CustomSystem = serde_json::from_str(SOL_JSON).unwrap();
    assert_eq!(sol.num_stars, 1);
    assert_eq!(sol.gov_type, Some(GovType::Democracy));
    assert!(!sol.is_random());

    let root = sol.bodies.as_ref().unwrap();
    assert_eq!(root.body_type, BodyType::StarG);
    assert_eq!(root.aspect_ratio, Fixed::ONE, "aspect ratio defaults to 1");
    assert_eq!(root.rings, RingRequest::Random);

    let saturn = &root.children[0];
    assert_eq!(saturn.semi_major_axis, Fixed::from_ratio(9537, 1000));
    assert!(matches!(saturn.rings, RingRequest::Custom { .. }));
    assert!(root.is_fully_specified());
}

#[test]
fn test_missing_seed_is_not_fully_specified() {
    let mut root = CustomSystemBody::new("Star", BodyType::StarK);
    root.seed = Some(3);
    root.orbital_offset = Some(Fixed::ZERO);
    assert!(root.is_fully_specified());
    root.children.push(CustomSystemBody::new("Rock", BodyType::Terrestrial));
    assert!(!root.is_fully_specified());
}

#[test]
fn test_random_custom_system() {
    let json = r#"{ "name": "Barnard's Star", "numStars": 1, "shortDesc": "Quiet red dwarf" }"#;
    let custom: CustomSystem = serde_json::from_str(json).unwrap();
    assert!(custom.is_random());
    assert_eq!(custom.long_desc, "");
}
