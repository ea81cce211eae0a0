use stellar::BodyType;

use crate::error::SysgenError;
use crate::path::SystemPath;
use crate::sector::{SectorSource, SectorSystem, SectorTable};

#[test]
fn test_lookup_ignores_body_index() {
    let mut table = SectorTable::new();
    table.insert(
        SystemPath::new(0, 0, 0, 0),
        SectorSystem::new("Alpha", 7, vec![BodyType::StarG]),
    );
    let found = table.system(&SystemPath::new(0, 0, 0, 0).with_body(3)).unwrap();
    assert_eq!(found.name, "Alpha");
    assert_eq!(found.num_stars, 1);
    assert!(found.explored);
    assert!(table.system(&SystemPath::new(0, 0, 0, 1)).is_none());
}

#[test]
fn test_table_from_json() {
    let json = r#"[
        { "path": { "sectorX": 0, "sectorY": 0, "sectorZ": 0, "systemIndex": 0 },
          "system": { "name": "Quad", "seed": 99, "numStars": 4,
                      "starTypes": ["StarG", "StarK", "StarM", "StarM"],
                      "explored": false, "faction": "Free Worlds" } }
    ]"#;
    let table = SectorTable::from_json(json).unwrap();
    assert_eq!(table.len(), 1);
    let quad = table.system(&SystemPath::new(0, 0, 0, 0)).unwrap();
    assert_eq!(quad.num_stars, 4);
    assert!(!quad.explored);
    assert_eq!(quad.faction.as_deref(), Some("Free Worlds"));
}

#[test]
fn test_bad_json_is_an_error() {
    assert!(matches!(
        SectorTable::from_json("{ not json"),
        Err(SysgenError::Json(_))
    ));
}
