use stellar::BodyType;
use units::Fixed;

use crate::body::{BodyId, SystemBody};
use crate::description::astro_description;
use crate::path::SystemPath;

fn body(body_type: BodyType) -> SystemBody {
    SystemBody::new(BodyId(0), SystemPath::new(0, 0, 0, 0), body_type)
}

#[test]
fn test_star_description() {
    assert_eq!(astro_description(&body(BodyType::StarG)), "Type 'G' yellow star");
}

#[test]
fn test_gas_giant_bands() {
    let mut giant = body(BodyType::GasGiant);
    giant.mass = Fixed::from_int(900);
    assert_eq!(giant.astro_description(), "Very large gas giant");
    giant.mass = Fixed::from_int(50);
    assert_eq!(giant.astro_description(), "Small gas giant");
}

#[test]
fn test_earthlike_description() {
    let mut world = body(BodyType::Terrestrial);
    world.mass = Fixed::ONE;
    world.average_temp = 288;
    world.volatile_liquid = Fixed::from_ratio(1, 2);
    world.volatile_gas = Fixed::ONE;
    world.atmos_oxidizing = Fixed::from_ratio(99, 100);
    world.life = Fixed::from_ratio(9, 10);
    assert_eq!(
        world.astro_description(),
        "Planet containing liquid water with a Oxygen atmosphere and a highly complex ecosystem."
    );
}

#[test]
fn test_barren_description() {
    let mut world = body(BodyType::Terrestrial);
    world.mass = Fixed::from_ratio(1, 20);
    world.volcanicity = Fixed::from_ratio(9, 10);
    assert_eq!(
        world.astro_description(),
        "Tiny, highly volcanic rocky planet with no significant atmosphere."
    );
}
