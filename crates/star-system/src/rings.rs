//! Planetary rings.

use stellar::BodyType;
use units::Fixed;

use crate::body::{Color, RingStyle, SystemBody};
use crate::random::Random;

/// Offset mixed into a body's seed for its ring stream.
const RING_SEED_OFFSET: u32 = 965_467;

const RANDOM_RING_COLORS: [[u8; 4]; 5] = [
    [156, 122, 98, 217],  // jupiter-like
    [156, 122, 98, 217],  // saturn-like
    [181, 173, 174, 217], // neptune-like
    [130, 122, 98, 217],  // uranus-like
    [207, 122, 98, 217],  // brown dwarf-like
];

fn jitter(base: u8, rng: &mut Random, min: i32, max: i32) -> u8 {
    (base as i32 + rng.int32_range(min, max)).clamp(0, 255) as u8
}

/// Gives gas giants rings: always when `force`, otherwise with even odds.
///
/// Radii follow the rigid-satellite Roche limit `d = R (2 ρM / ρm)^(1/3)`
/// with ρM = 1100 kg/m³ and ρm = 500 kg/m³, which puts the outer edge at
/// about 1.686 planet radii.
pub fn pick_rings(body: &mut SystemBody, force: bool) {
    body.rings = None;
    if body.body_type != BodyType::GasGiant {
        return;
    }

    let mut rng = Random::new(&[body.seed.wrapping_add(RING_SEED_OFFSET)]);
    let has_rings = rng.fixed() < Fixed::from_ratio(1, 2);
    if !(force || has_rings) {
        return;
    }

    let base = RANDOM_RING_COLORS[rng.int32_below(RANDOM_RING_COLORS.len() as u32) as usize];
    let base_color = Color {
        r: jitter(base[0], &mut rng, -20, 20),
        g: jitter(base[1], &mut rng, -20, 20),
        b: jitter(base[2], &mut rng, -20, 10),
        a: jitter(base[3], &mut rng, -5, 5),
    };

    let inner_min = Fixed::from_ratio(110, 100);
    let inner_max = Fixed::from_ratio(145, 100);
    let outer_min = Fixed::from_ratio(150, 100);
    let outer_max = Fixed::from_ratio(168_642, 100_000);

    body.rings = Some(RingStyle {
        min_radius: inner_min + (inner_max - inner_min) * rng.fixed(),
        max_radius: outer_min + (outer_max - outer_min) * rng.fixed(),
        base_color,
    });
}
