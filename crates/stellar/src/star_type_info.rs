//! Per-type star tables.
//!
//! Each table is indexed by [`BodyType::index`] and covers the grav point
//! plus every star kind (indices `0..=36`). Lookups for other kinds return
//! `None`.
//!
//! # References
//!
//! - Mass and radius ranges are percentages of the solar value; temperature
//!   ranges are in kelvin.
//! - Luminosities are in solar units and only used for presentation.

use serde::{Deserialize, Serialize};
use units::Fixed;

use crate::body_type::BodyType;

const STAR_TABLE_LEN: usize = BodyType::STAR_MAX as usize + 1;

/// Generation ranges for one star kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarTypeInfo {
    /// Mass range, hundredths of a solar mass (inclusive)
    pub mass: [i32; 2],
    /// Radius range, hundredths of a solar radius (inclusive)
    pub radius: [i32; 2],
    pub temp_min: i32,
    pub temp_max: i32,
}

const fn info(mass: [i32; 2], radius: [i32; 2], temp_min: i32, temp_max: i32) -> StarTypeInfo {
    StarTypeInfo {
        mass,
        radius,
        temp_min,
        temp_max,
    }
}

static STAR_TYPE_INFO: [StarTypeInfo; STAR_TABLE_LEN] = [
    info([0, 0], [0, 0], 0, 0),                 // grav point
    info([2, 8], [10, 30], 1000, 2000),         // brown dwarf
    info([20, 100], [1, 2], 4000, 40000),       // white dwarf
    info([10, 47], [30, 60], 2000, 3500),       // M
    info([50, 78], [60, 100], 3500, 5000),      // K
    info([80, 110], [80, 120], 5000, 6000),     // G
    info([115, 170], [110, 150], 6000, 7500),   // F
    info([180, 320], [120, 220], 7500, 10000),  // A
    info([200, 300], [120, 290], 10000, 30000), // B
    info([300, 400], [200, 310], 30000, 60000), // O
    info([60, 357], [2000, 5000], 2500, 3500),
    info([125, 500], [1500, 3000], 3500, 5000),
    info([200, 800], [1000, 2000], 5000, 6000),
    info([250, 900], [800, 1500], 6000, 7500),
    info([400, 1000], [600, 1000], 7500, 10000),
    info([500, 1000], [600, 1000], 10000, 30000),
    info([600, 1200], [600, 1000], 30000, 60000),
    info([1050, 5000], [7000, 15000], 2500, 3500),
    info([1100, 5000], [5000, 9000], 3500, 5000),
    info([1200, 5000], [4000, 8000], 5000, 6000),
    info([1500, 6000], [3500, 7000], 6000, 7500),
    info([2000, 8000], [3000, 6000], 7500, 10000),
    info([3000, 9000], [2500, 5000], 10000, 30000),
    info([5000, 10000], [2000, 4000], 30000, 60000),
    info([5000, 15000], [20000, 40000], 2500, 3500),
    info([5000, 17000], [17000, 25000], 3500, 5000),
    info([5000, 18000], [14000, 20000], 5000, 6000),
    info([5000, 19000], [12000, 17500], 6000, 7500),
    info([5000, 20000], [10000, 15000], 7500, 10000),
    info([5000, 23000], [6000, 10000], 10000, 30000),
    info([10000, 30000], [4000, 7000], 30000, 60000),
    info([2000, 5000], [2500, 5000], 25000, 35000),     // M Wolf-Rayet
    info([2000, 7500], [2500, 5000], 35000, 45000),     // B Wolf-Rayet
    info([2000, 10000], [2500, 5000], 45000, 60000),    // O Wolf-Rayet
    info([20, 2000], [0, 0], 10, 24),                   // stellar black hole
    info([900000, 1000000], [100, 500], 1, 10),         // intermediate-mass black hole
    info([2000000, 5000000], [10000, 20000], 10, 24),   // super-massive black hole
];

/// Display colour per star kind, RGB.
static STAR_COLORS: [[u8; 3]; STAR_TABLE_LEN] = [
    [0, 0, 0],
    [128, 0, 0],
    [102, 102, 204],
    [255, 51, 0],
    [255, 153, 26],
    [255, 255, 102],
    [255, 255, 204],
    [255, 255, 255],
    [178, 178, 255],
    [255, 178, 255],
    [255, 51, 0],
    [255, 153, 26],
    [255, 255, 102],
    [255, 255, 204],
    [255, 255, 255],
    [178, 178, 255],
    [255, 178, 255],
    [255, 51, 0],
    [255, 153, 26],
    [255, 255, 102],
    [255, 255, 204],
    [255, 255, 255],
    [178, 178, 255],
    [255, 178, 255],
    [255, 51, 0],
    [255, 153, 26],
    [255, 255, 102],
    [255, 255, 204],
    [255, 255, 255],
    [178, 178, 255],
    [255, 178, 255],
    [255, 51, 0],
    [178, 178, 255],
    [255, 178, 255],
    [76, 178, 76],
    [51, 230, 51],
    [0, 255, 0],
];

static STAR_LUMINOSITIES: [f64; STAR_TABLE_LEN] = [
    0.0, 0.0003, 0.1, 0.08, 0.38, 1.2, 5.1, 24.0, 100.0, 200.0, // dwarfs and main sequence
    1000.0, 2000.0, 4000.0, 6000.0, 8000.0, 9000.0, 12000.0, // giants
    12000.0, 14000.0, 18000.0, 24000.0, 30000.0, 50000.0, 100000.0, // super-giants
    125000.0, 150000.0, 175000.0, 200000.0, 200000.0, 200000.0, 200000.0, // hyper-giants
    50000.0, 100000.0, 200000.0, // Wolf-Rayet
    0.0003, 0.00003, 0.000003, // black holes
];

/// Relative marker size for map views.
static STAR_SCALE: [f32; STAR_TABLE_LEN] = [
    0.0, 0.6, 0.5, 0.7, 0.8, 0.8, 0.9, 1.0, 1.1, 1.1, //
    1.3, 1.2, 1.2, 1.2, 1.1, 1.1, 1.2, //
    1.8, 1.6, 1.5, 1.5, 1.4, 1.3, 1.3, //
    2.5, 2.2, 2.2, 2.1, 2.1, 2.0, 1.9, //
    1.1, 1.3, 1.6, //
    1.0, 2.5, 4.0,
];

const fn ratio(num: i64, den: i64) -> Fixed {
    Fixed::from_ratio_const(num, den)
}

/// Metallicity of material orbiting each star kind. Black holes are rich
/// so that anything orbiting them makes a mining prospect.
static STAR_METALLICITIES: [Fixed; STAR_TABLE_LEN] = [
    ratio(1, 1), // grav point
    ratio(9, 10),
    ratio(5, 10),
    ratio(7, 10),
    ratio(6, 10),
    ratio(5, 10),
    ratio(4, 10),
    ratio(3, 10),
    ratio(2, 10),
    ratio(1, 10),
    ratio(8, 10),
    ratio(65, 100),
    ratio(55, 100),
    ratio(4, 10),
    ratio(3, 10),
    ratio(2, 10),
    ratio(1, 10),
    ratio(9, 10),
    ratio(7, 10),
    ratio(6, 10),
    ratio(4, 10),
    ratio(3, 10),
    ratio(2, 10),
    ratio(1, 10),
    ratio(1, 1),
    ratio(7, 10),
    ratio(6, 10),
    ratio(4, 10),
    ratio(3, 10),
    ratio(2, 10),
    ratio(1, 10),
    ratio(1, 1),
    ratio(8, 10),
    ratio(6, 10),
    ratio(1, 1),
    ratio(1, 1),
    ratio(1, 1),
];

fn table_index(body_type: BodyType) -> Option<usize> {
    body_type
        .is_star_or_grav_point()
        .then(|| body_type.index())
}

pub fn star_type_info(body_type: BodyType) -> Option<&'static StarTypeInfo> {
    table_index(body_type).map(|i| &STAR_TYPE_INFO[i])
}

pub fn star_color(body_type: BodyType) -> Option<[u8; 3]> {
    table_index(body_type).map(|i| STAR_COLORS[i])
}

pub fn star_luminosity(body_type: BodyType) -> Option<f64> {
    table_index(body_type).map(|i| STAR_LUMINOSITIES[i])
}

pub fn star_scale(body_type: BodyType) -> Option<f32> {
    table_index(body_type).map(|i| STAR_SCALE[i])
}

pub fn star_metallicity(body_type: BodyType) -> Option<Fixed> {
    table_index(body_type).map(|i| STAR_METALLICITIES[i])
}
