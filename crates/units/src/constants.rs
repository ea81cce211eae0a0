//! Physical constants and unit conversions shared by the generator.
//!
//! The `f64` constants are SI values for presentation-side conversions. The
//! fixed-point constants are the ones generation arithmetic uses.

use crate::fixed::Fixed;

// ============================================================================
// SI constants
// ============================================================================

/// Astronomical unit in metres.
pub const AU: f64 = 149_598_000_000.0;

/// Solar radius in metres.
pub const SOL_RADIUS: f64 = 6.955e8;

/// Earth equatorial radius in metres.
pub const EARTH_RADIUS: f64 = 6_378_135.0;

/// Solar mass in kilograms.
pub const SOL_MASS: f64 = 1.98892e30;

/// Earth mass in kilograms.
pub const EARTH_MASS: f64 = 5.9742e24;

/// Gravitational constant (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.67428e-11;

// ============================================================================
// Fixed-point generation constants
// ============================================================================

/// One solar radius expressed in AU.
pub const AU_SOL_RADIUS: Fixed = Fixed::from_ratio_const(305, 65536);

/// One earth radius expressed in AU.
pub const AU_EARTH_RADIUS: Fixed = Fixed::from_ratio_const(3, 65536);

/// Earth masses per solar mass.
pub const SUN_MASS_TO_EARTH_MASS: i64 = 332_998;

/// Water freezing point, integer kelvin.
pub const CELSIUS: i32 = 273;

/// Universe-wide seed mixed into every system stream unless configured.
pub const DEFAULT_UNIVERSE_SEED: u32 = 0xabcd_1234;
