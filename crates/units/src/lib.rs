//! Deterministic numbers and physical constants.

pub mod constants;
pub mod fixed;

#[cfg(test)]
mod fixed_test;

pub use constants::{
    AU, AU_EARTH_RADIUS, AU_SOL_RADIUS, CELSIUS, DEFAULT_UNIVERSE_SEED, EARTH_MASS, EARTH_RADIUS,
    G, SOL_MASS, SOL_RADIUS, SUN_MASS_TO_EARTH_MASS,
};
pub use fixed::{isqrt, Fixed, Fixed48, FixedF};
