//! Atmosphere tint and density.
//!
//! The colour is a presentation hint. Terrestrial worlds are banded by
//! their oxidizing level, from oxygen-rich down to nitrogen.

use stellar::BodyType;

use crate::body::{Color, SystemBody};

fn channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}

/// Atmosphere colour for an oxidizing level in `[0, 1]`.
pub fn terrestrial_atmosphere_color(oxidizing: f64) -> Color {
    let atmo = oxidizing;
    let (r, g, b) = if atmo > 0.95 {
        // O2
        (
            1.0 + (0.95 - atmo) * 15.0,
            0.95 + (0.95 - atmo) * 10.0,
            atmo.powi(5),
        )
    } else if atmo > 0.7 {
        // CO2
        (atmo + 0.05, 1.0 + (0.7 - atmo), 0.8)
    } else if atmo > 0.65 {
        // CO
        (1.0 + (0.65 - atmo), 0.8, atmo + 0.25)
    } else if atmo > 0.55 {
        // CH4
        (1.0 + (0.55 - atmo) * 5.0, 0.35 - (0.55 - atmo) * 5.0, 0.4)
    } else if atmo > 0.2 {
        // H, He
        (1.0, 1.0, 1.0)
    } else if atmo > 0.15 {
        // Ar
        (0.5 - (0.15 - atmo) * 5.0, 0.0, 0.5 + (0.15 - atmo) * 5.0)
    } else if atmo > 0.1 {
        // S
        (0.8 - (0.1 - atmo) * 4.0, 1.0, 0.5 - (0.1 - atmo) * 10.0)
    } else {
        // N
        (1.0, 1.0, 1.0)
    };
    Color::new(channel(r), channel(g), channel(b), 255)
}

/// Sets `atmos_color` and `atmos_density` from the body's kind and
/// composition.
pub fn pick_atmosphere(body: &mut SystemBody) {
    match body.body_type {
        BodyType::GasGiant => {
            body.atmos_color = Color::new(64, 64, 64, 3);
            body.atmos_density = 14.0;
        }
        BodyType::Asteroid => {
            body.atmos_color = Color::TRANSPARENT;
            body.atmos_density = 0.0;
        }
        _ => {
            body.atmos_color = if body.volatile_gas.to_f64() > 0.001 {
                terrestrial_atmosphere_color(body.atmos_oxidizing.to_f64())
            } else {
                Color::TRANSPARENT
            };
            body.atmos_density = body.volatile_gas.to_f64();
        }
    }
}
