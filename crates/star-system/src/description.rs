//! Catalogue descriptions of bodies.

use stellar::BodyType;
use units::Fixed;

use crate::body::SystemBody;

fn ratio(num: i64, den: i64) -> Fixed {
    Fixed::from_ratio(num, den)
}

fn gas_giant_description(mass: Fixed) -> &'static str {
    if mass > Fixed::from_int(800) {
        "Very large gas giant"
    } else if mass > Fixed::from_int(300) {
        "Large gas giant"
    } else if mass > Fixed::from_int(80) {
        "Medium gas giant"
    } else {
        "Small gas giant"
    }
}

fn atmosphere_composition(oxidizing: Fixed) -> &'static str {
    if oxidizing > ratio(95, 100) {
        "Oxygen"
    } else if oxidizing > ratio(7, 10) {
        "Carbon Dioxide"
    } else if oxidizing > ratio(65, 100) {
        "Carbon Monoxide"
    } else if oxidizing > ratio(55, 100) {
        "Methane"
    } else if oxidizing > ratio(3, 10) {
        "Hydrogen"
    } else if oxidizing > ratio(2, 10) {
        "Helium"
    } else if oxidizing > ratio(15, 100) {
        "Argon"
    } else if oxidizing > ratio(1, 10) {
        "Sulfuric"
    } else {
        "Nitrogen"
    }
}

fn terrestrial_description(body: &SystemBody) -> String {
    let mut s = String::new();

    let size = if body.mass > Fixed::from_int(2) {
        "Massive"
    } else if body.mass > ratio(3, 2) {
        "Large"
    } else if body.mass < ratio(1, 10) {
        "Tiny"
    } else if body.mass < ratio(1, 5) {
        "Small"
    } else {
        ""
    };
    s.push_str(size);

    if body.volcanicity > ratio(7, 10) {
        s.push_str(if s.is_empty() { "Highly volcanic" } else { ", highly volcanic" });
    }

    let cold = body.average_temp < 250;
    let surface = if body.volatile_ices + body.volatile_liquid > ratio(4, 5) {
        if cold {
            "ice world"
        } else if body.volatile_ices > body.volatile_liquid {
            "rocky planet"
        } else {
            "oceanic world"
        }
    } else if body.volatile_liquid > ratio(2, 5) {
        if body.average_temp > 250 {
            "planet containing liquid water"
        } else {
            "planet with some ice"
        }
    } else if body.volatile_liquid > ratio(1, 5) {
        "rocky planet containing some liquids,"
    } else {
        "rocky planet"
    };
    if s.is_empty() {
        let mut chars = surface.chars();
        if let Some(first) = chars.next() {
            s.extend(first.to_uppercase());
            s.push_str(chars.as_str());
        }
    } else {
        s.push(' ');
        s.push_str(surface);
    }

    if body.volatile_gas < ratio(1, 100) {
        s.push_str(" with no significant atmosphere");
    } else {
        let thickness = if body.volatile_gas < ratio(1, 10) {
            "tenuous "
        } else if body.volatile_gas < ratio(1, 5) {
            "thin "
        } else if body.volatile_gas < Fixed::from_int(2) {
            ""
        } else if body.volatile_gas < Fixed::from_int(4) {
            "thick "
        } else {
            "very dense "
        };
        s.push_str(&format!(
            " with a {}{} atmosphere",
            thickness,
            atmosphere_composition(body.atmos_oxidizing)
        ));
    }

    if body.life > ratio(1, 2) {
        s.push_str(" and a highly complex ecosystem.");
    } else if body.life > ratio(1, 10) {
        s.push_str(" and indigenous plant life.");
    } else if body.life > Fixed::ZERO {
        s.push_str(" and indigenous microbial life.");
    } else {
        s.push('.');
    }
    s
}

/// One-line catalogue description of a body.
pub fn astro_description(body: &SystemBody) -> String {
    if let Some(text) = body.body_type.star_description() {
        return text.to_string();
    }
    match body.body_type {
        BodyType::GasGiant => gas_giant_description(body.mass).to_string(),
        BodyType::Asteroid => "Asteroid".to_string(),
        BodyType::Terrestrial => terrestrial_description(body),
        BodyType::OrbitalStarport => "Orbital starport".to_string(),
        BodyType::SurfaceStarport => "Starport".to_string(),
        BodyType::HyperspaceCloud => "Permanent hyperspace cloud".to_string(),
        _ => "Gravitational point".to_string(),
    }
}

impl SystemBody {
    pub fn astro_description(&self) -> String {
        astro_description(self)
    }
}
