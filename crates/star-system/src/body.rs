//! One node of a generated star system.

use std::fmt;

use serde::{Deserialize, Serialize};
use stellar::{BodySuperType, BodyType};
use units::constants::{EARTH_MASS, EARTH_RADIUS, G, SOL_MASS, SOL_RADIUS};
use units::{Fixed, SUN_MASS_TO_EARTH_MASS};

use crate::orbit::Orbit;
use crate::path::SystemPath;

/// Handle of a body inside its system's arena. Ids follow creation order
/// and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Planetary ring system, radii in planet radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingStyle {
    pub min_radius: Fixed,
    pub max_radius: Fixed,
    pub base_color: Color,
}

/// A star, planet, moon, station, cloud or barycentre.
///
/// Units depend on the super-type: stars and grav points measure mass in
/// solar masses and radius in solar radii, everything else in earth masses
/// and earth radii. Distances are in AU, angles in radians, periods in days.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemBody {
    pub(crate) id: BodyId,
    pub(crate) path: SystemPath,
    pub(crate) parent: Option<BodyId>,
    pub(crate) children: Vec<BodyId>,

    pub name: String,
    pub body_type: BodyType,
    pub seed: u32,
    pub is_custom_body: bool,

    // Physical
    pub radius: Fixed,
    pub aspect_ratio: Fixed,
    pub mass: Fixed,
    /// kelvin
    pub average_temp: i32,
    pub rotation_period: Fixed,
    pub rotational_phase_at_start: Fixed,
    pub axial_tilt: Fixed,

    // Orbital
    pub semi_major_axis: Fixed,
    pub eccentricity: Fixed,
    pub orb_min: Fixed,
    pub orb_max: Fixed,
    pub inclination: Fixed,
    pub orbital_offset: Fixed,
    pub orbital_phase_at_start: Fixed,
    pub orbit: Orbit,

    // Composition
    pub metallicity: Fixed,
    pub volatile_gas: Fixed,
    pub volatile_liquid: Fixed,
    pub volatile_ices: Fixed,
    pub volcanicity: Fixed,
    pub atmos_oxidizing: Fixed,
    pub life: Fixed,

    // Economy
    pub population: Fixed,
    pub agricultural: Fixed,

    // Appearance
    pub rings: Option<RingStyle>,
    pub atmos_color: Color,
    pub atmos_density: f64,
}

impl SystemBody {
    pub(crate) fn new(id: BodyId, path: SystemPath, body_type: BodyType) -> Self {
        Self {
            id,
            path,
            parent: None,
            children: Vec::new(),
            name: String::new(),
            body_type,
            seed: 0,
            is_custom_body: false,
            radius: Fixed::ZERO,
            aspect_ratio: Fixed::ONE,
            mass: Fixed::ZERO,
            average_temp: 0,
            rotation_period: Fixed::ZERO,
            rotational_phase_at_start: Fixed::ZERO,
            axial_tilt: Fixed::ZERO,
            semi_major_axis: Fixed::ZERO,
            eccentricity: Fixed::ZERO,
            orb_min: Fixed::ZERO,
            orb_max: Fixed::ZERO,
            inclination: Fixed::ZERO,
            orbital_offset: Fixed::ZERO,
            orbital_phase_at_start: Fixed::ZERO,
            orbit: Orbit::default(),
            metallicity: Fixed::ZERO,
            volatile_gas: Fixed::ZERO,
            volatile_liquid: Fixed::ZERO,
            volatile_ices: Fixed::ZERO,
            volcanicity: Fixed::ZERO,
            atmos_oxidizing: Fixed::ZERO,
            life: Fixed::ZERO,
            population: Fixed::ZERO,
            agricultural: Fixed::ZERO,
            rings: None,
            atmos_color: Color::TRANSPARENT,
            atmos_density: 0.0,
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn path(&self) -> SystemPath {
        self.path
    }

    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    pub fn children(&self) -> &[BodyId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn super_type(&self) -> BodySuperType {
        self.body_type.super_type()
    }

    /// True for grav points and stars, whose mass and radius are in solar units.
    pub fn is_star_like(&self) -> bool {
        self.super_type() <= BodySuperType::Star
    }

    pub fn mass_in_earths(&self) -> Fixed {
        if self.is_star_like() {
            self.mass * SUN_MASS_TO_EARTH_MASS
        } else {
            self.mass
        }
    }

    pub fn mass_in_solar(&self) -> Fixed {
        if self.is_star_like() {
            self.mass
        } else {
            self.mass / SUN_MASS_TO_EARTH_MASS
        }
    }

    /// Polar radius in metres.
    pub fn radius_m(&self) -> f64 {
        if self.is_star_like() {
            let aspect = self.aspect_ratio.to_f64();
            let aspect = if aspect > 0.0 { aspect } else { 1.0 };
            self.radius.to_f64() / aspect * SOL_RADIUS
        } else {
            self.radius.to_f64() * EARTH_RADIUS
        }
    }

    /// Mass in kilograms.
    pub fn mass_kg(&self) -> f64 {
        if self.is_star_like() {
            self.mass.to_f64() * SOL_MASS
        } else {
            self.mass.to_f64() * EARTH_MASS
        }
    }

    /// Surface gravity in m/s², zero for bodies without a radius.
    pub fn surface_gravity(&self) -> f64 {
        let r = self.radius_m();
        if r > 0.0 {
            G * self.mass_kg() / (r * r)
        } else {
            0.0
        }
    }

    pub fn has_atmosphere(&self) -> bool {
        self.volatile_gas > Fixed::from_ratio(1, 100)
    }

    /// Only gas giants can be skimmed for fuel.
    pub fn is_scoopable(&self) -> bool {
        self.super_type() == BodySuperType::GasGiant
    }

    pub fn has_rings(&self) -> bool {
        self.rings.is_some()
    }
}
