//! Keplerian orbits for presentation.
//!
//! Generation stores orbital elements as fixed-point values on each body.
//! An [`Orbit`] is the floating-point view consumers use to place a body in
//! space: SI units, a 3x3 orientation matrix for the orbital plane, and a
//! Kepler solver.
//!
//! # References
//!
//! - Murray & Dermott (1999), *Solar System Dynamics*, ch. 2

use std::f64::consts::TAU;

use nalgebra::{Matrix3, Rotation3, Vector3};
use units::constants::G;

pub fn rotate_x(angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle).into_inner()
}

pub fn rotate_y(angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle).into_inner()
}

pub fn rotate_z(angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle).into_inner()
}

/// An elliptical orbit around a primary or a shared barycentre.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    /// metres
    semi_major_axis: f64,
    eccentricity: f64,
    /// seconds; zero for degenerate orbits
    period: f64,
    /// radians of mean anomaly at t = 0
    phase_at_start: f64,
    plane: Matrix3<f64>,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            semi_major_axis: 0.0,
            eccentricity: 0.0,
            period: 0.0,
            phase_at_start: 0.0,
            plane: Matrix3::identity(),
        }
    }
}

impl Orbit {
    /// A body of negligible mass circling a primary.
    ///
    /// # Arguments
    ///
    /// * `semi_major_axis` - metres
    /// * `central_mass` - kilograms
    /// * `eccentricity` - in `[0, 1)`
    pub fn around_primary(semi_major_axis: f64, central_mass: f64, eccentricity: f64) -> Self {
        let period = if semi_major_axis > 0.0 && central_mass > 0.0 {
            TAU * (semi_major_axis.powi(3) / (G * central_mass)).sqrt()
        } else {
            0.0
        };
        Self {
            semi_major_axis,
            eccentricity,
            period,
            ..Self::default()
        }
    }

    /// One member of a pair circling the shared barycentre. `semi_major_axis`
    /// is this body's own distance from the barycentre; the period follows
    /// from the relative orbit of the pair.
    pub fn around_barycentre(
        semi_major_axis: f64,
        total_mass: f64,
        body_mass: f64,
        eccentricity: f64,
    ) -> Self {
        let other_mass = total_mass - body_mass;
        let period = if semi_major_axis > 0.0 && other_mass > 0.0 {
            let relative = semi_major_axis * total_mass / other_mass;
            TAU * (relative.powi(3) / (G * total_mass)).sqrt()
        } else {
            0.0
        };
        Self {
            semi_major_axis,
            eccentricity,
            period,
            ..Self::default()
        }
    }

    pub fn with_plane(mut self, plane: Matrix3<f64>) -> Self {
        self.plane = plane;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase_at_start = phase;
        self
    }

    pub fn set_plane(&mut self, plane: Matrix3<f64>) {
        self.plane = plane;
    }

    pub fn set_phase(&mut self, phase: f64) {
        self.phase_at_start = phase;
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn phase_at_start(&self) -> f64 {
        self.phase_at_start
    }

    pub fn plane(&self) -> &Matrix3<f64> {
        &self.plane
    }

    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Eccentric anomaly for a mean anomaly, by Newton iteration on
    /// Kepler's equation `E - e sin E = M`.
    fn eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let mut ea = if e > 0.8 { std::f64::consts::PI } else { mean_anomaly };
        for _ in 0..16 {
            let f = ea - e * ea.sin() - mean_anomaly;
            let df = 1.0 - e * ea.cos();
            let step = f / df;
            ea -= step;
            if step.abs() < 1e-12 {
                break;
            }
        }
        ea
    }

    /// Offset from the primary (or barycentre) at time `t` seconds.
    pub fn position_at_time(&self, t: f64) -> Vector3<f64> {
        if self.semi_major_axis == 0.0 {
            return Vector3::zeros();
        }
        let mean_motion = if self.period > 0.0 { TAU / self.period } else { 0.0 };
        let mean_anomaly = (self.phase_at_start + mean_motion * t).rem_euclid(TAU);
        let ea = self.eccentric_anomaly(mean_anomaly);

        let a = self.semi_major_axis;
        let e = self.eccentricity;
        let local = Vector3::new(a * (ea.cos() - e), a * (1.0 - e * e).sqrt() * ea.sin(), 0.0);
        self.plane * local
    }
}
