use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use nalgebra::Vector3;
use units::constants::{AU, EARTH_MASS, SOL_MASS};

use crate::orbit::{rotate_x, rotate_z, Orbit};

const YEAR_S: f64 = 365.25 * 86_400.0;

#[test]
fn test_earth_period() {
    let orbit = Orbit::around_primary(AU, SOL_MASS, 0.0167);
    assert_relative_eq!(orbit.period() / YEAR_S, 1.0, max_relative = 0.01);
}

#[test]
fn test_barycentre_period_matches_relative_orbit() {
    // Two equal masses 1 AU apart: each sits 0.5 AU from the barycentre
    let pair = Orbit::around_barycentre(0.5 * AU, 2.0 * SOL_MASS, SOL_MASS, 0.0);
    let relative = Orbit::around_primary(AU, 2.0 * SOL_MASS, 0.0);
    assert_relative_eq!(pair.period(), relative.period(), max_relative = 1e-12);
}

#[test]
fn test_degenerate_orbits_have_no_period() {
    assert_eq!(Orbit::around_primary(0.0, SOL_MASS, 0.0).period(), 0.0);
    assert_eq!(Orbit::around_primary(AU, 0.0, 0.0).period(), 0.0);
    assert_eq!(Orbit::default().position_at_time(1e6), Vector3::zeros());
}

#[test]
fn test_circular_orbit_keeps_radius() {
    let orbit = Orbit::around_primary(AU, EARTH_MASS, 0.0);
    for i in 0..8 {
        let t = orbit.period() * i as f64 / 8.0;
        assert_relative_eq!(orbit.position_at_time(t).norm(), AU, max_relative = 1e-9);
    }
}

#[test]
fn test_eccentric_orbit_spans_periapsis_to_apoapsis() {
    let orbit = Orbit::around_primary(AU, SOL_MASS, 0.5);
    let start = orbit.position_at_time(0.0).norm();
    let half = orbit.position_at_time(orbit.period() / 2.0).norm();
    assert_relative_eq!(start, orbit.periapsis(), max_relative = 1e-9);
    assert_relative_eq!(half, orbit.apoapsis(), max_relative = 1e-9);
}

#[test]
fn test_plane_rotates_positions() {
    let orbit = Orbit::around_primary(AU, SOL_MASS, 0.0).with_plane(rotate_x(-FRAC_PI_2));
    let p = orbit.position_at_time(orbit.period() / 4.0);
    assert_relative_eq!(p.y, 0.0, epsilon = 1.0);
    assert_relative_eq!(p.z.abs(), AU, max_relative = 1e-9);
}

#[test]
fn test_phase_offsets_position() {
    let a = Orbit::around_primary(AU, SOL_MASS, 0.0);
    let b = a.clone().with_phase(PI);
    assert_relative_eq!(
        (a.position_at_time(0.0) + b.position_at_time(0.0)).norm(),
        0.0,
        epsilon = 1.0
    );
    assert_relative_eq!(rotate_z(PI) * Vector3::x(), -Vector3::x(), epsilon = 1e-12);
}
