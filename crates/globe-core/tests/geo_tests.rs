// Coordinate-mapper tests: unit-sphere points to latitude/longitude and
// the popup label format.

use glam::Vec3;
use globe_core::geo::{format_coordinate, surface_to_lat_lon};

const EPS: f64 = 1e-4;

#[test]
fn north_pole_is_ninety_north() {
    let ll = surface_to_lat_lon(Vec3::new(0.0, 1.0, 0.0));
    assert!((ll.lat_deg - 90.0).abs() < EPS, "lat = {}", ll.lat_deg);
    assert!(ll.label().starts_with("90.0000°\u{a0}N"));
}

#[test]
fn south_pole_is_ninety_south() {
    let ll = surface_to_lat_lon(Vec3::new(0.0, -1.0, 0.0));
    assert!((ll.lat_deg + 90.0).abs() < EPS, "lat = {}", ll.lat_deg);
    assert!(ll.label().starts_with("90.0000°\u{a0}S"));
}

#[test]
fn plus_z_is_equator_ninety_east() {
    // The longitude zero sits a quarter turn west of +Z.
    let ll = surface_to_lat_lon(Vec3::new(0.0, 0.0, 1.0));
    assert!(ll.lat_deg.abs() < EPS);
    assert!((ll.lon_deg - 90.0).abs() < EPS, "lon = {}", ll.lon_deg);
    assert_eq!(ll.label(), "0.0000°\u{a0}N,\u{a0}90.0000°\u{a0}E");
}

#[test]
fn cardinal_longitudes() {
    // +X maps to the antimeridian, which formats as west.
    let ll = surface_to_lat_lon(Vec3::new(1.0, 0.0, 0.0));
    assert!((ll.lon_deg + 180.0).abs() < EPS, "lon = {}", ll.lon_deg);
    assert!(ll.label().ends_with("180.0000°\u{a0}W"));

    // -Z is a quarter turn west of the seam.
    let ll = surface_to_lat_lon(Vec3::new(0.0, 0.0, -1.0));
    assert!((ll.lon_deg + 90.0).abs() < EPS, "lon = {}", ll.lon_deg);

    // -X lands on the longitude zero, formatted east.
    let ll = surface_to_lat_lon(Vec3::new(-1.0, 0.0, 0.0));
    assert!(ll.lon_deg.abs() < EPS, "lon = {}", ll.lon_deg);
    assert!(ll.label().ends_with("0.0000°\u{a0}E"));
}

#[test]
fn outputs_stay_in_range_over_a_sphere_sweep() {
    for i in 0..24 {
        for j in 1..12 {
            let theta = i as f32 * std::f32::consts::TAU / 24.0;
            let phi = j as f32 * std::f32::consts::PI / 12.0;
            let p = Vec3::new(
                phi.sin() * theta.sin(),
                phi.cos(),
                phi.sin() * theta.cos(),
            );
            let ll = surface_to_lat_lon(p);
            assert!((-90.0..=90.0).contains(&ll.lat_deg), "lat = {}", ll.lat_deg);
            assert!(
                (-180.0..180.0).contains(&ll.lon_deg),
                "lon = {}",
                ll.lon_deg
            );
        }
    }
}

#[test]
fn non_normalized_input_is_normalized_first() {
    let ll = surface_to_lat_lon(Vec3::new(0.0, 5.0, 0.0));
    assert!((ll.lat_deg - 90.0).abs() < EPS);

    let a = surface_to_lat_lon(Vec3::new(0.3, 0.4, 0.6));
    let b = surface_to_lat_lon(Vec3::new(0.3, 0.4, 0.6) * 7.5);
    assert!((a.lat_deg - b.lat_deg).abs() < EPS);
    assert!((a.lon_deg - b.lon_deg).abs() < EPS);
}

#[test]
fn format_rounds_to_four_decimals_and_picks_the_sign_letter() {
    assert_eq!(format_coordinate(51.50722, 'N', 'S'), "51.5072°\u{a0}N");
    assert_eq!(format_coordinate(-0.1276, 'E', 'W'), "0.1276°\u{a0}W");
    // Zero takes the positive direction.
    assert_eq!(format_coordinate(0.0, 'N', 'S'), "0.0000°\u{a0}N");
}
