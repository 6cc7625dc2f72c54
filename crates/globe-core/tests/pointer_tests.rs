// Pointer-tracker tests: page pixels to normalized device coordinates,
// plus the container sizing rules.

use glam::Vec2;
use globe_core::layout::{dot_size_for_side, square_side_for_viewport};
use globe_core::pointer::{page_to_ndc, ContainerRect};

const EPS: f32 = 1e-6;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < EPS
}

#[test]
fn center_maps_to_origin() {
    let rect = ContainerRect::square(600.0);
    assert!(close(page_to_ndc(300.0, 300.0, &rect), Vec2::ZERO));
}

#[test]
fn corners_map_to_unit_extents() {
    let rect = ContainerRect::square(600.0);
    assert!(close(page_to_ndc(0.0, 0.0, &rect), Vec2::new(-1.0, 1.0)));
    assert!(close(page_to_ndc(600.0, 600.0, &rect), Vec2::new(1.0, -1.0)));
}

#[test]
fn container_offset_is_subtracted() {
    let rect = ContainerRect::new(100.0, 50.0, 600.0, 600.0);
    assert!(close(page_to_ndc(100.0, 50.0, &rect), Vec2::new(-1.0, 1.0)));
    assert!(close(page_to_ndc(400.0, 350.0, &rect), Vec2::ZERO));
}

#[test]
fn conversion_is_idempotent_for_repeated_input() {
    let rect = ContainerRect::square(480.0);
    let a = page_to_ndc(123.0, 456.0, &rect);
    let b = page_to_ndc(123.0, 456.0, &rect);
    assert_eq!(a, b);
}

#[test]
fn conversion_is_linear_per_axis() {
    // Doubling the offset-adjusted pixel delta doubles the NDC delta.
    let rect = ContainerRect::square(600.0);
    let base = page_to_ndc(300.0, 300.0, &rect);
    let one = page_to_ndc(330.0, 300.0, &rect) - base;
    let two = page_to_ndc(360.0, 300.0, &rect) - base;
    assert!((two.x - 2.0 * one.x).abs() < EPS);

    let one_y = page_to_ndc(300.0, 330.0, &rect) - base;
    let two_y = page_to_ndc(300.0, 360.0, &rect) - base;
    assert!((two_y.y - 2.0 * one_y.y).abs() < EPS);
}

#[test]
fn same_relative_position_survives_a_resize() {
    // 600x600 down to 300x300: identical relative pixel positions produce
    // identical normalized coordinates.
    let big = ContainerRect::square(600.0);
    let small = ContainerRect::square(300.0);
    for (fx, fy) in [(0.25, 0.75), (0.5, 0.5), (0.9, 0.1)] {
        let a = page_to_ndc(600.0 * fx, 600.0 * fy, &big);
        let b = page_to_ndc(300.0 * fx, 300.0 * fy, &small);
        assert!(close(a, b), "{:?} vs {:?}", a, b);
    }
}

#[test]
fn degenerate_rect_does_not_divide_by_zero() {
    let rect = ContainerRect::square(0.0);
    let ndc = page_to_ndc(10.0, 10.0, &rect);
    assert!(ndc.x.is_finite() && ndc.y.is_finite());
}

#[test]
fn container_side_tracks_the_viewport_height() {
    assert_eq!(square_side_for_viewport(800.0, 600.0), 600.0);
    assert_eq!(square_side_for_viewport(320.0, 568.0), 568.0);
}

#[test]
fn dot_size_scales_with_the_side() {
    assert!((dot_size_for_side(600.0) - 12.0).abs() < EPS);
    assert!((dot_size_for_side(300.0) - 6.0).abs() < EPS);
}
