// End-to-end controller tests: input events through selection, without a
// rendering surface.

use glam::{Vec2, Vec3};
use globe_core::controller::{GlobeConfig, GlobeController, InputEvent};
use globe_core::pointer::ContainerRect;
use instant::Instant;
use std::time::Duration;

const EPS: f32 = 1e-4;

fn ready_controller(side: f32, now: Instant) -> GlobeController {
    let mut c = GlobeController::new(GlobeConfig {
        auto_rotate: false,
        ..GlobeConfig::default()
    });
    let _ = c.handle_event(
        InputEvent::Resize {
            rect: ContainerRect::square(side),
        },
        now,
    );
    c.mark_scene_ready(now);
    c
}

#[test]
fn center_click_selects_the_frontal_point() {
    let t0 = Instant::now();
    let mut c = ready_controller(600.0, t0);

    let selection = c
        .handle_event(
            InputEvent::Click {
                page_x: 300.0,
                page_y: 300.0,
            },
            t0,
        )
        .expect("center click should select");

    assert!(selection.normal.distance(Vec3::new(0.0, 0.0, 1.0)) < EPS);
    assert_eq!(selection.label, "0.0000°\u{a0}N,\u{a0}90.0000°\u{a0}E");
    assert!(c.selection().is_some());
}

#[test]
fn click_outside_the_silhouette_selects_nothing() {
    let t0 = Instant::now();
    let mut c = ready_controller(600.0, t0);

    let outcome = c.handle_event(
        InputEvent::Click {
            page_x: 0.0,
            page_y: 0.0,
        },
        t0,
    );
    assert!(outcome.is_none());
    assert!(c.selection().is_none());
}

#[test]
fn a_drag_suppresses_the_following_click() {
    let t0 = Instant::now();
    let mut c = ready_controller(600.0, t0);

    let _ = c.handle_event(InputEvent::InteractionStart, t0);
    let _ = c.handle_event(InputEvent::InteractionEnd, t0 + Duration::from_millis(300));

    let outcome = c.handle_event(
        InputEvent::Click {
            page_x: 300.0,
            page_y: 300.0,
        },
        t0 + Duration::from_millis(301),
    );
    assert!(outcome.is_none());
    assert!(c.selection().is_none());
}

#[test]
fn a_quick_tap_still_selects() {
    let t0 = Instant::now();
    let mut c = ready_controller(600.0, t0);

    let _ = c.handle_event(InputEvent::InteractionStart, t0);
    let _ = c.handle_event(InputEvent::InteractionEnd, t0 + Duration::from_millis(100));

    let outcome = c.handle_event(
        InputEvent::Click {
            page_x: 300.0,
            page_y: 300.0,
        },
        t0 + Duration::from_millis(101),
    );
    assert!(outcome.is_some());
}

#[test]
fn clicks_before_the_scene_is_ready_hit_nothing() {
    let t0 = Instant::now();
    let mut c = GlobeController::new(GlobeConfig {
        auto_rotate: false,
        ..GlobeConfig::default()
    });
    let _ = c.handle_event(
        InputEvent::Resize {
            rect: ContainerRect::square(600.0),
        },
        t0,
    );

    let outcome = c.handle_event(
        InputEvent::Click {
            page_x: 300.0,
            page_y: 300.0,
        },
        t0,
    );
    assert!(outcome.is_none());
    assert!(c.intersect(Vec2::ZERO).is_empty());
}

#[test]
fn selection_clock_restarts_on_selection_only() {
    let t0 = Instant::now();
    let mut c = ready_controller(600.0, t0);

    // Ticking does not reset the clock.
    let frame = c.tick(t0 + Duration::from_secs(10), Duration::from_millis(16));
    assert!((frame.time_since_selection - 10.0).abs() < 1e-3);

    let _ = c.handle_event(
        InputEvent::Click {
            page_x: 300.0,
            page_y: 300.0,
        },
        t0 + Duration::from_secs(10),
    );
    let frame = c.tick(
        t0 + Duration::from_millis(10_500),
        Duration::from_millis(16),
    );
    assert!((frame.time_since_selection - 0.5).abs() < 1e-3);
}

#[test]
fn hover_follows_the_pointer() {
    let t0 = Instant::now();
    let mut c = ready_controller(600.0, t0);

    let _ = c.handle_event(
        InputEvent::PointerMove {
            page_x: 300.0,
            page_y: 300.0,
        },
        t0,
    );
    let frame = c.tick(t0, Duration::from_millis(16));
    assert!(frame.hovering);

    let _ = c.handle_event(
        InputEvent::PointerMove {
            page_x: 1.0,
            page_y: 1.0,
        },
        t0,
    );
    let frame = c.tick(t0, Duration::from_millis(16));
    assert!(!frame.hovering);
}

#[test]
fn selection_survives_a_resize_of_the_container() {
    // The same relative click position selects the same surface point at
    // half the container size.
    let t0 = Instant::now();
    let mut big = ready_controller(600.0, t0);
    let mut small = ready_controller(300.0, t0);

    let a = big
        .handle_event(
            InputEvent::Click {
                page_x: 420.0,
                page_y: 270.0,
            },
            t0,
        )
        .expect("hit");
    let b = small
        .handle_event(
            InputEvent::Click {
                page_x: 210.0,
                page_y: 135.0,
            },
            t0,
        )
        .expect("hit");
    assert!(a.normal.distance(b.normal) < EPS);
    assert_eq!(a.label, b.label);
}

#[test]
fn frame_state_carries_the_marker_and_dot_size() {
    let t0 = Instant::now();
    let mut c = ready_controller(600.0, t0);

    let frame = c.tick(t0, Duration::from_millis(16));
    assert!(frame.marker.is_none());
    assert!((frame.dot_size_px - 12.0).abs() < EPS);

    let _ = c.handle_event(
        InputEvent::Click {
            page_x: 300.0,
            page_y: 300.0,
        },
        t0,
    );
    let frame = c.tick(t0, Duration::from_millis(16));
    let marker = frame.marker.expect("marker after selection");
    assert!((marker.length() - 1.0).abs() < EPS);
}

#[test]
fn auto_rotation_advances_the_view_between_frames() {
    let t0 = Instant::now();
    let mut c = GlobeController::new(GlobeConfig::default());
    let _ = c.handle_event(
        InputEvent::Resize {
            rect: ContainerRect::square(600.0),
        },
        t0,
    );
    c.mark_scene_ready(t0);

    let a = c.tick(t0, Duration::from_millis(16)).view_proj;
    let b = c
        .tick(t0 + Duration::from_secs(1), Duration::from_secs(1))
        .view_proj;
    assert!(a != b);
}
