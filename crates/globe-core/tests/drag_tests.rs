// Drag-discriminator tests: press duration against the 200ms threshold.

use globe_core::drag::DragTracker;
use instant::Instant;
use std::time::Duration;

fn tracker() -> DragTracker {
    DragTracker::new(Duration::from_millis(200))
}

#[test]
fn short_press_is_a_click() {
    let mut d = tracker();
    let t0 = Instant::now();
    d.begin(t0);
    assert!(!d.finish(t0 + Duration::from_millis(199)));
    assert!(!d.was_drag());
}

#[test]
fn exactly_threshold_is_still_a_click() {
    // The comparison is strict: only durations over the threshold drag.
    let mut d = tracker();
    let t0 = Instant::now();
    d.begin(t0);
    assert!(!d.finish(t0 + Duration::from_millis(200)));
}

#[test]
fn long_press_is_a_drag() {
    let mut d = tracker();
    let t0 = Instant::now();
    d.begin(t0);
    assert!(d.finish(t0 + Duration::from_millis(201)));
    assert!(d.was_drag());
}

#[test]
fn finish_without_begin_counts_as_a_click() {
    // Programmatic clicks never see an interaction start.
    let mut d = tracker();
    assert!(!d.finish(Instant::now()));
    assert!(!d.was_drag());
}

#[test]
fn classification_is_latched_until_the_next_interaction() {
    let mut d = tracker();
    let t0 = Instant::now();
    d.begin(t0);
    d.finish(t0 + Duration::from_millis(500));
    assert!(d.was_drag());

    // A later quick tap clears the latch.
    let t1 = t0 + Duration::from_secs(2);
    d.begin(t1);
    d.finish(t1 + Duration::from_millis(50));
    assert!(!d.was_drag());
}

#[test]
fn threshold_is_configurable() {
    let mut d = DragTracker::new(Duration::from_millis(50));
    let t0 = Instant::now();
    d.begin(t0);
    assert!(d.finish(t0 + Duration::from_millis(80)));
}
