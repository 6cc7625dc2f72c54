//! Click-versus-drag gesture classification.

use instant::Instant;
use std::time::Duration;

/// Classifies an interaction as a click or a camera drag from its press
/// duration.
///
/// `begin` records the interaction start, `finish` classifies and latches
/// the result, and the latch gates the click the host UI delivers right
/// after releasing. A `finish` with no recorded start (a programmatic
/// click) counts as a click.
#[derive(Clone, Debug)]
pub struct DragTracker {
    threshold: Duration,
    pressed_at: Option<Instant>,
    dragged: bool,
}

impl DragTracker {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            pressed_at: None,
            dragged: false,
        }
    }

    pub fn begin(&mut self, at: Instant) {
        self.pressed_at = Some(at);
    }

    /// Classify the interaction that just ended.
    ///
    /// Press durations strictly over the threshold are drags; exactly the
    /// threshold is still a click.
    pub fn finish(&mut self, at: Instant) -> bool {
        self.dragged = match self.pressed_at.take() {
            Some(start) => at - start > self.threshold,
            None => false,
        };
        self.dragged
    }

    /// Whether the most recently classified interaction was a drag.
    #[inline]
    pub fn was_drag(&self) -> bool {
        self.dragged
    }
}
