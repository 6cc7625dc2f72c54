//! Container sizing rules shared by the front-ends.

use crate::constants::DOT_SIZE_FACTOR;

/// Side length of the square globe container for a viewport.
///
/// The container tracks the viewport height on both axes, so the globe
/// fills the window vertically regardless of its width.
#[inline]
pub fn square_side_for_viewport(_viewport_width: f32, viewport_height: f32) -> f32 {
    viewport_height
}

/// Dot pixel size for a container side.
#[inline]
pub fn dot_size_for_side(side: f32) -> f32 {
    DOT_SIZE_FACTOR * side
}
