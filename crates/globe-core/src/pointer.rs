//! Raw input coordinates to normalized device coordinates.

use glam::Vec2;

/// NDC position used before any pointer event arrives (misses the globe).
pub const POINTER_OFFSCREEN: Vec2 = Vec2::new(-1.0, -1.0);

/// On-page placement of the rendering container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// A square rect of the given side anchored at the page origin.
    pub fn square(side: f32) -> Self {
        Self::new(0.0, 0.0, side, side)
    }
}

/// A pointer-like event source with a primary contact point in page pixels.
///
/// Mouse and pointer events carry the point directly; touch events
/// contribute their first touch. Sources with no active contact yield
/// `None` and are ignored by the caller.
pub trait PointerLike {
    fn primary_contact(&self) -> Option<(f32, f32)>;
}

/// Map page-pixel coordinates into normalized device coordinates.
///
/// Both axes land in `[-1, 1]` when the point is inside the rect, with Y
/// pointing up. Degenerate rects are treated as one pixel wide so the
/// function stays total.
#[inline]
pub fn page_to_ndc(page_x: f32, page_y: f32, rect: &ContainerRect) -> Vec2 {
    let w = rect.width.max(1.0);
    let h = rect.height.max(1.0);
    Vec2::new(
        (page_x - rect.left) / w * 2.0 - 1.0,
        -((page_y - rect.top) / h) * 2.0 + 1.0,
    )
}
