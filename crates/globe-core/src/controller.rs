//! The visualization controller.
//!
//! One instance owns every piece of interactive state for a globe
//! (pointer position, orbit camera, drag classification, and the current
//! selection) and consumes input events dispatched by the host front-end.
//! Keeping the state here instead of in module-level globals lets several
//! globes coexist and makes the whole pipeline testable without a
//! rendering surface.

use glam::{Mat4, Vec2, Vec3};
use instant::Instant;
use std::time::Duration;

use crate::camera::{OrbitControls, OrthoCamera};
use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_NEAR, DEFAULT_DETAIL, DRAG_THRESHOLD_MS,
    FRUSTUM_HALF_EXTENT, GLOBE_RADIUS, RAY_FAR,
};
use crate::drag::DragTracker;
use crate::geo::surface_to_lat_lon;
use crate::layout::dot_size_for_side;
use crate::picking::{Ray, Raycaster, SurfaceHit};
use crate::pointer::{page_to_ndc, ContainerRect, POINTER_OFFSCREEN};

/// Tunable policy for one globe instance.
#[derive(Clone, Debug)]
pub struct GlobeConfig {
    pub radius: f32,
    pub camera_distance: f32,
    pub frustum_half_extent: f32,
    /// Maximum ray travel distance for intersection queries.
    pub ray_far: f32,
    /// Press duration strictly above this classifies as a camera drag.
    pub drag_threshold: Duration,
    pub auto_rotate: bool,
    /// Icosphere subdivision of the rendered point cloud.
    pub detail: u32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: GLOBE_RADIUS,
            camera_distance: CAMERA_DISTANCE,
            frustum_half_extent: FRUSTUM_HALF_EXTENT,
            ray_far: RAY_FAR,
            drag_threshold: Duration::from_millis(DRAG_THRESHOLD_MS),
            auto_rotate: true,
            detail: DEFAULT_DETAIL,
        }
    }
}

/// Input events dispatched by the host, in page-pixel space.
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    PointerMove { page_x: f32, page_y: f32 },
    Click { page_x: f32, page_y: f32 },
    InteractionStart,
    InteractionEnd,
    Resize { rect: ContainerRect },
}

/// The most recent confirmed selection.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Unit surface normal at the selected point.
    pub normal: Vec3,
    /// Formatted geocoordinates for the popup.
    pub label: String,
}

/// Per-frame snapshot handed to the renderer.
#[derive(Clone, Debug)]
pub struct FrameState {
    pub view_proj: Mat4,
    /// Camera eye position; the renderer culls samples facing away.
    pub eye: Vec3,
    /// Seconds since the last confirmed selection (or since the scene
    /// became ready, before any selection exists).
    pub time_since_selection: f32,
    /// Whether the pointer currently hovers the globe; drives the cursor
    /// affordance.
    pub hovering: bool,
    /// Selection marker position on the sphere, if any.
    pub marker: Option<Vec3>,
    pub dot_size_px: f32,
}

pub struct GlobeController {
    config: GlobeConfig,
    rect: ContainerRect,
    pointer_ndc: Vec2,
    camera: OrthoCamera,
    orbit: OrbitControls,
    raycaster: Raycaster,
    drag: DragTracker,
    pointer_down: bool,
    selection: Option<Selection>,
    clock_zero: Option<Instant>,
    scene_ready: bool,
    hovering: bool,
}

impl GlobeController {
    pub fn new(config: GlobeConfig) -> Self {
        let camera = OrthoCamera {
            half_extent: config.frustum_half_extent,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            eye: Vec3::new(0.0, 0.0, config.camera_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        let mut orbit = OrbitControls::new(config.camera_distance);
        orbit.auto_rotate = config.auto_rotate;
        let raycaster = Raycaster::new(config.ray_far);
        let drag = DragTracker::new(config.drag_threshold);
        Self {
            config,
            rect: ContainerRect::default(),
            pointer_ndc: POINTER_OFFSCREEN,
            camera,
            orbit,
            raycaster,
            drag,
            pointer_down: false,
            selection: None,
            clock_zero: None,
            scene_ready: false,
            hovering: false,
        }
    }

    /// Called once the map texture has loaded and the scene exists.
    ///
    /// Starts the selection clock; before this, every intersection query
    /// reports zero hits.
    pub fn mark_scene_ready(&mut self, now: Instant) {
        self.scene_ready = true;
        self.clock_zero = Some(now);
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn rect(&self) -> ContainerRect {
        self.rect
    }

    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer_ndc
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Dispatch one input event. Returns the new selection when a click
    /// confirms one.
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> Option<Selection> {
        match event {
            InputEvent::PointerMove { page_x, page_y } => {
                let ndc = page_to_ndc(page_x, page_y, &self.rect);
                if self.pointer_down {
                    self.orbit.rotate(ndc - self.pointer_ndc);
                }
                self.pointer_ndc = ndc;
                None
            }
            InputEvent::InteractionStart => {
                self.pointer_down = true;
                self.drag.begin(now);
                None
            }
            InputEvent::InteractionEnd => {
                self.pointer_down = false;
                self.drag.finish(now);
                None
            }
            InputEvent::Resize { rect } => {
                self.rect = rect;
                None
            }
            InputEvent::Click { page_x, page_y } => self.click(page_x, page_y, now),
        }
    }

    fn click(&mut self, page_x: f32, page_y: f32, now: Instant) -> Option<Selection> {
        if self.drag.was_drag() {
            log::debug!("[click] suppressed by drag");
            return None;
        }
        self.pointer_ndc = page_to_ndc(page_x, page_y, &self.rect);
        let hit = *self.intersect(self.pointer_ndc).first()?;
        let selection = Selection {
            normal: hit.normal,
            label: surface_to_lat_lon(hit.normal).label(),
        };
        self.selection = Some(selection.clone());
        self.clock_zero = Some(now);
        Some(selection)
    }

    /// Cast a ray through the given NDC point against the collision
    /// sphere. An unbuilt scene reports zero hits.
    pub fn intersect(&self, ndc: Vec2) -> Vec<SurfaceHit> {
        if !self.scene_ready {
            return Vec::new();
        }
        let ray = Ray::from_ndc(ndc, &self.camera.view_proj());
        self.raycaster
            .intersect_sphere(&ray, Vec3::ZERO, self.config.radius)
    }

    /// Advance one frame: auto-rotation, hover re-query, and the uniform
    /// snapshot for the renderer.
    pub fn tick(&mut self, now: Instant, dt: Duration) -> FrameState {
        self.orbit.update(dt);
        self.camera.eye = self.orbit.eye();
        self.hovering = !self.intersect(self.pointer_ndc).is_empty();
        let time_since_selection = self
            .clock_zero
            .map(|zero| (now - zero).as_secs_f32())
            .unwrap_or(0.0);
        FrameState {
            view_proj: self.camera.view_proj(),
            eye: self.camera.eye,
            time_since_selection,
            hovering: self.hovering,
            marker: self.selection.as_ref().map(|s| s.normal),
            dot_size_px: dot_size_for_side(self.rect.height),
        }
    }
}
