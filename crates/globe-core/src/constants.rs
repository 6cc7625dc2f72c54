// Shared scene and interaction tuning constants used by both front-ends.

// Scene layout
pub const GLOBE_RADIUS: f32 = 1.0; // collision sphere and point cloud share this
pub const CAMERA_DISTANCE: f32 = 1.1; // orbit radius of the camera eye
pub const FRUSTUM_HALF_EXTENT: f32 = 1.1; // orthographic frustum half-width/height
pub const CAMERA_NEAR: f32 = 0.0;
pub const CAMERA_FAR: f32 = 3.0;

// Interaction
pub const RAY_FAR: f32 = 1.15; // max ray travel, rejects far-side hits
pub const DRAG_THRESHOLD_MS: u64 = 200; // press strictly longer than this is a drag
pub const POLAR_ANGLE: f32 = 0.4 * std::f32::consts::PI; // fixed camera elevation

// Orbit
pub const AUTO_ROTATE_SECS_PER_TURN: f32 = 30.0;
pub const ROTATE_SPEED: f32 = 1.0; // drag-to-azimuth gain, in half-turns per NDC unit

// Rendering
pub const DOT_SIZE_FACTOR: f32 = 0.02; // dot pixel size = factor * container side
pub const DEFAULT_DETAIL: u32 = 55; // icosphere subdivision of the point cloud
