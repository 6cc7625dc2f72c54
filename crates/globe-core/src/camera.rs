//! Orthographic camera and orbit-control state for the globe view.

use glam::{Mat4, Vec2, Vec3};
use std::time::Duration;

use crate::constants::{AUTO_ROTATE_SECS_PER_TURN, POLAR_ANGLE, ROTATE_SPEED};

/// Right-handed orthographic camera looking at a fixed target.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub half_extent: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl OrthoCamera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            -self.half_extent,
            self.half_extent,
            -self.half_extent,
            self.half_extent,
            self.near,
            self.far,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Spherical orbit of the camera eye around the origin.
///
/// No pan and no damping; the polar angle is pinned by an equal min/max
/// clamp so drags only change the azimuth, and auto-rotation keeps the
/// globe turning while idle. The clamp is applied on `update`, not on
/// construction, so the eye starts on the equator plane.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub azimuth: f32,
    pub polar: f32,
    pub radius: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub auto_rotate: bool,
    pub rotate_speed: f32,
}

impl OrbitControls {
    pub fn new(radius: f32) -> Self {
        Self {
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            radius,
            min_polar: POLAR_ANGLE,
            max_polar: POLAR_ANGLE,
            auto_rotate: true,
            rotate_speed: ROTATE_SPEED,
        }
    }

    /// Advance auto-rotation and apply the polar clamp.
    pub fn update(&mut self, dt: Duration) {
        if self.auto_rotate {
            let turn = std::f32::consts::TAU / AUTO_ROTATE_SECS_PER_TURN;
            self.azimuth = (self.azimuth + turn * dt.as_secs_f32()) % std::f32::consts::TAU;
        }
        self.polar = self.polar.clamp(self.min_polar, self.max_polar);
    }

    /// Rotate from a pointer drag, expressed as an NDC delta.
    pub fn rotate(&mut self, delta_ndc: Vec2) {
        let gain = std::f32::consts::PI * self.rotate_speed;
        self.azimuth -= delta_ndc.x * gain;
        self.polar =
            (self.polar + delta_ndc.y * gain).clamp(self.min_polar, self.max_polar);
    }

    /// Camera eye position for the current orbit angles.
    pub fn eye(&self) -> Vec3 {
        let sp = self.polar.sin();
        Vec3::new(
            self.radius * sp * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sp * self.azimuth.cos(),
        )
    }
}
