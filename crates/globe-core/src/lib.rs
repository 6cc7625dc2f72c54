//! Platform-free globe logic shared by the web and native front-ends.

pub mod camera;
pub mod constants;
pub mod controller;
pub mod drag;
pub mod geo;
pub mod layout;
pub mod mesh;
pub mod picking;
pub mod pointer;
pub mod texture;

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");

pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use drag::*;
pub use geo::*;
pub use layout::*;
pub use mesh::*;
pub use picking::*;
pub use pointer::*;
pub use texture::*;
