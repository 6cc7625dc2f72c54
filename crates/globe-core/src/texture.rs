//! World-map texture decoding shared by the front-ends.

use thiserror::Error;

/// Decoded RGBA8 map image ready for GPU upload.
#[derive(Clone, Debug)]
pub struct MapTexture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("map image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("map image has zero size")]
    Empty,
}

/// Decode fetched image bytes into RGBA8.
///
/// Failures propagate to the caller so initialization can report them
/// instead of stalling with a blank scene.
pub fn decode_map_texture(bytes: &[u8]) -> Result<MapTexture, TextureError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureError::Empty);
    }
    Ok(MapTexture {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
