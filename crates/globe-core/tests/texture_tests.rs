// Map-texture decode tests.

use globe_core::texture::{decode_map_texture, TextureError};
use std::io::Cursor;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_fn(4, 2, |x, _| {
        image::Rgba([(x * 60) as u8, 120, 200, 255])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode");
    bytes
}

#[test]
fn decodes_png_bytes_to_rgba8() {
    let tex = decode_map_texture(&tiny_png()).expect("decode");
    assert_eq!((tex.width, tex.height), (4, 2));
    assert_eq!(tex.rgba.len(), 4 * 2 * 4);
    // First pixel round-trips.
    assert_eq!(&tex.rgba[0..4], &[0, 120, 200, 255]);
}

#[test]
fn garbage_bytes_are_a_reported_error() {
    let err = decode_map_texture(b"definitely not an image").unwrap_err();
    assert!(matches!(err, TextureError::Decode(_)));
}
