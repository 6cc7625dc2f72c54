//! Point-cloud sphere geometry.

use glam::Vec3;

// Golden-ratio icosahedron: 12 vertices, 20 faces.
fn icosahedron() -> ([Vec3; 12], [[usize; 3]; 20]) {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let verts = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    (verts, faces)
}

/// Sample the unit sphere with a subdivided icosahedron.
///
/// Each face carries a barycentric grid of `detail + 1` rows projected back
/// onto the sphere. The stream is non-indexed, so face borders repeat their
/// points; total count is `10 * (detail + 1) * (detail + 2)`.
pub fn icosphere_points(detail: u32) -> Vec<Vec3> {
    let (verts, faces) = icosahedron();
    let n = detail.max(1);
    let per_face = ((n + 1) * (n + 2) / 2) as usize;
    let mut points = Vec::with_capacity(20 * per_face);
    for [a, b, c] in faces {
        let (va, vb, vc) = (verts[a], verts[b], verts[c]);
        for i in 0..=n {
            for j in 0..=(n - i) {
                let k = n - i - j;
                let p = va * i as f32 + vb * j as f32 + vc * k as f32;
                points.push((p / n as f32).normalize());
            }
        }
    }
    points
}
