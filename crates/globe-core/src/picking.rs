//! Ray construction and ray-sphere intersection against the globe's
//! collision sphere.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// A world-space ray.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Unproject an NDC point through the inverse view-projection matrix.
    ///
    /// The ray runs from the near-plane unprojection toward the far-plane
    /// one, which handles orthographic and perspective projections alike.
    pub fn from_ndc(ndc: Vec2, view_proj: &Mat4) -> Self {
        let inv = view_proj.inverse();
        let near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let origin: Vec3 = near.truncate() / near.w;
        let target: Vec3 = far.truncate() / far.w;
        let dir = (target - origin).normalize_or_zero();
        Ray { origin, dir }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// One ray/sphere crossing: surface point, outward unit normal, and travel
/// distance along the ray.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Sphere raycaster with a maximum travel distance.
#[derive(Clone, Copy, Debug)]
pub struct Raycaster {
    /// Crossings farther along the ray than this are discarded. At the
    /// globe's viewing distance this keeps front-hemisphere hits and
    /// rejects the far side.
    pub far: f32,
}

impl Raycaster {
    pub fn new(far: f32) -> Self {
        Self { far }
    }

    /// Intersect a ray with the sphere at `center` of positive `radius`.
    ///
    /// Returns surviving crossings nearest first. A tangent graze yields a
    /// single hit.
    pub fn intersect_sphere(&self, ray: &Ray, center: Vec3, radius: f32) -> Vec<SurfaceHit> {
        let oc = ray.origin - center;
        let b = oc.dot(ray.dir);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return Vec::new();
        }
        let sqrt_disc = disc.sqrt();
        let t_enter = -b - sqrt_disc;
        let t_exit = -b + sqrt_disc;

        let mut hits = Vec::with_capacity(2);
        if (0.0..=self.far).contains(&t_enter) {
            hits.push(self.hit_at(ray, center, radius, t_enter));
        }
        if t_exit > t_enter && (0.0..=self.far).contains(&t_exit) {
            hits.push(self.hit_at(ray, center, radius, t_exit));
        }
        hits
    }

    #[inline]
    fn hit_at(&self, ray: &Ray, center: Vec3, radius: f32, t: f32) -> SurfaceHit {
        let point = ray.at(t);
        SurfaceHit {
            point,
            normal: (point - center) / radius,
            distance: t,
        }
    }
}
