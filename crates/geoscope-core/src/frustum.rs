//! Camera frustum geometry.
//!
//! A frustum is approximated by its apex (the camera center) and the four
//! corners of a far plane at a fixed distance. Corners are always ordered
//! top-left, top-right, bottom-right, bottom-left as seen by the camera
//! (x right, y down, z forward). That order defines the `(u, v)`
//! parameterization used by [`crate::texture::map_image_to_quad`].

use glam::DVec3;

use crate::camera::FieldOfView;
use crate::pose::Pose;
use crate::segment::Segment;
use crate::texture::Quad;

/// Computes the world-space far-plane corners of a camera.
///
/// The camera-local rays `(-tx, -ty, 1)`, `(tx, -ty, 1)`, `(tx, ty, 1)` and
/// `(-tx, ty, 1)` (with `tx = tan(hfov / 2)`, `ty = tan(vfov / 2)`) are
/// normalized, scaled by `distance`, then rotated and translated by `pose`.
/// Every corner therefore lies exactly `distance` from the camera center.
#[must_use]
pub fn far_plane_corners(fov: FieldOfView, pose: &Pose, distance: f64) -> [DVec3; 4] {
    let (tx, ty) = fov.half_tangents();
    let rays = [
        DVec3::new(-tx, -ty, 1.0),
        DVec3::new(tx, -ty, 1.0),
        DVec3::new(tx, ty, 1.0),
        DVec3::new(-tx, ty, 1.0),
    ];

    let rotation = pose.rotation();
    let translation = pose.translation();
    rays.map(|ray| rotation * (ray.normalize() * distance) + translation)
}

/// A camera frustum reduced to its apex and far-plane corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    apex: DVec3,
    corners: [DVec3; 4],
    distance: f64,
}

impl Frustum {
    /// Builds the frustum of a camera at `pose` with the given field of view,
    /// truncated at `distance` from the apex.
    #[must_use]
    pub fn new(fov: FieldOfView, pose: &Pose, distance: f64) -> Self {
        Self {
            apex: pose.translation(),
            corners: far_plane_corners(fov, pose, distance),
            distance,
        }
    }

    /// Camera center in world space.
    #[must_use]
    pub fn apex(&self) -> DVec3 {
        self.apex
    }

    /// Far-plane corners in TL, TR, BR, BL order.
    #[must_use]
    pub fn corners(&self) -> [DVec3; 4] {
        self.corners
    }

    /// Distance from the apex to each far-plane corner.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The far plane as a texture-mappable quad.
    #[must_use]
    pub fn quad(&self) -> Quad {
        Quad::from_corners(self.corners)
    }

    /// The 8-segment wireframe: four spokes from the apex to each corner,
    /// then the four far-plane edges `corner[i] -> corner[(i + 1) % 4]`.
    #[must_use]
    pub fn wireframe(&self) -> [Segment; 8] {
        let c = self.corners;
        [
            Segment::new(self.apex, c[0]),
            Segment::new(self.apex, c[1]),
            Segment::new(self.apex, c[2]),
            Segment::new(self.apex, c[3]),
            Segment::new(c[0], c[1]),
            Segment::new(c[1], c[2]),
            Segment::new(c[2], c[3]),
            Segment::new(c[3], c[0]),
        ]
    }
}
