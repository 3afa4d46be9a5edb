//! Rectangular planar patches placed in the world by a pose.
//!
//! The patch lies on `z = 0` of its local frame, spanned by local `+x` and
//! `+y`; local `+z` is its normal.

use glam::DVec3;

use crate::error::{GeoscopeError, Result};
use crate::pose::{Axis, Pose};
use crate::segment::Segment;

/// A `width x height` rectangle centered on the origin of a local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPatch {
    pose: Pose,
    width: f64,
    height: f64,
}

impl PlanarPatch {
    /// Creates a patch; both sides must be positive and finite.
    pub fn new(pose: Pose, width: f64, height: f64) -> Result<Self> {
        check_extent(width, height)?;
        Ok(Self {
            pose,
            width,
            height,
        })
    }

    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// The same rectangle placed by another pose.
    #[must_use]
    pub fn with_pose(&self, pose: Pose) -> Self {
        Self { pose, ..*self }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Center of the patch in world space.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.pose.translation()
    }

    /// World-space corners in counter-clockwise order (seen from `+z`).
    #[must_use]
    pub fn corners(&self) -> [DVec3; 4] {
        local_corners(self.width, self.height).map(|c| self.pose.transform_point(c))
    }

    /// Unit normal in world space.
    #[must_use]
    pub fn normal(&self) -> DVec3 {
        plane_normal(&self.pose)
    }

    /// The four perimeter edges.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        Segment::closed_loop(&self.corners())
    }
}

/// Corners of a `width x height` rectangle on local `z = 0`, transformed by
/// `pose`. Local corners are `(-w/2, -h/2)`, `(w/2, -h/2)`, `(w/2, h/2)`,
/// `(-w/2, h/2)`.
pub fn plane_corners(pose: &Pose, width: f64, height: f64) -> Result<[DVec3; 4]> {
    Ok(PlanarPatch::new(*pose, width, height)?.corners())
}

/// The plane normal: local `+z` rotated into world space.
#[must_use]
pub fn plane_normal(pose: &Pose) -> DVec3 {
    pose.axis(Axis::Z)
}

fn local_corners(width: f64, height: f64) -> [DVec3; 4] {
    let (hx, hy) = (width * 0.5, height * 0.5);
    [
        DVec3::new(-hx, -hy, 0.0),
        DVec3::new(hx, -hy, 0.0),
        DVec3::new(hx, hy, 0.0),
        DVec3::new(-hx, hy, 0.0),
    ]
}

fn check_extent(width: f64, height: f64) -> Result<()> {
    let positive = |s: f64| s.is_finite() && s > 0.0;
    if positive(width) && positive(height) {
        Ok(())
    } else {
        Err(GeoscopeError::InvalidExtent { width, height })
    }
}
