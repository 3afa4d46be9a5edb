//! Ray endpoints and label anchors.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// A ray from `origin` along `direction`; the direction need not be unit
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    #[must_use]
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// `origin + direction * scale`.
    #[must_use]
    pub fn endpoint(&self, scale: f64) -> DVec3 {
        ray_endpoint(self.origin, self.direction, scale)
    }

    /// Point halfway between the origin and the endpoint.
    #[must_use]
    pub fn midpoint(&self, scale: f64) -> DVec3 {
        ray_midpoint(self.origin, self.direction, scale)
    }

    /// Drawn length, `|direction| * |scale|`.
    #[must_use]
    pub fn length(&self, scale: f64) -> f64 {
        (self.direction * scale).length()
    }

    #[must_use]
    pub fn segment(&self, scale: f64) -> Segment {
        Segment::new(self.origin, self.endpoint(scale))
    }
}

/// `origin + direction * scale`.
#[must_use]
pub fn ray_endpoint(origin: DVec3, direction: DVec3, scale: f64) -> DVec3 {
    origin + direction * scale
}

/// Average of the origin and [`ray_endpoint`].
#[must_use]
pub fn ray_midpoint(origin: DVec3, direction: DVec3, scale: f64) -> DVec3 {
    (origin + ray_endpoint(origin, direction, scale)) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_and_midpoint() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.1, 0.1, 0.0));
        assert!(ray.endpoint(2.0).abs_diff_eq(DVec3::new(0.2, 0.2, 0.0), 1e-12));
        assert!(ray.midpoint(2.0).abs_diff_eq(DVec3::new(0.1, 0.1, 0.0), 1e-12));
        assert!((ray.length(2.0) - 0.2 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        let origin = DVec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, DVec3::ZERO);
        assert_eq!(ray.endpoint(5.0), origin);
        assert_eq!(ray.midpoint(5.0), origin);
        assert_eq!(ray.segment(5.0).length(), 0.0);
    }
}
