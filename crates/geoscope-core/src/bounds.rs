//! Axis-aligned bounding boxes and equal-aspect scene limits.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds {
    #[must_use]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// A degenerate box containing a single point.
    #[must_use]
    pub fn from_point(point: DVec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// The smallest box containing all points, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |mut b, p| {
            b.include(p);
            b
        }))
    }

    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    #[must_use]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Side lengths along x, y and z.
    #[must_use]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// The cube centered on this box whose side is the largest extent, so
    /// that all three axes share one scale.
    #[must_use]
    pub fn equal_aspect(&self) -> Bounds {
        let center = self.center();
        let radius = 0.5 * self.extent().max_element();
        Bounds {
            min: center - DVec3::splat(radius),
            max: center + DVec3::splat(radius),
        }
    }
}
