//! Line segments between two world-space points.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
}

impl Segment {
    #[must_use]
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> DVec3 {
        (self.start + self.end) * 0.5
    }

    /// Returns the closed polyline through `points` as segments, last point
    /// connected back to the first.
    #[must_use]
    pub fn closed_loop(points: &[DVec3]) -> Vec<Segment> {
        let n = points.len();
        (0..n)
            .map(|i| Segment::new(points[i], points[(i + 1) % n]))
            .collect()
    }
}
