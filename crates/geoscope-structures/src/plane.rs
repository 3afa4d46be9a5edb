//! Plane structure: a rectangular patch with its normal.

use geoscope_core::{
    Arrow, DrawList, FilledPolygon, LineBatch, LineStyle, PlanarPatch, Pose, Result, Structure,
    Vec4,
};
use geoscope_render::palette;
use serde::{Deserialize, Serialize};

/// Appearance of a [`Plane`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
    pub face_color: Vec4,
    /// Opacity of the face.
    pub face_alpha: f32,
    pub edge_color: Vec4,
    pub line_width: f32,
    /// Whether to draw the local +z axis from the plane origin.
    pub draw_normal: bool,
    /// Length of the normal arrow.
    pub normal_scale: f64,
    pub normal_color: Vec4,
    /// Text drawn near the plane origin.
    pub label: Option<String>,
}

impl PlaneConfig {
    /// Head length of the normal arrow as a fraction of its length.
    pub const NORMAL_HEAD_RATIO: f64 = 0.3;

    /// The name label sits at the plane origin pushed slightly away from the
    /// world origin.
    pub const LABEL_PUSH: f64 = 1.05;
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            face_color: palette::TAB_BLUE,
            face_alpha: 0.25,
            edge_color: palette::BLACK,
            line_width: 0.5,
            draw_normal: true,
            normal_scale: 0.05,
            normal_color: palette::BLUE,
            label: None,
        }
    }
}

/// A finite rectangle lying on local `z = 0` of a pose.
pub struct Plane {
    name: String,
    patch: PlanarPatch,
    config: PlaneConfig,
    enabled: bool,
}

impl Plane {
    /// Registry type name.
    pub const TYPE_NAME: &str = "Plane";

    /// Creates a `width x height` plane placed by `pose`.
    ///
    /// Fails with [`geoscope_core::GeoscopeError::InvalidExtent`] unless both
    /// sides are positive.
    pub fn new(
        name: impl Into<String>,
        pose: Pose,
        width: f64,
        height: f64,
        config: PlaneConfig,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            patch: PlanarPatch::new(pose, width, height)?,
            config,
            enabled: true,
        })
    }

    /// Gets the underlying patch.
    pub fn patch(&self) -> &PlanarPatch {
        &self.patch
    }

    /// Moves the plane.
    pub fn set_pose(&mut self, pose: Pose) -> &mut Self {
        self.patch = self.patch.with_pose(pose);
        self
    }

    /// Resizes the plane.
    pub fn set_extent(&mut self, width: f64, height: f64) -> Result<&mut Self> {
        self.patch = PlanarPatch::new(*self.patch.pose(), width, height)?;
        Ok(self)
    }

    /// Gets the configuration.
    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: PlaneConfig) -> &mut Self {
        self.config = config;
        self
    }
}

impl Structure for Plane {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn draw(&self, out: &mut DrawList) {
        let config = &self.config;

        out.polygons.push(FilledPolygon {
            vertices: self.patch.corners().to_vec(),
            face_color: palette::with_alpha(config.face_color, config.face_alpha),
            edge_color: Some(config.edge_color),
            edge_width: config.line_width,
        });
        out.lines.push(LineBatch::new(
            self.patch.edges(),
            config.edge_color,
            config.line_width,
        ));

        let origin = self.patch.center();
        if config.draw_normal {
            out.arrows.push(Arrow {
                origin,
                vector: self.patch.normal() * config.normal_scale,
                head_ratio: PlaneConfig::NORMAL_HEAD_RATIO,
                color: config.normal_color,
                width: config.line_width,
                style: LineStyle::Solid,
            });
        }

        crate::push_name_label(
            out,
            origin * PlaneConfig::LABEL_PUSH,
            config.label.as_deref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use geoscope_core::{DVec3, GeoscopeError};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_identity_plane_draw() {
        let plane = Plane::new("pi", Pose::IDENTITY, 1.0, 0.6, PlaneConfig::default()).unwrap();
        let mut list = DrawList::new();
        plane.draw(&mut list);

        assert_eq!(list.polygons.len(), 1);
        let expected = [
            DVec3::new(-0.5, -0.3, 0.0),
            DVec3::new(0.5, -0.3, 0.0),
            DVec3::new(0.5, 0.3, 0.0),
            DVec3::new(-0.5, 0.3, 0.0),
        ];
        for (v, e) in list.polygons[0].vertices.iter().zip(expected) {
            assert!(v.abs_diff_eq(e, 1e-12));
        }
        assert_eq!(list.polygons[0].face_color.w, 0.25);
        assert_eq!(list.segment_count(), 4);
        assert_eq!(list.arrows.len(), 1);
        assert!(list.arrows[0]
            .vector
            .abs_diff_eq(DVec3::new(0.0, 0.0, 0.05), 1e-12));
        assert!(list.labels.is_empty());
    }

    #[test]
    fn test_label_and_no_normal() {
        let config = PlaneConfig {
            draw_normal: false,
            label: Some("pi".into()),
            ..PlaneConfig::default()
        };
        let pose = Pose::translate(DVec3::new(0.2, 0.0, -0.1));
        let plane = Plane::new("pi", pose, 0.2, 0.1, config).unwrap();
        let mut list = DrawList::new();
        plane.draw(&mut list);

        assert!(list.arrows.is_empty());
        assert_eq!(list.labels.len(), 1);
        assert!(list.labels[0]
            .anchor
            .abs_diff_eq(DVec3::new(0.21, 0.0, -0.105), 1e-12));
    }

    #[test]
    fn test_invalid_extent() {
        let err = Plane::new("pi", Pose::IDENTITY, 0.0, 1.0, PlaneConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, GeoscopeError::InvalidExtent { .. }));

        let mut plane = Plane::new("pi", Pose::IDENTITY, 1.0, 1.0, PlaneConfig::default()).unwrap();
        assert!(plane.set_extent(-1.0, 1.0).is_err());
        assert_eq!(plane.patch().width(), 1.0);
    }

    proptest! {
        #[test]
        fn normal_is_unit_and_perpendicular(rx in -3.0f64..3.0, ry in -3.0f64..3.0) {
            let pose = Pose::rotate_y(ry) * Pose::rotate_x(rx);
            let plane = Plane::new("pi", pose, 0.4, 0.2, PlaneConfig::default()).unwrap();
            let n = plane.patch().normal();
            prop_assert!((n.length() - 1.0).abs() < 1e-9);
            for edge in plane.patch().edges() {
                prop_assert!((edge.end - edge.start).dot(n).abs() < 1e-9);
            }
        }
    }
}
