//! Camera frustum structure.

use geoscope_core::{
    DrawList, FieldOfView, FilledPolygon, Frustum, LineBatch, Pose, Structure, Vec4,
};
use geoscope_render::palette;
use serde::{Deserialize, Serialize};

/// Appearance of a [`CameraFrustum`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrustumConfig {
    /// Distance from the camera center to the far plane.
    pub scale: f64,
    pub color: Vec4,
    pub line_width: f32,
    /// Whether to fill the far-plane polygon.
    pub fill: bool,
    /// Opacity of the filled far plane.
    pub fill_alpha: f32,
    /// Text drawn at the camera center.
    pub label: Option<String>,
}

impl Default for FrustumConfig {
    fn default() -> Self {
        Self {
            scale: 0.05,
            color: palette::BLACK,
            line_width: 1.0,
            fill: false,
            fill_alpha: 0.15,
            label: None,
        }
    }
}

/// The viewing pyramid of a camera, truncated at a fixed distance.
pub struct CameraFrustum {
    name: String,
    pose: Pose,
    fov: FieldOfView,
    config: FrustumConfig,
    enabled: bool,
}

impl CameraFrustum {
    /// Registry type name.
    pub const TYPE_NAME: &str = "CameraFrustum";

    /// Creates a frustum for a camera at `pose` with field of view `fov`.
    pub fn new(
        name: impl Into<String>,
        pose: Pose,
        fov: FieldOfView,
        config: FrustumConfig,
    ) -> Self {
        Self {
            name: name.into(),
            pose,
            fov,
            config,
            enabled: true,
        }
    }

    /// Gets the camera pose.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Moves the camera.
    pub fn set_pose(&mut self, pose: Pose) -> &mut Self {
        self.pose = pose;
        self
    }

    /// Gets the field of view.
    pub fn fov(&self) -> FieldOfView {
        self.fov
    }

    /// Sets the field of view.
    pub fn set_fov(&mut self, fov: FieldOfView) -> &mut Self {
        self.fov = fov;
        self
    }

    /// Gets the configuration.
    pub fn config(&self) -> &FrustumConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: FrustumConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// The frustum geometry at the configured scale.
    pub fn frustum(&self) -> Frustum {
        Frustum::new(self.fov, &self.pose, self.config.scale)
    }
}

impl Structure for CameraFrustum {
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
        let frustum = self.frustum();

        out.lines.push(LineBatch::new(
            frustum.wireframe().to_vec(),
            self.config.color,
            self.config.line_width,
        ));

        if self.config.fill {
            out.polygons.push(FilledPolygon {
                vertices: frustum.corners().to_vec(),
                face_color: palette::with_alpha(self.config.color, self.config.fill_alpha),
                edge_color: None,
                edge_width: 0.0,
            });
        }

        crate::push_name_label(out, frustum.apex(), self.config.label.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use geoscope_core::{fov_from_intrinsics, random_pose, DVec3, Intrinsics};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn reference_fov() -> FieldOfView {
        let k = Intrinsics::new(800.0, 800.0, 320.0, 240.0);
        fov_from_intrinsics(&k, 480, 640).unwrap()
    }

    #[test]
    fn test_wireframe_only_by_default() {
        let camera = CameraFrustum::new(
            "cam",
            Pose::IDENTITY,
            reference_fov(),
            FrustumConfig::default(),
        );
        let mut list = DrawList::new();
        camera.draw(&mut list);

        assert_eq!(list.lines.len(), 1);
        assert_eq!(list.segment_count(), 8);
        assert_eq!(list.lines[0].color, palette::BLACK);
        assert!(list.polygons.is_empty());
        assert!(list.labels.is_empty());
    }

    #[test]
    fn test_fill_and_label() {
        let config = FrustumConfig {
            fill: true,
            label: Some("cam".into()),
            ..FrustumConfig::default()
        };
        let pose = Pose::translate(DVec3::new(0.0, 0.0, 1.0));
        let camera = CameraFrustum::new("cam", pose, reference_fov(), config);
        let mut list = DrawList::new();
        camera.draw(&mut list);

        assert_eq!(list.polygons.len(), 1);
        assert_eq!(list.polygons[0].vertices.len(), 4);
        assert_eq!(list.polygons[0].face_color.w, 0.15);
        assert_eq!(list.labels.len(), 1);
        assert_eq!(list.labels[0].anchor, DVec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_corners_at_scale_for_random_poses() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = FrustumConfig {
            scale: 0.1,
            ..FrustumConfig::default()
        };
        for _ in 0..16 {
            let pose = random_pose(&mut rng);
            let camera = CameraFrustum::new("cam", pose, reference_fov(), config.clone());
            let frustum = camera.frustum();
            for corner in frustum.corners() {
                assert!((corner.distance(frustum.apex()) - 0.1).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_bounding_box_contains_apex_and_corners() {
        let camera = CameraFrustum::new(
            "cam",
            Pose::IDENTITY,
            reference_fov(),
            FrustumConfig::default(),
        );
        let bb = camera.bounding_box().unwrap();
        assert_eq!(bb.min.z, 0.0);
        assert!(bb.max.z > 0.0 && bb.max.z < 0.05);
        assert!(bb.min.x < 0.0 && bb.max.x > 0.0);
    }
}
