//! Camera image structure: an image shown on the far plane of a frustum.

use geoscope_core::{
    map_image_to_quad, Bounds, DrawList, FieldOfView, Frustum, ImageOrigin, Pose, RasterImage, Result,
    Structure, TexelGrid, TexturedSurface,
};
use serde::{Deserialize, Serialize};

/// How a [`CameraImage`] is placed and resampled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraImageConfig {
    /// Distance from the camera center to the image plane.
    pub scale: f64,
    /// Resolution the image is resampled to.
    pub texel_grid: TexelGrid,
    /// Which stored row is the top of the image.
    pub origin: ImageOrigin,
    /// Multiplier on the image alpha; clamped to [0, 1].
    pub opacity: f32,
}

impl Default for CameraImageConfig {
    fn default() -> Self {
        Self {
            scale: 0.05,
            texel_grid: TexelGrid::default(),
            origin: ImageOrigin::UpperLeft,
            opacity: 1.0,
        }
    }
}

/// An image textured onto the far plane of a camera frustum.
///
/// The textured surface is computed eagerly, so an invalid image or texel
/// grid is reported when the structure is created or reconfigured, never
/// while drawing.
pub struct CameraImage {
    name: String,
    pose: Pose,
    fov: FieldOfView,
    image: RasterImage,
    config: CameraImageConfig,
    surface: TexturedSurface,
    enabled: bool,
}

impl CameraImage {
    /// Registry type name.
    pub const TYPE_NAME: &str = "CameraImage";

    /// Creates a camera image for a camera at `pose` with field of view `fov`.
    pub fn new(
        name: impl Into<String>,
        pose: Pose,
        fov: FieldOfView,
        image: RasterImage,
        config: CameraImageConfig,
    ) -> Result<Self> {
        let name = name.into();
        let surface = project(&name, &pose, fov, &image, &config)?;
        Ok(Self {
            name,
            pose,
            fov,
            image,
            config,
            surface,
            enabled: true,
        })
    }

    /// Gets the camera pose.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Moves the camera, re-projecting the image.
    pub fn set_pose(&mut self, pose: Pose) -> Result<&mut Self> {
        self.surface = project(&self.name, &pose, self.fov, &self.image, &self.config)?;
        self.pose = pose;
        Ok(self)
    }

    /// Gets the field of view.
    pub fn fov(&self) -> FieldOfView {
        self.fov
    }

    /// Gets the source image.
    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    /// Replaces the source image, re-projecting it.
    pub fn set_image(&mut self, image: RasterImage) -> Result<&mut Self> {
        self.surface = project(&self.name, &self.pose, self.fov, &image, &self.config)?;
        self.image = image;
        Ok(self)
    }

    /// Gets the configuration.
    pub fn config(&self) -> &CameraImageConfig {
        &self.config
    }

    /// Replaces the configuration, re-projecting the image.
    ///
    /// On error the previous configuration is kept.
    pub fn set_config(&mut self, config: CameraImageConfig) -> Result<&mut Self> {
        self.surface = project(&self.name, &self.pose, self.fov, &self.image, &config)?;
        self.config = config;
        Ok(self)
    }

    /// The projected, resampled image.
    pub fn surface(&self) -> &TexturedSurface {
        &self.surface
    }
}

fn project(
    name: &str,
    pose: &Pose,
    fov: FieldOfView,
    image: &RasterImage,
    config: &CameraImageConfig,
) -> Result<TexturedSurface> {
    if !(0.0..=1.0).contains(&config.opacity) {
        log::warn!(
            "camera image '{name}': opacity {} clamped to [0, 1]",
            config.opacity
        );
    }
    let quad = Frustum::new(fov, pose, config.scale).quad();
    map_image_to_quad(image, &quad, config.texel_grid, config.origin, config.opacity)
}

impl Structure for CameraImage {
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
        out.surfaces.push(self.surface.clone());
    }

    fn bounding_box(&self) -> Option<Bounds> {
        Bounds::from_points(self.surface.positions().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use geoscope_core::{chessboard, fov_from_intrinsics, DVec3, GeoscopeError, Intrinsics};

    use super::*;

    fn reference_fov() -> FieldOfView {
        let k = Intrinsics::new(800.0, 800.0, 320.0, 240.0);
        fov_from_intrinsics(&k, 480, 640).unwrap()
    }

    fn board() -> RasterImage {
        chessboard(8, 6, 10).unwrap()
    }

    #[test]
    fn test_surface_corners_match_frustum() {
        let pose = Pose::translate(DVec3::new(0.1, 0.0, 0.0)) * Pose::rotate_y(0.3);
        let config = CameraImageConfig {
            scale: 0.1,
            ..CameraImageConfig::default()
        };
        let image = CameraImage::new("cam", pose, reference_fov(), board(), config).unwrap();
        let corners = Frustum::new(reference_fov(), &pose, 0.1).corners();
        let s = image.surface();

        assert_eq!((s.rows(), s.cols()), (32, 32));
        let last = s.rows() - 1;
        assert!(s.position(0, 0).abs_diff_eq(corners[0], 1e-12));
        assert!(s.position(0, last).abs_diff_eq(corners[1], 1e-12));
        assert!(s.position(last, last).abs_diff_eq(corners[2], 1e-12));
        assert!(s.position(last, 0).abs_diff_eq(corners[3], 1e-12));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = CameraImageConfig {
            texel_grid: TexelGrid::new(0, 10),
            ..CameraImageConfig::default()
        };
        let err = CameraImage::new("cam", Pose::IDENTITY, reference_fov(), board(), config)
            .err()
            .unwrap();
        assert!(matches!(err, GeoscopeError::InvalidImageOrGrid(_)));
    }

    #[test]
    fn test_failed_set_config_keeps_previous() {
        let mut image = CameraImage::new(
            "cam",
            Pose::IDENTITY,
            reference_fov(),
            board(),
            CameraImageConfig::default(),
        )
        .unwrap();

        let bad = CameraImageConfig {
            texel_grid: TexelGrid::new(4, 0),
            ..CameraImageConfig::default()
        };
        assert!(image.set_config(bad).is_err());
        assert_eq!(image.config(), &CameraImageConfig::default());
        assert_eq!(image.surface().rows(), 32);

        let coarse = CameraImageConfig {
            texel_grid: TexelGrid::new(6, 8),
            opacity: 0.5,
            ..CameraImageConfig::default()
        };
        image.set_config(coarse).unwrap();
        assert_eq!((image.surface().rows(), image.surface().cols()), (6, 8));
        assert!(image.surface().colors().iter().all(|c| c.w == 0.5));
    }

    #[test]
    fn test_opacity_clamped() {
        let config = CameraImageConfig {
            opacity: 3.0,
            ..CameraImageConfig::default()
        };
        let image =
            CameraImage::new("cam", Pose::IDENTITY, reference_fov(), board(), config).unwrap();
        assert!(image.surface().colors().iter().all(|c| c.w == 1.0));
    }

    #[test]
    fn test_draw_emits_surface() {
        let image = CameraImage::new(
            "cam",
            Pose::IDENTITY,
            reference_fov(),
            board(),
            CameraImageConfig::default(),
        )
        .unwrap();
        let mut list = DrawList::new();
        image.draw(&mut list);
        assert_eq!(list.surfaces.len(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(image.bounding_box(), list.bounds());
    }

    #[test]
    fn test_bounding_box_spans_far_plane() {
        let pose = Pose::translate(DVec3::new(0.0, 0.0, -0.2)) * Pose::rotate_x(0.4);
        let image = CameraImage::new(
            "cam",
            pose,
            reference_fov(),
            board(),
            CameraImageConfig::default(),
        )
        .unwrap();
        let corners = Frustum::new(reference_fov(), &pose, 0.05).corners();
        let expected = Bounds::from_points(corners).unwrap();
        let bb = image.bounding_box().unwrap();
        assert!(bb.min.abs_diff_eq(expected.min, 1e-12));
        assert!(bb.max.abs_diff_eq(expected.max, 1e-12));
    }
}
