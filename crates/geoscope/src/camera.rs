//! Camera frustum and camera image registration and manipulation.
//!
//! A camera is usually shown as a frustum plus, optionally, the image it
//! captured textured onto the frustum's far plane. Both are registered under
//! their own type, so they may share a name; [`crate::remove_structure`]
//! then removes both.
//!
//! # Example
//!
//! ```no_run
//! use geoscope::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     let k = Intrinsics::new(800.0, 800.0, 320.0, 240.0);
//!     let fov = fov_from_intrinsics(&k, 480, 640)?;
//!     let pose = Pose::translate(DVec3::new(0.0, 0.0, -0.2));
//!
//!     register_camera_frustum("cam", pose, fov)?.set_scale(0.1);
//!     let config = CameraImageConfig {
//!         scale: 0.1,
//!         ..CameraImageConfig::default()
//!     };
//!     register_camera_image("cam", pose, fov, chessboard(8, 6, 80)?, config)?;
//!     Ok(())
//! }
//! ```

use crate::{
    contains_structure, register_structure, try_with_structure_mut, with_structure,
    with_structure_mut, CameraFrustum, CameraImage, CameraImageConfig, FieldOfView, Frustum,
    FrustumConfig, Pose, RasterImage, Result, Structure, TexturedSurface,
};

/// Registers a camera frustum with default appearance.
pub fn register_camera_frustum(
    name: impl Into<String>,
    pose: Pose,
    fov: FieldOfView,
) -> Result<CameraFrustumHandle> {
    register_camera_frustum_with(name, pose, fov, FrustumConfig::default())
}

/// Registers a camera frustum with the given appearance.
pub fn register_camera_frustum_with(
    name: impl Into<String>,
    pose: Pose,
    fov: FieldOfView,
    config: FrustumConfig,
) -> Result<CameraFrustumHandle> {
    let name = name.into();
    register_structure(Box::new(CameraFrustum::new(name.clone(), pose, fov, config)))?;
    Ok(CameraFrustumHandle { name })
}

/// Gets a registered camera frustum by name.
#[must_use]
pub fn get_camera_frustum(name: &str) -> Option<CameraFrustumHandle> {
    contains_structure(CameraFrustum::TYPE_NAME, name).then(|| CameraFrustumHandle {
        name: name.to_string(),
    })
}

/// Registers an image shown on the far plane of a camera.
///
/// # Errors
///
/// Fails with [`crate::GeoscopeError::InvalidImageOrGrid`] if the image or
/// the configured texel grid has a zero dimension.
pub fn register_camera_image(
    name: impl Into<String>,
    pose: Pose,
    fov: FieldOfView,
    image: RasterImage,
    config: CameraImageConfig,
) -> Result<CameraImageHandle> {
    let name = name.into();
    let camera_image = CameraImage::new(name.clone(), pose, fov, image, config)?;
    register_structure(Box::new(camera_image))?;
    Ok(CameraImageHandle { name })
}

/// Gets a registered camera image by name.
#[must_use]
pub fn get_camera_image(name: &str) -> Option<CameraImageHandle> {
    contains_structure(CameraImage::TYPE_NAME, name).then(|| CameraImageHandle {
        name: name.to_string(),
    })
}

/// Runs `f` on the named camera frustum.
pub fn with_camera_frustum<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&mut CameraFrustum) -> R,
{
    with_structure_mut(CameraFrustum::TYPE_NAME, name, f)
}

/// Runs `f` on the named camera image.
pub fn with_camera_image_ref<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&CameraImage) -> R,
{
    with_structure(CameraImage::TYPE_NAME, name, f)
}

/// Handle for a registered camera frustum.
#[derive(Clone)]
pub struct CameraFrustumHandle {
    name: String,
}

impl CameraFrustumHandle {
    /// Returns the name of this camera frustum.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves the camera.
    pub fn set_pose(&self, pose: Pose) -> &Self {
        with_camera_frustum(&self.name, |c| {
            c.set_pose(pose);
        });
        self
    }

    /// Sets the field of view.
    pub fn set_fov(&self, fov: FieldOfView) -> &Self {
        with_camera_frustum(&self.name, |c| {
            c.set_fov(fov);
        });
        self
    }

    /// Sets the distance from the camera center to the far plane.
    pub fn set_scale(&self, scale: f64) -> &Self {
        with_camera_frustum(&self.name, |c| {
            let config = FrustumConfig {
                scale,
                ..c.config().clone()
            };
            c.set_config(config);
        });
        self
    }

    /// Replaces the appearance.
    pub fn set_config(&self, config: FrustumConfig) -> &Self {
        with_camera_frustum(&self.name, |c| {
            c.set_config(config);
        });
        self
    }

    /// Shows or hides the frustum.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        with_camera_frustum(&self.name, |c| c.set_enabled(enabled));
        self
    }

    /// Returns the frustum geometry at the configured scale.
    #[must_use]
    pub fn frustum(&self) -> Option<Frustum> {
        with_structure(CameraFrustum::TYPE_NAME, &self.name, |c: &CameraFrustum| {
            c.frustum()
        })
    }

    /// Returns the current appearance.
    #[must_use]
    pub fn config(&self) -> Option<FrustumConfig> {
        with_structure(CameraFrustum::TYPE_NAME, &self.name, |c: &CameraFrustum| {
            c.config().clone()
        })
    }
}

/// Handle for a registered camera image.
///
/// Edits re-project the image and can fail; on failure the previous state
/// is kept.
#[derive(Clone)]
pub struct CameraImageHandle {
    name: String,
}

impl CameraImageHandle {
    /// Returns the name of this camera image.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves the camera.
    pub fn set_pose(&self, pose: Pose) -> Result<&Self> {
        try_with_structure_mut(CameraImage::TYPE_NAME, &self.name, |c: &mut CameraImage| {
            c.set_pose(pose).map(|_| ())
        })?;
        Ok(self)
    }

    /// Replaces the image.
    pub fn set_image(&self, image: RasterImage) -> Result<&Self> {
        try_with_structure_mut(CameraImage::TYPE_NAME, &self.name, |c: &mut CameraImage| {
            c.set_image(image).map(|_| ())
        })?;
        Ok(self)
    }

    /// Replaces the placement and resampling settings.
    pub fn set_config(&self, config: CameraImageConfig) -> Result<&Self> {
        try_with_structure_mut(CameraImage::TYPE_NAME, &self.name, |c: &mut CameraImage| {
            c.set_config(config).map(|_| ())
        })?;
        Ok(self)
    }

    /// Shows or hides the image.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        with_structure_mut(CameraImage::TYPE_NAME, &self.name, |c: &mut CameraImage| {
            c.set_enabled(enabled);
        });
        self
    }

    /// Returns a copy of the projected image.
    #[must_use]
    pub fn surface(&self) -> Option<TexturedSurface> {
        with_camera_image_ref(&self.name, |c| c.surface().clone())
    }

    /// Returns the current settings.
    #[must_use]
    pub fn config(&self) -> Option<CameraImageConfig> {
        with_camera_image_ref(&self.name, |c| c.config().clone())
    }
}
