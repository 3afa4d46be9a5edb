//! Plane registration and manipulation.

use crate::{
    contains_structure, register_structure, try_with_structure_mut, with_structure,
    with_structure_mut, DVec3, Plane, PlaneConfig, Pose, Result, Structure,
};

/// Registers a `width x height` plane placed by `pose`, with default
/// appearance.
///
/// # Errors
///
/// Fails with [`crate::GeoscopeError::InvalidExtent`] unless both sides are
/// positive.
pub fn register_plane(
    name: impl Into<String>,
    pose: Pose,
    width: f64,
    height: f64,
) -> Result<PlaneHandle> {
    register_plane_with(name, pose, width, height, PlaneConfig::default())
}

/// Registers a plane with the given appearance.
pub fn register_plane_with(
    name: impl Into<String>,
    pose: Pose,
    width: f64,
    height: f64,
    config: PlaneConfig,
) -> Result<PlaneHandle> {
    let name = name.into();
    register_structure(Box::new(Plane::new(name.clone(), pose, width, height, config)?))?;
    Ok(PlaneHandle { name })
}

/// Gets a registered plane by name.
#[must_use]
pub fn get_plane(name: &str) -> Option<PlaneHandle> {
    contains_structure(Plane::TYPE_NAME, name).then(|| PlaneHandle {
        name: name.to_string(),
    })
}

/// Handle for a registered plane.
#[derive(Clone)]
pub struct PlaneHandle {
    name: String,
}

impl PlaneHandle {
    /// Returns the name of this plane.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves the plane.
    pub fn set_pose(&self, pose: Pose) -> &Self {
        with_structure_mut(Plane::TYPE_NAME, &self.name, |p: &mut Plane| {
            p.set_pose(pose);
        });
        self
    }

    /// Resizes the plane; on error the previous size is kept.
    pub fn set_extent(&self, width: f64, height: f64) -> Result<&Self> {
        try_with_structure_mut(Plane::TYPE_NAME, &self.name, |p: &mut Plane| {
            p.set_extent(width, height).map(|_| ())
        })?;
        Ok(self)
    }

    /// Replaces the appearance.
    pub fn set_config(&self, config: PlaneConfig) -> &Self {
        with_structure_mut(Plane::TYPE_NAME, &self.name, |p: &mut Plane| {
            p.set_config(config);
        });
        self
    }

    /// Shows or hides the plane.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        with_structure_mut(Plane::TYPE_NAME, &self.name, |p: &mut Plane| {
            p.set_enabled(enabled);
        });
        self
    }

    /// World-space corners in counter-clockwise order.
    #[must_use]
    pub fn corners(&self) -> Option<[DVec3; 4]> {
        with_structure(Plane::TYPE_NAME, &self.name, |p: &Plane| p.patch().corners())
    }

    /// World-space unit normal.
    #[must_use]
    pub fn normal(&self) -> Option<DVec3> {
        with_structure(Plane::TYPE_NAME, &self.name, |p: &Plane| p.patch().normal())
    }
}
