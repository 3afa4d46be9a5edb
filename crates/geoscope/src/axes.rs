//! Coordinate frame registration and manipulation.

use crate::{
    contains_structure, register_structure, with_structure, with_structure_mut, AxesConfig,
    CoordinateFrame, Pose, Result, Structure,
};

const TYPE_NAME: &str = CoordinateFrame::TYPE_NAME;

/// Registers the axes of `pose` with default appearance.
pub fn register_coordinate_frame(
    name: impl Into<String>,
    pose: Pose,
) -> Result<CoordinateFrameHandle> {
    register_coordinate_frame_with(name, pose, AxesConfig::default())
}

/// Registers the axes of `pose` with the given appearance.
pub fn register_coordinate_frame_with(
    name: impl Into<String>,
    pose: Pose,
    config: AxesConfig,
) -> Result<CoordinateFrameHandle> {
    let name = name.into();
    register_structure(Box::new(CoordinateFrame::new(name.clone(), pose, config)))?;
    Ok(CoordinateFrameHandle { name })
}

/// Gets a registered coordinate frame by name.
#[must_use]
pub fn get_coordinate_frame(name: &str) -> Option<CoordinateFrameHandle> {
    contains_structure(TYPE_NAME, name).then(|| CoordinateFrameHandle {
        name: name.to_string(),
    })
}

/// Handle for a registered coordinate frame.
#[derive(Clone)]
pub struct CoordinateFrameHandle {
    name: String,
}

impl CoordinateFrameHandle {
    /// Returns the name of this coordinate frame.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves the frame.
    pub fn set_pose(&self, pose: Pose) -> &Self {
        with_structure_mut(TYPE_NAME, &self.name, |f: &mut CoordinateFrame| {
            f.set_pose(pose);
        });
        self
    }

    /// Replaces the appearance.
    pub fn set_config(&self, config: AxesConfig) -> &Self {
        with_structure_mut(TYPE_NAME, &self.name, |f: &mut CoordinateFrame| {
            f.set_config(config);
        });
        self
    }

    /// Sets the text drawn at the frame origin.
    pub fn set_label(&self, label: impl Into<String>) -> &Self {
        let label = label.into();
        with_structure_mut(TYPE_NAME, &self.name, |f: &mut CoordinateFrame| {
            let config = AxesConfig {
                label: Some(label),
                ..f.config().clone()
            };
            f.set_config(config);
        });
        self
    }

    /// Shows or hides the frame.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        with_structure_mut(TYPE_NAME, &self.name, |f: &mut CoordinateFrame| {
            f.set_enabled(enabled);
        });
        self
    }

    /// Returns the current appearance.
    #[must_use]
    pub fn config(&self) -> Option<AxesConfig> {
        with_structure(TYPE_NAME, &self.name, |f: &CoordinateFrame| f.config().clone())
    }

    /// Returns the current pose.
    #[must_use]
    pub fn pose(&self) -> Option<Pose> {
        with_structure(TYPE_NAME, &self.name, |f: &CoordinateFrame| *f.pose())
    }
}
