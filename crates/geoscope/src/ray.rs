//! Ray registration and manipulation.

use crate::{
    contains_structure, register_structure, with_structure, with_structure_mut, DVec3, LineStyle,
    RayArrow, RayConfig, Result, Structure,
};

/// Registers a ray from `origin` along `direction` with default appearance.
pub fn register_ray(name: impl Into<String>, origin: DVec3, direction: DVec3) -> Result<RayHandle> {
    register_ray_with(name, origin, direction, RayConfig::default())
}

/// Registers a ray with the given appearance.
pub fn register_ray_with(
    name: impl Into<String>,
    origin: DVec3,
    direction: DVec3,
    config: RayConfig,
) -> Result<RayHandle> {
    let name = name.into();
    register_structure(Box::new(RayArrow::new(name.clone(), origin, direction, config)))?;
    Ok(RayHandle { name })
}

/// Gets a registered ray by name.
#[must_use]
pub fn get_ray(name: &str) -> Option<RayHandle> {
    contains_structure(RayArrow::TYPE_NAME, name).then(|| RayHandle {
        name: name.to_string(),
    })
}

/// Handle for a registered ray.
#[derive(Clone)]
pub struct RayHandle {
    name: String,
}

impl RayHandle {
    /// Returns the name of this ray.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the origin and direction.
    pub fn set_ray(&self, origin: DVec3, direction: DVec3) -> &Self {
        with_structure_mut(RayArrow::TYPE_NAME, &self.name, |r: &mut RayArrow| {
            r.set_ray(origin, direction);
        });
        self
    }

    /// Sets the line style.
    pub fn set_line_style(&self, line_style: LineStyle) -> &Self {
        with_structure_mut(RayArrow::TYPE_NAME, &self.name, |r: &mut RayArrow| {
            let config = RayConfig {
                line_style,
                ..r.config().clone()
            };
            r.set_config(config);
        });
        self
    }

    /// Replaces the appearance.
    pub fn set_config(&self, config: RayConfig) -> &Self {
        with_structure_mut(RayArrow::TYPE_NAME, &self.name, |r: &mut RayArrow| {
            r.set_config(config);
        });
        self
    }

    /// Shows or hides the ray.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        with_structure_mut(RayArrow::TYPE_NAME, &self.name, |r: &mut RayArrow| {
            r.set_enabled(enabled);
        });
        self
    }

    /// Drawn endpoint of the ray.
    #[must_use]
    pub fn endpoint(&self) -> Option<DVec3> {
        with_structure(RayArrow::TYPE_NAME, &self.name, |r: &RayArrow| r.endpoint())
    }
}
