//! Ray structure: an arrow from an origin along a scaled direction.

use geoscope_core::{Arrow, DVec3, DrawList, LineStyle, Ray, Structure, Vec4};
use geoscope_render::palette;
use serde::{Deserialize, Serialize};

/// Appearance of a [`RayArrow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayConfig {
    /// Multiplier on the direction vector.
    pub scale: f64,
    pub line_width: f32,
    pub line_style: LineStyle,
    pub color: Vec4,
    /// Arrow head length as a fraction of the ray length.
    pub head_ratio: f64,
    /// Text drawn at the midpoint.
    pub label: Option<String>,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            line_width: 0.5,
            line_style: LineStyle::Solid,
            color: palette::TAB_BLUE,
            head_ratio: 0.05,
            label: None,
        }
    }
}

/// A ray drawn from `origin` to `origin + scale * direction`.
pub struct RayArrow {
    name: String,
    ray: Ray,
    config: RayConfig,
    enabled: bool,
}

impl RayArrow {
    /// Registry type name.
    pub const TYPE_NAME: &str = "Ray";

    /// Creates a ray structure.
    pub fn new(
        name: impl Into<String>,
        origin: DVec3,
        direction: DVec3,
        config: RayConfig,
    ) -> Self {
        Self {
            name: name.into(),
            ray: Ray::new(origin, direction),
            config,
            enabled: true,
        }
    }

    /// Gets the ray.
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Replaces the ray.
    pub fn set_ray(&mut self, origin: DVec3, direction: DVec3) -> &mut Self {
        self.ray = Ray::new(origin, direction);
        self
    }

    /// Gets the configuration.
    pub fn config(&self) -> &RayConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: RayConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Drawn endpoint.
    pub fn endpoint(&self) -> DVec3 {
        self.ray.endpoint(self.config.scale)
    }

    /// Drawn midpoint, where the name label goes.
    pub fn midpoint(&self) -> DVec3 {
        self.ray.midpoint(self.config.scale)
    }
}

impl Structure for RayArrow {
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
        out.arrows.push(Arrow {
            origin: self.ray.origin,
            vector: self.ray.direction * self.config.scale,
            head_ratio: self.config.head_ratio,
            color: self.config.color,
            width: self.config.line_width,
            style: self.config.line_style,
        });
        crate::push_name_label(out, self.midpoint(), self.config.label.as_deref());
    }
}
