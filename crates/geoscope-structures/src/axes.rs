//! Coordinate frame structure: the xyz axes of a pose.

use geoscope_core::{
    Arrow, Axis, DVec3, DrawList, Label, LabelStyle, LineStyle, Pose, Structure, Vec4,
};
use geoscope_render::palette;
use serde::{Deserialize, Serialize};

/// Appearance of a [`CoordinateFrame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Length of each axis arrow.
    pub scale: f64,
    /// Arrow head length as a fraction of the arrow length.
    pub head_ratio: f64,
    pub line_width: f32,
    /// Colors of the x, y and z arrows.
    pub colors: [Vec4; 3],
    /// Text drawn at the frame origin.
    pub label: Option<String>,
    /// Texts drawn next to the x, y and z arrow tips.
    pub axis_labels: Option<[String; 3]>,
}

impl AxesConfig {
    /// Offset of the per-axis labels from the arrow tips.
    pub const AXIS_LABEL_OFFSET: f64 = 0.005;
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            scale: 0.05,
            head_ratio: 0.25,
            line_width: 1.0,
            colors: [palette::RED, palette::GREEN, palette::BLUE],
            label: None,
            axis_labels: None,
        }
    }
}

/// The three axes of a pose drawn as arrows from its origin.
pub struct CoordinateFrame {
    name: String,
    pose: Pose,
    config: AxesConfig,
    enabled: bool,
}

impl CoordinateFrame {
    /// Registry type name.
    pub const TYPE_NAME: &str = "CoordinateFrame";

    /// Creates a coordinate frame for `pose`.
    pub fn new(name: impl Into<String>, pose: Pose, config: AxesConfig) -> Self {
        Self {
            name: name.into(),
            pose,
            config,
            enabled: true,
        }
    }

    /// Gets the pose.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Moves the frame.
    pub fn set_pose(&mut self, pose: Pose) -> &mut Self {
        self.pose = pose;
        self
    }

    /// Gets the configuration.
    pub fn config(&self) -> &AxesConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: AxesConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// World-space tip of the arrow along `axis`.
    pub fn tip(&self, axis: Axis) -> DVec3 {
        self.pose.translation() + self.pose.axis(axis) * self.config.scale
    }
}

impl Structure for CoordinateFrame {
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
        let origin = self.pose.translation();
        for axis in Axis::ALL {
            out.arrows.push(Arrow {
                origin,
                vector: self.pose.axis(axis) * self.config.scale,
                head_ratio: self.config.head_ratio,
                color: self.config.colors[axis.index()],
                width: self.config.line_width,
                style: LineStyle::Solid,
            });
        }

        crate::push_name_label(out, origin, self.config.label.as_deref());

        if let Some(texts) = &self.config.axis_labels {
            for axis in Axis::ALL {
                let style = LabelStyle::default()
                    .with_color(self.config.colors[axis.index()])
                    .with_font_size(LabelStyle::FONT_SIZE_SMALL)
                    .with_offset_scale(AxesConfig::AXIS_LABEL_OFFSET);
                out.labels
                    .push(Label::new(self.tip(axis), texts[axis.index()].clone(), style));
            }
        }
    }
}
