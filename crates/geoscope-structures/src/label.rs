//! Free-standing text label structure.

use geoscope_core::{DVec3, DrawList, Label, LabelStyle, Structure};

/// Text anchored at a world-space point.
pub struct TextLabel {
    name: String,
    label: Label,
    enabled: bool,
}

impl TextLabel {
    /// Registry type name.
    pub const TYPE_NAME: &str = "TextLabel";

    pub fn new(
        name: impl Into<String>,
        anchor: DVec3,
        text: impl Into<String>,
        style: LabelStyle,
    ) -> Self {
        Self {
            name: name.into(),
            label: Label::new(anchor, text, style),
            enabled: true,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.label.text = text.into();
        self
    }

    pub fn set_anchor(&mut self, anchor: DVec3) -> &mut Self {
        self.label.anchor = anchor;
        self
    }

    pub fn set_style(&mut self, style: LabelStyle) -> &mut Self {
        self.label.style = style;
        self
    }
}

impl Structure for TextLabel {
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
        out.labels.push(self.label.clone());
    }
}
