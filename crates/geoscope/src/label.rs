//! Text label registration.

use crate::{
    contains_structure, register_structure, state, with_structure_mut, DVec3, GeoscopeError,
    LabelStyle, Result, Structure, TextLabel,
};

/// Registers text anchored at `anchor`, styled with the scene's
/// [`crate::Options::label_style`].
pub fn register_label(
    name: impl Into<String>,
    anchor: DVec3,
    text: impl Into<String>,
) -> Result<LabelHandle> {
    let style = state::try_with_context(|ctx| ctx.options.label_style)
        .ok_or(GeoscopeError::NotInitialized)?;
    register_label_with(name, anchor, text, style)
}

/// Registers text anchored at `anchor` with an explicit style.
pub fn register_label_with(
    name: impl Into<String>,
    anchor: DVec3,
    text: impl Into<String>,
    style: LabelStyle,
) -> Result<LabelHandle> {
    let name = name.into();
    register_structure(Box::new(TextLabel::new(name.clone(), anchor, text, style)))?;
    Ok(LabelHandle { name })
}

/// Gets a registered label by name.
#[must_use]
pub fn get_label(name: &str) -> Option<LabelHandle> {
    contains_structure(TextLabel::TYPE_NAME, name).then(|| LabelHandle {
        name: name.to_string(),
    })
}

/// Handle for a registered text label.
#[derive(Clone)]
pub struct LabelHandle {
    name: String,
}

impl LabelHandle {
    /// Returns the name of this label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_text(&self, text: impl Into<String>) -> &Self {
        let text = text.into();
        with_structure_mut(TextLabel::TYPE_NAME, &self.name, |l: &mut TextLabel| {
            l.set_text(text);
        });
        self
    }

    pub fn set_anchor(&self, anchor: DVec3) -> &Self {
        with_structure_mut(TextLabel::TYPE_NAME, &self.name, |l: &mut TextLabel| {
            l.set_anchor(anchor);
        });
        self
    }

    pub fn set_style(&self, style: LabelStyle) -> &Self {
        with_structure_mut(TextLabel::TYPE_NAME, &self.name, |l: &mut TextLabel| {
            l.set_style(style);
        });
        self
    }

    pub fn set_enabled(&self, enabled: bool) -> &Self {
        with_structure_mut(TextLabel::TYPE_NAME, &self.name, |l: &mut TextLabel| {
            l.set_enabled(enabled);
        });
        self
    }
}
