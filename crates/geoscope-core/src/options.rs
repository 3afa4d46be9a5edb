//! Configuration options for geoscope.

use serde::{Deserialize, Serialize};

use crate::draw::LabelStyle;
use crate::error::Result;

/// Global configuration options for geoscope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Whether to recompute scene extents whenever structures change.
    pub auto_compute_scene_extents: bool,

    /// Whether scene bounds are reported as a cube so all axes share a scale.
    pub equal_aspect: bool,

    /// Style of free-standing text labels.
    pub label_style: LabelStyle,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            auto_compute_scene_extents: true,
            equal_aspect: true,
            label_style: LabelStyle::default(),
        }
    }
}

impl Options {
    /// Parses options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert!(options.auto_compute_scene_extents);
        assert!(options.equal_aspect);
        assert_eq!(options.label_style, LabelStyle::default());
    }

    #[test]
    fn test_options_partial_json() {
        let options = Options::from_json(r#"{ "equal_aspect": false }"#).unwrap();
        assert!(!options.equal_aspect);
        assert!(options.auto_compute_scene_extents);
    }

    #[test]
    fn test_options_json_roundtrip() {
        let mut options = Options::default();
        options.label_style.font_size = LabelStyle::FONT_SIZE_LARGE;
        let back = Options::from_json(&options.to_json().unwrap()).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_options_bad_json() {
        assert!(Options::from_json("{ not json").is_err());
    }
}
