//! Immutable descriptions of what to draw.
//!
//! Geometry is turned into a [`DrawList`] of line batches, filled polygons,
//! arrows, text labels and textured surfaces. A renderer consumes the list;
//! nothing here rasterizes.

use glam::{DVec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::segment::Segment;
use crate::texture::TexturedSurface;

/// Dash pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Segments sharing one color, width and dash pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBatch {
    pub segments: Vec<Segment>,
    pub color: Vec4,
    pub width: f32,
    pub style: LineStyle,
}

impl LineBatch {
    #[must_use]
    pub fn new(segments: Vec<Segment>, color: Vec4, width: f32) -> Self {
        Self {
            segments,
            color,
            width,
            style: LineStyle::Solid,
        }
    }
}

/// A filled polygon with an optional outline.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPolygon {
    pub vertices: Vec<DVec3>,
    pub face_color: Vec4,
    pub edge_color: Option<Vec4>,
    pub edge_width: f32,
}

/// A line from `origin` to `origin + vector` with an arrow head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub origin: DVec3,
    pub vector: DVec3,
    /// Head length as a fraction of the arrow length.
    pub head_ratio: f64,
    pub color: Vec4,
    pub width: f32,
    pub style: LineStyle,
}

impl Arrow {
    #[must_use]
    pub fn tip(&self) -> DVec3 {
        self.origin + self.vector
    }
}

/// Appearance and placement of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font_size: f32,
    pub color: Vec4,
    /// Direction in which the label is shifted away from its anchor.
    pub offset_dir: DVec3,
    /// Length of the shift.
    pub offset_scale: f64,
    /// Background box color, `None` for no box.
    pub background: Option<Vec4>,
}

impl LabelStyle {
    pub const FONT_SIZE_DEFAULT: f32 = 10.0;
    pub const FONT_SIZE_SMALL: f32 = Self::FONT_SIZE_DEFAULT * 0.8;
    pub const FONT_SIZE_LARGE: f32 = Self::FONT_SIZE_DEFAULT * 1.2;

    /// Sets the text color.
    #[must_use]
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the anchor offset length.
    #[must_use]
    pub fn with_offset_scale(mut self, offset_scale: f64) -> Self {
        self.offset_scale = offset_scale;
        self
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: Self::FONT_SIZE_DEFAULT,
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            offset_dir: DVec3::Z,
            offset_scale: 0.01,
            background: Some(Vec4::new(1.0, 1.0, 1.0, 0.7)),
        }
    }
}

/// Text anchored at a world-space point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub anchor: DVec3,
    pub text: String,
    pub style: LabelStyle,
}

impl Label {
    #[must_use]
    pub fn new(anchor: DVec3, text: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            anchor,
            text: text.into(),
            style,
        }
    }

    /// Where the text is drawn: the anchor shifted by
    /// `offset_dir * offset_scale`.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.anchor + self.style.offset_dir * self.style.offset_scale
    }
}

/// Everything one or more structures want drawn.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub lines: Vec<LineBatch>,
    pub polygons: Vec<FilledPolygon>,
    pub arrows: Vec<Arrow>,
    pub labels: Vec<Label>,
    pub surfaces: Vec<TexturedSurface>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of primitives of all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
            + self.polygons.len()
            + self.arrows.len()
            + self.labels.len()
            + self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of line segments over all batches.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lines.iter().map(|l| l.segments.len()).sum()
    }

    /// Moves all primitives of `other` into `self`.
    pub fn append(&mut self, other: &mut DrawList) {
        self.lines.append(&mut other.lines);
        self.polygons.append(&mut other.polygons);
        self.arrows.append(&mut other.arrows);
        self.labels.append(&mut other.labels);
        self.surfaces.append(&mut other.surfaces);
    }

    /// Bounding box of all drawn geometry. Labels only contribute their
    /// anchor, not the extent of their text.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let lines = self
            .lines
            .iter()
            .flat_map(|l| l.segments.iter().flat_map(|s| [s.start, s.end]));
        let polygons = self.polygons.iter().flat_map(|p| p.vertices.iter().copied());
        let arrows = self.arrows.iter().flat_map(|a| [a.origin, a.tip()]);
        let labels = self.labels.iter().map(|l| l.anchor);
        let surfaces = self
            .surfaces
            .iter()
            .flat_map(|s| s.positions().iter().copied());

        Bounds::from_points(
            lines
                .chain(polygons)
                .chain(arrows)
                .chain(labels)
                .chain(surfaces),
        )
    }
}
