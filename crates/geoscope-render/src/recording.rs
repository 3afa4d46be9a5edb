//! A renderer that records primitives instead of drawing them.
//!
//! Used for headless operation and in tests.

use std::fmt;

use geoscope_core::{Arrow, Bounds, FilledPolygon, Label, LineBatch, TexturedSurface};

use crate::renderer::Renderer;

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Limits(Bounds),
    Lines(LineBatch),
    Polygon(FilledPolygon),
    Arrow(Arrow),
    Label(Label),
    Surface(TexturedSurface),
}

/// Counts of everything a [`RecordingRenderer`] has received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub line_batches: usize,
    pub segments: usize,
    pub polygons: usize,
    pub arrows: usize,
    pub labels: usize,
    pub surfaces: usize,
    pub surface_cells: usize,
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} segments in {} batches, {} polygons, {} arrows, {} labels, {} surfaces ({} cells)",
            self.segments,
            self.line_batches,
            self.polygons,
            self.arrows,
            self.labels,
            self.surfaces,
            self.surface_cells
        )
    }
}

/// Records every primitive it is asked to draw, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forgets all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The most recent limits received, if any.
    pub fn limits(&self) -> Option<Bounds> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Limits(b) => Some(*b),
            _ => None,
        })
    }

    /// Texts of all recorded labels.
    pub fn label_texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label(label) => Some(label.text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All recorded surfaces.
    pub fn surfaces(&self) -> impl Iterator<Item = &TexturedSurface> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Surface(s) => Some(s),
            _ => None,
        })
    }

    /// Tallies the recorded commands.
    pub fn summary(&self) -> RenderSummary {
        let mut summary = RenderSummary::default();
        for command in &self.commands {
            match command {
                DrawCommand::Limits(_) => {}
                DrawCommand::Lines(batch) => {
                    summary.line_batches += 1;
                    summary.segments += batch.segments.len();
                }
                DrawCommand::Polygon(_) => summary.polygons += 1,
                DrawCommand::Arrow(_) => summary.arrows += 1,
                DrawCommand::Label(_) => summary.labels += 1,
                DrawCommand::Surface(surface) => {
                    summary.surfaces += 1;
                    summary.surface_cells += surface.cells().count();
                }
            }
        }
        summary
    }
}

impl Renderer for RecordingRenderer {
    fn set_limits(&mut self, limits: &Bounds) {
        self.commands.push(DrawCommand::Limits(*limits));
    }

    fn draw_lines(&mut self, lines: &LineBatch) {
        self.commands.push(DrawCommand::Lines(lines.clone()));
    }

    fn draw_polygon(&mut self, polygon: &FilledPolygon) {
        self.commands.push(DrawCommand::Polygon(polygon.clone()));
    }

    fn draw_arrow(&mut self, arrow: &Arrow) {
        self.commands.push(DrawCommand::Arrow(*arrow));
    }

    fn draw_label(&mut self, label: &Label) {
        self.commands.push(DrawCommand::Label(label.clone()));
    }

    fn draw_surface(&mut self, surface: &TexturedSurface) {
        self.commands.push(DrawCommand::Surface(surface.clone()));
    }
}
