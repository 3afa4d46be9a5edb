//! The renderer seam.
//!
//! Structures never draw directly. They emit a [`DrawList`], and a
//! [`Renderer`] turns it into pixels, vector graphics, or anything else.

use geoscope_core::{Arrow, Bounds, DrawList, FilledPolygon, Label, LineBatch, TexturedSurface};

/// A backend that consumes draw primitives.
pub trait Renderer {
    /// Called once per frame, before any primitive, with the scene limits.
    fn set_limits(&mut self, _limits: &Bounds) {}

    /// Draws a batch of segments.
    fn draw_lines(&mut self, lines: &LineBatch);

    /// Draws a filled polygon and its outline.
    fn draw_polygon(&mut self, polygon: &FilledPolygon);

    /// Draws an arrow.
    fn draw_arrow(&mut self, arrow: &Arrow);

    /// Draws a text label at [`Label::position`].
    fn draw_label(&mut self, label: &Label);

    /// Draws a per-vertex colored surface.
    fn draw_surface(&mut self, surface: &TexturedSurface);

    /// Submits a whole draw list.
    ///
    /// Primitives are submitted back to front by kind: surfaces, polygons,
    /// lines, arrows, then labels so that text always ends up on top.
    fn submit(&mut self, list: &DrawList) {
        for surface in &list.surfaces {
            self.draw_surface(surface);
        }
        for polygon in &list.polygons {
            self.draw_polygon(polygon);
        }
        for lines in &list.lines {
            self.draw_lines(lines);
        }
        for arrow in &list.arrows {
            self.draw_arrow(arrow);
        }
        for label in &list.labels {
            self.draw_label(label);
        }
    }
}
