//! Structure trait.
//!
//! A [`Structure`] is a named primitive in the scene, such as a coordinate
//! frame, a camera frustum, or a plane.

use std::any::Any;

use crate::bounds::Bounds;
use crate::draw::DrawList;

/// A geometric primitive that can be placed in the scene.
///
/// Each structure has:
/// - A unique name within its type
/// - Visibility state
/// - A method emitting its draw description
pub trait Structure: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the unique name of this structure.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g., "`CameraFrustum`", "`Plane`").
    fn type_name(&self) -> &'static str;

    /// Returns whether this structure is currently visible.
    fn is_enabled(&self) -> bool;

    /// Sets the visibility of this structure.
    fn set_enabled(&mut self, enabled: bool);

    /// Appends this structure's primitives to `out`.
    fn draw(&self, out: &mut DrawList);

    /// Returns the axis-aligned bounding box in world coordinates.
    ///
    /// Returns `None` if the structure draws nothing with a position.
    fn bounding_box(&self) -> Option<Bounds> {
        let mut list = DrawList::new();
        self.draw(&mut list);
        list.bounds()
    }
}
