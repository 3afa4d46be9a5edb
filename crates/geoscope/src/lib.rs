//! geoscope: declarative 3D visualization of multi-view geometry.
//!
//! geoscope places geometric primitives in a shared 3D scene: coordinate
//! frames, camera frustums, images projected onto a camera's far plane,
//! rectangular planes, rays, and text labels. The scene is turned into a
//! [`DrawList`] of lines, polygons, arrows, labels, and textured surfaces
//! that any [`Renderer`] can consume.
//!
//! # Quick Start
//!
//! ```no_run
//! use geoscope::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     register_coordinate_frame("world", Pose::IDENTITY)?;
//!
//!     let k = Intrinsics::new(800.0, 800.0, 320.0, 240.0);
//!     let fov = fov_from_intrinsics(&k, 480, 640)?;
//!     let pose = Pose::translate(DVec3::new(0.0, 0.0, -0.2));
//!     register_camera_frustum("camera", pose, fov)?;
//!
//!     let mut renderer = RecordingRenderer::new();
//!     render(&mut renderer)?;
//!     println!("{}", renderer.summary());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Structures
//!
//! - [`CoordinateFrame`] - The xyz axes of a pose
//! - [`CameraFrustum`] - A camera's viewing pyramid
//! - [`CameraImage`] - An image on the far plane of a camera
//! - [`Plane`] - A finite rectangle
//! - [`RayArrow`] - A ray drawn as an arrow
//! - [`TextLabel`] - Free-standing text

mod axes;
mod camera;
mod init;
mod label;
mod plane;
mod ray;
mod scene;

pub use axes::*;
pub use camera::*;
pub use init::*;
pub use label::*;
pub use plane::*;
pub use ray::*;
pub use scene::*;

// Re-export core types
pub use geoscope_core::{
    camera::{fov_from_intrinsics, FieldOfView, Intrinsics},
    draw::{Arrow, DrawList, FilledPolygon, Label, LabelStyle, LineBatch, LineStyle},
    error::{GeoscopeError, Result},
    frustum::{far_plane_corners, Frustum},
    options::Options,
    plane::{plane_corners, plane_normal, PlanarPatch},
    pose::{random_pose, Axis, Pose},
    raster::{chessboard, Channels, ImageOrigin, RasterImage},
    ray::{ray_endpoint, ray_midpoint, Ray},
    state::{with_context, with_context_mut, Context},
    structure::Structure,
    texture::{map_image_to_quad, Quad, TexelGrid, TexturedSurface},
    Bounds, Segment,
};

// Re-export render types
pub use geoscope_render::{
    palette, save_surface_texture, DrawCommand, RecordingRenderer, RenderSummary, Renderer,
};

// Re-export structures
pub use geoscope_structures::{
    AxesConfig, CameraFrustum, CameraImage, CameraImageConfig, CoordinateFrame, FrustumConfig,
    Plane, PlaneConfig, RayArrow, RayConfig, TextLabel,
};

pub use glam::{DMat3, DMat4, DVec3, Vec4};

use geoscope_core::state;

/// Adds a structure to the scene and updates the scene extents.
fn register_structure(structure: Box<dyn Structure>) -> Result<()> {
    state::try_with_context_mut(|ctx| -> Result<()> {
        ctx.registry.register(structure)?;
        ctx.structures_changed();
        Ok(())
    })
    .ok_or(GeoscopeError::NotInitialized)?
}

/// Returns whether a structure of the given type and name is registered.
fn contains_structure(type_name: &str, name: &str) -> bool {
    state::try_with_context(|ctx| ctx.registry.contains(type_name, name)).unwrap_or(false)
}

/// Runs `f` on a registered structure, downcast to `T`.
fn with_structure<T, F, R>(type_name: &str, name: &str, f: F) -> Option<R>
where
    T: Structure,
    F: FnOnce(&T) -> R,
{
    state::try_with_context(|ctx| ctx.registry.get_as::<T>(type_name, name).map(f)).flatten()
}

/// Runs `f` on a registered structure, downcast to `T`, then updates the
/// scene extents.
fn with_structure_mut<T, F, R>(type_name: &str, name: &str, f: F) -> Option<R>
where
    T: Structure,
    F: FnOnce(&mut T) -> R,
{
    state::try_with_context_mut(|ctx| {
        let result = ctx.registry.get_as_mut::<T>(type_name, name).map(f);
        if result.is_some() {
            ctx.structures_changed();
        }
        result
    })
    .flatten()
}

/// Like [`with_structure_mut`] for fallible edits; a missing structure is
/// reported as [`GeoscopeError::StructureNotFound`].
fn try_with_structure_mut<T, F>(type_name: &str, name: &str, f: F) -> Result<()>
where
    T: Structure,
    F: FnOnce(&mut T) -> Result<()>,
{
    with_structure_mut(type_name, name, f)
        .ok_or_else(|| GeoscopeError::StructureNotFound(name.to_string()))?
}
