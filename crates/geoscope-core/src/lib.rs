//! Core geometry and scene abstractions for geoscope-rs.
//!
//! This crate provides the geometric computation layer and the types shared
//! by the rest of the workspace:
//! - [`Pose`] algebra: elementary rotations, translations, composition, random poses
//! - [`Intrinsics`] to [`FieldOfView`] conversion
//! - [`Frustum`] far-plane corners and wireframe
//! - [`map_image_to_quad`], projecting a [`RasterImage`] onto a 3D [`Quad`]
//! - [`PlanarPatch`] corners and normal, [`Ray`] endpoints
//! - [`DrawList`] descriptions of what to draw
//! - [`Structure`] trait, structure registry and global state management

// Geometry code intentionally converts between pixel indices and floats
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod camera;
pub mod draw;
pub mod error;
pub mod frustum;
pub mod options;
pub mod plane;
pub mod pose;
pub mod raster;
pub mod ray;
pub mod registry;
pub mod segment;
pub mod state;
pub mod structure;
pub mod texture;

pub use bounds::Bounds;
pub use camera::{fov_from_intrinsics, FieldOfView, Intrinsics};
pub use draw::{Arrow, DrawList, FilledPolygon, Label, LabelStyle, LineBatch, LineStyle};
pub use error::{GeoscopeError, Result};
pub use frustum::{far_plane_corners, Frustum};
pub use options::Options;
pub use plane::{plane_corners, plane_normal, PlanarPatch};
pub use pose::{random_pose, Axis, Pose};
pub use raster::{chessboard, Channels, ImageOrigin, RasterImage};
pub use ray::{ray_endpoint, ray_midpoint, Ray};
pub use registry::Registry;
pub use segment::Segment;
pub use state::{with_context, with_context_mut, Context};
pub use structure::Structure;
pub use texture::{map_image_to_quad, Quad, SurfaceCell, TexelGrid, TexturedSurface};

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DVec3, Vec4};
