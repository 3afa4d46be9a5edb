//! Rendering backend for geoscope-rs.
//!
//! This crate sits between scene structures and an actual drawing surface:
//! - The [`Renderer`] trait, consuming [`geoscope_core::DrawList`]s
//! - [`RecordingRenderer`] for headless use and testing
//! - Named colors in [`palette`]
//! - Image export of textured surfaces

// Color channels are converted between f32 and u8
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod palette;
pub mod recording;
pub mod renderer;
pub mod snapshot;

pub use error::{RenderError, RenderResult};
pub use recording::{DrawCommand, RecordingRenderer, RenderSummary};
pub use renderer::Renderer;
pub use snapshot::{encode_surface_png, save_surface_texture, surface_to_image};
