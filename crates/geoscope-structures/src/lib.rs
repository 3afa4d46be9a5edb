//! Structure implementations for geoscope-rs.
//!
//! This crate provides the concrete primitives that can be placed in a scene:
//! - Coordinate frames (xyz axes)
//! - Camera frustums
//! - Camera images projected onto a frustum's far plane
//! - Rectangular planes
//! - Rays
//! - Free-standing text labels

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod axes;
pub mod camera_frustum;
pub mod camera_image;
pub mod label;
pub mod plane;
pub mod ray;

pub use axes::{AxesConfig, CoordinateFrame};
pub use camera_frustum::{CameraFrustum, FrustumConfig};
pub use camera_image::{CameraImage, CameraImageConfig};
pub use label::TextLabel;
pub use plane::{Plane, PlaneConfig};
pub use ray::{RayArrow, RayConfig};

use geoscope_core::{DVec3, DrawList, Label, LabelStyle};

/// Pushes a default-styled name label at `anchor`, if there is a name.
pub(crate) fn push_name_label(out: &mut DrawList, anchor: DVec3, text: Option<&str>) {
    if let Some(text) = text {
        out.labels
            .push(Label::new(anchor, text, LabelStyle::default()));
    }
}
