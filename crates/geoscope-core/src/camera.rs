//! Pinhole intrinsics and the field of view they imply.

use glam::{DMat3, DVec3};

use crate::error::{GeoscopeError, Result};

/// Pinhole camera intrinsic matrix `K`.
///
/// ```text
/// | fx  0  cx |
/// |  0 fy  cy |
/// |  0  0   1 |
/// ```
///
/// Only the focal lengths are used, to derive a [`FieldOfView`]; the matrix
/// is never inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intrinsics(DMat3);

impl Intrinsics {
    /// Creates intrinsics from focal lengths and principal point, in pixels.
    #[must_use]
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self(DMat3::from_cols(
            DVec3::new(fx, 0.0, 0.0),
            DVec3::new(0.0, fy, 0.0),
            DVec3::new(cx, cy, 1.0),
        ))
    }

    /// Wraps a column-major glam matrix.
    #[must_use]
    pub fn from_matrix(k: DMat3) -> Self {
        Self(k)
    }

    /// Creates intrinsics from a row-major array, as `K` is usually written.
    #[must_use]
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self(DMat3::from_cols_array_2d(&rows).transpose())
    }

    /// Returns the intrinsic matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat3 {
        self.0
    }

    /// Focal length along x, in pixels.
    #[must_use]
    pub fn fx(&self) -> f64 {
        self.0.x_axis.x
    }

    /// Focal length along y, in pixels.
    #[must_use]
    pub fn fy(&self) -> f64 {
        self.0.y_axis.y
    }

    /// Principal point x coordinate, in pixels.
    #[must_use]
    pub fn cx(&self) -> f64 {
        self.0.z_axis.x
    }

    /// Principal point y coordinate, in pixels.
    #[must_use]
    pub fn cy(&self) -> f64 {
        self.0.z_axis.y
    }

    /// Field of view for an image of the given shape.
    ///
    /// See [`fov_from_intrinsics`].
    pub fn field_of_view(&self, image_height: u32, image_width: u32) -> Result<FieldOfView> {
        fov_from_intrinsics(self, image_height, image_width)
    }
}

/// Horizontal and vertical angular extent of a camera, in radians.
///
/// Both angles lie in the open interval (0, pi); the constructor rejects
/// anything else, so frustum geometry never sees a diverging tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    horizontal: f64,
    vertical: f64,
}

impl FieldOfView {
    /// Creates a field of view from angles in radians.
    pub fn new(horizontal: f64, vertical: f64) -> Result<Self> {
        let valid = |a: f64| a.is_finite() && a > 0.0 && a < std::f64::consts::PI;
        if !valid(horizontal) || !valid(vertical) {
            return Err(GeoscopeError::InvalidFov {
                horizontal,
                vertical,
            });
        }
        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Creates a field of view from angles in degrees.
    pub fn from_degrees(horizontal: f64, vertical: f64) -> Result<Self> {
        Self::new(horizontal.to_radians(), vertical.to_radians())
    }

    /// Horizontal angle in radians.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    /// Vertical angle in radians.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    /// Returns `(tan(h / 2), tan(v / 2))`.
    #[must_use]
    pub fn half_tangents(&self) -> (f64, f64) {
        ((self.horizontal / 2.0).tan(), (self.vertical / 2.0).tan())
    }

    /// Width over height of the far-plane rectangle.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let (tx, ty) = self.half_tangents();
        tx / ty
    }
}

/// Derives the field of view of a pinhole camera.
///
/// `hfov = 2 atan(width / (2 fx))` and `vfov = 2 atan(height / (2 fy))`.
/// Fails with [`GeoscopeError::InvalidIntrinsics`] when a focal length is
/// not strictly positive or is so far from the image size that an angle
/// degenerates to 0 or pi, and with [`GeoscopeError::InvalidImageOrGrid`]
/// when the image shape has a zero dimension.
pub fn fov_from_intrinsics(
    intrinsics: &Intrinsics,
    image_height: u32,
    image_width: u32,
) -> Result<FieldOfView> {
    let (fx, fy) = (intrinsics.fx(), intrinsics.fy());
    let positive = |f: f64| f.is_finite() && f > 0.0;
    if !positive(fx) || !positive(fy) {
        return Err(GeoscopeError::InvalidIntrinsics { fx, fy });
    }
    if image_height == 0 || image_width == 0 {
        return Err(GeoscopeError::InvalidImageOrGrid(format!(
            "image shape ({image_height}, {image_width}) has a zero dimension"
        )));
    }

    let hfov = 2.0 * (f64::from(image_width) / (2.0 * fx)).atan();
    let vfov = 2.0 * (f64::from(image_height) / (2.0 * fy)).atan();
    FieldOfView::new(hfov, vfov).map_err(|_| GeoscopeError::InvalidIntrinsics { fx, fy })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_k() -> Intrinsics {
        Intrinsics::from_rows([[800.0, 0.0, 320.0], [0.0, 800.0, 240.0], [0.0, 0.0, 1.0]])
    }

    #[test]
    fn test_intrinsics_accessors() {
        let k = reference_k();
        assert_eq!(k.fx(), 800.0);
        assert_eq!(k.fy(), 800.0);
        assert_eq!(k.cx(), 320.0);
        assert_eq!(k.cy(), 240.0);
        assert_eq!(k, Intrinsics::new(800.0, 800.0, 320.0, 240.0));
    }

    #[test]
    fn test_fov_reference_camera() {
        let fov = fov_from_intrinsics(&reference_k(), 480, 640).unwrap();
        assert!((fov.horizontal() - 2.0 * 0.4f64.atan()).abs() < 1e-12);
        assert!((fov.vertical() - 2.0 * 0.3f64.atan()).abs() < 1e-12);
        assert!((fov.horizontal() - 0.7610).abs() < 1e-4);
        assert!((fov.vertical() - 0.5829).abs() < 1e-4);
    }

    #[test]
    fn test_fov_half_tangents_match_pixel_ratio() {
        let fov = reference_k().field_of_view(480, 640).unwrap();
        let (tx, ty) = fov.half_tangents();
        assert!((tx - 640.0 / 1600.0).abs() < 1e-12);
        assert!((ty - 480.0 / 1600.0).abs() < 1e-12);
        assert!((fov.aspect_ratio() - 640.0 / 480.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_focal_length_rejected() {
        for (fx, fy) in [(0.0, 800.0), (800.0, -1.0), (f64::NAN, 800.0)] {
            let k = Intrinsics::new(fx, fy, 320.0, 240.0);
            let err = fov_from_intrinsics(&k, 480, 640).unwrap_err();
            assert!(matches!(err, GeoscopeError::InvalidIntrinsics { .. }));
        }
    }

    #[test]
    fn test_extreme_focal_lengths_rejected_as_intrinsics() {
        for fx in [1e-15, f64::MAX] {
            let k = Intrinsics::new(fx, 800.0, 320.0, 240.0);
            let err = fov_from_intrinsics(&k, 480, 640).unwrap_err();
            assert!(matches!(err, GeoscopeError::InvalidIntrinsics { .. }));
        }
    }

    #[test]
    fn test_zero_image_shape_rejected() {
        let err = fov_from_intrinsics(&reference_k(), 0, 640).unwrap_err();
        assert!(matches!(err, GeoscopeError::InvalidImageOrGrid(_)));
    }

    #[test]
    fn test_fov_range_validation() {
        assert!(FieldOfView::new(1.0, 0.5).is_ok());
        assert!(FieldOfView::from_degrees(90.0, 60.0).is_ok());
        for (h, v) in [(0.0, 0.5), (1.0, std::f64::consts::PI), (-0.1, 0.5), (1.0, f64::INFINITY)] {
            assert!(matches!(
                FieldOfView::new(h, v),
                Err(GeoscopeError::InvalidFov { .. })
            ));
        }
    }
}
