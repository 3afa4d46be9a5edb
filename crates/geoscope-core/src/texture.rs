//! Projection of a raster image onto an arbitrary 3D quadrilateral.
//!
//! The image is resampled with nearest-neighbor lookups to a texel grid;
//! the grid positions come from bilinear interpolation of the four quad
//! corners. A planar quad gives a flat textured rectangle, a non-planar one a
//! smoothly warped surface.

use glam::{DVec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::{GeoscopeError, Result};
use crate::raster::{ImageOrigin, RasterImage};

/// Four corners in top-left, top-right, bottom-right, bottom-left order.
///
/// The order fixes the parameterization: `u` runs from left to right and
/// `v` from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    corners: [DVec3; 4],
}

impl Quad {
    #[must_use]
    pub fn new(top_left: DVec3, top_right: DVec3, bottom_right: DVec3, bottom_left: DVec3) -> Self {
        Self {
            corners: [top_left, top_right, bottom_right, bottom_left],
        }
    }

    /// Creates a quad from corners already in TL, TR, BR, BL order.
    #[must_use]
    pub fn from_corners(corners: [DVec3; 4]) -> Self {
        Self { corners }
    }

    #[must_use]
    pub fn corners(&self) -> [DVec3; 4] {
        self.corners
    }

    /// Bilinear blend of the corners at `(u, v)`:
    /// `(1-u)(1-v) TL + u(1-v) TR + uv BR + (1-u)v BL`.
    #[must_use]
    pub fn point_at(&self, u: f64, v: f64) -> DVec3 {
        let [tl, tr, br, bl] = self.corners;
        tl * ((1.0 - u) * (1.0 - v)) + tr * (u * (1.0 - v)) + br * (u * v) + bl * ((1.0 - u) * v)
    }
}

/// Resolution at which an image is resampled before projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TexelGrid {
    pub rows: u32,
    pub cols: u32,
}

impl TexelGrid {
    #[must_use]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl Default for TexelGrid {
    fn default() -> Self {
        Self { rows: 32, cols: 32 }
    }
}

/// A grid of 3D positions with one RGBA color per grid vertex.
///
/// Row 0 is the top edge of the quad (TL to TR), column 0 the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedSurface {
    rows: usize,
    cols: usize,
    positions: Vec<DVec3>,
    colors: Vec<Vec4>,
}

/// One filled face of a [`TexturedSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCell {
    /// Corners in TL, TR, BR, BL order.
    pub corners: [DVec3; 4],
    /// Color of the cell's top-left vertex.
    pub color: Vec4,
}

impl TexturedSurface {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Row-major vertex colors.
    #[must_use]
    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    #[must_use]
    pub fn position(&self, row: usize, col: usize) -> DVec3 {
        self.positions[row * self.cols + col]
    }

    #[must_use]
    pub fn color(&self, row: usize, col: usize) -> Vec4 {
        self.colors[row * self.cols + col]
    }

    /// Iterates over the `(rows - 1) x (cols - 1)` faces between grid
    /// vertices, each colored by its top-left vertex.
    pub fn cells(&self) -> impl Iterator<Item = SurfaceCell> + '_ {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows.saturating_sub(1)).flat_map(move |i| {
            (0..cols.saturating_sub(1)).map(move |j| SurfaceCell {
                corners: [
                    self.position(i, j),
                    self.position(i, j + 1),
                    self.position(i + 1, j + 1),
                    self.position(i + 1, j),
                ],
                color: self.color(i, j),
            })
        })
    }
}

/// Maps `image` onto `quad` at the resolution of `grid`.
///
/// 1. Samples are normalized to RGBA in [0, 1] (gray broadcast to RGB).
/// 2. With [`ImageOrigin::LowerLeft`], image rows are flipped so that the
///    last stored row lands on the top edge of the quad.
/// 3. Each axis is resampled by nearest neighbor: `linspace(0, n - 1, m)`
///    rounded and clamped to valid indices.
/// 4. Vertex `(i, j)` is placed at [`Quad::point_at`] with
///    `u = j / (cols - 1)` and `v = i / (rows - 1)`; a single row or column
///    sits at parameter 0.
/// 5. Alpha is the source alpha (1 when the image has none) times
///    `opacity`, which is clamped to [0, 1].
///
/// Fails with [`GeoscopeError::InvalidImageOrGrid`] if the image or the
/// grid has a zero dimension.
pub fn map_image_to_quad(
    image: &RasterImage,
    quad: &Quad,
    grid: TexelGrid,
    origin: ImageOrigin,
    opacity: f32,
) -> Result<TexturedSurface> {
    if image.is_empty() {
        return Err(GeoscopeError::InvalidImageOrGrid(format!(
            "image is {}x{}",
            image.width(),
            image.height()
        )));
    }
    if grid.rows == 0 || grid.cols == 0 {
        return Err(GeoscopeError::InvalidImageOrGrid(format!(
            "texel grid is ({}, {})",
            grid.rows, grid.cols
        )));
    }

    let opacity = opacity.clamp(0.0, 1.0);
    let row_indices = resample_indices(image.height(), grid.rows);
    let col_indices = resample_indices(image.width(), grid.cols);
    let (rows, cols) = (grid.rows as usize, grid.cols as usize);

    let mut positions = Vec::with_capacity(rows * cols);
    let mut colors = Vec::with_capacity(rows * cols);

    for (i, &src_row) in row_indices.iter().enumerate() {
        let src_row = match origin {
            ImageOrigin::UpperLeft => src_row,
            ImageOrigin::LowerLeft => image.height() - 1 - src_row,
        };
        let v = grid_parameter(i, rows);
        for (j, &src_col) in col_indices.iter().enumerate() {
            let u = grid_parameter(j, cols);
            positions.push(quad.point_at(u, v));

            let texel = image.texel(src_row, src_col);
            colors.push(texel.truncate().extend(texel.w * opacity));
        }
    }

    Ok(TexturedSurface {
        rows,
        cols,
        positions,
        colors,
    })
}

/// Nearest-neighbor source indices for resampling `source_len` samples to
/// `target_len`: `linspace(0, source_len - 1, target_len)` rounded to the
/// nearest integer and clamped to the valid range.
fn resample_indices(source_len: u32, target_len: u32) -> Vec<u32> {
    let last = f64::from(source_len - 1);
    if target_len == 1 {
        return vec![0];
    }
    let step = last / f64::from(target_len - 1);
    (0..target_len)
        .map(|k| (f64::from(k) * step).round().clamp(0.0, last) as u32)
        .collect()
}

/// Normalized position of index `k` among `n` evenly spaced samples on [0, 1].
fn grid_parameter(k: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        k as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{chessboard, Channels};

    fn unit_quad() -> Quad {
        Quad::new(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
        )
    }

    fn skewed_quad() -> Quad {
        Quad::new(
            DVec3::new(-0.3, 0.2, 1.0),
            DVec3::new(0.7, 0.1, 1.2),
            DVec3::new(0.9, -0.8, 0.4),
            DVec3::new(-0.1, -0.6, 0.9),
        )
    }

    /// 2x2 RGB image: red, green / blue, white.
    fn four_color_image() -> RasterImage {
        RasterImage::from_u8(
            2,
            2,
            Channels::Rgb,
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
        )
        .unwrap()
    }

    #[test]
    fn test_grid_corners_reproduce_quad_corners() {
        let quad = skewed_quad();
        let surface = map_image_to_quad(
            &chessboard(8, 6, 10).unwrap(),
            &quad,
            TexelGrid::new(7, 11),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap();

        let [tl, tr, br, bl] = quad.corners();
        assert!(surface.position(0, 0).abs_diff_eq(tl, 1e-12));
        assert!(surface.position(0, 10).abs_diff_eq(tr, 1e-12));
        assert!(surface.position(6, 10).abs_diff_eq(br, 1e-12));
        assert!(surface.position(6, 0).abs_diff_eq(bl, 1e-12));
    }

    #[test]
    fn test_interior_points_are_bilinear() {
        let quad = unit_quad();
        let surface = map_image_to_quad(
            &four_color_image(),
            &quad,
            TexelGrid::new(3, 5),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap();
        // u = 0.25, v = 0.5 on a unit square with TL at (0, 1)
        assert!(surface
            .position(1, 1)
            .abs_diff_eq(DVec3::new(0.25, 0.5, 0.0), 1e-12));
    }

    #[test]
    fn test_non_planar_quad_is_warped_not_rejected() {
        let quad = Quad::new(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        );
        let surface = map_image_to_quad(
            &four_color_image(),
            &quad,
            TexelGrid::new(3, 3),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap();
        assert!((surface.position(1, 1).z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_colors_follow_image_layout() {
        let surface = map_image_to_quad(
            &four_color_image(),
            &unit_quad(),
            TexelGrid::new(2, 2),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap();
        assert_eq!(surface.color(0, 0), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(surface.color(0, 1), Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(surface.color(1, 0), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(surface.color(1, 1), Vec4::ONE);
    }

    #[test]
    fn test_lower_left_origin_flips_rows() {
        let surface = map_image_to_quad(
            &four_color_image(),
            &unit_quad(),
            TexelGrid::new(2, 2),
            ImageOrigin::LowerLeft,
            1.0,
        )
        .unwrap();
        assert_eq!(surface.color(0, 0), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(surface.color(1, 0), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_alpha_is_scaled_by_opacity() {
        let image = RasterImage::from_f32(1, 1, Channels::Rgba, vec![1.0, 1.0, 1.0, 0.5]).unwrap();
        let surface = map_image_to_quad(
            &image,
            &unit_quad(),
            TexelGrid::new(2, 2),
            ImageOrigin::UpperLeft,
            0.5,
        )
        .unwrap();
        assert!(surface.colors().iter().all(|c| (c.w - 0.25).abs() < 1e-6));

        let surface = map_image_to_quad(
            &four_color_image(),
            &unit_quad(),
            TexelGrid::new(2, 2),
            ImageOrigin::UpperLeft,
            3.0,
        )
        .unwrap();
        assert!(surface.colors().iter().all(|c| c.w == 1.0));
    }

    #[test]
    fn test_upsampling_repeats_nearest_texels() {
        let surface = map_image_to_quad(
            &four_color_image(),
            &unit_quad(),
            TexelGrid::new(4, 4),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap();
        // linspace(0, 1, 4) = [0, 1/3, 2/3, 1] -> [0, 0, 1, 1]
        assert_eq!(surface.color(1, 1), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(surface.color(2, 2), Vec4::ONE);
    }

    #[test]
    fn test_resample_indices() {
        assert_eq!(resample_indices(640, 1), vec![0]);
        assert_eq!(resample_indices(5, 3), vec![0, 2, 4]);
        assert_eq!(resample_indices(10, 4), vec![0, 3, 6, 9]);
        assert_eq!(resample_indices(1, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_cells() {
        let surface = map_image_to_quad(
            &four_color_image(),
            &unit_quad(),
            TexelGrid::new(3, 4),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap();
        let cells: Vec<_> = surface.cells().collect();
        assert_eq!(cells.len(), 2 * 3);
        assert_eq!(cells[0].corners[0], surface.position(0, 0));
        assert_eq!(cells[0].corners[2], surface.position(1, 1));
        assert_eq!(cells[0].color, surface.color(0, 0));
    }

    #[test]
    fn test_zero_sized_grid_rejected() {
        let err = map_image_to_quad(
            &four_color_image(),
            &unit_quad(),
            TexelGrid::new(0, 10),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap_err();
        assert!(matches!(err, GeoscopeError::InvalidImageOrGrid(_)));
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let image = RasterImage::from_u8(0, 0, Channels::Rgb, Vec::new()).unwrap();
        let err = map_image_to_quad(
            &image,
            &unit_quad(),
            TexelGrid::default(),
            ImageOrigin::UpperLeft,
            1.0,
        )
        .unwrap_err();
        assert!(matches!(err, GeoscopeError::InvalidImageOrGrid(_)));
    }
}
