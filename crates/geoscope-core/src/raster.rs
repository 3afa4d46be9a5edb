//! In-memory raster images used as camera textures.

use std::path::Path;

use glam::Vec4;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{GeoscopeError, Result};

/// Image origin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageOrigin {
    /// Image row 0 is the top row (standard screen convention).
    #[default]
    UpperLeft,
    /// Image row 0 is the bottom row (OpenGL convention).
    LowerLeft,
}

/// Channel layout of a raster image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// One sample per pixel, broadcast to RGB when sampled.
    Gray,
    Rgb,
    Rgba,
}

impl Channels {
    /// Number of samples per pixel.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }

    #[must_use]
    pub fn has_alpha(self) -> bool {
        self == Channels::Rgba
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Samples {
    /// Integer samples in 0..=255.
    U8(Vec<u8>),
    /// Floating samples, expected in [0, 1].
    F32(Vec<f32>),
}

/// A row-major raster image, row 0 first.
///
/// Samples are kept in their source representation and normalized to
/// [0, 1] on access: 8-bit samples are divided by 255, float samples pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: Channels,
    samples: Samples,
}

impl RasterImage {
    /// Creates an image from 8-bit samples.
    pub fn from_u8(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        check_len(width, height, channels, data.len())?;
        Ok(Self {
            width,
            height,
            channels,
            samples: Samples::U8(data),
        })
    }

    /// Creates an image from floating samples in [0, 1].
    pub fn from_f32(width: u32, height: u32, channels: Channels, data: Vec<f32>) -> Result<Self> {
        check_len(width, height, channels, data.len())?;
        Ok(Self {
            width,
            height,
            channels,
            samples: Samples::F32(data),
        })
    }

    /// Converts a decoded image, keeping 8-bit and 32-bit float data as is.
    ///
    /// Other pixel formats are converted to 8-bit RGB or RGBA.
    #[must_use]
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (channels, samples) = match image {
            DynamicImage::ImageLuma8(buf) => (Channels::Gray, Samples::U8(buf.as_raw().clone())),
            DynamicImage::ImageRgb8(buf) => (Channels::Rgb, Samples::U8(buf.as_raw().clone())),
            DynamicImage::ImageRgba8(buf) => (Channels::Rgba, Samples::U8(buf.as_raw().clone())),
            DynamicImage::ImageRgb32F(buf) => (Channels::Rgb, Samples::F32(buf.as_raw().clone())),
            DynamicImage::ImageRgba32F(buf) => {
                (Channels::Rgba, Samples::F32(buf.as_raw().clone()))
            }
            other if other.color().has_alpha() => {
                (Channels::Rgba, Samples::U8(other.to_rgba8().into_raw()))
            }
            other => (Channels::Rgb, Samples::U8(other.to_rgb8().into_raw())),
        };
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    /// Loads an image file in any format the `image` crate can decode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)?;
        log::debug!(
            "loaded image {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        Ok(Self::from_dynamic(&decoded))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.channels.has_alpha()
    }

    /// Returns true when the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the normalized RGBA value at `(row, col)`, row 0 first.
    ///
    /// Gray is broadcast to RGB; images without alpha report an alpha of 1.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn texel(&self, row: u32, col: u32) -> Vec4 {
        assert!(
            row < self.height && col < self.width,
            "texel ({row}, {col}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let n = self.channels.count();
        let start = (row as usize * self.width as usize + col as usize) * n;
        let mut s = [0.0f32; 4];
        for (k, value) in s.iter_mut().take(n).enumerate() {
            *value = self.sample(start + k);
        }
        match self.channels {
            Channels::Gray => Vec4::new(s[0], s[0], s[0], 1.0),
            Channels::Rgb => Vec4::new(s[0], s[1], s[2], 1.0),
            Channels::Rgba => Vec4::from_array(s),
        }
    }

    /// Paints the rectangle of `rows x cols` pixels starting at `(top, left)`.
    ///
    /// The rectangle is clipped to the image. Gray images receive the mean
    /// of the RGB components; alpha is ignored unless the image has an alpha
    /// channel.
    pub fn fill_rect(&mut self, top: u32, left: u32, rows: u32, cols: u32, color: Vec4) {
        let bottom = top.saturating_add(rows).min(self.height);
        let right = left.saturating_add(cols).min(self.width);
        let values: Vec<f32> = match self.channels {
            Channels::Gray => vec![(color.x + color.y + color.z) / 3.0],
            Channels::Rgb => color.truncate().to_array().to_vec(),
            Channels::Rgba => color.to_array().to_vec(),
        };
        let n = self.channels.count();
        let width = self.width as usize;

        for row in top..bottom {
            for col in left..right {
                let start = (row as usize * width + col as usize) * n;
                for (k, &v) in values.iter().enumerate() {
                    match &mut self.samples {
                        Samples::U8(data) => data[start + k] = to_u8(v),
                        Samples::F32(data) => data[start + k] = v,
                    }
                }
            }
        }
    }

    fn sample(&self, index: usize) -> f32 {
        match &self.samples {
            Samples::U8(data) => f32::from(data[index]) / 255.0,
            Samples::F32(data) => data[index],
        }
    }
}

fn check_len(width: u32, height: u32, channels: Channels, actual: usize) -> Result<()> {
    let expected = width as usize * height as usize * channels.count();
    if expected != actual {
        return Err(GeoscopeError::SizeMismatch { expected, actual });
    }
    Ok(())
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Generates an RGB chessboard test pattern.
///
/// The image is `cols * square_size` pixels wide and `rows * square_size`
/// pixels tall; the top-left square is black. Fails with
/// [`GeoscopeError::InvalidImageOrGrid`] when a side overflows `u32`.
pub fn chessboard(cols: u32, rows: u32, square_size: u32) -> Result<RasterImage> {
    let (Some(width), Some(height)) = (cols.checked_mul(square_size), rows.checked_mul(square_size))
    else {
        return Err(GeoscopeError::InvalidImageOrGrid(format!(
            "chessboard of {cols}x{rows} squares of {square_size} pixels is too large"
        )));
    };
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for row in 0..height {
        for col in 0..width {
            let white = (row / square_size + col / square_size) % 2 == 1;
            let v = if white { 1.0 } else { 0.0 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    Ok(RasterImage {
        width,
        height,
        channels: Channels::Rgb,
        samples: Samples::F32(data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_samples_are_normalized() {
        let img = RasterImage::from_u8(1, 1, Channels::Rgb, vec![255, 0, 51]).unwrap();
        let t = img.texel(0, 0);
        assert!((t - Vec4::new(1.0, 0.0, 0.2, 1.0)).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_f32_samples_pass_through() {
        let img = RasterImage::from_f32(1, 1, Channels::Rgba, vec![0.25, 0.5, 0.75, 0.5]).unwrap();
        assert_eq!(img.texel(0, 0), Vec4::new(0.25, 0.5, 0.75, 0.5));
        assert!(img.has_alpha());
    }

    #[test]
    fn test_gray_is_broadcast() {
        let img = RasterImage::from_u8(2, 1, Channels::Gray, vec![0, 255]).unwrap();
        assert_eq!(img.texel(0, 0), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(img.texel(0, 1), Vec4::ONE);
    }

    #[test]
    fn test_size_mismatch() {
        let err = RasterImage::from_u8(2, 2, Channels::Rgb, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            GeoscopeError::SizeMismatch {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_zero_sized_image_is_empty() {
        let img = RasterImage::from_f32(0, 4, Channels::Gray, Vec::new()).unwrap();
        assert!(img.is_empty());
    }

    #[test]
    fn test_chessboard_pattern() {
        let img = chessboard(8, 6, 80).unwrap();
        assert_eq!(img.width(), 640);
        assert_eq!(img.height(), 480);
        assert_eq!(img.texel(0, 0), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(img.texel(0, 80), Vec4::ONE);
        assert_eq!(img.texel(80, 80), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(img.texel(479, 639), Vec4::ONE);
    }

    #[test]
    fn test_chessboard_overflow_rejected() {
        for (cols, rows) in [(u32::MAX, 1), (1, 70_000)] {
            let err = chessboard(cols, rows, 70_000).unwrap_err();
            assert!(matches!(err, GeoscopeError::InvalidImageOrGrid(_)));
        }
    }

    #[test]
    fn test_fill_rect_clips_to_image() {
        let mut img = chessboard(2, 2, 2).unwrap();
        img.fill_rect(3, 3, 10, 10, Vec4::new(0.0, 1.0, 1.0, 1.0));
        assert_eq!(img.texel(3, 3), Vec4::new(0.0, 1.0, 1.0, 1.0));
        assert_eq!(img.texel(2, 2), Vec4::new(0.0, 0.0, 0.0, 1.0));

        let mut img = RasterImage::from_u8(2, 2, Channels::Rgb, vec![0; 12]).unwrap();
        img.fill_rect(0, 0, 1, 1, Vec4::new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(img.texel(0, 0), Vec4::new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(img.texel(1, 1), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_dynamic_keeps_rgb8() {
        let buf = image::RgbImage::from_pixel(3, 2, image::Rgb([255, 0, 0]));
        let img = RasterImage::from_dynamic(&DynamicImage::ImageRgb8(buf));
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.channels(), Channels::Rgb);
        assert_eq!(img.texel(1, 2), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_dynamic_converts_luma_alpha() {
        let buf = image::GrayAlphaImage::from_pixel(1, 1, image::LumaA([255, 0]));
        let img = RasterImage::from_dynamic(&DynamicImage::ImageLumaA8(buf));
        assert_eq!(img.channels(), Channels::Rgba);
        assert_eq!(img.texel(0, 0), Vec4::new(1.0, 1.0, 1.0, 0.0));
    }
}
