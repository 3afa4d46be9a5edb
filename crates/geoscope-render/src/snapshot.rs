//! Export of textured surfaces as images.
//!
//! A [`TexturedSurface`] carries one color per grid vertex, so it can be
//! written back out as a `cols x rows` image. This is how the texture mapper
//! output is inspected without a display.

use std::path::Path;

use geoscope_core::TexturedSurface;
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};

fn channel_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts the vertex colors of `surface` to an RGBA image, row 0 on top.
///
/// # Errors
/// Returns [`RenderError::InvalidImageData`] if the surface is empty.
pub fn surface_to_image(surface: &TexturedSurface) -> RenderResult<RgbaImage> {
    let width = u32::try_from(surface.cols()).map_err(|_| RenderError::InvalidImageData)?;
    let height = u32::try_from(surface.rows()).map_err(|_| RenderError::InvalidImageData)?;
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidImageData);
    }

    let data: Vec<u8> = surface
        .colors()
        .iter()
        .flat_map(|c| c.to_array().map(channel_to_u8))
        .collect();

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width, height, data)
        .ok_or(RenderError::InvalidImageData)
}

/// Saves the vertex colors of `surface` to an image file.
///
/// The format follows the extension: `.png`, or `.jpg`/`.jpeg` (alpha
/// dropped).
///
/// # Errors
/// Returns an error if the file cannot be written or the format is unsupported.
pub fn save_surface_texture(
    filename: impl AsRef<Path>,
    surface: &TexturedSurface,
) -> RenderResult<()> {
    let path = filename.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let img = surface_to_image(surface)?;
    match extension.as_str() {
        "png" => img.save_with_format(path, image::ImageFormat::Png)?,
        "jpg" | "jpeg" => {
            let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();
            rgb_img.save_with_format(path, image::ImageFormat::Jpeg)?;
        }
        _ => return Err(RenderError::UnsupportedFormat(extension)),
    }

    log::info!(
        "saved {}x{} surface texture to {}",
        surface.cols(),
        surface.rows(),
        path.display()
    );
    Ok(())
}

/// Encodes the vertex colors of `surface` as PNG in memory.
pub fn encode_surface_png(surface: &TexturedSurface) -> RenderResult<Vec<u8>> {
    let img = surface_to_image(surface)?;
    let mut buffer = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use geoscope_core::{chessboard, map_image_to_quad, DVec3, ImageOrigin, Quad, TexelGrid};
    use proptest::prelude::*;

    use super::*;

    fn unit_quad() -> Quad {
        Quad::new(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::ZERO,
        )
    }

    fn board_surface(opacity: f32) -> TexturedSurface {
        map_image_to_quad(
            &chessboard(4, 2, 1).unwrap(),
            &unit_quad(),
            TexelGrid::new(2, 4),
            ImageOrigin::UpperLeft,
            opacity,
        )
        .unwrap()
    }

    #[test]
    fn test_surface_to_image_pixels() {
        let img = surface_to_image(&board_surface(0.5)).unwrap();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 128]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 128]);
        assert_eq!(img.get_pixel(0, 1).0, [255, 255, 255, 128]);
    }

    #[test]
    fn test_encode_png_decodes_back() {
        let bytes = encode_surface_png(&board_surface(1.0)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.get_pixel(3, 1).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = save_surface_texture("texture.bmpx", &board_surface(1.0)).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(ext) if ext == "bmpx"));
    }

    #[test]
    fn test_save_png() {
        let path = std::env::temp_dir().join("geoscope_snapshot_test.png");
        save_surface_texture(&path, &board_surface(1.0)).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (4, 2));
        let _ = std::fs::remove_file(&path);
    }

    proptest! {
        #[test]
        fn alpha_bytes_follow_opacity(opacity in 0.0f32..=1.0) {
            let img = surface_to_image(&board_surface(opacity)).unwrap();
            let expected = (opacity * 255.0).round() as u8;
            prop_assert!(img.pixels().all(|p| p.0[3] == expected));
        }
    }
}
