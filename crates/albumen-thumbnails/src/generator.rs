use std::io::Cursor;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use tracing::debug;

const THUMBNAIL_LONGEST_EDGE: u32 = 512;

/// Decode an encoded image and re-encode it as a JPEG no larger than
/// `THUMBNAIL_LONGEST_EDGE` on its longest side.
pub fn generate_thumbnail(encoded: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(encoded).context("decode source image")?;

    let thumb = if img.width() > THUMBNAIL_LONGEST_EDGE || img.height() > THUMBNAIL_LONGEST_EDGE {
        img.resize(
            THUMBNAIL_LONGEST_EDGE,
            THUMBNAIL_LONGEST_EDGE,
            FilterType::Lanczos3,
        )
    } else {
        img
    };

    // JPEG has no alpha channel.
    let rgb = thumb.to_rgb8();
    let mut jpeg_bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut jpeg_bytes), image::ImageFormat::Jpeg)
        .context("encode thumbnail as JPEG")?;

    debug!(size = jpeg_bytes.len(), "generated thumbnail");

    Ok(jpeg_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn large_images_are_downscaled() {
        let thumb = generate_thumbnail(&png_bytes(2048, 1024)).unwrap();
        let decoded = image::load_from_memory(&thumb).unwrap();
        assert_eq!(decoded.width(), 512);
        assert_eq!(decoded.height(), 256);
    }

    #[test]
    fn small_images_keep_their_size() {
        let thumb = generate_thumbnail(&png_bytes(64, 48)).unwrap();
        let decoded = image::load_from_memory(&thumb).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(generate_thumbnail(b"definitely not an image").is_err());
    }
}
