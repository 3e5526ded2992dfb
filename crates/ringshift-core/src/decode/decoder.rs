//! Content-sniffing decoder built on the `image` crate.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use log::debug;

use super::{DecodeError, SourceFormat};
use crate::grid::{GridError, PixelGrid};

/// Detect the container format from the leading bytes.
///
/// Returns `None` for anything other than PNG or JPEG.
pub fn detect_format(bytes: &[u8]) -> Option<SourceFormat> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some(SourceFormat::Png),
        ImageFormat::Jpeg => Some(SourceFormat::Jpeg),
        _ => None,
    }
}

/// Decode PNG or JPEG bytes into a pixel grid.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are neither PNG nor JPEG.
/// Returns `DecodeError::CorruptedFile` if decoding fails and
/// `DecodeError::Grid` for an image without pixels.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let format = detect_format(bytes).ok_or(DecodeError::InvalidFormat)?;

    let img = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    debug!(
        "decoded {:?} {}x{} as {:?}",
        format,
        img.width(),
        img.height(),
        img.color()
    );

    if img.width() == 0 || img.height() == 0 {
        return Err(GridError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        }
        .into());
    }

    Ok(PixelGrid::from_dynamic_image(img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ChannelLayout;
    use image::{DynamicImage, ImageBuffer};

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_detect_format() {
        let png = encode(DynamicImage::new_rgb8(2, 2), ImageFormat::Png);
        let jpeg = encode(DynamicImage::new_rgb8(2, 2), ImageFormat::Jpeg);
        assert_eq!(detect_format(&png), Some(SourceFormat::Png));
        assert_eq!(detect_format(&jpeg), Some(SourceFormat::Jpeg));
        assert_eq!(detect_format(b"fake image data"), None);
        assert_eq!(detect_format(&[]), None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_image(b"fake image data");
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let png = encode(DynamicImage::new_rgb8(16, 16), ImageFormat::Png);
        let result = decode_image(&png[..png.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_png_rgb() {
        let img = ImageBuffer::from_fn(3, 2, |x, y| image::Rgb([x as u8, y as u8, 7]));
        let png = encode(DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let grid = decode_image(&png).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.layout(), ChannelLayout::Rgb);
        assert_eq!(grid.pixel(1, 2), &[2, 1, 7]);
    }

    #[test]
    fn test_decode_png_gray() {
        let img = ImageBuffer::from_fn(4, 4, |x, _| image::Luma([x as u8 * 50]));
        let png = encode(DynamicImage::ImageLuma8(img), ImageFormat::Png);

        let grid = decode_image(&png).unwrap();
        assert_eq!(grid.layout(), ChannelLayout::Gray);
        assert_eq!(grid.pixel(0, 3), &[150]);
    }

    #[test]
    fn test_decode_png_gray16_reduces_to_gray8() {
        let img = ImageBuffer::from_fn(2, 2, |_, _| image::Luma([u16::MAX]));
        let png = encode(DynamicImage::ImageLuma16(img), ImageFormat::Png);

        let grid = decode_image(&png).unwrap();
        assert_eq!(grid.layout(), ChannelLayout::Gray);
        assert_eq!(grid.samples(), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_decode_png_gray_alpha_becomes_rgba() {
        let img = ImageBuffer::from_fn(2, 1, |_, _| image::LumaA([90u8, 30]));
        let png = encode(DynamicImage::ImageLumaA8(img), ImageFormat::Png);

        let grid = decode_image(&png).unwrap();
        assert_eq!(grid.layout(), ChannelLayout::Rgba);
        assert_eq!(grid.pixel(0, 1), &[90, 90, 90, 30]);
    }

    #[test]
    fn test_decode_png_rgba() {
        let img = ImageBuffer::from_fn(2, 2, |x, y| image::Rgba([1, 2, 3, (x + y) as u8]));
        let png = encode(DynamicImage::ImageRgba8(img), ImageFormat::Png);

        let grid = decode_image(&png).unwrap();
        assert_eq!(grid.layout(), ChannelLayout::Rgba);
        assert_eq!(grid.pixel(1, 1), &[1, 2, 3, 2]);
    }

    #[test]
    fn test_decode_jpeg() {
        let jpeg = encode(DynamicImage::new_rgb8(8, 6), ImageFormat::Jpeg);
        let grid = decode_image(&jpeg).unwrap();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.layout(), ChannelLayout::Rgb);
    }
}
