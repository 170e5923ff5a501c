//! Decoding of uploaded image files.

use std::io::Cursor;

use image::{DynamicImage, ImageReader, RgbImage};

use super::orientation::get_orientation;
use super::{DecodeError, DecodeLimits, DecodedImage};

/// Decode an uploaded image with default limits.
///
/// The format is detected from the content, not the file name. EXIF
/// orientation is applied and transparent pixels are composited onto white.
///
/// # Errors
///
/// - `DecodeError::InvalidFormat` if the bytes are not a recognized image
/// - `DecodeError::CorruptedFile` if the image is truncated or malformed
/// - `DecodeError::LimitsExceeded` if the image exceeds [`DecodeLimits::default`]
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    decode_image_with_limits(bytes, DecodeLimits::default())
}

/// Decode an uploaded image, refusing anything beyond `limits`.
pub fn decode_image_with_limits(
    bytes: &[u8],
    limits: DecodeLimits,
) -> Result<DecodedImage, DecodeError> {
    let orientation = get_orientation(bytes);

    let mut reader = open(bytes)?;
    reader.limits(limits.to_image_limits());
    let img = reader.decode()?;

    let oriented = orientation.apply(img);
    Ok(DecodedImage::from_rgb_image(flatten_onto_white(oriented)))
}

/// Read the display dimensions without decoding pixel data.
///
/// Accounts for EXIF orientation, so the result matches what the browser
/// lays out and what [`decode_image`] returns.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), DecodeError> {
    let (width, height) = open(bytes)?.into_dimensions()?;
    if get_orientation(bytes).swaps_dimensions() {
        Ok((height, width))
    } else {
        Ok((width, height))
    }
}

fn open(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }
    Ok(reader)
}

/// Drop the alpha channel, blending partially transparent pixels onto a
/// white background (the polaroid paper).
fn flatten_onto_white(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);

    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        dst.0 = [blend(r), blend(g), blend(b)];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn png_bytes(width: u32, height: u32, pixels: &[u8], color: ExtendedColorType) -> Vec<u8> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(pixels, width, height, color)
            .unwrap();
        buf
    }

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, 7]);
            }
        }
        png_bytes(width, height, &pixels, ExtendedColorType::Rgb8)
    }

    #[test]
    fn test_decode_png() {
        let bytes = gradient_png(16, 9);
        let img = decode_image(&bytes).unwrap();

        assert_eq!(img.dimensions(), (16, 9));
        assert_eq!(img.pixels.len(), 16 * 9 * 3);
        // PNG is lossless
        assert_eq!(img.pixel(5, 3), Some([5, 3, 7]));
    }

    #[test]
    fn test_decode_jpeg() {
        let pixels = vec![128u8; 8 * 8 * 3];
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, 90)
            .write_image(&pixels, 8, 8, ExtendedColorType::Rgb8)
            .unwrap();

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.dimensions(), (8, 8));
    }

    #[test]
    fn test_decode_unknown_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = gradient_png(32, 32);
        let truncated = &bytes[..bytes.len() / 2];
        let result = decode_image(truncated);
        assert!(result.is_err());
        assert!(!result.unwrap_err().is_resource());
    }

    #[test]
    fn test_decode_limits_exceeded() {
        let bytes = gradient_png(64, 64);
        let limits = DecodeLimits {
            max_width: 32,
            ..DecodeLimits::default()
        };

        let result = decode_image_with_limits(&bytes, limits);
        match result {
            Err(DecodeError::LimitsExceeded(_)) => {}
            other => panic!("Expected LimitsExceeded, got: {:?}", other),
        }
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let pixels = vec![
            0, 0, 0, 0, // fully transparent black
            255, 0, 0, 255, // opaque red
        ];
        let bytes = png_bytes(2, 1, &pixels, ExtendedColorType::Rgba8);
        let img = decode_image(&bytes).unwrap();

        assert_eq!(img.pixel(0, 0), Some([255, 255, 255]));
        assert_eq!(img.pixel(1, 0), Some([255, 0, 0]));
    }

    #[test]
    fn test_probe_dimensions() {
        let bytes = gradient_png(40, 30);
        assert_eq!(probe_dimensions(&bytes).unwrap(), (40, 30));
        assert!(probe_dimensions(&[1, 2, 3]).is_err());
    }
}
