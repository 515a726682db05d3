//! Decoding, grayscale conversion, and PNG encoding of request images

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageOutputFormat};
use std::io::Cursor;

/// Decode an encoded image, auto-detecting the format from its contents
pub fn decode(data: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(data).context("could not decode image data")
}

/// Collapse a color image to a single luma channel
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Encode a grayscale buffer as PNG bytes
pub fn encode_png(img: GrayImage) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity((img.width() * img.height()) as usize);
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut data), ImageOutputFormat::Png)
        .context("could not encode grayscale image as PNG")?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageBuffer, Rgb};
    use std::io::Cursor;

    /// A 2x2 RGB image with a saturated channel per corner, PNG-encoded
    fn test_png() -> Vec<u8> {
        let pixels = [[255u8, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]];
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(2, 2, |x, y| Rgb(pixels[(y * 2 + x) as usize]));
        let mut data = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut data), ImageOutputFormat::Png)
            .unwrap();
        data
    }

    #[test]
    fn test_luma_weighting() {
        let img = decode(&test_png()).unwrap();
        let gray = to_grayscale(&img);

        let luma = |r: f32, g: f32, b: f32| 0.2126 * r + 0.7152 * g + 0.0722 * b;
        let cases = [
            (0, 0, luma(255.0, 0.0, 0.0)),
            (1, 0, luma(0.0, 255.0, 0.0)),
            (0, 1, luma(0.0, 0.0, 255.0)),
            (1, 1, luma(255.0, 255.0, 255.0)),
        ];
        for (x, y, want) in cases {
            let got = gray.get_pixel(x, y).0[0] as f32;
            assert!(
                (got - want).abs() <= 1.0,
                "pixel ({x},{y}): got {got}, want ~{want}"
            );
        }
    }

    #[test]
    fn test_dimensions_and_channel_preserved() {
        let png = encode_png(to_grayscale(&decode(&test_png()).unwrap())).unwrap();
        let out = image::load_from_memory(&png).unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));
        assert_eq!(out.color(), ColorType::L8);
    }

    #[test]
    fn test_deterministic_encoding() {
        let a = encode_png(to_grayscale(&decode(&test_png()).unwrap())).unwrap();
        let b = encode_png(to_grayscale(&decode(&test_png()).unwrap())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_non_image_bytes() {
        assert!(decode(b"hello world").is_err());
    }
}
