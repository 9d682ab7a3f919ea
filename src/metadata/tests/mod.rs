mod composer_tests;

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};

/// Encodes a small gradient in the given format
pub(super) fn encoded_image(format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(8, 6, |x, y| image::Rgb([(x * 30) as u8, (y * 40) as u8, 128]));
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img).write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}
