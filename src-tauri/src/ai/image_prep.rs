//! Meal photo checks, resizing and base64 encoding before upload.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat};
use tracing::info;

use super::InlineImage;
use crate::error::{NutriTrackError, Result};

/// Largest upload accepted, in bytes.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Longest edge of the image actually sent to the model.
pub const MAX_IMAGE_DIMENSION: u32 = 1024;

const UPLOAD_MIME_TYPE: &str = "image/jpeg";

/// Validate an uploaded photo and turn it into an inline JPEG part.
///
/// `mime_type` is what the browser reported for the file; anything that is
/// not `image/*` is rejected before decoding.
pub fn prepare_meal_photo(bytes: &[u8], mime_type: &str) -> Result<InlineImage> {
    if !mime_type.trim().to_lowercase().starts_with("image/") {
        return Err(NutriTrackError::validation(
            "Please upload a valid image file (JPEG/PNG).",
        ));
    }
    if bytes.is_empty() {
        return Err(NutriTrackError::validation("No file selected."));
    }
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(NutriTrackError::validation(
            "Image file is too large. Please upload an image smaller than 5MB.",
        ));
    }

    let img = image::load_from_memory(bytes).map_err(|e| {
        NutriTrackError::Validation(format!(
            "Failed to process image: {}. Please try another.",
            e
        ))
    })?;
    info!("Loaded meal photo: {}x{}", img.width(), img.height());

    let resized = resize_if_needed(img, MAX_IMAGE_DIMENSION);
    let jpeg = encode_to_jpeg(&resized)?;
    info!(
        "Prepared meal photo: {}x{}, {} bytes JPEG",
        resized.width(),
        resized.height(),
        jpeg.len()
    );

    Ok(InlineImage {
        mime_type: UPLOAD_MIME_TYPE.to_string(),
        data_base64: STANDARD.encode(&jpeg),
    })
}

/// Shrink so the longest edge is at most `max_dimension`, keeping aspect ratio.
fn resize_if_needed(img: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    if width <= max_dimension && height <= max_dimension {
        return img;
    }

    let scale = max_dimension as f32 / width.max(height) as f32;
    let new_width = ((width as f32 * scale) as u32).max(1);
    let new_height = ((height as f32 * scale) as u32).max(1);
    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}

fn encode_to_jpeg(img: &DynamicImage) -> Result<Vec<u8>> {
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| NutriTrackError::Validation(format!("Failed to encode image: {}", e)))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgba8(width, height);
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_rejects_non_image_mime() {
        let err = prepare_meal_photo(&png_bytes(10, 10), "application/pdf").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("valid image"));
    }

    #[test]
    fn test_rejects_oversized_upload() {
        let bytes = vec![0u8; MAX_PHOTO_BYTES + 1];
        let err = prepare_meal_photo(&bytes, "image/png").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_rejects_undecodable_data() {
        let err = prepare_meal_photo(b"definitely not a png", "image/png").unwrap_err();
        assert!(err.to_string().contains("Failed to process image"));
    }

    #[test]
    fn test_output_is_base64_jpeg() {
        let image = prepare_meal_photo(&png_bytes(300, 200), "image/png").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        let decoded = STANDARD.decode(&image.data_base64).unwrap();
        assert_eq!(&decoded[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_resize_keeps_aspect_ratio() {
        let resized = resize_if_needed(DynamicImage::new_rgb8(2048, 1024), 1024);
        assert_eq!((resized.width(), resized.height()), (1024, 512));

        let untouched = resize_if_needed(DynamicImage::new_rgb8(640, 480), 1024);
        assert_eq!((untouched.width(), untouched.height()), (640, 480));
    }
}
