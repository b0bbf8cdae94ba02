/// Image intake
///
/// Turns a user-selected file into validated, previewable in-memory data:
/// read the bytes, sniff and check the media type, decode to prove the
/// file is a real image, and report the pixel dimensions for the preview.
/// Any failure leaves the caller's state untouched — there is never a
/// half-populated image.

use std::path::PathBuf;

use image::GenericImageView;
use thiserror::Error;
use tokio::task;

use crate::state::draft::{HazardImage, ImagePreview, MediaType};

/// Advertised upload limits, enforced here rather than left as copy text
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub max_bytes: u64,
    pub allowed: Vec<MediaType>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_bytes: 10_000_000,
            allowed: vec![MediaType::Png, MediaType::Jpeg],
        }
    }
}

/// Why a selected file could not be taken in.
///
/// String payloads keep the variants cloneable so they can ride inside
/// UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("could not read file: {0}")]
    ReadFailed(String),
    #[error("image is {actual} bytes, over the {limit} byte limit")]
    TooLarge { actual: u64, limit: u64 },
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    #[error("could not decode image: {0}")]
    DecodeFailed(String),
}

/// A validated selection: the image pair the form store installs together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub image: HazardImage,
    pub preview: ImagePreview,
}

/// Read, sniff, and decode one selected file.
///
/// Runs the file read on tokio and the decode on a blocking thread, so
/// the UI loop never stalls on a large photo.
pub async fn select_image(
    path: PathBuf,
    config: IntakeConfig,
) -> Result<SelectedImage, IntakeError> {
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| IntakeError::ReadFailed(e.to_string()))?;
    if metadata.len() > config.max_bytes {
        return Err(IntakeError::TooLarge {
            actual: metadata.len(),
            limit: config.max_bytes,
        });
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| IntakeError::ReadFailed(e.to_string()))?;

    let media_type = sniff_media_type(&bytes, &config)?;

    // Decoding proves the bytes are a displayable image and yields the
    // preview dimensions. Spawn blocking because decoding is CPU-bound.
    let (bytes, preview) = task::spawn_blocking(move || decode_preview(bytes))
        .await
        .map_err(|e| IntakeError::DecodeFailed(format!("decode task failed: {e}")))??;
    println!(
        "📸 Image accepted: {} ({}x{}, {} bytes)",
        media_type.mime(),
        preview.width,
        preview.height,
        bytes.len()
    );

    Ok(SelectedImage {
        image: HazardImage { bytes, media_type },
        preview,
    })
}

/// Detect the media type from the file's magic bytes and check it against
/// the allow-list. Extension is ignored; only content counts.
fn sniff_media_type(bytes: &[u8], config: &IntakeConfig) -> Result<MediaType, IntakeError> {
    let format = image::guess_format(bytes)
        .map_err(|e| IntakeError::DecodeFailed(e.to_string()))?;

    let media_type = match format {
        image::ImageFormat::Png => MediaType::Png,
        image::ImageFormat::Jpeg => MediaType::Jpeg,
        other => return Err(IntakeError::UnsupportedType(format!("{other:?}"))),
    };

    if !config.allowed.contains(&media_type) {
        return Err(IntakeError::UnsupportedType(media_type.mime().to_string()));
    }

    Ok(media_type)
}

fn decode_preview(bytes: Vec<u8>) -> Result<(Vec<u8>, ImagePreview), IntakeError> {
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| IntakeError::DecodeFailed(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    Ok((bytes, ImagePreview { width, height }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    /// Write a tiny valid image into the OS temp dir and return its path
    fn write_fixture(name: &str, format: image::ImageFormat) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hazard-reporter-test-{name}"));
        // RGB, not RGBA: the JPEG encoder has no alpha support
        let img = image::RgbImage::from_pixel(4, 3, image::Rgb([120, 30, 30]));
        img.save_with_format(&path, format)
            .expect("failed to write test fixture");
        path
    }

    fn write_bytes(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hazard-reporter-test-{name}"));
        std::fs::write(&path, bytes).expect("failed to write test fixture");
        path
    }

    fn cleanup(path: &Path) {
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_valid_png_is_accepted() {
        let path = write_fixture("ok.png", image::ImageFormat::Png);
        let selected = select_image(path.clone(), IntakeConfig::default())
            .await
            .expect("png should be accepted");
        cleanup(&path);

        assert_eq!(selected.image.media_type, MediaType::Png);
        assert_eq!(selected.preview, ImagePreview { width: 4, height: 3 });
        assert!(!selected.image.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_valid_jpeg_is_accepted() {
        let path = write_fixture("ok.jpg", image::ImageFormat::Jpeg);
        let selected = select_image(path.clone(), IntakeConfig::default())
            .await
            .expect("jpeg should be accepted");
        cleanup(&path);

        assert_eq!(selected.image.media_type, MediaType::Jpeg);
    }

    #[tokio::test]
    async fn test_oversized_file_is_rejected_before_reading() {
        let path = write_fixture("big.png", image::ImageFormat::Png);
        let config = IntakeConfig {
            max_bytes: 8,
            ..IntakeConfig::default()
        };
        let result = select_image(path.clone(), config).await;
        cleanup(&path);

        assert!(matches!(result, Err(IntakeError::TooLarge { limit: 8, .. })));
    }

    #[tokio::test]
    async fn test_disallowed_format_is_rejected() {
        let path = write_fixture("ok.bmp", image::ImageFormat::Bmp);
        let result = select_image(path.clone(), IntakeConfig::default()).await;
        cleanup(&path);

        assert!(matches!(result, Err(IntakeError::UnsupportedType(_))));
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail_decode() {
        let path = write_bytes("garbage.png", b"definitely not an image");
        let result = select_image(path.clone(), IntakeConfig::default()).await;
        cleanup(&path);

        assert!(matches!(result, Err(IntakeError::DecodeFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_read_failure() {
        let path = std::env::temp_dir().join("hazard-reporter-test-does-not-exist.png");
        let result = select_image(path, IntakeConfig::default()).await;
        assert!(matches!(result, Err(IntakeError::ReadFailed(_))));
    }
}
