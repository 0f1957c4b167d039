/// Image source: turns a user-selected file into a data URL
///
/// No validation happens here beyond "the file can be read and is not
/// empty"; type and size checks belong to the upload zone.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, warn};

use super::DataUrl;
use crate::error::{AppError, AppResult};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Read a file and encode it as a data URL
///
/// # Arguments
/// * `path` - File chosen through the picker or dropped on the window
///
/// # Returns
/// * `Ok(DataUrl)` - The file's bytes tagged with a sniffed MIME type
/// * `Err(AppError::UploadRead)` - The file could not be read
/// * `Err(AppError::EmptyUpload)` - The file has no content
pub async fn load_as_data_url(path: PathBuf) -> AppResult<DataUrl> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "upload read failed");
        AppError::upload_read(&path, e)
    })?;

    if bytes.is_empty() {
        return Err(AppError::EmptyUpload { path });
    }

    let mime = sniff_mime(&path, &bytes);
    debug!(path = %path.display(), mime, len = bytes.len(), "upload read");

    Ok(DataUrl::new(mime, bytes))
}

/// Magic bytes first, then the extension
fn sniff_mime(path: &Path, bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::test_images::red_png;

    #[tokio::test]
    async fn reads_png_with_sniffed_type() {
        let dir = tempfile::tempdir().unwrap();
        // Named .jpg on purpose: content wins over extension
        let path = dir.path().join("photo.jpg");
        let png = red_png(2, 2);
        std::fs::write(&path, &png).unwrap();

        let url = load_as_data_url(path).await.unwrap();
        assert_eq!(url.mime(), "image/png");
        assert_eq!(url.bytes(), png.as_slice());
    }

    #[tokio::test]
    async fn unknown_content_falls_back_to_extension_then_octet_stream() {
        let dir = tempfile::tempdir().unwrap();

        let webp = dir.path().join("scan.webp");
        std::fs::write(&webp, b"not really an image").unwrap();
        let url = load_as_data_url(webp).await.unwrap();
        assert_eq!(url.mime(), "image/webp");

        let blob = dir.path().join("notes.bin");
        std::fs::write(&blob, b"plain bytes").unwrap();
        let url = load_as_data_url(blob).await.unwrap();
        assert_eq!(url.mime(), FALLBACK_MIME);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_failure() {
        let result = load_as_data_url("/nonexistent/path.png".into()).await;
        assert!(matches!(result, Err(AppError::UploadRead { .. })));
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        let result = load_as_data_url(path).await;
        assert!(matches!(result, Err(AppError::EmptyUpload { .. })));
    }
}
