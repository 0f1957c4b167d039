/// Download sink for the enhanced image
///
/// The bytes are written exactly as they were uploaded: a JPEG saved under
/// `lakha-x-enhanced.png` stays a JPEG, the same as a browser download of
/// the data URL would.

use std::path::{Path, PathBuf};

use rfd::FileDialog;
use tracing::info;

use super::DataUrl;
use crate::error::{AppError, AppResult};

/// Somewhere an image can be saved
pub trait SaveTarget {
    /// Save `image` under a name derived from `filename`.
    ///
    /// Returns `Ok(None)` when the user backed out.
    fn save(&mut self, filename: &str, image: &DataUrl) -> AppResult<Option<PathBuf>>;
}

/// Native save dialog, pre-filled with the suggested filename
#[derive(Debug, Default)]
pub struct SaveDialog;

impl SaveTarget for SaveDialog {
    fn save(&mut self, filename: &str, image: &DataUrl) -> AppResult<Option<PathBuf>> {
        let mut dialog = FileDialog::new()
            .set_title("Save Enhanced Image")
            .set_file_name(filename);
        if let Some(downloads) = dirs::download_dir() {
            dialog = dialog.set_directory(downloads);
        }

        match dialog.save_file() {
            Some(path) => {
                write_image(&path, image)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}

/// Write the image's bytes to `path`, replacing any existing file
pub fn write_image(path: &Path, image: &DataUrl) -> AppResult<()> {
    std::fs::write(path, image.bytes()).map_err(|e| AppError::export(path, e))?;
    info!(
        path = %path.display(),
        mime = image.mime(),
        len = image.len(),
        "image saved"
    );
    Ok(())
}
