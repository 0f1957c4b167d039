/// Application error type
///
/// Every failure in the app is recoverable: the shell turns an `AppError`
/// into a notice and the view machine stays in (or returns to) `Idle`.
/// The type is `Clone` because it travels inside iced messages.

use std::path::PathBuf;
use std::sync::Arc;

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug, Clone)]
pub enum AppError {
    #[error("could not read {}: {source}", .path.display())]
    UploadRead {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("{} is empty", .path.display())]
    EmptyUpload { path: PathBuf },

    #[error("{} is not a supported image type", .path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("{} is {size} bytes, the limit is {limit} bytes", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("preview decode failed: {0}")]
    PreviewDecode(String),

    #[error("could not save {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl AppError {
    pub fn upload_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UploadRead {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Export {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Short headline for the notice banner
    pub fn title(&self) -> &'static str {
        match self {
            Self::UploadRead { .. } | Self::EmptyUpload { .. } => "Upload failed",
            Self::UnsupportedFile { .. } | Self::FileTooLarge { .. } => "File rejected",
            Self::PreviewDecode(_) => "Preview unavailable",
            Self::Export { .. } => "Download failed",
            Self::Config { .. } => "Configuration ignored",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn upload_read_keeps_source() {
        let err = AppError::upload_read(
            "/tmp/photo.jpg",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/photo.jpg"));
        assert!(err.source().is_some());
        assert_eq!(err.title(), "Upload failed");
    }

    #[test]
    fn size_message_mentions_limit() {
        let err = AppError::FileTooLarge {
            path: "big.png".into(),
            size: 20,
            limit: 10,
        };
        assert!(err.to_string().contains("limit is 10 bytes"));
        assert_eq!(err.title(), "File rejected");
    }
}
