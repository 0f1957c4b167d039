/// Upload zone: click-to-browse and drag-and-drop target
///
/// Owns the only file validation in the app (extension and size). Drops are
/// delivered as window events; see `LakhaPixel::subscription`.

use std::path::{Path, PathBuf};

use iced::widget::{button, column, container, mouse_area, text};
use iced::{Alignment, Color, Element, Length};
use rfd::FileDialog;

use super::{glass_with_border, MUTED, PURPLE};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::Message;

/// Check a chosen file against the configured type and size limits
pub fn validate(path: &Path, config: &AppConfig) -> AppResult<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    let accepted = extension
        .as_deref()
        .is_some_and(|ext| config.accepted_extensions.iter().any(|a| a == ext));
    if !accepted {
        return Err(AppError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }

    let size = std::fs::metadata(path)
        .map_err(|e| AppError::upload_read(path, e))?
        .len();
    if size > config.max_upload_bytes {
        return Err(AppError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: config.max_upload_bytes,
        });
    }

    Ok(())
}

/// Show the native file picker, filtered to accepted image types
pub fn pick_file(config: &AppConfig) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select a Photo to Restore")
        .add_filter("Images", config.accepted_extensions.as_slice())
        .pick_file()
}

/// "10 MB", "512 KB"
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

pub fn view<'a>(hovering: bool, config: &AppConfig) -> Element<'a, Message> {
    let formats = config
        .accepted_extensions
        .iter()
        .filter(|ext| !matches!(ext.as_str(), "jpeg" | "tif"))
        .map(|ext| ext.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");

    let headline = if hovering {
        "Release to upload"
    } else {
        "Drop your photo here"
    };

    let content = column![
        text("⬆").size(40).color(PURPLE),
        text(headline).size(26),
        text("or click anywhere in this area to browse").color(MUTED),
        button(text("Choose Photo").size(16))
            .on_press(Message::BrowseRequested)
            .padding([12, 28])
            .style(button::primary),
        text(format!(
            "Supports {formats} up to {}",
            format_size(config.max_upload_bytes)
        ))
        .size(13)
        .color(MUTED),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    let border = if hovering {
        PURPLE
    } else {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    };

    let zone = container(content)
        .width(Length::Fill)
        .padding(64)
        .center_x(Length::Fill)
        .style(move |_theme| glass_with_border(border));

    mouse_area(zone).on_press(Message::BrowseRequested).into()
}
