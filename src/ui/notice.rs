/// Non-fatal notification banner

use std::path::Path;

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use super::{glass_with_border, DANGER, MUTED, SUCCESS};
use crate::error::AppError;
use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: err.title().to_string(),
            body: err.to_string(),
        }
    }

    pub fn saved(path: &Path) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: "Download complete".to_string(),
            body: format!("Saved to {}", path.display()),
        }
    }

    /// Another file finished loading after one was already accepted
    pub fn upload_ignored() -> Self {
        Self {
            kind: NoticeKind::Info,
            title: "Upload ignored".to_string(),
            body: "Only one photo is enhanced at a time. The extra file was skipped.".to_string(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let accent = match self.kind {
            NoticeKind::Info => SUCCESS,
            NoticeKind::Error => DANGER,
        };

        let content = row![
            column![
                text(&self.title).size(16).color(accent),
                text(&self.body).size(14).color(MUTED),
            ]
            .spacing(4),
            horizontal_space(),
            button(text("Dismiss").size(14))
                .on_press(Message::DismissNotice)
                .style(button::text),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .padding([14, 20])
            .style(move |_theme| glass_with_border(accent))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notice_uses_error_title() {
        let err = AppError::UnsupportedFile {
            path: "notes.txt".into(),
        };
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "File rejected");
        assert!(notice.body.contains("notes.txt"));
    }

    #[test]
    fn ignored_upload_is_informational() {
        let notice = Notice::upload_ignored();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, "Upload ignored");
    }

    #[test]
    fn saved_notice_names_the_path() {
        let notice = Notice::saved(Path::new("/home/me/lakha-x-enhanced.png"));
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.body.ends_with("lakha-x-enhanced.png"));
    }
}
