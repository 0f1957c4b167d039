/// User interface components
///
/// Each submodule renders one region of the window. None of them hold
/// application state; they read what they need and emit `Message`s.

pub mod chrome;
pub mod comparison;
pub mod notice;
pub mod processing;
pub mod upload_zone;

use iced::theme::Palette;
use iced::widget::container;
use iced::{Border, Color, Theme};

pub const BACKGROUND: Color = Color {
    r: 0.02,
    g: 0.02,
    b: 0.02,
    a: 1.0,
};
pub const TEXT: Color = Color::WHITE;
pub const MUTED: Color = Color {
    r: 0.61,
    g: 0.64,
    b: 0.69,
    a: 1.0,
};
pub const BLUE: Color = Color {
    r: 0.23,
    g: 0.51,
    b: 0.96,
    a: 1.0,
};
pub const PURPLE: Color = Color {
    r: 0.58,
    g: 0.2,
    b: 0.92,
    a: 1.0,
};
pub const PINK: Color = Color {
    r: 0.93,
    g: 0.28,
    b: 0.6,
    a: 1.0,
};
pub const DANGER: Color = Color {
    r: 0.94,
    g: 0.33,
    b: 0.31,
    a: 1.0,
};
pub const SUCCESS: Color = Color {
    r: 0.2,
    g: 0.78,
    b: 0.5,
    a: 1.0,
};

/// Dark theme with the brand's blue/purple accents
pub fn theme() -> Theme {
    Theme::custom(
        "Lakha-X-Pixel".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT,
            primary: PURPLE,
            success: SUCCESS,
            danger: DANGER,
        },
    )
}

/// Translucent panel with a faint border
pub fn glass(_theme: &Theme) -> container::Style {
    glass_with_border(Color::from_rgba(1.0, 1.0, 1.0, 0.08))
}

pub fn glass_with_border(border: Color) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.04).into()),
        border: Border {
            color: border,
            width: 1.0,
            radius: 24.0.into(),
        },
        ..container::Style::default()
    }
}
