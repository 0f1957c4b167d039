/// Page chrome: navigation bar, hero headline, feature cards and footer
///
/// Static presentation only. The nav links and Login button are decorative.

use chrono::Datelike;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;

use super::{glass, BLUE, MUTED, PINK, PURPLE};
use crate::Message;

const BRAND: &str = "Lakha-X-";
const BRAND_ACCENT: &str = "Pixel";

struct Feature {
    title: &'static str,
    description: &'static str,
    accent: Color,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "4K Upscaling",
        description: "Transform low-resolution snapshots into crisp, high-definition masterpieces.",
        accent: BLUE,
    },
    Feature {
        title: "Noise Reduction",
        description: "Eliminate grain and digital artifacts while preserving essential details.",
        accent: PURPLE,
    },
    Feature {
        title: "Face Enhancement",
        description: "Deep-learning models specialized in restoring facial clarity and realism.",
        accent: PINK,
    },
];

pub fn nav<'a>() -> Element<'a, Message> {
    let logo = row![
        text("✦").size(24).color(PURPLE),
        text(BRAND).size(22),
        text(BRAND_ACCENT).size(22).color(PURPLE),
    ]
    .align_y(Alignment::Center);

    let links = row![
        text("Features").color(MUTED),
        text("Pricing").color(MUTED),
        text("API").color(MUTED),
        button(text("Login")).style(button::secondary).padding([8, 20]),
    ]
    .spacing(32)
    .align_y(Alignment::Center);

    row![logo, horizontal_space(), links]
        .align_y(Alignment::Center)
        .padding([24, 0])
        .into()
}

pub fn hero<'a>() -> Element<'a, Message> {
    column![
        text("Restore Memories with").size(56),
        text("Generative Intelligence").size(56).color(PURPLE),
        text(
            "Upscale, repair, and enhance your old photographs using state-of-the-art AI. \
             Experience professional-grade restoration in seconds."
        )
        .size(18)
        .color(MUTED),
    ]
    .spacing(12)
    .max_width(760)
    .align_x(Alignment::Center)
    .into()
}

fn feature_card<'a>(feature: &Feature) -> Element<'a, Message> {
    container(
        column![
            container(text(""))
                .width(Length::Fixed(48.0))
                .height(Length::Fixed(4.0))
                .style({
                    let accent = feature.accent;
                    move |_theme: &iced::Theme| container::Style {
                        background: Some(accent.into()),
                        ..container::Style::default()
                    }
                }),
            text(feature.title).size(20),
            text(feature.description).color(MUTED),
        ]
        .spacing(14),
    )
    .width(Length::Fixed(300.0))
    .padding(32)
    .style(glass)
    .into()
}

/// Feature preview grid, wrapping on narrow windows
pub fn features<'a>() -> Element<'a, Message> {
    let cards = FEATURES.iter().map(feature_card).collect();
    Wrap::with_elements(cards)
        .spacing(24.0)
        .line_spacing(24.0)
        .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    footer_for_year(chrono::Local::now().year())
}

fn footer_for_year<'a>(year: i32) -> Element<'a, Message> {
    container(text(copyright(year)).size(13).color(MUTED))
        .width(Length::Fill)
        .padding([40, 0])
        .center_x(Length::Fill)
        .into()
}

fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}{BRAND_ACCENT}. Powered by Gemini AI Intelligence.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_brand_and_year() {
        assert_eq!(
            copyright(2024),
            "© 2024 Lakha-X-Pixel. Powered by Gemini AI Intelligence."
        );
    }

    #[test]
    fn three_distinct_features() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, ["4K Upscaling", "Noise Reduction", "Face Enhancement"]);
    }
}
