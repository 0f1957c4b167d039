use iced::widget::image::Handle;
use iced::widget::{column, container, horizontal_space, row, slider, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::{glass, BLUE, MUTED};
use crate::media::preview::{compose, Preview};
use crate::Message;

const DEFAULT_SPLIT: f32 = 0.5;
/// Divider positions per full width
const SPLIT_STEPS: f32 = 200.0;

/// Before/after view with an adjustable divider
///
/// The divider snaps to `1 / SPLIT_STEPS` and the composed frame is only
/// rebuilt when the snapped position changes.
#[derive(Debug, Clone)]
pub struct ComparisonSlider {
    preview: Preview,
    split: f32,
    frame: Handle,
}

impl ComparisonSlider {
    pub fn new(preview: Preview) -> Self {
        let frame = render(&preview, DEFAULT_SPLIT);
        Self {
            preview,
            split: DEFAULT_SPLIT,
            frame,
        }
    }

    pub fn split(&self) -> f32 {
        self.split
    }

    pub fn set_split(&mut self, split: f32) {
        let split = snap(split);
        if split != self.split {
            self.split = split;
            self.frame = render(&self.preview, split);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let picture = iced::widget::image(self.frame.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(520.0));

        let labels = row![
            text("Original").color(MUTED),
            horizontal_space(),
            text("Enhanced").color(BLUE),
        ];

        let divider = slider(0.0..=1.0, self.split(), Message::SplitChanged)
            .step(1.0 / SPLIT_STEPS);

        container(
            column![picture, labels, divider]
                .spacing(12)
                .align_x(Alignment::Center),
        )
        .padding(20)
        .style(glass)
        .into()
    }
}

fn snap(split: f32) -> f32 {
    (split.clamp(0.0, 1.0) * SPLIT_STEPS).round() / SPLIT_STEPS
}

fn render(preview: &Preview, split: f32) -> Handle {
    let composed = compose(&preview.before, &preview.after, split);
    let (width, height) = composed.dimensions();
    Handle::from_rgba(width, height, composed.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::test_images::solid;
    use std::sync::Arc;

    fn preview() -> Preview {
        Preview {
            before: Arc::new(solid(8, 4, [0, 0, 0, 255])),
            after: Arc::new(solid(8, 4, [255, 255, 255, 255])),
        }
    }

    #[test]
    fn starts_centered() {
        assert_eq!(ComparisonSlider::new(preview()).split(), DEFAULT_SPLIT);
    }

    #[test]
    fn split_is_clamped() {
        let mut slider = ComparisonSlider::new(preview());
        slider.set_split(1.7);
        assert_eq!(slider.split(), 1.0);
        slider.set_split(-0.2);
        assert_eq!(slider.split(), 0.0);
    }

    #[test]
    fn sub_step_moves_keep_frame() {
        let mut slider = ComparisonSlider::new(preview());
        let frame = slider.frame.id();
        slider.set_split(0.501);
        assert_eq!(slider.split(), 0.5);
        assert_eq!(slider.frame.id(), frame);

        slider.set_split(0.75);
        assert_eq!(slider.split(), 0.75);
        assert_ne!(slider.frame.id(), frame);
    }
}
