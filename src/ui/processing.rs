/// Processing stage: purely decorative progress while the timer runs
///
/// Progress is indeterminate. The only input is how long the stage has been
/// visible, used to drive the animation.

use std::f32::consts::TAU;
use std::time::Duration;

use iced::mouse::Cursor;
use iced::widget::canvas::{self, path::Arc, LineCap, Path, Stroke};
use iced::widget::{canvas as canvas_widget, column, container, progress_bar, text};
use iced::{Alignment, Color, Element, Length, Radians, Rectangle, Renderer, Theme};

use super::{glass, BLUE, MUTED, PURPLE};
use crate::Message;

/// One full spinner revolution
const SPIN_PERIOD: Duration = Duration::from_millis(1200);

/// How long each caption stays up
const CAPTION_PERIOD: Duration = Duration::from_millis(1500);

const STROKE_WIDTH: f32 = 6.0;

const CAPTIONS: [&str; 4] = [
    "Analyzing image structure...",
    "Reducing noise and grain...",
    "Restoring facial details...",
    "Upscaling to high resolution...",
];

/// Position within a repeating period, in [0, 1)
fn cycle(elapsed: Duration, period: Duration) -> f32 {
    let period = period.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period
}

/// Caption for the current moment
pub fn caption(elapsed: Duration) -> &'static str {
    let index = (elapsed.as_millis() / CAPTION_PERIOD.as_millis()) as usize % CAPTIONS.len();
    CAPTIONS[index]
}

/// Triangle wave in [0, 1] for the pulsing bar
fn pulse(elapsed: Duration) -> f32 {
    let t = cycle(elapsed, SPIN_PERIOD * 2);
    1.0 - (2.0 * t - 1.0).abs()
}

/// Rotating arc over a faint track
struct Spinner {
    phase: f32,
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (bounds.width.min(bounds.height) - STROKE_WIDTH) / 2.0;

        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.08))
                .with_width(STROKE_WIDTH),
        );

        let start = self.phase * TAU;
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + TAU / 3.0),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_color(PURPLE)
                .with_width(STROKE_WIDTH)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

pub fn view<'a>(elapsed: Duration) -> Element<'a, Message> {
    let spinner = canvas_widget(Spinner {
        phase: cycle(elapsed, SPIN_PERIOD),
    })
    .width(Length::Fixed(96.0))
    .height(Length::Fixed(96.0));

    let content = column![
        spinner,
        text("Enhancing your photo").size(28),
        text(caption(elapsed)).color(MUTED),
        progress_bar(0.0..=1.0, pulse(elapsed))
            .height(Length::Fixed(6.0))
            .style(|theme: &Theme| progress_bar::Style {
                bar: BLUE.into(),
                ..progress_bar::primary(theme)
            }),
    ]
    .spacing(20)
    .max_width(480)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(64)
        .center_x(Length::Fill)
        .style(glass)
        .into()
}
