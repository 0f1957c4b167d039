use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{event, keyboard, task, time, window, Event};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::AppConfig;
use error::{AppError, AppResult};
use media::export::SaveDialog;
use media::preview::{self, Preview};
use media::DataUrl;
use state::controller::{AppController, DownloadOutcome, UploadOutcome};
use state::session::{Generation, ViewState};
use ui::comparison::ComparisonSlider;
use ui::notice::Notice;

/// Animation frame interval while processing
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Comparison preview for the current result
#[derive(Debug)]
enum PreviewState {
    Pending,
    Ready(ComparisonSlider),
    Failed(AppError),
}

/// Main application state
struct LakhaPixel {
    config: AppConfig,
    /// Owns the view state and both images
    controller: AppController,
    /// Abort handle for the in-flight processing delay
    pending_timer: Option<task::Handle>,
    processing_started: Option<Instant>,
    now: Instant,
    preview: PreviewState,
    notice: Option<Notice>,
    /// A file is being dragged over the window
    drop_hover: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file picker
    BrowseRequested,
    FileHovered,
    FileHoverLeft,
    /// A file was picked or dropped
    FileChosen(PathBuf),
    /// Background read of the chosen file finished
    UploadLoaded(AppResult<DataUrl>),
    /// Processing delay for a generation elapsed
    ProcessingElapsed(Generation),
    PreviewReady(Generation, AppResult<Preview>),
    SplitChanged(f32),
    Download,
    /// "Enhance Another", or Escape from any state
    Reset,
    DismissNotice,
    Tick(Instant),
}

impl LakhaPixel {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let controller = AppController::new(&config);
        info!(
            delay_ms = config.processing_delay_ms,
            download = %config.download_filename,
            "Lakha-X-Pixel ready"
        );

        (
            LakhaPixel {
                config,
                controller,
                pending_timer: None,
                processing_started: None,
                now: Instant::now(),
                preview: PreviewState::Pending,
                notice: None,
                drop_hover: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseRequested => {
                if self.controller.view_state() != ViewState::Idle {
                    return Task::none();
                }
                match ui::upload_zone::pick_file(&self.config) {
                    Some(path) => self.choose_file(path),
                    None => Task::none(),
                }
            }
            Message::FileHovered => {
                self.drop_hover = self.controller.view_state() == ViewState::Idle;
                Task::none()
            }
            Message::FileHoverLeft => {
                self.drop_hover = false;
                Task::none()
            }
            Message::FileChosen(path) => {
                self.drop_hover = false;
                self.choose_file(path)
            }
            Message::UploadLoaded(loaded) => match self.controller.accept_upload(loaded) {
                UploadOutcome::Scheduled(transition) => {
                    let generation = transition.generation;
                    let (timer, handle) = Task::perform(
                        tokio::time::sleep(transition.delay),
                        move |()| Message::ProcessingElapsed(generation),
                    )
                    .abortable();

                    if let Some(previous) = self.pending_timer.replace(handle) {
                        previous.abort();
                    }
                    self.processing_started = Some(Instant::now());
                    self.now = Instant::now();
                    self.preview = PreviewState::Pending;
                    timer
                }
                UploadOutcome::Rejected => {
                    self.notice = Some(Notice::upload_ignored());
                    Task::none()
                }
                UploadOutcome::Failed(err) => {
                    self.notice = Some(Notice::from_error(&err));
                    Task::none()
                }
            },
            Message::ProcessingElapsed(generation) => {
                if !self.controller.complete_processing(generation) {
                    return Task::none();
                }
                self.pending_timer = None;
                self.processing_started = None;

                let session = self.controller.session();
                match (session.original(), session.enhanced()) {
                    (Some(before), Some(after)) => Task::perform(
                        preview::generate_preview(
                            before.clone(),
                            after.clone(),
                            self.config.preview_max_edge,
                        ),
                        move |result| Message::PreviewReady(generation, result),
                    ),
                    _ => Task::none(),
                }
            }
            Message::PreviewReady(generation, result) => {
                if generation != self.controller.generation()
                    || self.controller.view_state() != ViewState::Result
                {
                    debug!(generation = generation.value(), "stale preview dropped");
                    return Task::none();
                }
                self.preview = match result {
                    Ok(preview) => {
                        let (width, height) = preview.dimensions();
                        debug!(width, height, "comparison preview ready");
                        PreviewState::Ready(ComparisonSlider::new(preview))
                    }
                    Err(err) => {
                        warn!(error = %err, "comparison preview failed");
                        PreviewState::Failed(err)
                    }
                };
                Task::none()
            }
            Message::SplitChanged(split) => {
                if let PreviewState::Ready(slider) = &mut self.preview {
                    slider.set_split(split);
                }
                Task::none()
            }
            Message::Download => {
                match self.controller.download(&mut SaveDialog) {
                    Ok(DownloadOutcome::Saved(path)) => {
                        self.notice = Some(Notice::saved(&path));
                    }
                    Ok(DownloadOutcome::Cancelled) => debug!("download cancelled"),
                    Ok(DownloadOutcome::Unavailable) => {}
                    Err(err) => {
                        warn!(error = %err, "download failed");
                        self.notice = Some(Notice::from_error(&err));
                    }
                }
                Task::none()
            }
            Message::Reset => {
                if let Some(handle) = self.pending_timer.take() {
                    handle.abort();
                }
                self.controller.reset();
                self.processing_started = None;
                self.preview = PreviewState::Pending;
                self.drop_hover = false;
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Validate a picked or dropped file and start reading it
    fn choose_file(&mut self, path: PathBuf) -> Task<Message> {
        if self.controller.view_state() != ViewState::Idle {
            debug!(path = %path.display(), "file ignored outside Idle");
            return Task::none();
        }

        if let Err(err) = ui::upload_zone::validate(&path, &self.config) {
            warn!(error = %err, "file rejected");
            self.notice = Some(Notice::from_error(&err));
            return Task::none();
        }

        info!(path = %path.display(), "reading upload");
        self.notice = None;
        Task::perform(
            media::source::load_as_data_url(path),
            Message::UploadLoaded,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let stage: Element<'_, Message> = match self.controller.view_state() {
            ViewState::Idle => ui::upload_zone::view(self.drop_hover, &self.config),
            ViewState::Processing => {
                let elapsed = self
                    .processing_started
                    .map(|started| self.now.saturating_duration_since(started))
                    .unwrap_or_default();
                ui::processing::view(elapsed)
            }
            ViewState::Result => self.result_view(),
        };

        let mut page = column![ui::chrome::nav(), ui::chrome::hero()]
            .spacing(48)
            .align_x(Alignment::Center);

        if let Some(notice) = &self.notice {
            page = page.push(notice.view());
        }

        page = page.push(container(stage).max_width(1024));

        if self.controller.view_state() == ViewState::Idle {
            page = page.push(ui::chrome::features());
        }

        page = page.push(ui::chrome::footer());

        scrollable(
            container(page.max_width(1200).padding([0, 24]))
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }

    fn result_view(&self) -> Element<'_, Message> {
        let comparison: Element<'_, Message> = match &self.preview {
            PreviewState::Ready(slider) => slider.view(),
            PreviewState::Pending => container(text("Preparing comparison...").color(ui::MUTED))
                .padding(64)
                .center_x(Length::Fill)
                .style(ui::glass)
                .into(),
            PreviewState::Failed(err) => container(
                column![
                    text(err.title()).size(20),
                    text(err.to_string()).color(ui::MUTED),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            )
            .padding(64)
            .center_x(Length::Fill)
            .style(ui::glass)
            .into(),
        };

        let actions = row![
            button(text("Download Enhanced Image").size(18))
                .on_press(Message::Download)
                .padding([16, 32])
                .style(button::primary),
            button(text("Enhance Another").size(18))
                .on_press(Message::Reset)
                .padding([16, 32])
                .style(button::secondary),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        column![comparison, actions]
            .spacing(32)
            .align_x(Alignment::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_events = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileChosen(path)),
            _ => None,
        });

        let shortcuts = keyboard::on_key_press(|key, modifiers| match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Reset),
            keyboard::Key::Character("o") if modifiers.command() => {
                Some(Message::BrowseRequested)
            }
            keyboard::Key::Character("s") if modifiers.command() => Some(Message::Download),
            _ => None,
        });

        let ticks = if self.controller.view_state() == ViewState::Processing {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([window_events, shortcuts, ticks])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme()
    }
}

/// Install the stderr log subscriber
fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> iced::Result {
    let loaded = AppConfig::load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    init_tracing(&config.log_level);

    match loaded {
        Ok(Some(_)) => info!("loaded configuration file"),
        Ok(None) => debug!("no configuration file, using defaults"),
        Err(err) => warn!(error = %err, "using default configuration"),
    }

    iced::application("Lakha-X-Pixel", LakhaPixel::update, LakhaPixel::view)
        .subscription(LakhaPixel::subscription)
        .theme(LakhaPixel::theme)
        .window_size(Size::new(1200.0, 900.0))
        .centered()
        .run_with(move || LakhaPixel::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use media::test_images::{red_png, solid};
    use std::sync::Arc;
    use ui::notice::NoticeKind;

    fn app() -> LakhaPixel {
        LakhaPixel::new(AppConfig::default()).0
    }

    fn red_photo() -> DataUrl {
        DataUrl::new("image/png", red_png(2, 2))
    }

    fn red_preview() -> Preview {
        Preview {
            before: Arc::new(solid(2, 2, [255, 0, 0, 255])),
            after: Arc::new(solid(2, 2, [255, 0, 0, 255])),
        }
    }

    #[test]
    fn read_failure_shows_notice_and_stays_idle() {
        let mut app = app();
        let err = AppError::upload_read(
            "photo.jpg",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "bad stream"),
        );

        let _ = app.update(Message::UploadLoaded(Err(err)));

        assert_eq!(app.controller.view_state(), ViewState::Idle);
        assert!(app.pending_timer.is_none());
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Upload failed");
    }

    #[tokio::test]
    async fn preview_from_superseded_generation_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::UploadLoaded(Ok(red_photo())));
        let old = app.controller.generation();

        let _ = app.update(Message::Reset);
        let _ = app.update(Message::UploadLoaded(Ok(red_photo())));
        let current = app.controller.generation();
        let _ = app.update(Message::ProcessingElapsed(current));
        assert_eq!(app.controller.view_state(), ViewState::Result);

        let _ = app.update(Message::PreviewReady(old, Ok(red_preview())));
        assert!(matches!(app.preview, PreviewState::Pending));

        let _ = app.update(Message::PreviewReady(current, Ok(red_preview())));
        assert!(matches!(app.preview, PreviewState::Ready(_)));
    }

    #[tokio::test]
    async fn reset_while_processing_drops_pending_timer() {
        let mut app = app();
        let _ = app.update(Message::UploadLoaded(Ok(red_photo())));
        assert_eq!(app.controller.view_state(), ViewState::Processing);
        assert!(app.pending_timer.is_some());

        let _ = app.update(Message::Reset);

        assert!(app.pending_timer.is_none());
        assert!(app.processing_started.is_none());
        assert_eq!(app.controller.view_state(), ViewState::Idle);
        assert!(app.controller.session().original().is_none());
    }

    #[tokio::test]
    async fn file_chosen_while_processing_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::UploadLoaded(Ok(red_photo())));
        let generation = app.controller.generation();

        let _ = app.update(Message::FileChosen(PathBuf::from("/photos/second.png")));

        assert_eq!(app.controller.generation(), generation);
        assert_eq!(app.controller.view_state(), ViewState::Processing);
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn second_loaded_upload_is_reported() {
        let mut app = app();
        let _ = app.update(Message::UploadLoaded(Ok(red_photo())));
        let generation = app.controller.generation();

        let other = DataUrl::new("image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xD9]);
        let _ = app.update(Message::UploadLoaded(Ok(other)));

        assert_eq!(app.controller.generation(), generation);
        assert_eq!(app.controller.session().original(), Some(&red_photo()));
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, "Upload ignored");
    }

    #[test]
    fn dismiss_clears_notice() {
        let mut app = app();
        app.notice = Some(Notice::upload_ignored());
        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }
}
