use std::sync::Arc;
use std::time::Instant;

use iced::{Element, Subscription, Task};

use crate::config::{self, Settings};
use crate::content::{self, Content};
use crate::error::{BindError, LoadError};
use crate::gate::{LoadGate, ViewLoadStatus};
use crate::loader::{SPINNER_TICK_MS, Spinner};
use crate::motion::{BindOutcome, SketchBinder, sketch};
use crate::navigation::NavigationState;
use crate::streams;
use crate::theme::{self, Palette};
use crate::transition::{SlotEvent, TransitionController};
use crate::util;
use crate::view::ViewId;

const WINDOW_SIZE: (f32, f32) = (1024.0, 760.0);

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(ViewId),
    ToggleContact,
    Loaded(ViewId, Result<Arc<Content>, LoadError>),
    Frame,
    SpinnerTick,
    OpenLink(String),
}

// --- Shell State ---

pub struct Shell {
    pub(crate) settings: Settings,
    pub(crate) palette: Palette,
    pub(crate) nav: NavigationState,
    pub(crate) gate: LoadGate,
    pub(crate) transition: TransitionController,
    pub(crate) sketch: SketchBinder,
    pub(crate) spinner: Spinner,
    /// Clock reading of the last update; views render against it.
    pub(crate) now: Instant,
}

impl Shell {
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let palette = theme::resolve(settings.theme);
        let nav = NavigationState::default();
        let mut shell = Self {
            transition: TransitionController::new(nav.current_view(), settings.transition()),
            sketch: SketchBinder::new(settings.sketch_delay(), !settings.reduced_motion),
            spinner: Spinner::new(settings.spinner),
            gate: LoadGate::new(),
            nav,
            palette,
            settings,
            now: Instant::now(),
        };
        tracing::info!(
            "shell: starting on {} ({} theme, reduced motion {})",
            shell.nav.current_view(),
            if shell.palette.is_dark { "dark" } else { "light" },
            shell.settings.reduced_motion
        );
        let task = shell.sync();
        (shell, task)
    }

    fn new() -> (Self, Task<Message>) {
        Self::with_settings(config::load())
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn gate(&self) -> &LoadGate {
        &self.gate
    }

    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    pub fn sketch(&self) -> &SketchBinder {
        &self.sketch
    }

    /// Whether the shell is asking for frame pulses right now.
    pub fn wants_frames(&self) -> bool {
        self.transition.is_animating() || self.sketch.needs_frames(self.now)
    }

    /// Whether the placeholder spinner is on screen.
    pub fn wants_spinner(&self) -> bool {
        self.transition.is_waiting()
            && self.gate.status(self.transition.target()) == Some(ViewLoadStatus::Loading)
    }

    /// Push the navigation target through the gate and the controller.
    fn sync(&mut self) -> Task<Message> {
        let target = self.nav.current_view();
        let load = match self.gate.request(target) {
            Some(source) => {
                self.spinner.reset();
                let latency = self.settings.load_latency();
                Task::perform(content::fetch(source, latency), move |result| {
                    Message::Loaded(source.view, result)
                })
            }
            None => Task::none(),
        };

        let gate = &self.gate;
        let events = self
            .transition
            .advance(target, |view| gate.is_ready(view), self.now);
        for event in events {
            self.on_slot_event(event);
        }
        load
    }

    fn on_slot_event(&mut self, event: SlotEvent) {
        match event {
            SlotEvent::Mounted(view) => {
                tracing::info!("slot: mounted {view}");
                if view == ViewId::Home {
                    self.bind_sketch();
                }
            }
            SlotEvent::Unmounted(view) => {
                tracing::info!("slot: unmounted {view}");
                if view == ViewId::Home && self.sketch.release() {
                    tracing::debug!("sketch: released");
                }
            }
            SlotEvent::Settled(view) => tracing::debug!("slot: {view} settled"),
        }
    }

    fn bind_sketch(&mut self) {
        match self.sketch.bind(sketch::SKETCH_PATH, self.now) {
            Ok(BindOutcome::Started) => tracing::debug!("sketch: bound"),
            Ok(BindOutcome::AlreadyRunning) => tracing::debug!("sketch: already running"),
            Err(BindError::Unavailable) => tracing::debug!("sketch: animation off, static underline"),
            Err(e @ BindError::TargetMissing(_)) => tracing::warn!("sketch: {e}"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        match message {
            Message::Navigate(view) => {
                let previous = self.nav.navigate(view);
                if previous != view {
                    tracing::info!("nav: {previous} -> {view}");
                }
                self.sync()
            }
            Message::ToggleContact => {
                let open = self.nav.toggle_contact();
                tracing::info!("contact: {}", if open { "open" } else { "closed" });
                Task::none()
            }
            Message::Loaded(view, result) => {
                self.gate.complete(view, result);
                self.sync()
            }
            Message::Frame => self.sync(),
            Message::SpinnerTick => {
                self.spinner.tick();
                Task::none()
            }
            Message::OpenLink(url) => {
                util::open_url(url);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.view_shell()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = Vec::new();
        if self.wants_frames() {
            subs.push(Subscription::run_with(
                self.settings.frame_ms(),
                streams::frame_stream,
            ));
        }
        if self.wants_spinner() {
            subs.push(Subscription::run_with(SPINNER_TICK_MS, streams::spinner_stream));
        }
        Subscription::batch(subs)
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.palette.background,
            text_color: self.palette.text,
        }
    }

    fn title(&self) -> String {
        format!("Moaz Shaker | {}", self.nav.current_view())
    }
}

pub fn run() -> iced::Result {
    iced::application(Shell::new, Shell::update, Shell::view)
        .title(Shell::title)
        .subscription(Shell::subscription)
        .style(Shell::style)
        .window_size(WINDOW_SIZE)
        .antialiasing(true)
        .run()
}
