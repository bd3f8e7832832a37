use iced::{Element, Size, Subscription, Task, Theme};

use crate::features::Features;
use crate::features::contact::ContactEvent;
use crate::features::menu::MenuEvent;
use crate::features::navigation::{NavigationEvent, Section};
use crate::features::profile::ProfileEvent;
use crate::fonts::FontsConfig;
use crate::theme::ThemeManager;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events driving the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    /// Emitted once when the runtime is up; kicks off startup tasks.
    IcedReady,
    Navigation(NavigationEvent),
    Menu(MenuEvent),
    Contact(ContactEvent),
    Profile(ProfileEvent),
    Window(iced::window::Event),
    /// Periodic deadline sweep, fanned out to every timed feature.
    Tick,
}

/// Root application state.
pub(crate) struct App {
    pub(super) window_size: Size,
    pub(super) theme_manager: ThemeManager,
    pub(super) fonts: FontsConfig,
    pub(super) features: Features,
    pub(super) start_section: Section,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let start_section = start_section_from_args(std::env::args().skip(1));
        let app = Self {
            window_size: Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            },
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            features: Features::new(start_section),
            start_section,
        };

        (app, Task::done(Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        String::from("Lumen")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        super::update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event> {
        super::view::view(self)
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        super::subscription::subscription(self)
    }
}

/// The first CLI argument is an optional start anchor, mirroring a
/// shared link such as `lumen '#about'`.
fn start_section_from_args(mut args: impl Iterator<Item = String>) -> Section {
    match args.next() {
        Some(anchor) => Section::from_anchor(&anchor),
        None => Section::Home,
    }
}
