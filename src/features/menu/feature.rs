use std::time::Instant;

use iced::Task;

use super::event::MenuEvent;
use super::model::NARROW_VIEWPORT_WIDTH;
use super::state::MenuState;
use crate::app::Event as AppEvent;
use crate::features::navigation::{NavigationEvent, Section};

/// Context the menu reducer needs from the app shell.
pub(crate) struct MenuCtx {
    pub(crate) window_width: f32,
}

/// Hover expansion and narrow-window tap tooltips for the menu bar.
pub(crate) struct MenuFeature {
    state: MenuState,
}

impl MenuFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: MenuState::default(),
        }
    }

    pub(crate) fn is_hovered(&self, section: Section) -> bool {
        self.state.is_hovered(section)
    }

    pub(crate) fn tooltip_visible(&self, section: Section) -> bool {
        self.state.tooltip_visible(section)
    }

    pub(crate) fn has_pending_tooltip(&self) -> bool {
        self.state.has_pending_tooltip()
    }

    pub(crate) fn reduce(
        &mut self,
        event: MenuEvent,
        ctx: &MenuCtx,
    ) -> Task<AppEvent> {
        match event {
            MenuEvent::Hovered { section, hovered } => {
                self.state.set_hovered(section, hovered);
                Task::none()
            }
            MenuEvent::Pressed(section) => {
                // A press always navigates; narrow windows additionally
                // surface the label as a short-lived tooltip.
                if ctx.window_width < NARROW_VIEWPORT_WIDTH {
                    self.state.show_tooltip(section, Instant::now());
                }
                Task::done(AppEvent::Navigation(NavigationEvent::Select(
                    section,
                )))
            }
            MenuEvent::ResetTooltips => {
                self.state.reset_tooltips();
                Task::none()
            }
            MenuEvent::Tick => {
                self.state.expire_tooltips(Instant::now());
                Task::none()
            }
        }
    }
}
