use std::time::Instant;

use iced::Task;

use super::event::ContactEvent;
use super::state::ContactState;
use crate::app::Event as AppEvent;

/// The contact form. Submission is simulated; an accepted message is
/// logged and acknowledged with a toast, nothing leaves the machine.
pub(crate) struct ContactFeature {
    state: ContactState,
}

impl ContactFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: ContactState::default(),
        }
    }

    pub(crate) fn message(&self) -> &str {
        self.state.message()
    }

    pub(crate) fn error(&self) -> Option<&'static str> {
        self.state.error()
    }

    pub(crate) fn toast_visible(&self) -> bool {
        self.state.toast_visible()
    }

    pub(crate) fn has_pending_toast(&self) -> bool {
        self.state.has_pending_toast()
    }

    pub(crate) fn reduce(
        &mut self,
        event: ContactEvent,
        _ctx: &(),
    ) -> Task<AppEvent> {
        match event {
            ContactEvent::MessageChanged(value) => {
                self.state.set_message(value);
                Task::none()
            }
            ContactEvent::Submit => {
                if self.state.submit(Instant::now()) {
                    log::info!("contact message accepted");
                }
                Task::none()
            }
            ContactEvent::Tick => {
                self.state.expire_toast(Instant::now());
                Task::none()
            }
        }
    }
}
