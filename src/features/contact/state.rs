use std::time::Instant;

use super::model::{MESSAGE_INPUT_CAP, TOAST_VISIBLE_FOR, validate_message};

/// Draft message, validation error, and sent-toast timing.
#[derive(Debug, Default)]
pub(crate) struct ContactState {
    message: String,
    error: Option<&'static str>,
    toast_deadline: Option<Instant>,
}

impl ContactState {
    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub(crate) fn toast_visible(&self) -> bool {
        self.toast_deadline.is_some()
    }

    pub(crate) fn has_pending_toast(&self) -> bool {
        self.toast_deadline.is_some()
    }

    /// Replace the draft, capping its length and clearing any displayed
    /// error.
    pub(crate) fn set_message(&mut self, value: String) {
        self.message = if value.chars().count() > MESSAGE_INPUT_CAP {
            value.chars().take(MESSAGE_INPUT_CAP).collect()
        } else {
            value
        };
        self.error = None;
    }

    /// Validate and accept the draft. On success the input and error are
    /// cleared and the sent toast is armed; on failure the error is
    /// displayed and the input kept.
    pub(crate) fn submit(&mut self, now: Instant) -> bool {
        match validate_message(&self.message) {
            Ok(()) => {
                self.message.clear();
                self.error = None;
                self.toast_deadline = Some(now + TOAST_VISIBLE_FOR);
                true
            }
            Err(error) => {
                self.error = Some(error);
                false
            }
        }
    }

    pub(crate) fn expire_toast(&mut self, now: Instant) {
        if self.toast_deadline.is_some_and(|deadline| deadline <= now) {
            self.toast_deadline = None;
        }
    }
}
