use std::time::Instant;

use super::model::{COPIED_VISIBLE_FOR, ProfileData};

/// Loaded page copy plus the copy-email confirmation timing.
#[derive(Debug, Default)]
pub(crate) struct ProfileState {
    data: ProfileData,
    copied_deadline: Option<Instant>,
}

impl ProfileState {
    pub(crate) fn data(&self) -> &ProfileData {
        &self.data
    }

    pub(crate) fn email_copied(&self) -> bool {
        self.copied_deadline.is_some()
    }

    pub(crate) fn has_pending_copy_reset(&self) -> bool {
        self.copied_deadline.is_some()
    }

    pub(crate) fn replace_data(&mut self, data: ProfileData) {
        self.data = data;
    }

    pub(crate) fn mark_copied(&mut self, now: Instant) {
        self.copied_deadline = Some(now + COPIED_VISIBLE_FOR);
    }

    pub(crate) fn expire_copied(&mut self, now: Instant) {
        if self.copied_deadline.is_some_and(|deadline| deadline <= now) {
            self.copied_deadline = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_copy_confirmation_when_deadline_passes_then_it_resets() {
        let mut state = ProfileState::default();
        let now = Instant::now();

        state.mark_copied(now);
        assert!(state.email_copied());

        state.expire_copied(now + COPIED_VISIBLE_FOR / 2);
        assert!(state.email_copied());

        state.expire_copied(now + COPIED_VISIBLE_FOR);
        assert!(!state.email_copied());
    }

    #[test]
    fn given_new_data_when_replaced_then_it_is_served() {
        let mut state = ProfileState::default();
        let mut data = ProfileData::default();
        data.name = String::from("Jamie Doe");

        state.replace_data(data.clone());

        assert_eq!(state.data(), &data);
    }
}
